//! Integration tests for the generation pipeline against a scripted model.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use namenest::application::generation::{records_from_completion, Generator, Normalizer, RetryPolicy};
use namenest::domain::request::{NameRequest, Origin, RawNameRequest};
use namenest::domain::vocabulary::Vocabulary;
use namenest::error::{Error, ErrorKind};
use namenest::testkit::domain::{completion, item, request, request_from};
use namenest::testkit::llm::ScriptedModel;

const OLGA_TWICE: &str = r#"[{"name":"Olga","nativeName":"Ольга","meaning":"holy","origin":"Russian"},{"name":"Olga","nativeName":"Ольга","meaning":"holy","origin":"Russian"}]"#;

fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        unavailable_backoff: Duration::ZERO,
        ..RetryPolicy::default()
    }
}

fn generator(model: Arc<ScriptedModel>) -> Generator {
    Generator::new(
        model,
        vec!["model-a".into(), "model-b".into(), "model-c".into()],
        fast_policy(),
        Arc::new(Vocabulary::standard()),
    )
}

fn russian_request(count: i64) -> NameRequest {
    let raw = RawNameRequest {
        gender: Some("girl".into()),
        style: Some("classic".into()),
        origin: Some("Russian".into()),
        count: Some(json!(count)),
        exclude: None,
    };
    NameRequest::parse(&raw, &Vocabulary::standard()).unwrap()
}

#[test]
fn duplicate_olga_collapses_to_one_record() {
    let vocabulary = Vocabulary::standard();
    let request = russian_request(2);
    let normalizer = Normalizer::for_request(&vocabulary, &request);

    let records = records_from_completion(OLGA_TWICE, &normalizer);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Olga");
    assert_eq!(records[0].native_name.as_deref(), Some("Ольга"));
    assert_eq!(records[0].origin, "Russian");
}

// A request for 2 needs min(2, 3) = 2 records, so the lone "Olga" is not accepted as is.
#[tokio::test]
async fn single_survivor_below_threshold_triggers_retry() {
    let second = json!([
        item("Olga", "holy", "Russian"),
        item("Vera", "faith", "Russian"),
    ])
    .to_string();
    let model = Arc::new(ScriptedModel::new().reply(200, OLGA_TWICE).reply(200, second));

    let result = generator(model.clone())
        .generate(&russian_request(2))
        .await
        .unwrap();

    assert_eq!(result.names().collect::<Vec<_>>(), vec!["Olga", "Vera"]);
    assert_eq!(model.calls().len(), 2);
}

#[tokio::test]
async fn three_of_six_is_accepted() {
    let model = Arc::new(ScriptedModel::new().reply(200, completion(&["Ada", "Iris", "June"])));

    let result = generator(model.clone()).generate(&request(6)).await.unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(model.remaining(), 0);
}

#[tokio::test]
async fn two_of_six_moves_on() {
    let model = Arc::new(
        ScriptedModel::new()
            .reply(200, completion(&["Ada", "Iris"]))
            .reply(200, completion(&["Ada", "Iris"]))
            .reply(200, completion(&["Ada", "Iris", "June", "Rose", "Mae", "Ivy"])),
    );

    let result = generator(model.clone()).generate(&request(6)).await.unwrap();

    assert_eq!(result.len(), 6);
    let candidates: Vec<_> = model.calls().into_iter().map(|c| c.candidate).collect();
    assert_eq!(candidates, vec!["model-a", "model-a", "model-b"]);
}

#[tokio::test]
async fn fenced_completion_is_extracted() {
    let text = "Sure! Here you go:\n```json\n[{\"name\":\"Mia\",\"meaning\":\"mine\",\"origin\":\"Italian\"}]\n```";
    let model = Arc::new(ScriptedModel::new().reply(200, text));

    let result = generator(model).generate(&request(1)).await.unwrap();

    let record = &result.records()[0];
    assert_eq!(record.name, "Mia");
    assert_eq!(record.meaning, "mine");
    assert_eq!(record.origin, "Italian");
}

#[tokio::test]
async fn prose_completion_uses_line_fallback() {
    let text = "here are three ideas:\n1. Aurora - Meaning: dawn, Origin: Latin\n2. Hazel - means the hazel tree (English origin)\n3. Luna - Meaning: moon, Origin: Latin";
    let model = Arc::new(ScriptedModel::new().reply(200, text));

    let result = generator(model).generate(&request(3)).await.unwrap();

    assert_eq!(result.names().collect::<Vec<_>>(), vec!["Aurora", "Hazel", "Luna"]);
    assert_eq!(result.records()[1].meaning, "the hazel tree");
    assert_eq!(result.records()[1].origin, "English");
}

#[tokio::test]
async fn excluded_and_disallowed_names_never_surface() {
    let text = json!([
        item("Example", "placeholder", "English"),
        item("Olga", "holy", "Russian"),
        item("Mila", "gracious", "Russian"),
        item("Nadia", "hope", "Russian"),
        item("Sasha", "defender", "Russian"),
    ])
    .to_string();
    let model = Arc::new(ScriptedModel::new().reply(200, text));
    let request = request_from(Origin::Culture("Russian".into()), 3, vec!["olga".into()]);

    let result = generator(model.clone()).generate(&request).await.unwrap();

    assert_eq!(result.names().collect::<Vec<_>>(), vec!["Mila", "Nadia", "Sasha"]);
    assert!(model.calls()[0].user_prompt().contains("olga"));
}

#[tokio::test]
async fn transposed_fields_are_repaired() {
    let text = json!([
        {"name": "Ольга", "nativeName": "Olga", "meaning": "holy", "origin": "Russian"},
        {"name": "Вера", "nativeName": "Vera", "meaning": "faith", "origin": "Russian"},
    ])
    .to_string();
    let model = Arc::new(ScriptedModel::new().reply(200, text));

    let result = generator(model).generate(&russian_request(2)).await.unwrap();

    assert_eq!(result.records()[0].name, "Olga");
    assert_eq!(result.records()[0].native_name.as_deref(), Some("Ольга"));
    assert_eq!(result.records()[1].name, "Vera");
}

#[tokio::test]
async fn auth_failure_stops_the_matrix() {
    let model = Arc::new(
        ScriptedModel::new()
            .reply(403, "forbidden")
            .reply(200, completion(&["Ada"])),
    );

    let err = generator(model.clone()).generate(&request(1)).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UpstreamAuth);
    assert_eq!(model.calls().len(), 1);
    assert_eq!(model.remaining(), 1);
}

#[tokio::test]
async fn loading_model_is_retried_then_skipped() {
    let model = Arc::new(
        ScriptedModel::new()
            .reply(503, "loading")
            .reply(503, "loading")
            .reply(503, "loading")
            .reply(200, completion(&["Ada", "Iris", "June"])),
    );

    let result = generator(model.clone()).generate(&request(3)).await.unwrap();

    assert_eq!(result.len(), 3);
    let candidates: Vec<_> = model.calls().into_iter().map(|c| c.candidate).collect();
    assert_eq!(candidates, vec!["model-a", "model-a", "model-a", "model-b"]);
}

#[tokio::test]
async fn every_candidate_failing_reports_format_error() {
    let mut model = ScriptedModel::new();
    for _ in 0..6 {
        model = model.reply(200, "sorry, i can't do that right now.");
    }
    let model = Arc::new(model);

    let err = generator(model.clone()).generate(&request(3)).await.unwrap_err();

    assert!(matches!(err, Error::UpstreamFormat));
    assert_eq!(
        err.user_message(),
        "Could not parse name suggestions. Please try again."
    );
    assert_eq!(model.calls().len(), 6);
}

#[tokio::test]
async fn error_messages_never_echo_model_text() {
    let mut model = ScriptedModel::new();
    for _ in 0..6 {
        model = model.reply(500, "secret internal stack trace");
    }

    let err = generator(Arc::new(model))
        .generate(&request(3))
        .await
        .unwrap_err();

    assert!(!err.user_message().contains("secret"));
    assert!(!err.to_string().contains("secret"));
}
