//! Handler for `namenest generate`.

use std::sync::Arc;

use tabled::{Table, Tabled};

use super::command::GenerateArgs;
use super::output;
use crate::application::generation::Generator;
use crate::domain::record::ResultSet;
use crate::domain::request::{NameRequest, RawNameRequest};
use crate::domain::vocabulary::Vocabulary;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::Config;

#[derive(Tabled)]
struct NameRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Native")]
    native: String,
    #[tabled(rename = "Meaning")]
    meaning: String,
    #[tabled(rename = "Origin")]
    origin: String,
}

/// Turn CLI arguments into a validated request.
///
/// # Errors
///
/// Returns a validation error for unknown values, a non-numeric count or
/// too many exclusions.
#[allow(clippy::result_large_err)]
pub fn parse_request(args: &GenerateArgs, vocabulary: &Vocabulary) -> Result<NameRequest> {
    let raw = RawNameRequest {
        gender: Some(args.gender.clone()),
        style: Some(args.style.clone()),
        origin: Some(args.origin.clone()),
        count: args.count.clone().map(serde_json::Value::String),
        exclude: Some(args.exclude.clone()),
    };
    Ok(NameRequest::parse(&raw, vocabulary)?)
}

/// Execute `generate` against the configured endpoint.
pub async fn execute(args: &GenerateArgs, config: &Config) -> Result<()> {
    let vocabulary = Arc::new(Vocabulary::standard());
    let request = parse_request(args, &vocabulary)?;
    let generator = bootstrap::build_generator(config, vocabulary)?;
    execute_with(&generator, &request).await
}

/// Execute `generate` with an already-wired generator.
pub async fn execute_with(generator: &Generator, request: &NameRequest) -> Result<()> {
    let pb = output::spinner(&format!("Asking for {} names", request.count()));
    let result = match generator.generate(request).await {
        Ok(result) => result,
        Err(e) => {
            output::spinner_fail(&pb, "No names generated");
            return Err(e);
        }
    };
    output::spinner_success(&pb, &format!("{} of {} names", result.len(), request.count()));

    render(request, &result)
}

fn render(request: &NameRequest, result: &ResultSet) -> Result<()> {
    if output::is_json() {
        output::json_output(serde_json::to_value(result)?);
        return Ok(());
    }

    let rows: Vec<NameRow> = result
        .records()
        .iter()
        .map(|record| NameRow {
            name: record.name.clone(),
            native: record.native_name.clone().unwrap_or_default(),
            meaning: record.meaning.clone(),
            origin: record.origin.clone(),
        })
        .collect();

    if output::is_quiet() {
        for row in &rows {
            println!("{}", row.name);
        }
        return Ok(());
    }

    output::section(&format!(
        "{} {} names ({}, {})",
        request.style(),
        request.gender(),
        request.origin(),
        rows.len()
    ));
    output::lines(&Table::new(rows).to_string());
    if result.len() < request.count() {
        output::hint("the model returned fewer usable names than requested; run again for more");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::{Gender, Origin};
    use crate::error::Error;

    fn args(count: Option<&str>) -> GenerateArgs {
        GenerateArgs {
            gender: "Girl".into(),
            style: "nature-inspired".into(),
            origin: "russian".into(),
            count: count.map(str::to_string),
            exclude: vec!["  Olga ".into(), "".into()],
        }
    }

    #[test]
    fn parses_text_arguments_into_request() {
        let request = parse_request(&args(Some("25")), &Vocabulary::standard()).unwrap();
        assert_eq!(request.gender(), Gender::Girl);
        assert_eq!(request.origin(), &Origin::Culture("Russian".into()));
        assert_eq!(request.count(), 10);
        assert_eq!(request.exclude(), ["Olga"]);
    }

    #[test]
    fn missing_count_uses_default() {
        let request = parse_request(&args(None), &Vocabulary::standard()).unwrap();
        assert_eq!(request.count(), 6);
    }

    #[test]
    fn non_numeric_count_is_a_validation_error() {
        let err = parse_request(&args(Some("lots")), &Vocabulary::standard()).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
