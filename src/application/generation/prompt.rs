//! Prompt construction for name generation.

use std::fmt::Write as _;

use super::sanitize::contains_script;
use crate::domain::record::MAX_MEANING_LEN;
use crate::domain::request::{Gender, NameRequest};
use crate::domain::vocabulary::Vocabulary;
use crate::port::outbound::llm::ChatMessage;

/// Which wording an attempt uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptVariant {
    /// First attempt against a candidate.
    Base,
    /// Follow-up attempt that restates the format rules.
    Strict,
}

impl PromptVariant {
    /// Variant for a zero-based attempt index within one candidate.
    #[must_use]
    pub fn for_attempt(attempt: usize) -> Self {
        if attempt == 0 {
            Self::Base
        } else {
            Self::Strict
        }
    }
}

fn system_prompt() -> String {
    format!(
        "You are a baby name expert. You MUST respond with ONLY a valid JSON array, no other text. \
         Each element is an object with the keys \"name\", \"nativeName\", \"meaning\" and \"origin\". \
         \"name\" is always written in Latin letters. \"meaning\" is a short phrase of at most \
         {MAX_MEANING_LEN} characters."
    )
}

fn gender_phrase(gender: Gender) -> &'static str {
    match gender {
        Gender::Boy => "a boy",
        Gender::Girl => "a girl",
        Gender::Neutral => "any gender (gender-neutral names)",
        Gender::Surprise => "any gender (mix of boy and girl names)",
    }
}

/// Build the chat messages for one attempt.
///
/// `previous` is the completion returned by the preceding attempt, if any.
/// It is only inspected for native-script characters so the strict variant
/// can call out the specific mistake.
#[must_use]
pub fn build_messages(
    request: &NameRequest,
    vocabulary: &Vocabulary,
    variant: PromptVariant,
    previous: Option<&str>,
) -> Vec<ChatMessage> {
    let origin = request.origin().label();
    let script = origin.and_then(|origin| vocabulary.script_for(origin));
    let count = request.count();

    let mut user = format!(
        "Generate exactly {count} unique baby names for {}. Style: {}. Cultural origin: {}.",
        gender_phrase(request.gender()),
        request.style(),
        origin.unwrap_or("any cultural origin"),
    );

    match script {
        Some(script) => {
            let _ = write!(
                user,
                "\n\nPut the Latin transliteration in \"name\" and the same name written in {} script in \"nativeName\".",
                script.label()
            );
        }
        None => user.push_str("\n\nLeave out \"nativeName\"."),
    }

    if !request.exclude().is_empty() {
        let _ = write!(
            user,
            "\n\nDo not suggest any of these names: {}.",
            request.exclude().join(", ")
        );
    }

    user.push_str(
        "\n\nFor each name, provide the name, its meaning, and cultural origin. Format:\n\
         [{\"name\": \"Example\", \"meaning\": \"meaning here\", \"origin\": \"origin here\"}]",
    );
    let _ = write!(user, "\n\nGenerate exactly {count} names now.");

    if variant == PromptVariant::Strict {
        user.push_str(
            "\n\nIMPORTANT: Your previous answer could not be used. Reply with the JSON array only: \
             no introduction, no explanation, no markdown. Every \"name\" value must use Latin letters only.",
        );
        if let Some(script) =
            script.filter(|script| previous.is_some_and(|text| contains_script(text, *script)))
        {
            let _ = write!(
                user,
                " Do not put {} characters in \"name\"; they belong in \"nativeName\".",
                script.label()
            );
        }
    }

    vec![ChatMessage::system(system_prompt()), ChatMessage::user(user)]
}
