//! Handler for `namenest vocabulary`.

use serde_json::json;
use tabled::{Table, Tabled};

use super::output;
use crate::domain::request::{Gender, Style};
use crate::domain::vocabulary::Vocabulary;
use crate::error::Result;

#[derive(Tabled)]
struct OriginRow {
    #[tabled(rename = "Origin")]
    origin: String,
    #[tabled(rename = "Native script")]
    script: String,
}

/// List the accepted request values.
pub fn execute(vocabulary: &Vocabulary) -> Result<()> {
    let genders: Vec<&str> = Gender::ALL.iter().map(|g| g.as_str()).collect();
    let styles: Vec<&str> = Style::ALL.iter().map(|s| s.as_str()).collect();

    if output::is_json() {
        let origins: Vec<_> = vocabulary
            .origins()
            .map(|origin| {
                json!({
                    "name": origin,
                    "script": vocabulary.script_for(origin),
                })
            })
            .collect();
        output::json_output(json!({
            "genders": genders,
            "styles": styles,
            "origins": origins,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Genders", genders.join(", "));
    output::field("Styles", styles.join(", "));

    output::section("Origins");
    let rows: Vec<OriginRow> = vocabulary
        .origins()
        .map(|origin| OriginRow {
            origin: origin.to_string(),
            script: vocabulary
                .script_for(origin)
                .map(|script| script.label().to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());
    output::hint(&format!(
        "pass {} to let the model choose",
        output::highlight("--origin any")
    ));
    Ok(())
}
