//! Degraded-mode extraction from free text.
//!
//! When a completion carries no recoverable JSON array, each line is scanned
//! for a leading capitalised (optionally bulleted or numbered) name plus
//! "meaning" and "origin" phrases. The candidates are still untrusted and go
//! through the normalizer like any other raw item.

use std::sync::OnceLock;

use regex::Regex;

use super::normalize::RawItem;

/// Meaning used when a line names no meaning.
pub const DEFAULT_MEANING: &str = "A beautiful name";

/// Origin used when a line names no origin.
pub const DEFAULT_ORIGIN: &str = "Various";

fn name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"^\s*(?:[-*•·]+|\d{1,2}[.):])?\s*[*_"“]*(\p{Lu}[\p{L}\p{M}'’]*(?:[ -]\p{Lu}[\p{L}\p{M}'’]*)?)"#,
        )
        .expect("valid fallback name regex")
    })
}

fn meaning_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)\bmean(?:ing|s)\b\s*(?:[:=–-]\s*)?["“']?([^"”,;|()\n]+)"#)
            .expect("valid fallback meaning regex")
    })
}

fn origin_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\borigin\b\s*[:=–-]\s*([^,;|()\n]+)").expect("valid fallback origin regex")
    })
}

fn trailing_origin_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(\p{L}+)\s+origin\b").expect("valid fallback trailing origin regex")
    })
}

fn capture(re: &Regex, line: &str) -> Option<String> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().trim_end_matches('.').trim().to_string())
        .filter(|value| !value.is_empty())
}

fn is_key_phrase(token: &str) -> bool {
    let lower = token.to_lowercase();
    lower.starts_with("mean") || lower.starts_with("origin")
}

/// Scan `text` line by line for name candidates, collecting at most `count`.
#[must_use]
pub fn parse_fallback_text(text: &str, count: usize) -> Vec<RawItem> {
    let mut candidates = Vec::new();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if candidates.len() >= count {
            break;
        }

        let Some(name) = capture(name_re(), line) else {
            continue;
        };
        if is_key_phrase(&name) {
            continue;
        }

        let meaning = capture(meaning_re(), line).unwrap_or_else(|| DEFAULT_MEANING.to_string());
        let origin = capture(origin_re(), line)
            .or_else(|| capture(trailing_origin_re(), line))
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());

        candidates.push(RawItem::from_text(&name, None, &meaning, &origin));
    }

    candidates
}
