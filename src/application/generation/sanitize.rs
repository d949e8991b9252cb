//! Predicates deciding whether model-provided text is safe to show and
//! whether it is shaped like a personal name.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::record::MAX_NAME_LEN;
use crate::domain::script::Script;

/// Characters that could break markup or templating when rendered.
const FORBIDDEN: &[char] = &['{', '}', '<', '>', '[', ']', '`', '$', '\\'];

/// Longest accepted name, in whitespace-separated words.
const MAX_NAME_WORDS: usize = 3;

fn latin_only_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\p{Latin}\p{M}'’ -]+$").expect("valid latin regex"))
}

fn name_shape_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\p{L}\p{M}'’ -]+$").expect("valid name regex"))
}

fn is_control(c: char) -> bool {
    let code = u32::from(c);
    code <= 31 || code == 127
}

/// Return `true` if `value` is non-blank, at most `max_len` characters once
/// trimmed, and free of control and markup-breaking characters.
#[must_use]
pub fn is_clean_text(value: &str, max_len: usize) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.chars().count() > max_len {
        return false;
    }
    !trimmed
        .chars()
        .any(|c| is_control(c) || FORBIDDEN.contains(&c))
}

/// Return `true` if every character is Latin script, a combining mark, an
/// apostrophe, a hyphen or a space. Empty strings are not Latin.
#[must_use]
pub fn is_latin_only(value: &str) -> bool {
    latin_only_re().is_match(value)
}

/// Name-shape gate: clean, short, at most three words, letters of any script.
#[must_use]
pub fn looks_like_name(value: &str) -> bool {
    if !is_clean_text(value, MAX_NAME_LEN) {
        return false;
    }
    let trimmed = value.trim();
    trimmed.split_whitespace().count() <= MAX_NAME_WORDS && name_shape_re().is_match(trimmed)
}

/// Return `true` if at least one character of `text` belongs to `script`.
#[must_use]
pub fn contains_script(text: &str, script: Script) -> bool {
    text.chars().any(|c| script.contains(c))
}
