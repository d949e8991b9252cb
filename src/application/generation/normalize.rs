//! Per-item repair, validation and deduplication of raw model output.
//!
//! Raw items are weakly typed: any field may be missing, null, a number, or
//! nested junk. Every field is coerced to a trimmed string before use, and
//! every field of an accepted record is re-validated regardless of what the
//! model claimed.

use std::collections::HashSet;

use serde_json::Value;
use tracing::trace;

use super::sanitize::{is_clean_text, is_latin_only, looks_like_name};
use crate::domain::record::{NameRecord, FALLBACK_ORIGIN, MAX_MEANING_LEN, MAX_ORIGIN_LEN};
use crate::domain::request::NameRequest;
use crate::domain::vocabulary::Vocabulary;

/// Keys under which models place the native-script form.
const NATIVE_NAME_KEYS: &[&str] = &["nativeName", "native_name", "native"];

/// An untrusted candidate record as produced by the model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawItem {
    pub name: Option<Value>,
    pub native_name: Option<Value>,
    pub meaning: Option<Value>,
    pub origin: Option<Value>,
}

impl RawItem {
    /// Build a raw item from plain text fields.
    #[must_use]
    pub fn from_text(name: &str, native_name: Option<&str>, meaning: &str, origin: &str) -> Self {
        Self {
            name: Some(Value::String(name.to_string())),
            native_name: native_name.map(|native| Value::String(native.to_string())),
            meaning: Some(Value::String(meaning.to_string())),
            origin: Some(Value::String(origin.to_string())),
        }
    }
}

impl From<&Value> for RawItem {
    fn from(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            name: object.get("name").cloned(),
            native_name: NATIVE_NAME_KEYS
                .iter()
                .find_map(|key| object.get(*key))
                .cloned(),
            meaning: object.get("meaning").cloned(),
            origin: object.get("origin").cloned(),
        }
    }
}

impl From<&NameRecord> for RawItem {
    fn from(record: &NameRecord) -> Self {
        Self::from_text(
            &record.name,
            record.native_name.as_deref(),
            &record.meaning,
            &record.origin,
        )
    }
}

/// Why a raw item was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// `name` empty or not name-shaped.
    NameShape,
    /// `name` still outside the Latin script after repair.
    NonLatinName,
    /// `meaning` missing, too long or unsafe.
    Meaning,
    /// Effective origin too long or unsafe.
    Origin,
    /// `name` is a meta-word such as "example".
    Disallowed,
    /// Same name already accepted in this batch.
    Duplicate,
    /// Name was shown to the user in an earlier call.
    Excluded,
}

/// Coerce a loosely typed field to a trimmed string.
///
/// Strings are trimmed, numbers are rendered, everything else is empty.
fn coerce(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.trim().to_string(),
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    }
}

/// Undo the two common field mix-ups between `name` and `native_name`.
///
/// A non-Latin `name` paired with a Latin `native_name` is swapped. A
/// non-Latin `name` with no `native_name` is moved into `native_name`,
/// leaving `name` empty so the item is later dropped.
#[must_use]
pub fn repair_transposition(name: String, native_name: String) -> (String, String) {
    if is_latin_only(&name) {
        return (name, native_name);
    }
    if is_latin_only(&native_name) {
        return (native_name, name);
    }
    if native_name.is_empty() {
        return (String::new(), name);
    }
    (name, native_name)
}

/// Validates raw items for one request.
#[derive(Debug)]
pub struct Normalizer<'a> {
    vocabulary: &'a Vocabulary,
    origin: Option<&'a str>,
    count: usize,
    exclude: HashSet<String>,
}

impl<'a> Normalizer<'a> {
    /// Create a normalizer.
    ///
    /// `origin` is the request's culture, used when an item names none.
    #[must_use]
    pub fn new(
        vocabulary: &'a Vocabulary,
        origin: Option<&'a str>,
        count: usize,
        exclude: &[String],
    ) -> Self {
        Self {
            vocabulary,
            origin,
            count,
            exclude: exclude.iter().map(|name| name.trim().to_lowercase()).collect(),
        }
    }

    /// Create a normalizer bound to a request's origin, count and exclusions.
    #[must_use]
    pub fn for_request(vocabulary: &'a Vocabulary, request: &'a NameRequest) -> Self {
        Self::new(
            vocabulary,
            request.origin().label(),
            request.count(),
            request.exclude(),
        )
    }

    /// Maximum number of records accepted per call.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Filter and repair `items` in order, stopping after `count` accepts.
    ///
    /// The output depends only on the inputs, and feeding the output back in
    /// returns it unchanged.
    #[must_use]
    pub fn normalize_and_validate(&self, items: &[RawItem]) -> Vec<NameRecord> {
        let mut seen = HashSet::new();
        let mut accepted = Vec::new();

        for item in items {
            if accepted.len() >= self.count {
                break;
            }
            match self.check(item, &seen) {
                Ok(record) => {
                    seen.insert(record.name.to_lowercase());
                    accepted.push(record);
                }
                Err(reason) => trace!(?reason, "Dropped name candidate"),
            }
        }

        accepted
    }

    fn check(&self, item: &RawItem, seen: &HashSet<String>) -> Result<NameRecord, Rejection> {
        let (name, native_name) = repair_transposition(
            coerce(item.name.as_ref()),
            coerce(item.native_name.as_ref()),
        );
        let meaning = coerce(item.meaning.as_ref());
        let origin = match coerce(item.origin.as_ref()) {
            origin if !origin.is_empty() => origin,
            _ => self.origin.unwrap_or(FALLBACK_ORIGIN).to_string(),
        };

        if name.is_empty() || !looks_like_name(&name) {
            return Err(Rejection::NameShape);
        }
        if !is_latin_only(&name) {
            return Err(Rejection::NonLatinName);
        }
        if !is_clean_text(&meaning, MAX_MEANING_LEN) {
            return Err(Rejection::Meaning);
        }
        if !is_clean_text(&origin, MAX_ORIGIN_LEN) {
            return Err(Rejection::Origin);
        }

        let key = name.to_lowercase();
        if self.vocabulary.is_disallowed(&key) {
            return Err(Rejection::Disallowed);
        }
        if seen.contains(&key) {
            return Err(Rejection::Duplicate);
        }
        if self.exclude.contains(&key) {
            return Err(Rejection::Excluded);
        }

        let native_name = Some(native_name)
            .filter(|native| *native != name && looks_like_name(native) && !is_latin_only(native));

        Ok(NameRecord {
            name,
            native_name,
            meaning,
            origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn items(values: Vec<Value>) -> Vec<RawItem> {
        values.iter().map(RawItem::from).collect()
    }

    fn normalize(values: Vec<Value>, count: usize, exclude: &[String]) -> Vec<NameRecord> {
        let vocabulary = Vocabulary::standard();
        Normalizer::new(&vocabulary, Some("Russian"), count, exclude)
            .normalize_and_validate(&items(values))
    }

    #[test]
    fn swaps_transposed_fields() {
        let records = normalize(
            vec![json!({"name": "Игорь", "nativeName": "Igor", "meaning": "warrior", "origin": "Russian"})],
            5,
            &[],
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Igor");
        assert_eq!(records[0].native_name.as_deref(), Some("Игорь"));
    }

    #[test]
    fn drops_native_only_item_without_panicking() {
        let records = normalize(
            vec![json!({"name": "Игорь", "nativeName": "", "meaning": "warrior", "origin": "Russian"})],
            5,
            &[],
        );
        assert!(records.is_empty());
    }

    #[test]
    fn repair_moves_native_only_name() {
        let (name, native) = repair_transposition("Игорь".into(), String::new());
        assert_eq!(name, "");
        assert_eq!(native, "Игорь");
    }

    #[test]
    fn repair_leaves_latin_name_alone() {
        let (name, native) = repair_transposition("Olga".into(), "Ольга".into());
        assert_eq!((name.as_str(), native.as_str()), ("Olga", "Ольга"));
    }

    #[test]
    fn rejects_disallowed_tokens_regardless_of_fields() {
        let records = normalize(
            vec![
                json!({"name": "Example", "meaning": "a fine meaning", "origin": "Latin"}),
                json!({"name": "NAMES", "meaning": "plural", "origin": "Latin"}),
            ],
            5,
            &[],
        );
        assert!(records.is_empty());
    }

    #[test]
    fn deduplicates_case_insensitively_within_batch() {
        let records = normalize(
            vec![
                json!({"name": "Olga", "meaning": "holy", "origin": "Russian"}),
                json!({"name": "OLGA", "meaning": "blessed", "origin": "Russian"}),
                json!({"name": "Vera", "meaning": "faith", "origin": "Russian"}),
            ],
            5,
            &[],
        );
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Olga", "Vera"]);
    }

    #[test]
    fn honours_exclude_list_case_insensitively() {
        let records = normalize(
            vec![
                json!({"name": "Olga", "meaning": "holy", "origin": "Russian"}),
                json!({"name": "Vera", "meaning": "faith", "origin": "Russian"}),
            ],
            5,
            &["  olga ".to_string()],
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Vera");
    }

    #[test]
    fn truncates_to_count() {
        let values = ["Anna", "Vera", "Nina", "Lida"]
            .iter()
            .map(|name| json!({"name": name, "meaning": "lovely", "origin": "Russian"}))
            .collect();
        let records = normalize(values, 2, &[]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "Vera");
    }

    #[test]
    fn missing_origin_falls_back_to_request_then_various() {
        let vocabulary = Vocabulary::standard();
        let raw = items(vec![json!({"name": "Mila", "meaning": "dear"})]);

        let with_request = Normalizer::new(&vocabulary, Some("Russian"), 3, &[])
            .normalize_and_validate(&raw);
        let without = Normalizer::new(&vocabulary, None, 3, &[]).normalize_and_validate(&raw);

        assert_eq!(with_request[0].origin, "Russian");
        assert_eq!(without[0].origin, FALLBACK_ORIGIN);
    }

    #[test]
    fn missing_meaning_is_rejected() {
        let records = normalize(vec![json!({"name": "Mila", "origin": "Slavic"})], 3, &[]);
        assert!(records.is_empty());
    }

    #[test]
    fn rejects_unsafe_or_oversized_fields() {
        let long_meaning = "m".repeat(MAX_MEANING_LEN + 1);
        let long_origin = "o".repeat(MAX_ORIGIN_LEN + 1);
        let records = normalize(
            vec![
                json!({"name": "Mila", "meaning": long_meaning, "origin": "Slavic"}),
                json!({"name": "Lena", "meaning": "torch", "origin": long_origin}),
                json!({"name": "Zoya", "meaning": "<script>", "origin": "Greek"}),
                json!({"name": "Kira 2", "meaning": "ruler", "origin": "Greek"}),
            ],
            5,
            &[],
        );
        assert!(records.is_empty());
    }

    #[test]
    fn drops_latin_or_malformed_native_names() {
        let records = normalize(
            vec![
                json!({"name": "Olga", "nativeName": "Olga", "meaning": "holy", "origin": "Russian"}),
                json!({"name": "Vera", "nativeName": "{Вера}", "meaning": "faith", "origin": "Russian"}),
                json!({"name": "Nina", "native_name": "Нина", "meaning": "grace", "origin": "Russian"}),
            ],
            5,
            &[],
        );
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].native_name, None);
        assert_eq!(records[1].native_name, None);
        assert_eq!(records[2].native_name.as_deref(), Some("Нина"));
    }

    #[test]
    fn coerces_wrongly_typed_fields() {
        let records = normalize(
            vec![
                json!("just a string"),
                json!({"name": 42, "meaning": "answer", "origin": "Various"}),
                json!({"name": ["Mia"], "meaning": "mine", "origin": "Italian"}),
                json!({"name": "  Mia  ", "meaning": " mine ", "origin": null}),
            ],
            5,
            &[],
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Mia");
        assert_eq!(records[0].meaning, "mine");
        assert_eq!(records[0].origin, "Russian");
    }

    #[test]
    fn rejects_pair_with_no_latin_form() {
        let records = normalize(
            vec![
                json!({"name": "Ольга", "nativeName": "{Ольга}", "meaning": "holy", "origin": "Russian"}),
                json!({"name": "Ольга", "nativeName": "Ольга", "meaning": "holy", "origin": "Russian"}),
                json!({"name": "さくら", "nativeName": "桜", "meaning": "cherry blossom", "origin": "Japanese"}),
            ],
            5,
            &[],
        );
        assert!(records.is_empty());
    }

    #[test]
    fn accepted_names_are_latin_and_differ_from_native() {
        let records = normalize(
            vec![
                json!({"name": "Ольга", "nativeName": "{Ольга}", "meaning": "holy", "origin": "Russian"}),
                json!({"name": "Vera", "nativeName": "Вера", "meaning": "faith", "origin": "Russian"}),
                json!({"name": "Вера", "nativeName": "Вера", "meaning": "faith", "origin": "Russian"}),
            ],
            5,
            &[],
        );
        assert_eq!(records.len(), 1);
        for record in &records {
            assert!(is_latin_only(&record.name), "{}", record.name);
            assert_ne!(record.native_name.as_deref(), Some(record.name.as_str()));
        }
    }

    #[test]
    fn non_latin_input_stays_stable_across_passes() {
        let vocabulary = Vocabulary::standard();
        let normalizer = Normalizer::new(&vocabulary, Some("Russian"), 4, &[]);
        let first = normalizer.normalize_and_validate(&items(vec![
            json!({"name": "Ольга", "nativeName": "{Ольга}", "meaning": "holy", "origin": "Russian"}),
            json!({"name": "Ольга", "nativeName": "Ольга", "meaning": "holy", "origin": "Russian"}),
            json!({"name": "Нина", "nativeName": "Nina", "meaning": "grace", "origin": "Russian"}),
        ]));
        assert_eq!(first.len(), 1);

        let again: Vec<RawItem> = first.iter().map(RawItem::from).collect();
        assert_eq!(normalizer.normalize_and_validate(&again), first);
    }

    #[test]
    fn normalization_is_idempotent() {
        let vocabulary = Vocabulary::standard();
        let normalizer = Normalizer::new(&vocabulary, Some("Russian"), 4, &[]);
        let first = normalizer.normalize_and_validate(&items(vec![
            json!({"name": "Игорь", "nativeName": "Igor", "meaning": "warrior", "origin": "Russian"}),
            json!({"name": "Olga", "nativeName": "Olga", "meaning": "holy"}),
            json!({"name": "Example", "meaning": "x", "origin": "y"}),
            json!({"name": "olga", "meaning": "dup", "origin": "Russian"}),
            json!({"name": "Vera", "meaning": "faith", "origin": "Russian"}),
        ]));

        let again: Vec<RawItem> = first.iter().map(RawItem::from).collect();
        let second = normalizer.normalize_and_validate(&again);
        assert_eq!(first, second);
    }
}
