//! Validated name records and the result set handed back to callers.

use serde::{Deserialize, Serialize};

/// Upper bound on the length of a display name, in characters.
pub const MAX_NAME_LEN: usize = 40;

/// Upper bound on the length of a meaning, in characters.
pub const MAX_MEANING_LEN: usize = 180;

/// Upper bound on the length of an origin, in characters.
pub const MAX_ORIGIN_LEN: usize = 60;

/// Origin used when neither the item nor the request names one.
pub const FALLBACK_ORIGIN: &str = "Various";

/// One suggested name.
///
/// Records are only built by the normalizer, which guarantees that `name`
/// is a name-shaped Latin-script string and that `native_name`, when
/// present, is a non-Latin rendering distinct from `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRecord {
    /// Latin-script display form.
    pub name: String,

    /// Native-script form, e.g. Cyrillic for a Russian name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_name: Option<String>,

    pub meaning: String,

    pub origin: String,
}

/// Ordered, deduplicated records returned by one generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet(Vec<NameRecord>);

impl ResultSet {
    #[must_use]
    pub fn new(records: Vec<NameRecord>) -> Self {
        Self(records)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[NameRecord] {
        &self.0
    }

    /// Display names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|record| record.name.as_str())
    }

    #[must_use]
    pub fn into_records(self) -> Vec<NameRecord> {
        self.0
    }
}

impl IntoIterator for ResultSet {
    type Item = NameRecord;
    type IntoIter = std::vec::IntoIter<NameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a NameRecord;
    type IntoIter = std::slice::Iter<'a, NameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
