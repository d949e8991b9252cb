//! Fixed vocabularies consulted while validating requests and records.
//!
//! A [`Vocabulary`] bundles the accepted cultural origins (with the native
//! script each one is written in, if any) and the set of meta-words that a
//! model emits when it breaks format. It is immutable once built and is
//! passed into the pipeline explicitly, so tests can swap in their own.

use std::collections::{HashMap, HashSet};

use super::script::Script;

/// Cultural origins offered by default, paired with their native script.
const STANDARD_ORIGINS: &[(&str, Option<Script>)] = &[
    ("African", None),
    ("Arabic", Some(Script::Arabic)),
    ("English", None),
    ("French", None),
    ("Greek", Some(Script::Greek)),
    ("Hebrew", Some(Script::Hebrew)),
    ("Indian", None),
    ("Irish", None),
    ("Italian", None),
    ("Japanese", Some(Script::Japanese)),
    ("Russian", Some(Script::Cyrillic)),
    ("Scandinavian", None),
    ("Spanish", None),
];

/// Words a model produces in place of a name when it narrates instead of
/// answering.
const STANDARD_DISALLOWED: &[&str] = &[
    "think", "okay", "example", "name", "names", "here", "first", "next", "then",
];

/// Immutable lookup tables for origins and disallowed tokens.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Origins in presentation order.
    origins: Vec<String>,
    /// Lowercased origin -> (index into `origins`, native script).
    lookup: HashMap<String, (usize, Option<Script>)>,
    /// Lowercased tokens that are never accepted as a name.
    disallowed: HashSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary from explicit origin and token lists.
    pub fn new<O, T>(origins: O, disallowed: T) -> Self
    where
        O: IntoIterator<Item = (String, Option<Script>)>,
        T: IntoIterator<Item = String>,
    {
        let mut ordered = Vec::new();
        let mut lookup = HashMap::new();
        for (origin, script) in origins {
            let key = origin.trim().to_lowercase();
            if key.is_empty() || lookup.contains_key(&key) {
                continue;
            }
            lookup.insert(key, (ordered.len(), script));
            ordered.push(origin.trim().to_string());
        }

        Self {
            origins: ordered,
            lookup,
            disallowed: disallowed
                .into_iter()
                .map(|token| token.trim().to_lowercase())
                .filter(|token| !token.is_empty())
                .collect(),
        }
    }

    /// The built-in vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            STANDARD_ORIGINS
                .iter()
                .map(|(origin, script)| ((*origin).to_string(), *script)),
            STANDARD_DISALLOWED.iter().map(|token| (*token).to_string()),
        )
    }

    /// Accepted origins, in presentation order.
    pub fn origins(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(String::as_str)
    }

    /// Resolve a user-supplied origin to its canonical spelling.
    ///
    /// Matching ignores case and surrounding whitespace.
    #[must_use]
    pub fn resolve_origin(&self, value: &str) -> Option<&str> {
        self.lookup
            .get(&value.trim().to_lowercase())
            .map(|(index, _)| self.origins[*index].as_str())
    }

    /// Native script of an origin, if it has one.
    #[must_use]
    pub fn script_for(&self, origin: &str) -> Option<Script> {
        self.lookup
            .get(&origin.trim().to_lowercase())
            .and_then(|(_, script)| *script)
    }

    /// Return `true` if the lowercased name is a disallowed token.
    #[must_use]
    pub fn is_disallowed(&self, lowercase_name: &str) -> bool {
        self.disallowed.contains(lowercase_name)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}
