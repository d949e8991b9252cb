//! Generation requests and the boundary contract for building them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::DomainError;
use super::vocabulary::Vocabulary;

/// Smallest number of names a request may ask for.
pub const MIN_COUNT: usize = 1;

/// Largest number of names a request may ask for.
pub const MAX_COUNT: usize = 10;

/// Count used when a caller omits it.
pub const DEFAULT_COUNT: usize = 6;

/// Upper bound on the previously-shown names carried by one request.
pub const MAX_EXCLUDE: usize = 50;

/// Requested gender of the suggested names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Boy,
    Girl,
    Neutral,
    /// A mix of boy and girl names.
    Surprise,
}

impl Gender {
    pub const ALL: [Gender; 4] = [Gender::Boy, Gender::Girl, Gender::Neutral, Gender::Surprise];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boy => "boy",
            Self::Girl => "girl",
            Self::Neutral => "neutral",
            Self::Surprise => "surprise",
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|gender| gender.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownGender(s.trim().to_string()))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested naming style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    Classic,
    Modern,
    Unique,
    NatureInspired,
    Vintage,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Classic,
        Style::Modern,
        Style::Unique,
        Style::NatureInspired,
        Style::Vintage,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Modern => "modern",
            Self::Unique => "unique",
            Self::NatureInspired => "nature-inspired",
            Self::Vintage => "vintage",
        }
    }
}

impl FromStr for Style {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownStyle(s.trim().to_string()))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cultural origin filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Origin {
    /// No restriction.
    Any,
    /// One entry of the vocabulary's origin list, in canonical spelling.
    Culture(String),
}

impl Origin {
    /// Resolve a caller-supplied origin against the vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownOrigin`] if the value is neither `any`
    /// nor a known origin.
    pub fn parse(value: &str, vocabulary: &Vocabulary) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("any") {
            return Ok(Self::Any);
        }
        vocabulary
            .resolve_origin(trimmed)
            .map(|canonical| Self::Culture(canonical.to_string()))
            .ok_or_else(|| DomainError::UnknownOrigin(trimmed.to_string()))
    }

    /// The culture name, or `None` for [`Origin::Any`].
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::Culture(name) => Some(name),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("any"))
    }
}

/// Untyped request fields as they arrive at the boundary.
///
/// Every field is optional so that a missing value produces a precise
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawNameRequest {
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    /// Number, numeric string, or absent.
    #[serde(default)]
    pub count: Option<Value>,
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
}

/// A validated, immutable generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRequest {
    gender: Gender,
    style: Style,
    origin: Origin,
    count: usize,
    exclude: Vec<String>,
}

impl NameRequest {
    /// Build a request from typed fields.
    ///
    /// `count` is clamped to `[MIN_COUNT, MAX_COUNT]`. Exclude entries are
    /// trimmed and blanks dropped.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TooManyExcluded`] if more than [`MAX_EXCLUDE`]
    /// names are supplied.
    pub fn new(
        gender: Gender,
        style: Style,
        origin: Origin,
        count: i64,
        exclude: Vec<String>,
    ) -> Result<Self, DomainError> {
        if exclude.len() > MAX_EXCLUDE {
            return Err(DomainError::TooManyExcluded {
                count: exclude.len(),
                max: MAX_EXCLUDE,
            });
        }

        Ok(Self {
            gender,
            style,
            origin,
            count: clamp_count(count),
            exclude: exclude
                .into_iter()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
        })
    }

    /// Validate boundary input against the vocabulary.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] for missing or unknown enumeration values,
    /// a non-numeric count, or an oversized exclude list.
    pub fn parse(raw: &RawNameRequest, vocabulary: &Vocabulary) -> Result<Self, DomainError> {
        let gender = required(raw.gender.as_deref(), "gender")?.parse::<Gender>()?;
        let style = required(raw.style.as_deref(), "style")?.parse::<Style>()?;
        let origin = Origin::parse(required(raw.origin.as_deref(), "origin")?, vocabulary)?;
        let count = match &raw.count {
            None | Some(Value::Null) => DEFAULT_COUNT as i64,
            Some(value) => numeric_count(value)?,
        };

        Self::new(
            gender,
            style,
            origin,
            count,
            raw.exclude.clone().unwrap_or_default(),
        )
    }

    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }

    #[must_use]
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Number of names requested, always within `[MIN_COUNT, MAX_COUNT]`.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Names already shown to the user.
    #[must_use]
    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, DomainError> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(DomainError::MissingField { field }),
    }
}

fn numeric_count(value: &Value) -> Result<i64, DomainError> {
    let number = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i64),
        _ => None,
    };
    number.ok_or_else(|| DomainError::NonNumericCount(value.to_string()))
}

fn clamp_count(count: i64) -> usize {
    count.clamp(MIN_COUNT as i64, MAX_COUNT as i64) as usize
}
