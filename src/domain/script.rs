//! Writing systems a name may natively be rendered in.
//!
//! Each [`Script`] carries a fixed table of Unicode code point ranges. The
//! tables are used to tailor prompt phrasing for origins whose names are
//! traditionally written outside the Latin alphabet; record validation does
//! not depend on them.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// A non-Latin writing system recognised by the prompt builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Arabic,
    Hebrew,
    Greek,
    Cyrillic,
    /// Hiragana, katakana and the CJK ideographs used for kanji.
    Japanese,
}

const ARABIC: &[RangeInclusive<char>] = &[
    '\u{0600}'..='\u{06FF}',
    '\u{0750}'..='\u{077F}',
    '\u{08A0}'..='\u{08FF}',
    '\u{FB50}'..='\u{FDFF}',
    '\u{FE70}'..='\u{FEFF}',
];

const HEBREW: &[RangeInclusive<char>] = &['\u{0590}'..='\u{05FF}', '\u{FB1D}'..='\u{FB4F}'];

const GREEK: &[RangeInclusive<char>] = &['\u{0370}'..='\u{03FF}', '\u{1F00}'..='\u{1FFF}'];

const CYRILLIC: &[RangeInclusive<char>] = &[
    '\u{0400}'..='\u{04FF}',
    '\u{0500}'..='\u{052F}',
    '\u{2DE0}'..='\u{2DFF}',
    '\u{A640}'..='\u{A69F}',
];

const JAPANESE: &[RangeInclusive<char>] = &[
    '\u{3040}'..='\u{309F}',
    '\u{30A0}'..='\u{30FF}',
    '\u{31F0}'..='\u{31FF}',
    '\u{3400}'..='\u{4DBF}',
    '\u{4E00}'..='\u{9FFF}',
    '\u{FF66}'..='\u{FF9F}',
];

impl Script {
    /// Every script with a range table.
    pub const ALL: [Script; 5] = [
        Script::Arabic,
        Script::Hebrew,
        Script::Greek,
        Script::Cyrillic,
        Script::Japanese,
    ];

    /// Code point ranges belonging to this script.
    #[must_use]
    pub const fn ranges(self) -> &'static [RangeInclusive<char>] {
        match self {
            Self::Arabic => ARABIC,
            Self::Hebrew => HEBREW,
            Self::Greek => GREEK,
            Self::Cyrillic => CYRILLIC,
            Self::Japanese => JAPANESE,
        }
    }

    /// Return `true` if `c` falls inside one of this script's ranges.
    #[must_use]
    pub fn contains(self, c: char) -> bool {
        self.ranges().iter().any(|range| range.contains(&c))
    }

    /// Human-readable name used in prompts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Arabic => "Arabic",
            Self::Hebrew => "Hebrew",
            Self::Greek => "Greek",
            Self::Cyrillic => "Cyrillic",
            Self::Japanese => "Japanese (kana or kanji)",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
