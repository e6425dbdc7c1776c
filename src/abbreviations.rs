//! Static abbreviation tables and case-insensitive lookup.
//!
//! Keys are stored upper-case. Lookups upper-case the input with full Unicode
//! case mapping and match it exactly, so `est`, `Est` and `EST` all resolve to
//! the same entry, and so does `ımho` (dotless i) for `IMHO`.
//! Whitespace is significant.

use serde::Serialize;

use crate::error::ServiceError;

const TIME_ZONES: &[(&str, &str)] = &[
    ("MST", "Mountain Standard Time"),
    ("EST", "Eastern Standard Time"),
    ("PST", "Pacific Standard Time"),
    ("CST", "Central Standard Time"),
    ("GMT", "Greenwich Mean Time"),
];

const NEW_AGE: &[(&str, &str)] = &[
    ("LOL", "Laugh Out Loud"),
    ("BRB", "Be Right Back"),
    ("OMG", "Oh My God"),
    ("IMHO", "In My Humble Opinion"),
    ("FOMO", "Fear Of Missing Out"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbbreviationTable {
    TimeZones,
    NewAge,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub abbreviation: &'static str,
    pub expansion: &'static str,
}

impl AbbreviationTable {
    pub const ALL: [AbbreviationTable; 2] =
        [AbbreviationTable::TimeZones, AbbreviationTable::NewAge];

    /// Path segment the table is served under
    pub fn slug(self) -> &'static str {
        match self {
            AbbreviationTable::TimeZones => "time_zones",
            AbbreviationTable::NewAge => "new_age_expansions",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|table| table.slug() == slug)
    }

    fn label(self) -> &'static str {
        match self {
            AbbreviationTable::TimeZones => "Timezone",
            AbbreviationTable::NewAge => "New age",
        }
    }

    pub fn entries(self) -> impl Iterator<Item = Expansion> {
        let table = match self {
            AbbreviationTable::TimeZones => TIME_ZONES,
            AbbreviationTable::NewAge => NEW_AGE,
        };
        table
            .iter()
            .map(|&(abbreviation, expansion)| Expansion {
                abbreviation,
                expansion,
            })
    }

    /// Every key of the table, in table order
    pub fn keys(self) -> Vec<String> {
        self.entries()
            .map(|entry| entry.abbreviation.to_string())
            .collect()
    }

    pub fn lookup(self, input: &str) -> Result<Expansion, ServiceError> {
        let key = input.to_uppercase();
        self.entries()
            .find(|entry| entry.abbreviation == key)
            .ok_or_else(|| ServiceError::NotFound {
                message: format!("{} abbreviation \"{}\" not found.", self.label(), key),
                available: self.keys(),
            })
    }
}
