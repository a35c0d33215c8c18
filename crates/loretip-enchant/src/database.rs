//! Rarity tables used to classify enchantments.
//!
//! The database is supplied by the caller (usually loaded once from JSON)
//! and only read afterwards. Three tables are consulted in order:
//!
//! - `ultimate`: named entries with a level range
//! - `stacking`: bare names, implicitly levels 1..=10
//! - `normal`: named entries with a level range and an optional "good"
//!   threshold, given either as a list or as a name→range map
//!
//! # JSON shape
//! ```json
//! {
//!   "ultimate": [{ "name": "Soul Eater", "minLevel": 1, "maxLevel": 5 }],
//!   "stacking": ["Toxophilite"],
//!   "normal":   { "Sharpness": { "min": 1, "max": 7, "good": 6 } }
//! }
//! ```
//! `min`/`max`/`good` are accepted as aliases of `minLevel`/`maxLevel`/
//! `goodLevel`, and an `ultimate` or `normal` entry may be a bare name.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;

use serde::{Deserialize, Serialize};

/// Lowest level a table entry accepts when none is given.
pub const DEFAULT_MIN_LEVEL: u32 = 1;
/// Highest level a table entry accepts when none is given, and the cap for
/// stacking enchantments.
pub const DEFAULT_MAX_LEVEL: u32 = 10;

/// A named enchantment with an accepted level range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangedEnchant {
    /// Display name.
    pub name: String,
    /// Lowest accepted level.
    #[serde(alias = "min", default = "default_min")]
    pub min_level: u32,
    /// Highest accepted level; reaching it earns the top-tier color.
    #[serde(alias = "max", default = "default_max")]
    pub max_level: u32,
    /// Level from which the "good" color applies (normal table only).
    #[serde(alias = "good", default, skip_serializing_if = "Option::is_none")]
    pub good_level: Option<u32>,
}

fn default_min() -> u32 {
    DEFAULT_MIN_LEVEL
}

fn default_max() -> u32 {
    DEFAULT_MAX_LEVEL
}

impl RangedEnchant {
    /// Entry accepting `min..=max`.
    #[must_use]
    pub fn new(name: impl Into<String>, min_level: u32, max_level: u32) -> Self {
        Self {
            name: name.into(),
            min_level,
            max_level,
            good_level: None,
        }
    }

    /// Set the "good" threshold.
    #[must_use]
    pub fn good(mut self, level: u32) -> Self {
        self.good_level = Some(level);
        self
    }

    /// Whether `level` is inside the accepted range.
    #[must_use]
    pub fn accepts(&self, level: u32) -> bool {
        (self.min_level..=self.max_level).contains(&level)
    }

    /// Whether this entry's name equals `name`, ignoring case.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// Case-insensitive exact name comparison.
#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// The three rarity tables.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "DatabaseSpec")]
pub struct RarityDatabase {
    /// Ultimate enchantments, sorted first.
    pub ultimate: Vec<RangedEnchant>,
    /// Stacking enchantment names (levels 1..=10).
    pub stacking: Vec<String>,
    /// Normal enchantments with tiered colors.
    pub normal: Vec<RangedEnchant>,
}

impl RarityDatabase {
    /// Empty database: every enchantment is unknown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The seed data shipped with the tool.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new()
            .with_ultimate(RangedEnchant::new("Soul Eater", 1, 5))
            .with_stacking("Toxophilite")
    }

    /// Add an ultimate entry.
    #[must_use]
    pub fn with_ultimate(mut self, entry: RangedEnchant) -> Self {
        self.ultimate.push(entry);
        self
    }

    /// Add a stacking name.
    #[must_use]
    pub fn with_stacking(mut self, name: impl Into<String>) -> Self {
        self.stacking.push(name.into());
        self
    }

    /// Add a normal entry.
    #[must_use]
    pub fn with_normal(mut self, entry: RangedEnchant) -> Self {
        self.normal.push(entry);
        self
    }

    /// Parse a database from JSON, logging any [`DatabaseIssue`]s.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let db: Self = serde_json::from_str(json)?;
        db.log_issues();
        Ok(db)
    }

    /// Read and parse a database from a reader, logging any issues.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let db: Self = serde_json::from_reader(reader)?;
        db.log_issues();
        Ok(db)
    }

    /// First ultimate entry named `name`.
    #[must_use]
    pub fn find_ultimate(&self, name: &str) -> Option<&RangedEnchant> {
        self.ultimate.iter().find(|entry| entry.is_named(name))
    }

    /// Whether `name` is a stacking enchantment.
    #[must_use]
    pub fn is_stacking(&self, name: &str) -> bool {
        self.stacking.iter().any(|entry| names_match(entry, name))
    }

    /// First normal entry named `name`.
    #[must_use]
    pub fn find_normal(&self, name: &str) -> Option<&RangedEnchant> {
        self.normal.iter().find(|entry| entry.is_named(name))
    }

    /// Whether the database has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ultimate.is_empty() && self.stacking.is_empty() && self.normal.is_empty()
    }

    /// Suspicious but tolerated content.
    #[must_use]
    pub fn issues(&self) -> Vec<DatabaseIssue> {
        let mut issues = Vec::new();

        for entry in self.ultimate.iter().chain(&self.normal) {
            if entry.min_level > entry.max_level {
                issues.push(DatabaseIssue::InvertedRange {
                    name: entry.name.clone(),
                    min_level: entry.min_level,
                    max_level: entry.max_level,
                });
            }
        }

        let tables: [(&'static str, Vec<&str>); 3] = [
            ("ultimate", self.ultimate.iter().map(|e| e.name.as_str()).collect()),
            ("stacking", self.stacking.iter().map(String::as_str).collect()),
            ("normal", self.normal.iter().map(|e| e.name.as_str()).collect()),
        ];
        for (i, (first_table, first_names)) in tables.iter().enumerate() {
            for (second_table, second_names) in &tables[i + 1..] {
                for name in first_names {
                    if second_names.iter().any(|other| names_match(name, other)) {
                        issues.push(DatabaseIssue::DuplicateName {
                            name: (*name).to_owned(),
                            first: *first_table,
                            second: *second_table,
                        });
                    }
                }
            }
        }

        issues
    }

    fn log_issues(&self) {
        for issue in self.issues() {
            tracing::warn!(%issue, "rarity database issue");
        }
    }
}

/// Tolerated oddities found in a database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseIssue {
    /// `min_level > max_level`: the entry can never match.
    InvertedRange {
        name: String,
        min_level: u32,
        max_level: u32,
    },
    /// The same name appears in two tables; the earlier table wins.
    DuplicateName {
        name: String,
        first: &'static str,
        second: &'static str,
    },
}

impl fmt::Display for DatabaseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedRange {
                name,
                min_level,
                max_level,
            } => write!(
                f,
                "'{}' has an inverted level range {}..={}",
                name, min_level, max_level
            ),
            Self::DuplicateName {
                name,
                first,
                second,
            } => write!(
                f,
                "'{}' is listed in both the {} and {} tables",
                name, first, second
            ),
        }
    }
}

/// Errors that can occur while loading a database.
#[derive(Debug)]
pub enum LoadError {
    /// Malformed or mistyped JSON.
    Json(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid rarity database: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

// ---------------------------------------------------------------------------
// Accepted input shapes
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct DatabaseSpec {
    #[serde(default)]
    ultimate: TableSpec,
    #[serde(default)]
    stacking: Vec<String>,
    #[serde(default)]
    normal: TableSpec,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TableSpec {
    List(Vec<EntrySpec>),
    Map(BTreeMap<String, RangeSpec>),
}

impl Default for TableSpec {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EntrySpec {
    Name(String),
    Ranged(RangedEnchant),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RangeSpec {
    #[serde(alias = "min", default = "default_min")]
    min_level: u32,
    #[serde(alias = "max", default = "default_max")]
    max_level: u32,
    #[serde(alias = "good", default)]
    good_level: Option<u32>,
}

impl TableSpec {
    fn into_entries(self) -> Vec<RangedEnchant> {
        match self {
            Self::List(entries) => entries
                .into_iter()
                .map(|entry| match entry {
                    EntrySpec::Name(name) => {
                        RangedEnchant::new(name, DEFAULT_MIN_LEVEL, DEFAULT_MAX_LEVEL)
                    }
                    EntrySpec::Ranged(entry) => entry,
                })
                .collect(),
            Self::Map(map) => map
                .into_iter()
                .map(|(name, range)| RangedEnchant {
                    name,
                    min_level: range.min_level,
                    max_level: range.max_level,
                    good_level: range.good_level,
                })
                .collect(),
        }
    }
}

impl From<DatabaseSpec> for RarityDatabase {
    fn from(spec: DatabaseSpec) -> Self {
        Self {
            ultimate: spec.ultimate.into_entries(),
            stacking: spec.stacking,
            normal: spec.normal.into_entries(),
        }
    }
}
