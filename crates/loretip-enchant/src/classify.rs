//! Enchantment classification.
//!
//! A fragment such as `§9Sharpness VII` is stripped of markup and split into
//! a name and a trailing level token. The name is looked up in the
//! [`RarityDatabase`] tables in priority order (ultimate, stacking, normal);
//! the first table whose entry also accepts the level decides the category
//! and color. Anything else is [`Category::Unknown`] and drawn gray.

use std::fmt;
use std::sync::LazyLock;

use loretip_text::MarkupParser;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::database::{DEFAULT_MAX_LEVEL, DEFAULT_MIN_LEVEL, RarityDatabase};
use crate::roman::roman_value;

/// `name` + whitespace + roman-or-decimal level at the end of a fragment.
static FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\s+([IVX0-9]+)$").expect("enchant fragment pattern is valid")
});

/// Rarity category. The derived order is the display priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ultimate,
    Stacking,
    Normal,
    Unknown,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ultimate => "ultimate",
            Self::Stacking => "stacking",
            Self::Normal => "normal",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which palette recognised enchantments are drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Rarity-aware colors (pink ultimates, red stacking, tiered normals).
    #[default]
    Sba,
    /// Every recognised enchantment in plain enchant blue.
    Vanilla,
}

impl ColorMode {
    /// Parse `sba` / `vanilla`, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sba" => Some(Self::Sba),
            "vanilla" => Some(Self::Vanilla),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sba => "sba",
            Self::Vanilla => "vanilla",
        }
    }
}

/// Display color of a classified enchantment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnchantColor {
    /// Bold light purple.
    Ultimate,
    /// Red.
    Stacking,
    /// Rolling rainbow, for normal enchantments at their maximum level.
    Chroma,
    /// Gold, at or above the "good" threshold.
    Good,
    /// Blue.
    Plain,
    /// Gray, for anything not in the database.
    Unknown,
}

impl EnchantColor {
    /// Markup prefix that produces this color.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Ultimate => "§d§l",
            Self::Stacking => "§c",
            Self::Chroma => "§z",
            Self::Good => "§6",
            Self::Plain => "§9",
            Self::Unknown => "§7",
        }
    }
}

/// Category plus color for one name/level pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    pub category: Category,
    pub color: EnchantColor,
}

impl Classification {
    const UNKNOWN: Self = Self {
        category: Category::Unknown,
        color: EnchantColor::Unknown,
    };
}

/// A comma fragment of a lore line, split and classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnchantToken {
    /// The fragment as it appeared, codes included.
    pub raw: String,
    /// Enchantment name, or the whole stripped fragment if no level was found.
    pub name: String,
    /// Level token as written (`VII`, `5`), if the fragment had one.
    pub level_token: Option<String>,
    /// Parsed level, 0 when absent or unparseable.
    pub level: u32,
    pub category: Category,
    pub color: EnchantColor,
}

impl EnchantToken {
    /// Recolored markup: `<prefix><name> <level>`, or the gray stripped
    /// fragment when there is no level.
    #[must_use]
    pub fn formatted(&self) -> String {
        match &self.level_token {
            Some(level) => format!("{}{} {}", self.color.prefix(), self.name, level),
            None => format!("{}{}", self.color.prefix(), self.name),
        }
    }
}

/// Split a stripped fragment into `(name, level_token)`.
///
/// Returns `None` when the fragment does not end in a whitespace-separated
/// roman or decimal token, or the name part is empty.
#[must_use]
pub fn split_name_level(plain: &str) -> Option<(&str, &str)> {
    let caps = FRAGMENT.captures(plain)?;
    let name = caps.get(1)?.as_str().trim();
    let level = caps.get(2)?.as_str();
    if name.is_empty() {
        return None;
    }
    Some((name, level))
}

fn level_value(token: &str) -> Option<u32> {
    roman_value(token).or_else(|| token.parse::<u32>().ok())
}

/// Classifies names and fragments against a database.
#[derive(Debug, Clone, Copy)]
pub struct EnchantClassifier<'db> {
    db: &'db RarityDatabase,
    mode: ColorMode,
    parser: MarkupParser,
}

impl<'db> EnchantClassifier<'db> {
    /// Classifier using rarity-aware colors.
    #[must_use]
    pub fn new(db: &'db RarityDatabase) -> Self {
        Self {
            db,
            mode: ColorMode::Sba,
            parser: MarkupParser::new().with_chroma(true),
        }
    }

    /// Select the color palette.
    #[must_use]
    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }

    /// The database being read.
    #[must_use]
    pub fn database(&self) -> &'db RarityDatabase {
        self.db
    }

    /// Category and color for `name` at `level`.
    #[must_use]
    pub fn classify(&self, name: &str, level: u32) -> Classification {
        let found = self.lookup(name, level);
        match (self.mode, found.category) {
            (ColorMode::Vanilla, Category::Unknown) | (ColorMode::Sba, _) => found,
            (ColorMode::Vanilla, category) => Classification {
                category,
                color: EnchantColor::Plain,
            },
        }
    }

    fn lookup(&self, name: &str, level: u32) -> Classification {
        if self
            .db
            .find_ultimate(name)
            .is_some_and(|entry| entry.accepts(level))
        {
            return Classification {
                category: Category::Ultimate,
                color: EnchantColor::Ultimate,
            };
        }

        if self.db.is_stacking(name) && (DEFAULT_MIN_LEVEL..=DEFAULT_MAX_LEVEL).contains(&level) {
            return Classification {
                category: Category::Stacking,
                color: EnchantColor::Stacking,
            };
        }

        if let Some(entry) = self.db.find_normal(name)
            && entry.accepts(level)
        {
            let good = entry.good_level.unwrap_or(entry.max_level);
            let color = if level >= entry.max_level {
                EnchantColor::Chroma
            } else if level >= good {
                EnchantColor::Good
            } else {
                EnchantColor::Plain
            };
            return Classification {
                category: Category::Normal,
                color,
            };
        }

        Classification::UNKNOWN
    }

    /// Strip markup from `raw`, split off the level, and classify.
    ///
    /// A fragment without a usable level keeps its whole stripped text as the
    /// name and is [`Category::Unknown`].
    #[must_use]
    pub fn token(&self, raw: &str) -> EnchantToken {
        let plain = self.parser.strip(raw);
        let plain = plain.trim();

        if let Some((name, level_token)) = split_name_level(plain)
            && let Some(level) = level_value(level_token)
        {
            let Classification { category, color } = self.classify(name, level);
            return EnchantToken {
                raw: raw.to_owned(),
                name: name.to_owned(),
                level_token: Some(level_token.to_owned()),
                level,
                category,
                color,
            };
        }

        EnchantToken {
            raw: raw.to_owned(),
            name: plain.to_owned(),
            level_token: None,
            level: 0,
            category: Category::Unknown,
            color: EnchantColor::Unknown,
        }
    }
}

/// Classify `name` at `level` with rarity-aware colors.
#[must_use]
pub fn classify(name: &str, level: u32, db: &RarityDatabase) -> Classification {
    EnchantClassifier::new(db).classify(name, level)
}
