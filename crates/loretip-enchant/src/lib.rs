#![forbid(unsafe_code)]

//! Enchantment rarity handling for loretip.
//!
//! - [`RarityDatabase`] - the ultimate / stacking / normal tables, loaded
//!   from JSON
//! - [`EnchantClassifier`] - name + level to [`Category`] and color
//! - [`LorePrettifier`] - regroups enchantment lines by rarity, three per line
//! - [`LoreColorizer`] - recolors enchantments without moving them
//!
//! # Example
//! ```
//! use loretip_enchant::{RangedEnchant, RarityDatabase, prettify};
//!
//! let db = RarityDatabase::builtin().with_normal(RangedEnchant::new("Sharpness", 1, 7));
//! let lore = prettify(&["Sharpness VII, Soul Eater 5", "§7Damage: §c+50"], &db);
//! assert_eq!(lore[0], "§d§lSoul Eater 5§7, §zSharpness VII");
//! assert_eq!(lore[1], "§7Damage: §c+50");
//! ```

pub mod classify;
pub mod colorize;
pub mod database;
pub mod prettify;
pub mod roman;

pub use classify::{
    Category, Classification, ColorMode, EnchantClassifier, EnchantColor, EnchantToken, classify,
    split_name_level,
};
pub use colorize::{LoreColorizer, colorize};
pub use database::{
    DEFAULT_MAX_LEVEL, DEFAULT_MIN_LEVEL, DatabaseIssue, LoadError, RangedEnchant, RarityDatabase,
    names_match,
};
pub use prettify::{CHUNK_SIZE, LorePrettifier, SEPARATOR, is_boundary, prettify};
pub use roman::{ROMAN_NUMERALS, parse_level, roman_value, to_roman};
