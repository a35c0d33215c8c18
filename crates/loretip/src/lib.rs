#![forbid(unsafe_code)]

//! loretip public facade.
//!
//! Turns an item's title and lore, as pasted JSON, into styled runs ready to
//! be drawn as a tooltip. The heavy lifting lives in the member crates; this
//! crate normalizes input, threads [`RenderOptions`] through the pipeline and
//! re-exports the common types.
//!
//! # Example
//! ```
//! use loretip::prelude::*;
//!
//! let item = ItemLore::from_json(r#"{ "name": "§6Hyperion", "Lore": ["Soul Eater 5"] }"#)?;
//! let rendered = render(&item, &RenderOptions::default(), &RarityDatabase::builtin());
//! assert_eq!(rendered.plain_lines(), vec!["Soul Eater 5"]);
//! # Ok::<(), loretip::Error>(())
//! ```

use std::fmt;

pub mod config;
pub mod item;
pub mod pipeline;

pub use config::RenderOptions;
pub use item::ItemLore;
pub use pipeline::{RenderedItem, filter_gear_score, render, strip_brackets};

// --- Member re-exports ----------------------------------------------------

pub use loretip_enchant::{
    Category, ColorMode, EnchantClassifier, LoadError, LoreColorizer, LorePrettifier,
    RangedEnchant, RarityDatabase, colorize, prettify,
};
pub use loretip_style::{ColorCode, MarkupCode, Rgb, Style, StyleFlags};
pub use loretip_text::{
    ArtifactFixer, GlyphWidthModel, HtmlExporter, MarkupParser, ObfuscationAnimator,
    ObfuscationFrame, ObfuscationTarget, StyledRun, TargetId, fix_artifacts, parse_markup,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for loretip input handling.
///
/// Rendering itself never fails; only decoding external input can.
#[derive(Debug)]
pub enum Error {
    /// Item or options JSON that is malformed or mistyped.
    Json(serde_json::Error),
    /// Rarity database that could not be loaded.
    Database(LoadError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid item JSON: {err}"),
            Self::Database(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Database(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        Self::Database(err)
    }
}

/// Standard result type for loretip APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Load a rarity database from JSON.
pub fn load_database(json: &str) -> Result<RarityDatabase> {
    Ok(RarityDatabase::from_json(json)?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ColorMode, Error, ItemLore, ObfuscationAnimator, RarityDatabase, RenderOptions,
        RenderedItem, Result, StyledRun, render,
    };
    pub use crate::{enchant, style, text};
}

pub use loretip_enchant as enchant;
pub use loretip_style as style;
pub use loretip_text as text;
