#![forbid(unsafe_code)]

//! Text handling for loretip.
//!
//! This crate turns markup strings into styled runs and provides the pieces
//! a presentation layer needs to draw them:
//! - [`MarkupParser`] / [`parse_markup`] - `§`/`&` codes to [`StyledRun`]s
//! - [`GlyphWidthModel`] - per-character pixel widths and same-width pools
//! - [`ObfuscationAnimator`] - frame generation for obfuscated runs
//! - [`ArtifactFixer`] - repair of filler runs missing their `§k`
//! - [`HtmlExporter`] - HTML rendering of runs
//!
//! # Example
//! ```
//! use loretip_text::{parse_markup, fix_artifacts, HtmlExporter};
//!
//! let line = fix_artifacts("§6§laaa§6§l LEGENDARY §6§laaa");
//! let runs = parse_markup(&line);
//! assert!(runs[0].is_obfuscated());
//!
//! let html = HtmlExporter::default().export_runs(&runs);
//! assert!(html.contains("LEGENDARY"));
//! ```

pub mod artifact;
pub mod glyph;
pub mod html;
pub mod markup;
pub mod obfuscation;

pub use artifact::{ArtifactFixer, fix_artifacts};
pub use glyph::{
    BASE_ALPHABET, CharacterPool, DEFAULT_WIDTH, EXTENDED_ALPHABET, GlyphWidthModel, char_width,
    text_width,
};
pub use html::HtmlExporter;
pub use markup::{MarkupParser, StyledRun, Token, Tokens, parse_markup, strip_codes};
pub use obfuscation::{
    DEFAULT_INTERVAL, ObfuscationAnimator, ObfuscationFrame, ObfuscationTarget, TargetId, scramble,
};
