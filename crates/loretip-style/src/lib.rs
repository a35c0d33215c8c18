#![forbid(unsafe_code)]

//! Style vocabulary for loretip.
//!
//! # This crate provides
//! - [`ColorCode`], the sixteen legacy color codes and their [`Rgb`] palette.
//! - [`StyleFlags`] for the format codes (`k`, `l`, `m`, `n`, `o`, and the
//!   optional chroma `z`).
//! - [`Style`], the (color, flags) state a run of text is drawn with.
//! - [`MarkupCode`], the decoded form of a two-character `§x` / `&x` code.
//!
//! Parsing whole strings lives in `loretip-text`; this crate only knows what
//! a single code means.

/// Markup code decoding.
pub mod code;
/// Color codes and palette.
pub mod color;
/// Style flags and style state.
pub mod style;

pub use code::{AMPERSAND, MarkupCode, SECTION, is_code_prefix};
pub use color::{ColorCode, Rgb};
pub use style::{Style, StyleFlags};
