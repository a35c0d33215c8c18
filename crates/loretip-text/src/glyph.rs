#![forbid(unsafe_code)]

//! Glyph pixel widths and same-width character pools.
//!
//! Tooltip text is drawn in a proportional bitmap font. Each character
//! falls into a width bucket (in font pixels, including the one-pixel
//! spacing column). Obfuscated text swaps characters only within a bucket,
//! so a shimmering line never changes length.
//!
//! # Example
//! ```
//! use loretip_text::glyph::{GlyphWidthModel, DEFAULT_WIDTH};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let model = GlyphWidthModel::shared();
//! assert_eq!(model.width_of('i'), 2);
//! assert_eq!(model.width_of('é'), DEFAULT_WIDTH);
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let c = model.sample_replacement(2, &mut rng);
//! assert_eq!(model.width_of(c), 2);
//! ```

use std::sync::OnceLock;

use rand::Rng;
use rustc_hash::FxHashMap;

/// Width of any character not listed in the table.
pub const DEFAULT_WIDTH: u8 = 6;

/// Characters eligible as obfuscation replacements.
///
/// Omits glyphs that read as thin strokes (`i`, `l`, `I`, ...) and
/// the space.
pub const BASE_ALPHABET: &str = "abcdefghjknopqrstuvxyzABCDEFGHJKLMNOPQRSTUVWXYZ1234567890?#$%^&*()[]{}-=_+<>\"';:,.|~`@!\\/";

/// Accented Latin-1 letters added to the default-width pool.
pub const EXTENDED_ALPHABET: &str =
    "ÀÁÂÃÄÅÇÈÉÊËÐÑÒÓÔÕÖØÙÚÛÜÝÞßàáâãäåçèéêëðñòóôõöøùúûüýþÿ";

/// Pixel width bucket of `c`.
#[must_use]
pub const fn char_width(c: char) -> u8 {
    match c {
        '!' | ',' | '.' | ':' | ';' | 'i' | '|' => 2,
        '\'' | '`' | 'l' => 3,
        ' ' | 'I' | '[' | ']' | 't' => 4,
        '"' | '(' | ')' | '*' | '<' | '>' | 'f' | 'k' | '{' | '}' => 5,
        '@' | '~' => 7,
        _ => DEFAULT_WIDTH,
    }
}

/// Sum of the pixel widths of every character in `text`.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().map(|c| usize::from(char_width(c))).sum()
}

/// Characters grouped by width bucket.
#[derive(Debug, Clone)]
pub struct CharacterPool {
    buckets: FxHashMap<u8, Vec<char>>,
}

impl CharacterPool {
    /// Bucket every character of `alphabets` by [`char_width`].
    ///
    /// The default bucket always exists, even if no alphabet fills it.
    #[must_use]
    pub fn from_alphabets<'a>(alphabets: impl IntoIterator<Item = &'a str>) -> Self {
        let mut buckets: FxHashMap<u8, Vec<char>> = FxHashMap::default();
        for c in alphabets.into_iter().flat_map(str::chars) {
            let bucket = buckets.entry(char_width(c)).or_default();
            if !bucket.contains(&c) {
                bucket.push(c);
            }
        }
        if buckets.get(&DEFAULT_WIDTH).is_none_or(Vec::is_empty) {
            buckets.insert(DEFAULT_WIDTH, vec!['?']);
        }
        Self { buckets }
    }

    /// Characters sharing `width`, empty if there are none.
    #[must_use]
    pub fn bucket(&self, width: u8) -> &[char] {
        self.buckets.get(&width).map_or(&[], Vec::as_slice)
    }

    /// Populated widths in ascending order.
    #[must_use]
    pub fn widths(&self) -> Vec<u8> {
        let mut widths: Vec<u8> = self
            .buckets
            .iter()
            .filter(|(_, chars)| !chars.is_empty())
            .map(|(width, _)| *width)
            .collect();
        widths.sort_unstable();
        widths
    }

    /// Uniform draw from `width`'s bucket, or from the default bucket if
    /// `width` has no characters.
    pub fn sample<R: Rng + ?Sized>(&self, width: u8, rng: &mut R) -> char {
        let bucket = match self.bucket(width) {
            [] => self.bucket(DEFAULT_WIDTH),
            chars => chars,
        };
        match bucket {
            [] => '?',
            chars => chars[rng.random_range(0..chars.len())],
        }
    }
}

impl Default for CharacterPool {
    fn default() -> Self {
        Self::from_alphabets([BASE_ALPHABET, EXTENDED_ALPHABET])
    }
}

/// Width lookup plus the replacement pool built from it.
#[derive(Debug, Clone, Default)]
pub struct GlyphWidthModel {
    pool: CharacterPool,
}

impl GlyphWidthModel {
    /// Build a model with the standard alphabets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide model, built on first use.
    #[must_use]
    pub fn shared() -> &'static Self {
        static MODEL: OnceLock<GlyphWidthModel> = OnceLock::new();
        MODEL.get_or_init(|| {
            let model = Self::new();
            tracing::trace!(widths = ?model.pool.widths(), "glyph pool built");
            model
        })
    }

    /// Pixel width bucket of `c`.
    #[inline]
    #[must_use]
    pub fn width_of(&self, c: char) -> u8 {
        char_width(c)
    }

    /// Random character of the given width (default width if that bucket is
    /// empty).
    pub fn sample_replacement<R: Rng + ?Sized>(&self, width: u8, rng: &mut R) -> char {
        self.pool.sample(width, rng)
    }

    /// The underlying pool.
    #[must_use]
    pub fn pool(&self) -> &CharacterPool {
        &self.pool
    }
}
