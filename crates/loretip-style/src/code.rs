//! Two-character markup codes: a prefix (`§` or `&`) and a code character.

use crate::color::ColorCode;
use crate::style::StyleFlags;

/// The section sign used when emitting codes.
pub const SECTION: char = '§';

/// Ampersand prefix accepted on input as an alternative to [`SECTION`].
pub const AMPERSAND: char = '&';

/// Whether `c` can start a markup code.
#[inline]
#[must_use]
pub const fn is_code_prefix(c: char) -> bool {
    matches!(c, SECTION | AMPERSAND)
}

/// A decoded markup code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkupCode {
    /// `0`–`9`, `a`–`f`: set color, clear decorations.
    Color(ColorCode),
    /// `k`, `l`, `m`, `n`, `o` (and `z` with chroma): add a decoration.
    Format(StyleFlags),
    /// `r`: back to white with no decorations.
    Reset,
}

impl MarkupCode {
    /// Decode the character following a prefix. Case-insensitive.
    #[must_use]
    pub fn from_char(c: char, chroma: bool) -> Option<Self> {
        if let Some(color) = ColorCode::from_char(c) {
            return Some(Self::Color(color));
        }
        if c.eq_ignore_ascii_case(&'r') {
            return Some(Self::Reset);
        }
        StyleFlags::from_code_char(c, chroma).map(Self::Format)
    }

    /// Decode a prefix + code pair, `None` if it is not a code.
    #[must_use]
    pub fn from_pair(prefix: char, c: char, chroma: bool) -> Option<Self> {
        if is_code_prefix(prefix) {
            Self::from_char(c, chroma)
        } else {
            None
        }
    }

    /// Lowercase code character.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Color(color) => color.as_char(),
            Self::Reset => 'r',
            Self::Format(flag) => flag.code_chars().next().unwrap_or('r'),
        }
    }
}

impl std::fmt::Display for MarkupCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{SECTION}{}", self.as_char())
    }
}
