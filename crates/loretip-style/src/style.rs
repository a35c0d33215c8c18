//! Style flags and the running (color, flags) style state.

use crate::code::MarkupCode;
use crate::color::ColorCode;

bitflags::bitflags! {
    /// Text decoration flags toggled by format codes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// `k`: glyphs cycle through random same-width characters.
        const OBFUSCATED    = 0b0000_0001;
        /// `l`
        const BOLD          = 0b0000_0010;
        /// `m`
        const STRIKETHROUGH = 0b0000_0100;
        /// `n`
        const UNDERLINE     = 0b0000_1000;
        /// `o`
        const ITALIC        = 0b0001_0000;
        /// `z`: rolling rainbow. Only produced when chroma codes are enabled.
        const CHROMA        = 0b0010_0000;
    }
}

impl StyleFlags {
    /// Format flags paired with their code characters, in code order.
    pub const CODES: [(Self, char); 6] = [
        (Self::OBFUSCATED, 'k'),
        (Self::BOLD, 'l'),
        (Self::STRIKETHROUGH, 'm'),
        (Self::UNDERLINE, 'n'),
        (Self::ITALIC, 'o'),
        (Self::CHROMA, 'z'),
    ];

    /// Map a format code character (case-insensitive) to its flag.
    ///
    /// `z` is only recognised when `chroma` is true.
    #[must_use]
    pub fn from_code_char(c: char, chroma: bool) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'k' => Some(Self::OBFUSCATED),
            'l' => Some(Self::BOLD),
            'm' => Some(Self::STRIKETHROUGH),
            'n' => Some(Self::UNDERLINE),
            'o' => Some(Self::ITALIC),
            'z' if chroma => Some(Self::CHROMA),
            _ => None,
        }
    }

    /// Code characters of every set flag, in code order.
    pub fn code_chars(self) -> impl Iterator<Item = char> {
        Self::CODES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, c)| c)
    }
}

/// Current color plus active decorations.
///
/// This is the whole state of the markup state machine: a color code
/// clears the flags, a reset restores `(f, ∅)`, a format code adds its flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Active color.
    pub color: ColorCode,
    /// Active decorations.
    pub flags: StyleFlags,
}

impl Style {
    /// Create a style with the given color and no decorations.
    #[must_use]
    pub const fn new(color: ColorCode) -> Self {
        Self {
            color,
            flags: StyleFlags::empty(),
        }
    }

    /// Add decorations.
    #[must_use]
    pub fn with_flags(mut self, flags: StyleFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Apply one markup code, returning the resulting style.
    #[must_use]
    pub fn apply(self, code: MarkupCode) -> Self {
        match code {
            MarkupCode::Color(color) => Self::new(color),
            MarkupCode::Reset => Self::default(),
            MarkupCode::Format(flag) => self.with_flags(flag),
        }
    }

    /// Whether this style obfuscates its text.
    #[inline]
    #[must_use]
    pub fn is_obfuscated(&self) -> bool {
        self.flags.contains(StyleFlags::OBFUSCATED)
    }
}
