//! The sixteen legacy color codes and their RGB palette.

use std::fmt;

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into a `u32` key for use in hash maps.
    #[must_use]
    pub const fn as_key(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Drop-shadow color used behind tooltip text (each channel quartered).
    #[must_use]
    pub const fn shadow(self) -> Self {
        Self::new(self.r / 4, self.g / 4, self.b / 4)
    }

    /// CSS hex notation, e.g. `#ff5555`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// One of the sixteen color codes (`0`–`9`, `a`–`f`).
///
/// The default is [`ColorCode::White`] (`f`), which is also what a reset
/// code restores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum ColorCode {
    /// `0`
    Black = 0,
    /// `1`
    DarkBlue = 1,
    /// `2`
    DarkGreen = 2,
    /// `3`
    DarkAqua = 3,
    /// `4`
    DarkRed = 4,
    /// `5`
    DarkPurple = 5,
    /// `6`
    Gold = 6,
    /// `7`
    Gray = 7,
    /// `8`
    DarkGray = 8,
    /// `9`
    Blue = 9,
    /// `a`
    Green = 10,
    /// `b`
    Aqua = 11,
    /// `c`
    Red = 12,
    /// `d`
    LightPurple = 13,
    /// `e`
    Yellow = 14,
    /// `f`
    #[default]
    White = 15,
}

impl ColorCode {
    /// All codes in index order.
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
    ];

    /// Return the raw palette index (0–15).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Convert a palette index to a code, returning `None` if out of range.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        if value < 16 {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    /// Parse a code character (case-insensitive hex digit).
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let digit = c.to_digit(16)?;
        Self::from_u8(digit as u8)
    }

    /// The lowercase code character for this color.
    #[must_use]
    pub fn as_char(self) -> char {
        char::from_digit(u32::from(self.as_u8()), 16).unwrap_or('f')
    }

    /// Palette value for this code.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Black => Rgb::new(0x00, 0x00, 0x00),
            Self::DarkBlue => Rgb::new(0x00, 0x00, 0xAA),
            Self::DarkGreen => Rgb::new(0x00, 0xAA, 0x00),
            Self::DarkAqua => Rgb::new(0x00, 0xAA, 0xAA),
            Self::DarkRed => Rgb::new(0xAA, 0x00, 0x00),
            Self::DarkPurple => Rgb::new(0xAA, 0x00, 0xAA),
            Self::Gold => Rgb::new(0xFF, 0xAA, 0x00),
            Self::Gray => Rgb::new(0xAA, 0xAA, 0xAA),
            Self::DarkGray => Rgb::new(0x55, 0x55, 0x55),
            Self::Blue => Rgb::new(0x55, 0x55, 0xFF),
            Self::Green => Rgb::new(0x55, 0xFF, 0x55),
            Self::Aqua => Rgb::new(0x55, 0xFF, 0xFF),
            Self::Red => Rgb::new(0xFF, 0x55, 0x55),
            Self::LightPurple => Rgb::new(0xFF, 0x55, 0xFF),
            Self::Yellow => Rgb::new(0xFF, 0xFF, 0x55),
            Self::White => Rgb::new(0xFF, 0xFF, 0xFF),
        }
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_char_is_case_insensitive() {
        assert_eq!(ColorCode::from_char('c'), Some(ColorCode::Red));
        assert_eq!(ColorCode::from_char('C'), Some(ColorCode::Red));
        assert_eq!(ColorCode::from_char('0'), Some(ColorCode::Black));
        assert_eq!(ColorCode::from_char('g'), None);
        assert_eq!(ColorCode::from_char('§'), None);
    }

    #[test]
    fn char_round_trips_for_every_code() {
        for code in ColorCode::ALL {
            assert_eq!(ColorCode::from_char(code.as_char()), Some(code));
        }
    }

    #[test]
    fn default_is_white() {
        assert_eq!(ColorCode::default(), ColorCode::White);
        assert_eq!(ColorCode::default().as_char(), 'f');
    }

    #[test]
    fn from_u8_rejects_out_of_range() {
        assert_eq!(ColorCode::from_u8(15), Some(ColorCode::White));
        assert_eq!(ColorCode::from_u8(16), None);
    }

    #[test]
    fn palette_hex() {
        assert_eq!(ColorCode::Red.rgb().to_hex(), "#ff5555");
        assert_eq!(ColorCode::Gold.rgb().to_hex(), "#ffaa00");
        assert_eq!(ColorCode::Black.rgb().to_hex(), "#000000");
    }

    #[test]
    fn shadow_quarters_channels() {
        assert_eq!(ColorCode::White.rgb().shadow(), Rgb::new(63, 63, 63));
    }

    #[test]
    fn display_uses_code_char() {
        assert_eq!(ColorCode::LightPurple.to_string(), "d");
    }
}
