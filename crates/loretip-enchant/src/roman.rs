//! Level tokens: roman numerals `I`..`X` or plain integers.

/// Roman numerals for levels 1 through 10.
pub const ROMAN_NUMERALS: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Value of a roman numeral in `I`..`X`, `None` for anything else.
#[must_use]
pub fn roman_value(token: &str) -> Option<u32> {
    ROMAN_NUMERALS
        .iter()
        .position(|numeral| *numeral == token)
        .and_then(|idx| u32::try_from(idx + 1).ok())
}

/// Parse a level token.
///
/// Tries the roman table first, then a decimal integer. Anything else is
/// level 0.
#[must_use]
pub fn parse_level(token: &str) -> u32 {
    roman_value(token)
        .or_else(|| token.parse::<u32>().ok())
        .unwrap_or(0)
}

/// Roman numeral for `level` when it is in 1..=10.
#[must_use]
pub fn to_roman(level: u32) -> Option<&'static str> {
    let idx = usize::try_from(level).ok()?.checked_sub(1)?;
    ROMAN_NUMERALS.get(idx).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roman_table() {
        assert_eq!(parse_level("I"), 1);
        assert_eq!(parse_level("IV"), 4);
        assert_eq!(parse_level("VIII"), 8);
        assert_eq!(parse_level("X"), 10);
    }

    #[test]
    fn decimal_fallback() {
        assert_eq!(parse_level("7"), 7);
        assert_eq!(parse_level("12"), 12);
    }

    #[test]
    fn unparseable_is_zero() {
        assert_eq!(parse_level("IIII"), 0);
        assert_eq!(parse_level("XI"), 0);
        assert_eq!(parse_level("i"), 0);
        assert_eq!(parse_level(""), 0);
        assert_eq!(parse_level("99999999999"), 0);
    }

    #[test]
    fn formats_in_range_only() {
        assert_eq!(to_roman(1), Some("I"));
        assert_eq!(to_roman(10), Some("X"));
        assert_eq!(to_roman(0), None);
        assert_eq!(to_roman(11), None);
    }

    #[test]
    fn round_trip() {
        for level in 1..=10 {
            assert_eq!(to_roman(level).map(parse_level), Some(level));
        }
    }
}
