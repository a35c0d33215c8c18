//! Inline color/style markup parsing.
//!
//! Text is split on two-character codes: a prefix (`§` or `&`) followed by a
//! code character. Everything that is not a code is literal text, including
//! a prefix followed by an unknown character.
//!
//! # Syntax
//! - `0`–`9`, `a`–`f`: set the color and clear decorations
//! - `k` obfuscated, `l` bold, `m` strikethrough, `n` underline, `o` italic
//! - `r`: reset to white with no decorations
//! - `z`: chroma, only when enabled with [`MarkupParser::with_chroma`]
//!
//! Codes are case-insensitive.
//!
//! # Example
//! ```
//! use loretip_text::markup::parse_markup;
//! use loretip_style::ColorCode;
//!
//! let runs = parse_markup("§cHello§r World");
//! assert_eq!(runs.len(), 2);
//! assert_eq!(runs[0].text, "Hello");
//! assert_eq!(runs[0].style.color, ColorCode::Red);
//! assert_eq!(runs[1].text, " World");
//! assert_eq!(runs[1].style.color, ColorCode::White);
//! ```

use loretip_style::{ColorCode, MarkupCode, Style, StyleFlags, is_code_prefix};

/// A piece of literal text drawn with one style.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyledRun {
    /// Literal text (never contains a recognised code).
    pub text: String,
    /// Style snapshot taken when the run was emitted.
    pub style: Style,
}

impl StyledRun {
    /// Create a run.
    #[must_use]
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Create an unstyled (white, no decorations) run.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }

    /// Run color.
    #[inline]
    #[must_use]
    pub fn color(&self) -> ColorCode {
        self.style.color
    }

    /// Run decorations.
    #[inline]
    #[must_use]
    pub fn flags(&self) -> StyleFlags {
        self.style.flags
    }

    /// Whether the run shimmers.
    #[inline]
    #[must_use]
    pub fn is_obfuscated(&self) -> bool {
        self.style.is_obfuscated()
    }
}

/// One lexical unit of a markup string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A recognised code.
    Code(MarkupCode),
    /// Literal text between codes (never empty).
    Text(&'a str),
}

/// Iterator over the [`Token`]s of a markup string.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    input: &'a str,
    pos: usize,
    chroma: bool,
}

impl<'a> Tokens<'a> {
    /// Decode a code starting at byte `at`, returning it and its byte length.
    fn code_at(&self, at: usize) -> Option<(MarkupCode, usize)> {
        let mut chars = self.input[at..].chars();
        let prefix = chars.next()?;
        if !is_code_prefix(prefix) {
            return None;
        }
        let c = chars.next()?;
        let code = MarkupCode::from_char(c, self.chroma)?;
        Some((code, prefix.len_utf8() + c.len_utf8()))
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        if let Some((code, len)) = self.code_at(self.pos) {
            self.pos += len;
            return Some(Token::Code(code));
        }

        let start = self.pos;
        let mut end = start;
        for (offset, ch) in self.input[start..].char_indices() {
            let at = start + offset;
            if at > start && is_code_prefix(ch) && self.code_at(at).is_some() {
                break;
            }
            end = at + ch.len_utf8();
        }
        self.pos = end;
        Some(Token::Text(&self.input[start..end]))
    }
}

/// Parse markup into runs with the default parser (chroma disabled).
#[must_use]
pub fn parse_markup(input: &str) -> Vec<StyledRun> {
    MarkupParser::new().parse(input)
}

/// Remove every recognised code (chroma disabled), keeping literal text.
#[must_use]
pub fn strip_codes(input: &str) -> String {
    MarkupParser::new().strip(input)
}

/// Parser for `§`/`&` markup.
///
/// The parser itself is immutable configuration; the running color and
/// decorations live on the stack of each [`parse`](Self::parse) call, so a
/// parser can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkupParser {
    chroma: bool,
}

impl MarkupParser {
    /// Create a parser that recognises the standard codes only.
    #[must_use]
    pub const fn new() -> Self {
        Self { chroma: false }
    }

    /// Also recognise `z` as the chroma decoration.
    #[must_use]
    pub const fn with_chroma(mut self, chroma: bool) -> Self {
        self.chroma = chroma;
        self
    }

    /// Whether `z` is a code for this parser.
    #[must_use]
    pub const fn chroma(&self) -> bool {
        self.chroma
    }

    /// Tokenize without interpreting.
    #[must_use]
    pub fn tokens<'a>(&self, input: &'a str) -> Tokens<'a> {
        Tokens {
            input,
            pos: 0,
            chroma: self.chroma,
        }
    }

    /// Parse a markup string into styled runs.
    ///
    /// Starts from white with no decorations. Empty input yields no runs.
    #[must_use]
    pub fn parse(&self, input: &str) -> Vec<StyledRun> {
        let mut runs = Vec::new();
        let mut style = Style::default();

        for token in self.tokens(input) {
            match token {
                Token::Code(code) => style = style.apply(code),
                Token::Text(text) => runs.push(StyledRun::new(text, style)),
            }
        }

        runs
    }

    /// Remove every code recognised by this parser.
    #[must_use]
    pub fn strip(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for token in self.tokens(input) {
            if let Token::Text(text) = token {
                out.push_str(text);
            }
        }
        out
    }

    /// Style in effect after reading all of `input`, starting from `start`.
    #[must_use]
    pub fn style_after(&self, start: Style, input: &str) -> Style {
        self.tokens(input).fold(start, |style, token| match token {
            Token::Code(code) => style.apply(code),
            Token::Text(_) => style,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, color: ColorCode, flags: StyleFlags) -> StyledRun {
        StyledRun::new(text, Style::new(color).with_flags(flags))
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_markup("").is_empty());
        assert!(parse_markup("§c§l").is_empty());
    }

    #[test]
    fn plain_text_is_one_white_run() {
        let runs = parse_markup("Hello world");
        assert_eq!(runs, vec![StyledRun::plain("Hello world")]);
    }

    #[test]
    fn color_then_reset() {
        let runs = parse_markup("§cHello§r World");
        assert_eq!(
            runs,
            vec![
                run("Hello", ColorCode::Red, StyleFlags::empty()),
                run(" World", ColorCode::White, StyleFlags::empty()),
            ]
        );
    }

    #[test]
    fn color_code_clears_styles() {
        let runs = parse_markup("§l§oBold§6Gold");
        assert_eq!(runs[0].flags(), StyleFlags::BOLD | StyleFlags::ITALIC);
        assert_eq!(runs[1], run("Gold", ColorCode::Gold, StyleFlags::empty()));
    }

    #[test]
    fn styles_accumulate_after_color() {
        let runs = parse_markup("&5&k&nx");
        assert_eq!(
            runs,
            vec![run(
                "x",
                ColorCode::DarkPurple,
                StyleFlags::OBFUSCATED | StyleFlags::UNDERLINE
            )]
        );
    }

    #[test]
    fn codes_are_case_insensitive() {
        let runs = parse_markup("§CRed§LBold");
        assert_eq!(runs[0].color(), ColorCode::Red);
        assert_eq!(runs[1].flags(), StyleFlags::BOLD);
    }

    #[test]
    fn unknown_codes_are_literal() {
        let runs = parse_markup("§xA&gB§");
        assert_eq!(runs, vec![StyledRun::plain("§xA&gB§")]);
    }

    #[test]
    fn doubled_prefix_keeps_first_as_text() {
        let runs = parse_markup("§§cX");
        assert_eq!(
            runs,
            vec![
                StyledRun::plain("§"),
                run("X", ColorCode::Red, StyleFlags::empty()),
            ]
        );
    }

    #[test]
    fn earlier_runs_do_not_see_later_codes() {
        let runs = parse_markup("§lA§cB§kC");
        assert_eq!(runs[0], run("A", ColorCode::White, StyleFlags::BOLD));
        assert_eq!(runs[1], run("B", ColorCode::Red, StyleFlags::empty()));
        assert_eq!(runs[2], run("C", ColorCode::Red, StyleFlags::OBFUSCATED));
    }

    #[test]
    fn chroma_is_literal_unless_enabled() {
        assert_eq!(parse_markup("§zMax"), vec![StyledRun::plain("§zMax")]);

        let runs = MarkupParser::new().with_chroma(true).parse("§zMax");
        assert_eq!(runs, vec![run("Max", ColorCode::White, StyleFlags::CHROMA)]);
    }

    #[test]
    fn strip_removes_codes_only() {
        assert_eq!(strip_codes("§9Sharpness §lV§r, &7x"), "Sharpness V, x");
        assert_eq!(strip_codes("§zkeep"), "§zkeep");
        assert_eq!(MarkupParser::new().with_chroma(true).strip("§zgone"), "gone");
    }

    #[test]
    fn style_after_folds_codes() {
        let parser = MarkupParser::new();
        let style = parser.style_after(Style::default(), "§c§k");
        assert!(style.is_obfuscated());
        let style = parser.style_after(Style::default(), "§k§c");
        assert!(!style.is_obfuscated());
    }

    #[test]
    fn tokens_preserve_order() {
        let tokens: Vec<_> = MarkupParser::new().tokens("a§cb").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Text("a"),
                Token::Code(MarkupCode::Color(ColorCode::Red)),
                Token::Text("b"),
            ]
        );
    }

    #[test]
    fn multibyte_text_survives() {
        let runs = parse_markup("§a✦ Épée ✦");
        assert_eq!(runs[0].text, "✦ Épée ✦");
    }
}
