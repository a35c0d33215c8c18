//! Repair of filler runs that lost their obfuscation code.
//!
//! Some copy sources drop the `§k` in front of the decorative filler
//! (`a`, `A`, `v`, `-`) that frames rarity lines, so the filler shows up as
//! literal letters. Two shapes are repaired:
//!
//! - leading: `^<codes><filler><code>` becomes `^<codes>§k<filler><code>`
//! - trailing: `<codes><filler>$` becomes `<codes>§k<filler>$`
//!
//! A run is left alone when its codes already leave obfuscation active,
//! which makes [`fix_artifacts`] idempotent.

use std::sync::LazyLock;

use loretip_style::{MarkupCode, SECTION, Style, StyleFlags};
use regex::Regex;

use crate::markup::MarkupParser;

static LEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:[§&][0-9a-fk-orA-FK-OR])+)([aAv-]+)[§&][0-9a-fk-orA-FK-OR]")
        .expect("leading filler pattern is valid")
});

static TRAILING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"((?:[§&][0-9a-fk-orA-FK-OR])+)([aAv-]+)$")
        .expect("trailing filler pattern is valid")
});

/// Rewrites degenerate filler runs. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactFixer {
    parser: MarkupParser,
}

impl ArtifactFixer {
    /// Create a fixer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parser: MarkupParser::new(),
        }
    }

    /// Repair both filler shapes in `line`.
    #[must_use]
    pub fn fix(&self, line: &str) -> String {
        let line = self.insert_marker(line, &LEADING);
        self.insert_marker(&line, &TRAILING)
    }

    /// Insert the obfuscation code before the filler captured by `pattern`,
    /// unless the preceding codes already obfuscate it.
    fn insert_marker(&self, line: &str, pattern: &Regex) -> String {
        let Some(caps) = pattern.captures(line) else {
            return line.to_owned();
        };
        let (Some(codes), Some(filler)) = (caps.get(1), caps.get(2)) else {
            return line.to_owned();
        };
        if self
            .parser
            .style_after(Style::default(), codes.as_str())
            .is_obfuscated()
        {
            return line.to_owned();
        }

        let at = filler.start();
        let marker = MarkupCode::Format(StyleFlags::OBFUSCATED);
        let mut out = String::with_capacity(line.len() + SECTION.len_utf8() + 1);
        out.push_str(&line[..at]);
        out.push(SECTION);
        out.push(marker.as_char());
        out.push_str(&line[at..]);
        tracing::debug!(filler = filler.as_str(), "restored obfuscation marker");
        out
    }
}

/// Repair filler runs in `line` with a default [`ArtifactFixer`].
#[must_use]
pub fn fix_artifacts(line: &str) -> String {
    ArtifactFixer::new().fix(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_filler_gets_marker() {
        assert_eq!(
            fix_artifacts("§6§laaa§6§l LEGENDARY SWORD §6§laaa"),
            "§6§l§kaaa§6§l LEGENDARY SWORD §6§l§kaaa"
        );
    }

    #[test]
    fn trailing_filler_gets_marker() {
        assert_eq!(fix_artifacts("§dMYTHIC §8v-v"), "§dMYTHIC §8§kv-v");
    }

    #[test]
    fn ampersand_codes_are_recognised() {
        assert_eq!(fix_artifacts("&5AvA&5 EPIC"), "&5§kAvA&5 EPIC");
    }

    #[test]
    fn already_obfuscated_is_untouched() {
        let line = "§6§kaaa§6 Title §6§kaaa";
        assert_eq!(fix_artifacts(line), line);
    }

    #[test]
    fn color_after_marker_resets_obfuscation() {
        assert_eq!(fix_artifacts("§k§caaa"), "§k§c§kaaa");
    }

    #[test]
    fn words_without_codes_are_untouched() {
        assert_eq!(fix_artifacts("Java"), "Java");
        assert_eq!(fix_artifacts("§7Some lava"), "§7Some lava");
        assert_eq!(fix_artifacts("aaa§c text"), "aaa§c text");
    }

    #[test]
    fn leading_requires_following_code() {
        assert_eq!(fix_artifacts("§caaa plain"), "§caaa plain");
    }

    #[test]
    fn empty_line() {
        assert_eq!(fix_artifacts(""), "");
    }

    #[test]
    fn fixing_twice_is_a_no_op() {
        for line in [
            "§6§laaa§6§l LEGENDARY §6§laaa",
            "§cvv§cvv",
            "§k§caaa",
            "&8-&8- Stats",
            "plain",
        ] {
            let once = fix_artifacts(line);
            assert_eq!(fix_artifacts(&once), once, "line: {line}");
        }
    }
}
