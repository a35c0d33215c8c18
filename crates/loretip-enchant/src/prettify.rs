//! Regrouping of enchantment lines.
//!
//! Lore usually lists enchantments as comma-separated lines in whatever
//! order the item was built with. [`LorePrettifier`] collects each run of
//! consecutive enchantment lines, classifies every fragment, sorts by rarity
//! then name, drops duplicates and re-emits the block three to a line. Stat
//! lines and free text pass through unchanged and in place.

use loretip_text::MarkupParser;
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::classify::{ColorMode, EnchantClassifier, EnchantToken, split_name_level};
use crate::database::RarityDatabase;

/// Tokens per regrouped line.
pub const CHUNK_SIZE: usize = 3;

/// Joins tokens within a regrouped line.
pub const SEPARATOR: &str = "§7, ";

/// Whether a stripped line is a stat line that must stay where it is.
#[must_use]
pub fn is_boundary(plain: &str) -> bool {
    plain.contains(':') || plain.contains("Gear Score") || plain.contains("Damage")
}

/// Classifies, sorts and rechunks enchantment blocks.
#[derive(Debug, Clone, Copy)]
pub struct LorePrettifier<'db> {
    classifier: EnchantClassifier<'db>,
    parser: MarkupParser,
}

impl<'db> LorePrettifier<'db> {
    #[must_use]
    pub fn new(db: &'db RarityDatabase) -> Self {
        Self {
            classifier: EnchantClassifier::new(db),
            parser: MarkupParser::new().with_chroma(true),
        }
    }

    /// Select the color palette for regrouped tokens.
    #[must_use]
    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.classifier = self.classifier.color_mode(mode);
        self
    }

    /// Whether `line` lists at least one `name level` fragment and is not a
    /// stat line.
    #[must_use]
    pub fn is_enchant_line(&self, line: &str) -> bool {
        let plain = self.parser.strip(line);
        if plain.trim().is_empty() || is_boundary(&plain) {
            return false;
        }
        plain
            .split(',')
            .any(|fragment| split_name_level(fragment.trim()).is_some())
    }

    /// Rewrite `lines`, regrouping every run of enchantment lines.
    #[must_use]
    pub fn prettify<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        let mut out = Vec::with_capacity(lines.len());
        let mut pending: Vec<&str> = Vec::new();

        for line in lines {
            let line = line.as_ref();
            if self.is_enchant_line(line) {
                pending.extend(
                    line.split(',')
                        .map(str::trim)
                        .filter(|fragment| !fragment.is_empty()),
                );
                continue;
            }
            self.flush(&mut pending, &mut out);
            out.push(line.to_owned());
        }
        self.flush(&mut pending, &mut out);

        out
    }

    fn flush(&self, pending: &mut Vec<&str>, out: &mut Vec<String>) {
        if pending.is_empty() {
            return;
        }
        let block = self.format_block(pending.as_slice());
        trace!(
            tokens = pending.len(),
            lines = block.len(),
            "flushed enchant block"
        );
        out.extend(block);
        pending.clear();
    }

    /// Classify, sort, deduplicate and chunk a set of raw fragments.
    #[must_use]
    pub fn format_block<S: AsRef<str>>(&self, fragments: &[S]) -> Vec<String> {
        let mut tokens: Vec<EnchantToken> = fragments
            .iter()
            .map(|fragment| self.classifier.token(fragment.as_ref()))
            .collect();
        tokens.sort_by_cached_key(|token| (token.category, token.name.to_lowercase()));

        let mut seen = FxHashSet::default();
        let formatted: Vec<String> = tokens
            .iter()
            .map(EnchantToken::formatted)
            .filter(|line| seen.insert(line.clone()))
            .collect();

        formatted
            .chunks(CHUNK_SIZE)
            .map(|chunk| chunk.join(SEPARATOR))
            .collect()
    }
}

/// Regroup enchantment lines with rarity-aware colors.
#[must_use]
pub fn prettify<S: AsRef<str>>(lines: &[S], db: &RarityDatabase) -> Vec<String> {
    LorePrettifier::new(db).prettify(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::RangedEnchant;

    fn db() -> RarityDatabase {
        RarityDatabase::builtin()
            .with_normal(RangedEnchant::new("Sharpness", 1, 7))
            .with_normal(RangedEnchant::new("Unbreaking", 1, 5).good(4))
    }

    #[test]
    fn boundary_lines() {
        assert!(is_boundary("Damage: +100"));
        assert!(is_boundary("Gear Score 400"));
        assert!(is_boundary("Bonus Damage"));
        assert!(is_boundary("Speed: 5"));
        assert!(!is_boundary("Sharpness V"));
    }

    #[test]
    fn enchant_line_detection() {
        let db = db();
        let p = LorePrettifier::new(&db);
        assert!(p.is_enchant_line("§9Sharpness V, §9Unbreaking III"));
        assert!(p.is_enchant_line("Just words, Looting 3"));
        assert!(!p.is_enchant_line("§7Gear Score: 100"));
        assert!(!p.is_enchant_line("A plain description"));
        assert!(!p.is_enchant_line("§7"));
        assert!(!p.is_enchant_line(""));
    }

    #[test]
    fn sorts_by_rarity_then_name() {
        let db = db();
        let out = prettify(
            &["§9Unbreaking III, §9Sharpness V, Toxophilite 4, Soul Eater 2, Zzz 1"],
            &db,
        );
        assert_eq!(
            out,
            vec![
                "§d§lSoul Eater 2§7, §cToxophilite 4§7, §9Sharpness V".to_owned(),
                "§9Unbreaking III§7, §7Zzz 1".to_owned(),
            ]
        );
    }

    #[test]
    fn max_level_gets_chroma_and_good_gets_gold() {
        let db = db();
        let out = prettify(&["Sharpness VII, Unbreaking IV"], &db);
        assert_eq!(out, vec!["§zSharpness VII§7, §6Unbreaking IV".to_owned()]);
    }

    #[test]
    fn blocks_split_by_text_lines() {
        let db = db();
        let out = prettify(
            &[
                "Sharpness I",
                "Unbreaking I",
                "A line of flavor text",
                "Sharpness II",
            ],
            &db,
        );
        assert_eq!(
            out,
            vec![
                "§9Sharpness I§7, §9Unbreaking I".to_owned(),
                "A line of flavor text".to_owned(),
                "§9Sharpness II".to_owned(),
            ]
        );
    }

    #[test]
    fn empty_fragments_are_skipped() {
        let db = db();
        let out = prettify(&["Sharpness V, , Unbreaking I,"], &db);
        assert_eq!(out, vec!["§9Sharpness V§7, §9Unbreaking I".to_owned()]);
    }

    #[test]
    fn fragments_without_level_stay_gray() {
        let db = db();
        let out = prettify(&["Sharpness V, Telekinesis"], &db);
        assert_eq!(out, vec!["§9Sharpness V§7, §7Telekinesis".to_owned()]);
    }

    #[test]
    fn vanilla_mode_is_blue_but_still_sorted() {
        let db = db();
        let out = LorePrettifier::new(&db)
            .color_mode(ColorMode::Vanilla)
            .prettify(&["Sharpness VII, Soul Eater 1, Nope 2"]);
        assert_eq!(
            out,
            vec!["§9Soul Eater 1§7, §9Sharpness VII§7, §7Nope 2".to_owned()]
        );
    }

    #[test]
    fn non_enchant_input_is_untouched() {
        let db = db();
        let lines = ["§7Damage: §c+10", "", "§5§oA cursed blade"];
        assert_eq!(prettify(&lines, &db), lines.map(str::to_owned).to_vec());
    }
}
