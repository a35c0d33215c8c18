//! In-place recoloring of enchantment fragments.
//!
//! Unlike [`crate::prettify`], nothing is moved: each recognised
//! `name level` fragment gets its rarity color and every other byte of the
//! line stays where it was.

use loretip_text::MarkupParser;

use crate::classify::{Category, EnchantClassifier};
use crate::database::RarityDatabase;
use crate::prettify::is_boundary;

/// Recolors known enchantments without reordering.
#[derive(Debug, Clone, Copy)]
pub struct LoreColorizer<'db> {
    classifier: EnchantClassifier<'db>,
    parser: MarkupParser,
}

impl<'db> LoreColorizer<'db> {
    #[must_use]
    pub fn new(db: &'db RarityDatabase) -> Self {
        Self {
            classifier: EnchantClassifier::new(db),
            parser: MarkupParser::new().with_chroma(true),
        }
    }

    /// Recolor one line. Stat lines are returned as they are.
    #[must_use]
    pub fn colorize_line(&self, line: &str) -> String {
        if is_boundary(&self.parser.strip(line)) {
            return line.to_owned();
        }

        let mut out = String::with_capacity(line.len() + 8);
        for (idx, part) in line.split(',').enumerate() {
            if idx > 0 {
                out.push(',');
            }
            let token = self.classifier.token(part);
            if token.category == Category::Unknown {
                out.push_str(part);
                continue;
            }
            let body = part.trim_start();
            out.push_str(&part[..part.len() - body.len()]);
            out.push_str(&token.formatted());
        }
        out
    }

    /// Recolor every line; count and order are preserved.
    #[must_use]
    pub fn colorize<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        lines
            .iter()
            .map(|line| self.colorize_line(line.as_ref()))
            .collect()
    }
}

/// Recolor known enchantments in place.
#[must_use]
pub fn colorize<S: AsRef<str>>(lines: &[S], db: &RarityDatabase) -> Vec<String> {
    LoreColorizer::new(db).colorize(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::RangedEnchant;

    fn db() -> RarityDatabase {
        RarityDatabase::builtin().with_normal(RangedEnchant::new("Sharpness", 1, 7))
    }

    #[test]
    fn recolors_known_fragments_in_place() {
        let db = db();
        let out = colorize(&["§9Unbreaking III, §9Sharpness VII, §9Soul Eater 5"], &db);
        assert_eq!(
            out,
            vec!["§9Unbreaking III, §zSharpness VII, §d§lSoul Eater 5".to_owned()]
        );
    }

    #[test]
    fn keeps_original_spacing() {
        let db = db();
        let out = colorize(&["Sharpness I,   Toxophilite 2"], &db);
        assert_eq!(out, vec!["§9Sharpness I,   §cToxophilite 2".to_owned()]);
    }

    #[test]
    fn stat_lines_untouched() {
        let db = db();
        let lines = ["§7Sharpness Bonus: §c+7", "Gear Score 10"];
        assert_eq!(colorize(&lines, &db), lines.map(str::to_owned).to_vec());
    }

    #[test]
    fn line_count_preserved() {
        let db = db();
        let lines = ["a", "", "Sharpness I, Sharpness II", "b"];
        assert_eq!(colorize(&lines, &db).len(), lines.len());
    }
}
