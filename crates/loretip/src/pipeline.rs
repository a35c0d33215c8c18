//! The render pipeline.
//!
//! Stages, in order:
//!
//! 1. drop `Gear Score:` lines (unless shown)
//! 2. strip `§8(...)` bracket suffixes (unless shown)
//! 3. regroup enchantments (pretty mode) or recolor them in place (SBA colors)
//! 4. restore missing `§k` in front of filler runs
//! 5. parse title and lore into styled runs
//!
//! Every stage is a pure function of its input and the options.

use std::sync::LazyLock;

use loretip_enchant::{ColorMode, LoreColorizer, LorePrettifier, RarityDatabase};
use loretip_text::{
    ArtifactFixer, HtmlExporter, MarkupParser, ObfuscationTarget, StyledRun, TargetId,
};
use regex::Regex;
use tracing::debug;

use crate::config::RenderOptions;
use crate::item::ItemLore;

/// Marker of the gear score stat line.
pub const GEAR_SCORE: &str = "Gear Score:";

/// Dark-gray parenthesised suffix, with any whitespace before it.
static BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[§&]8\([^)]*\)").expect("bracket pattern is valid"));

/// Drop every line containing `Gear Score:`.
#[must_use]
pub fn filter_gear_score(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| !line.contains(GEAR_SCORE))
        .collect()
}

/// Remove every `§8(...)` / `&8(...)` suffix from `line`.
#[must_use]
pub fn strip_brackets(line: &str) -> String {
    BRACKETS.replace_all(line, "").into_owned()
}

/// Styled output of one render call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedItem {
    /// Title runs.
    pub title: Vec<StyledRun>,
    /// Runs of each lore line. An empty line has no runs.
    pub lore: Vec<Vec<StyledRun>>,
}

impl RenderedItem {
    /// Title text without styling.
    #[must_use]
    pub fn plain_title(&self) -> String {
        concat_runs(&self.title)
    }

    /// Lore text without styling, one entry per line.
    #[must_use]
    pub fn plain_lines(&self) -> Vec<String> {
        self.lore.iter().map(|runs| concat_runs(runs)).collect()
    }

    /// Whether there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.lore.is_empty()
    }

    /// One animator target per obfuscated run, title first, numbered in
    /// reading order.
    #[must_use]
    pub fn obfuscation_targets(&self) -> Vec<ObfuscationTarget> {
        std::iter::once(&self.title)
            .chain(&self.lore)
            .flatten()
            .filter(|run| run.is_obfuscated())
            .zip(0u64..)
            .map(|(run, id)| ObfuscationTarget::new(TargetId(id), run.text.as_str()))
            .collect()
    }

    /// Tooltip HTML with the default exporter.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.to_html_with(&HtmlExporter::default())
    }

    /// Tooltip HTML with a configured exporter.
    #[must_use]
    pub fn to_html_with(&self, exporter: &HtmlExporter) -> String {
        exporter.export_tooltip(&self.title, &self.lore)
    }
}

fn concat_runs(runs: &[StyledRun]) -> String {
    runs.iter().map(|run| run.text.as_str()).collect()
}

/// Run the full pipeline over `item`.
#[must_use]
pub fn render(item: &ItemLore, options: &RenderOptions, db: &RarityDatabase) -> RenderedItem {
    let _span = tracing::debug_span!("loretip.render", lines = item.lore.len()).entered();

    let mut lore = item.lore.clone();
    if !options.show_gear_score {
        lore = filter_gear_score(lore);
    }
    if !options.show_brackets {
        lore = lore.iter().map(|line| strip_brackets(line)).collect();
    }
    let filtered = lore.len();

    let enchant_stage = if options.pretty_mode {
        lore = LorePrettifier::new(db)
            .color_mode(options.color_mode)
            .prettify(&lore);
        "prettify"
    } else if options.color_mode == ColorMode::Sba {
        lore = LoreColorizer::new(db).colorize(&lore);
        "colorize"
    } else {
        "none"
    };

    if options.auto_fix_artifacts {
        let fixer = ArtifactFixer::new();
        lore = lore.iter().map(|line| fixer.fix(line)).collect();
    }

    let parser = MarkupParser::new().with_chroma(true);
    let rendered = RenderedItem {
        title: parser.parse(&item.title),
        lore: lore.iter().map(|line| parser.parse(line)).collect(),
    };

    debug!(
        input = item.lore.len(),
        filtered,
        output = rendered.lore.len(),
        enchant_stage,
        auto_fix = options.auto_fix_artifacts,
        "rendered item"
    );
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use loretip_enchant::RangedEnchant;
    use loretip_style::{ColorCode, StyleFlags};

    fn db() -> RarityDatabase {
        RarityDatabase::builtin().with_normal(RangedEnchant::new("Sharpness", 1, 7))
    }

    fn item(lore: &[&str]) -> ItemLore {
        ItemLore::new("§6Blade", lore.iter().map(|line| (*line).to_owned()).collect())
    }

    #[test]
    fn gear_score_filter() {
        let lines = vec!["§7Gear Score: §d512".to_owned(), "keep".to_owned()];
        assert_eq!(filter_gear_score(lines), vec!["keep".to_owned()]);
    }

    #[test]
    fn bracket_strip() {
        assert_eq!(strip_brackets("§7Damage: §c+10 §8(+5)"), "§7Damage: §c+10");
        assert_eq!(strip_brackets("a &8(x) b §8(y)"), "a b");
        assert_eq!(strip_brackets("§7Speed (fast)"), "§7Speed (fast)");
    }

    #[test]
    fn defaults_keep_stats_and_recolor_in_place() {
        let rendered = render(
            &item(&["§7Gear Score: §d512 §8(100)", "§9Sharpness VII, §9Unbreaking III"]),
            &RenderOptions::default(),
            &db(),
        );
        assert_eq!(
            rendered.plain_lines(),
            vec!["Gear Score: 512 (100)", "Sharpness VII, Unbreaking III"]
        );
        let chroma = &rendered.lore[1][0];
        assert_eq!(chroma.text, "Sharpness VII, ");
        assert!(chroma.flags().contains(StyleFlags::CHROMA));
    }

    #[test]
    fn toggles_change_stages() {
        let options = RenderOptions::default()
            .with_gear_score(false)
            .with_brackets(false)
            .with_pretty_mode(true);
        let rendered = render(
            &item(&[
                "§7Gear Score: §d512",
                "§7Damage: §c+10 §8(+5)",
                "Sharpness I, Soul Eater 1",
            ]),
            &options,
            &db(),
        );
        assert_eq!(
            rendered.plain_lines(),
            vec!["Damage: +10", "Soul Eater 1, Sharpness I"]
        );
        assert_eq!(rendered.lore[1][0].color(), ColorCode::LightPurple);
        assert!(rendered.lore[1][0].flags().contains(StyleFlags::BOLD));
    }

    #[test]
    fn vanilla_without_pretty_leaves_lines_alone() {
        let options = RenderOptions::default().with_color_mode(ColorMode::Vanilla);
        let rendered = render(&item(&["Sharpness VII"]), &options, &db());
        assert_eq!(rendered.lore[0][0].color(), ColorCode::White);
    }

    #[test]
    fn artifact_fix_toggle() {
        let lines = ["§6§laa§6§l LEGENDARY §6§laa"];
        let fixed = render(&item(&lines), &RenderOptions::default(), &db());
        assert!(fixed.lore[0][0].is_obfuscated());
        assert_eq!(fixed.obfuscation_targets().len(), 2);

        let raw = render(
            &item(&lines),
            &RenderOptions::default().with_auto_fix(false),
            &db(),
        );
        assert!(raw.obfuscation_targets().is_empty());
    }

    #[test]
    fn empty_item_renders_nothing() {
        let rendered = render(&ItemLore::default(), &RenderOptions::default(), &db());
        assert!(rendered.is_empty());
        assert_eq!(
            rendered.to_html(),
            "<div class=\"tooltip-content\"><div class=\"tooltip-title\"></div></div>"
        );
    }

    #[test]
    fn targets_are_numbered_in_reading_order() {
        let rendered = render(
            &ItemLore::new("§kab", vec!["x §kcd".into(), "§kef".into()]),
            &RenderOptions::default().with_auto_fix(false),
            &db(),
        );
        let targets = rendered.obfuscation_targets();
        let summary: Vec<(u64, &str)> = targets
            .iter()
            .map(|target| (target.id.0, target.original()))
            .collect();
        assert_eq!(summary, vec![(0, "ab"), (1, "cd"), (2, "ef")]);
    }
}
