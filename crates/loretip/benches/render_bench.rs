//! Benchmarks for the full render pipeline and enchantment regrouping.
//!
//! Run with: cargo bench -p loretip

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use loretip::{ItemLore, RangedEnchant, RarityDatabase, RenderOptions, prettify, render};
use std::hint::black_box;

// =============================================================================
// Test Data
// =============================================================================

fn database() -> RarityDatabase {
    ["Sharpness", "Growth", "Protection", "Critical", "Looting", "Smite"]
        .into_iter()
        .fold(RarityDatabase::builtin(), |db, name| {
            db.with_normal(RangedEnchant::new(name, 1, 7).good(6))
        })
}

/// `blocks` enchantment blocks of six tokens, separated by stat lines.
fn lore(blocks: usize) -> Vec<String> {
    let mut lines = vec!["§7Gear Score: §d680 §8(2500)".to_owned()];
    for i in 0..blocks {
        lines.push(format!("§7Damage: §c+{i}"));
        lines.push("§9Smite VII, §9Growth VI, §d§lSoul Eater 5".to_owned());
        lines.push("§9Looting IV, §9Toxophilite 9, §9Sharpness V".to_owned());
    }
    lines.push("§6§laa§6§l LEGENDARY SWORD §6§laa".to_owned());
    lines
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_prettify(c: &mut Criterion) {
    let db = database();
    let mut group = c.benchmark_group("enchant/prettify");

    for blocks in [1, 8, 64] {
        let lines = lore(blocks);
        group.throughput(Throughput::Elements(lines.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(blocks), &lines, |b, lines| {
            b.iter(|| black_box(prettify(lines, &db)))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let db = database();
    let mut group = c.benchmark_group("pipeline/render");

    for (name, options) in [
        ("default", RenderOptions::default()),
        (
            "pretty",
            RenderOptions::default()
                .with_pretty_mode(true)
                .with_brackets(false),
        ),
    ] {
        let item = ItemLore::new("§d§kaa§r §6Hyperion §d§kaa", lore(8));
        group.bench_with_input(BenchmarkId::new(name, 8), &item, |b, item| {
            b.iter(|| black_box(render(item, &options, &db)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_prettify, bench_render);

criterion_main!(benches);
