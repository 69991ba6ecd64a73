//! Benchmarks for chain parsing and locus lookup

use chainlift::{parse_chain_str, ChromosomeName, Locus, Strand};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fmt::Write;

/// Render a synthetic chain with `blocks` gapped blocks on one chromosome.
fn synthetic_chain(blocks: usize) -> String {
    let size = 100i64;
    let gap = 20i64;
    let span = blocks as i64 * size + (blocks as i64 - 1) * gap;
    let mut text = format!(
        "chain 100 chr1 500000000 + 0 {span} chr1 500000000 + 1000 {}\n",
        1000 + span
    );
    for i in 0..blocks {
        if i + 1 < blocks {
            writeln!(text, "{size} {gap} {gap}").unwrap();
        } else {
            writeln!(text, "{size}").unwrap();
        }
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let text = synthetic_chain(10_000);
    c.bench_function("parse_10k_blocks", |b| {
        b.iter(|| parse_chain_str(black_box(&text)).unwrap())
    });
}

fn bench_map(c: &mut Criterion) {
    let chain = parse_chain_str(&synthetic_chain(10_000)).unwrap();
    let chr = ChromosomeName::new("chr1").unwrap();

    c.bench_function("map_hit", |b| {
        let locus = Locus::new(chr.clone(), 600_050, Strand::Plus);
        b.iter(|| black_box(&chain).map(black_box(&locus)))
    });

    c.bench_function("map_gap_miss", |b| {
        let locus = Locus::new(chr.clone(), 110, Strand::Plus);
        b.iter(|| black_box(&chain).map(black_box(&locus)))
    });

    c.bench_function("map_unknown_chromosome", |b| {
        let locus = Locus::new(ChromosomeName::new("chr9").unwrap(), 100, Strand::Plus);
        b.iter(|| black_box(&chain).map(black_box(&locus)))
    });
}

criterion_group!(benches, bench_parse, bench_map);
criterion_main!(benches);
