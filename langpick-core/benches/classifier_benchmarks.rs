//! Benchmarks for dataset-name classification
//!
//! Run with: cargo bench --bench classifier_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use langpick_core::{LanguageResolver, NameClassifier, StaticProbe};
use std::hint::black_box;

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let classifier = NameClassifier::new();

    for name in [
        "demo",
        "anony_chs",
        "novel_eng",
        "mixed_中文_dataset",
        "a_rather_long_dataset_name_without_any_language_indicator",
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, name| {
            b.iter(|| classifier.classify(black_box(name)));
        });
    }

    group.finish();
}

fn bench_resolve_fallback(c: &mut Criterion) {
    let resolver = LanguageResolver::with_probe(StaticProbe::new(["en_core_web_lg"]));
    c.bench_function("resolve_fallback", |b| {
        b.iter(|| resolver.resolve_fallback(black_box("anony_chs")).unwrap());
    });
}

criterion_group!(benches, bench_classify, bench_resolve_fallback);
criterion_main!(benches);
