//! Benchmarks for the signal analysis pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use persona_core::{AvatarClass, RawSignals};
use persona_signals::{HandleAnalyzer, ProfileAnalyzer};

fn benchmark_handle_classification(c: &mut Criterion) {
    let analyzer = HandleAnalyzer::new();
    let handles = ["johnsmith", "mike1990", "pixel_wizard", "the_analyst", "elf_queen", "xK7qzpl"];

    c.bench_function("classify_handles", |b| {
        b.iter(|| {
            for handle in handles {
                black_box(analyzer.classify(black_box(handle)));
            }
        })
    });
}

fn benchmark_full_analysis(c: &mut Criterion) {
    let analyzer = ProfileAnalyzer::default();
    let bio = "Pixel artist and indie game dev. Shipping tiny worlds one sprite at a time 🎮🎨🚀";

    let photo = match RawSignals::new("pixel_wizard", AvatarClass::RealPhoto, bio) {
        Ok(signals) => signals,
        Err(e) => panic!("benchmark input rejected: {e}"),
    };
    let empty = match RawSignals::new("xK7qzpl", AvatarClass::DefaultCartoon, "") {
        Ok(signals) => signals,
        Err(e) => panic!("benchmark input rejected: {e}"),
    };

    c.bench_function("analyze_full_profile", |b| {
        b.iter(|| analyzer.analyze(black_box(&photo)))
    });

    c.bench_function("analyze_empty_profile", |b| {
        b.iter(|| analyzer.analyze(black_box(&empty)))
    });
}

criterion_group!(benches, benchmark_handle_classification, benchmark_full_analysis);
criterion_main!(benches);
