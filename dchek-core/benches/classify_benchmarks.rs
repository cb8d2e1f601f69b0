//! Performance benchmarks for DomainClassifier
//!
//! Run with: cargo bench --bench classify_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dchek_core::{CyrillicMatching, DetectorConfig, DomainClassifier};
use std::hint::black_box;

/// Representative domains: clean, Latin variant, Cyrillic, ACE encoded
const DOMAINS: [(&str, &str); 4] = [
    ("ascii", "login.example-bank.com"),
    ("latin", "lοgin.exämple-bank.com"),
    ("cyrillic", "аррle-support.com"),
    ("ace", "xn--e1aybc.com"),
];

/// Benchmark single-domain classification
fn bench_domains(c: &mut Criterion) {
    let mut group = c.benchmark_group("domains");
    let classifier = DomainClassifier::new();

    for (name, domain) in DOMAINS {
        group.throughput(Throughput::Bytes(domain.len() as u64));
        group.bench_with_input(BenchmarkId::new("classify", name), domain, |b, domain| {
            b.iter(|| classifier.classify(black_box(domain)));
        });
    }

    group.finish();
}

/// Benchmark label lengths up to the DNS maximum
fn bench_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("lengths");
    let classifier = DomainClassifier::new();

    for len in [16, 63, 253] {
        let mut domain = "а".repeat(len / 2);
        domain.push_str(&"a".repeat(len - len / 2));

        group.throughput(Throughput::Bytes(domain.len() as u64));
        group.bench_with_input(BenchmarkId::new("classify", len), &domain, |b, domain| {
            b.iter(|| classifier.classify(black_box(domain)));
        });
    }

    group.finish();
}

/// Compare Cyrillic matching strategies
fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("cyrillic_matching");

    for matching in [CyrillicMatching::Sequence, CyrillicMatching::BaseLetter] {
        let classifier =
            DomainClassifier::with_config(DetectorConfig::builder().cyrillic_matching(matching).build());
        group.bench_function(format!("{matching:?}"), |b| {
            b.iter(|| classifier.classify(black_box("аррle-support.com")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_domains, bench_lengths, bench_matching);
criterion_main!(benches);
