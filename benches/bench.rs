//! Criterion benchmarks for fuzzhop.
//!
//! Covers single-target scoring, highlight building and filtering of a
//! synthetic catalog of titles, sequentially and on the rayon pool.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use fuzzhop::document::Document;
use fuzzhop::{FilterConfig, FuzzyFilter, fuzzy_match, score_only};

/// Generate catalog-like titles for benchmarking.
fn generate_titles(count: usize) -> Vec<String> {
    let words = [
        "The",
        "Holy",
        "Bible",
        "Adventures",
        "of",
        "Sherlock",
        "Holmes",
        "Pride",
        "and",
        "Prejudice",
        "Moby",
        "Dick",
        "Whale",
        "Frankenstein",
        "Modern",
        "Prometheus",
        "Great",
        "Expectations",
        "Complete",
        "Works",
        "William",
        "Shakespeare",
        "Tale",
        "Two",
        "Cities",
        "Alice's",
        "Wonderland",
        "Ulysses",
        "War",
        "Peace",
        "Dracula",
        "Leviathan",
    ];

    (0..count)
        .map(|i| {
            let len = 3 + (i % 8);
            (0..len)
                .map(|j| words[(i * 7 + j * 13) % words.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn generate_documents(count: usize) -> Vec<Document> {
    generate_titles(count)
        .into_iter()
        .enumerate()
        .map(|(i, title)| {
            Document::builder()
                .add_text("title", title)
                .add_text("author", if i % 3 == 0 { "Anonymous" } else { "Various" })
                .build()
        })
        .collect()
}

/// Benchmark matching a search against every line of a catalog.
fn bench_score_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_only");
    let titles = generate_titles(10_000);

    group.throughput(Throughput::Elements(titles.len() as u64));
    for search in ["bible", "sh", "\"holy", "pp"] {
        group.bench_function(format!("catalog_{search}"), |b| {
            b.iter(|| {
                for title in &titles {
                    black_box(score_only(black_box(title), black_box(search)));
                }
            })
        });
    }

    group.bench_function("fuzzy_match_with_highlights", |b| {
        b.iter(|| {
            for title in titles.iter().take(1000) {
                black_box(fuzzy_match(black_box(title), "twc"));
            }
        })
    });

    group.finish();
}

/// Benchmark multi-field filtering.
fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    group.sample_size(20);

    let docs = generate_documents(10_000);
    let filter = FuzzyFilter::new(FilterConfig::new(["title", "author"])).unwrap();
    let top_n = FuzzyFilter::new(FilterConfig::new(["title", "author"]).max_results_shown(20)).unwrap();

    group.throughput(Throughput::Elements(docs.len() as u64));
    group.bench_function("sequential", |b| {
        b.iter(|| black_box(filter.filter(&docs, black_box("pp"))))
    });
    group.bench_function("sequential_top_n", |b| {
        b.iter(|| black_box(top_n.filter(&docs, black_box("pp"))))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(filter.filter_par(&docs, black_box("pp"))))
    });

    group.finish();
}

criterion_group!(benches, bench_score_only, bench_filter);
criterion_main!(benches);
