//! Router Benchmarks
//!
//! Run with: cargo bench --bench router

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use cinebot::store::seed::ensure_data_file;
use cinebot::{Assistant, MovieStore};

fn sample_assistant() -> (Assistant, TempDir) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("movies.csv");
    ensure_data_file(&path, false).unwrap();
    let store = MovieStore::open(&path).unwrap();
    (Assistant::with_rng(store, 5, StdRng::seed_from_u64(0)), dir)
}

fn benchmark_handle_input(c: &mut Criterion) {
    let (mut assistant, _dir) = sample_assistant();

    let mut group = c.benchmark_group("handle_input");
    group.throughput(Throughput::Elements(1));

    let questions = [
        ("small_talk", "hello"),
        ("director", "movies directed by Christopher Nolan"),
        ("recommend", "recommend a comedy"),
        ("year", "movies released in 1999"),
        ("attribute", "Who directed Inception"),
        ("info", "tell me about Mad Max: Fury Road"),
        ("fallback", "xyzzy"),
    ];

    for (name, question) in questions {
        group.bench_function(name, |b| {
            b.iter(|| assistant.handle_input(black_box(question)));
        });
    }

    group.finish();
}

fn benchmark_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize", |b| {
        b.iter(|| cinebot::text::tokenize(black_box("What is the plot of The Dark Knight, and who stars in it?")));
    });
}

criterion_group!(benches, benchmark_handle_input, benchmark_tokenize);
criterion_main!(benches);
