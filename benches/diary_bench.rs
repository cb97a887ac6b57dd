//! Performance benchmarks for classification, aggregation and storage.
//!
//! Run with: cargo bench
//!
//! These benchmarks establish baseline performance metrics for:
//! - Keyword classification at various text lengths
//! - Monthly aggregation over diaries of various sizes
//! - Writing an entry into an existing SQLite-backed diary

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use emodiary::stats::aggregate;
use emodiary::storage::SqliteStore;
use emodiary::{
    DateKey, DiaryCollection, DiaryEntry, DiaryStore, EmotionCategory, EmotionClassifier,
    KeywordClassifier, UserId,
};
use tempfile::TempDir;

/// Builds a diary with one entry per day starting at 2020-01-01.
fn diary_with_days(days: usize) -> DiaryCollection {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    DiaryCollection::from_entries((0..days).map(|offset| DiaryEntry {
        date_key: DateKey::new(start + Duration::days(offset as i64)),
        content: "benchmark".to_string(),
        emotion: EmotionCategory::ALL[offset % EmotionCategory::COUNT],
    }))
}

/// Benchmark classification with texts of various lengths and no matching stem.
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let classifier = KeywordClassifier::default();

    let sizes = vec![("short", 1), ("paragraph", 20), ("page", 200)];
    for (name, repeats) in sizes {
        let text = "오늘은 평범한 하루였다. ".repeat(repeats);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| black_box(classifier.classify(black_box(text))));
        });
    }

    group.finish();
}

/// Benchmark monthly aggregation at various diary sizes.
fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for days in [30, 365, 3650] {
        let diary = diary_with_days(days);
        group.bench_with_input(BenchmarkId::from_parameter(days), &diary, |b, diary| {
            b.iter(|| black_box(aggregate(black_box(diary), 2020, 0)));
        });
    }

    group.finish();
}

/// Benchmark a write into a year-long diary; every write rewrites the whole record.
fn bench_write(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let backend = SqliteStore::open(&temp_dir.path().join("bench.db")).unwrap();
    let store = DiaryStore::new(backend);
    let user = UserId::new("bench").unwrap();

    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    for offset in 0..365 {
        store
            .write(&user, DateKey::new(start + Duration::days(offset)), "행복한 하루")
            .unwrap();
    }

    let mut toggle = false;
    c.bench_function("write_sqlite_365", |b| {
        b.iter(|| {
            toggle = !toggle;
            let text = if toggle { "짜증나는 하루" } else { "행복한 하루" };
            store
                .write(&user, DateKey::new(start), black_box(text))
                .unwrap();
        });
    });
}

criterion_group!(benches, bench_classify, bench_aggregate, bench_write);
criterion_main!(benches);
