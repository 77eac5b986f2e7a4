//! Performance benchmarks for building ranked progress views

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ranked_progress::{Iso8601Parser, LatestRankedProgress, RankedProgress, RawRecord};
use serde_json::json;

/// A response with `size` records spread over tracked and untracked categories
fn create_response(size: usize) -> Vec<RawRecord> {
    const CODES: [&str; 3] = ["ranked-br", "ranked-zb", "delmar-competitive"];

    (0..size)
        .map(|index| {
            let day = 1 + (size - index) % 28;
            let value = json!({
                "gameId": if index % 10 == 0 { "other" } else { "fortnite" },
                "rankingType": CODES[index % CODES.len()],
                "lastUpdated": format!("2024-02-{:02}T12:00:00Z", day),
                "currentDivision": index % 18,
                "highestDivision": 17,
                "promotionProgress": 0.5,
                "trackguid": "hEKWqj",
            });
            value.as_object().cloned().unwrap()
        })
        .collect()
}

fn bench_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranked_progress_history");

    for size in [10, 100, 1000] {
        let response = create_response(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &response, |b, response| {
            b.iter(|| {
                black_box(RankedProgress::new(Iso8601Parser::shared(), response.clone()).unwrap())
            })
        });
    }

    group.finish();
}

fn bench_latest(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranked_progress_latest");

    for size in [10, 100, 1000] {
        let response = create_response(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &response, |b, response| {
            b.iter(|| {
                black_box(
                    LatestRankedProgress::new(Iso8601Parser::shared(), response.clone()).unwrap(),
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_history, bench_latest);
criterion_main!(benches);
