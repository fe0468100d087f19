// Merge benchmarks for rankmerge
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rankmerge::{HitRecord, RankingInfo, ResultMerger};
use serde_json::json;

fn merger() -> ResultMerger {
    ResultMerger::from_settings(&json!({
        "ranking": ["typo", "geo", "words", "filters", "proximity", "attribute", "exact", "custom"],
        "customRanking": ["desc(stats.popularity)", "asc(price)"]
    }))
    .unwrap()
}

fn generate_random_hit(rng: &mut impl Rng, id: usize) -> HitRecord {
    let words = rng.random_range(1..4);
    let info = RankingInfo {
        number_of_typos: rng.random_range(0..3),
        geo_distance: 0,
        matched_words: words,
        filters_score: 0,
        exact_words: rng.random_range(0..=words),
        proximity_distance: rng.random_range(0..8),
        first_matched_word_position: rng.random_range(0..4),
    };
    HitRecord::new(json!({
        "objectID": format!("{}", id % 5000),
        "price": rng.random_range(1..500),
        "stats": {"popularity": rng.random_range(0..1000)}
    }))
    .with_ranking_info(info).unwrap()
}

fn generate_sorted_lists(merger: &ResultMerger, lists: usize, per_list: usize) -> Vec<Vec<HitRecord>> {
    let mut rng = rand::rng();
    (0..lists)
        .map(|l| {
            let mut hits: Vec<HitRecord> = (0..per_list)
                .map(|i| generate_random_hit(&mut rng, l * per_list + i))
                .collect();
            hits.sort_by(|a, b| merger.compare_hits(a, b).unwrap());
            hits
        })
        .collect()
}

fn benchmark_compare(c: &mut Criterion) {
    let merger = merger();
    let mut rng = rand::rng();
    let a = generate_random_hit(&mut rng, 1);
    let b = generate_random_hit(&mut rng, 2);

    c.bench_function("compare_hits", |bench| {
        bench.iter(|| merger.compare_hits(black_box(&a), black_box(&b)).unwrap());
    });
}

fn benchmark_merge_two(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_hits");
    let merger = merger();

    for size in [100, 1000, 10000].iter() {
        let lists = generate_sorted_lists(&merger, 2, *size);
        group.bench_with_input(BenchmarkId::new("borrowed", size), &lists, |bench, lists| {
            bench.iter(|| merger.merge_hits(&lists[0], &lists[1]).unwrap());
        });
    }

    group.finish();
}

fn benchmark_merge_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_all");
    let merger = merger();

    for lists in [2, 4, 8, 16].iter() {
        let input = generate_sorted_lists(&merger, *lists, 1000);
        group.bench_with_input(BenchmarkId::new("lists", lists), &input, |bench, input| {
            bench.iter(|| merger.merge_all(input).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_compare, benchmark_merge_two, benchmark_merge_all);
criterion_main!(benches);
