use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use sorted_avl::SortedList;
use std::collections::BTreeSet;
use std::hint::black_box;

const N: usize = 10_000;

// ─── Helper functions to generate value sequences ───────────────────────────

fn ordered_values(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_values(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

fn random_values(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut values = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        values.push((x >> 33) as i64);
    }
    values
}

/// Inserts into a `Vec` kept sorted with binary search, the naive sorted-list baseline.
fn sorted_vec_insert(vec: &mut Vec<i64>, value: i64) {
    let at = vec.partition_point(|x| *x <= value);
    vec.insert(at, value);
}

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion, name: &str, values: &[i64]) {
    let mut group = c.benchmark_group(name);

    group.bench_function(BenchmarkId::new("SortedList", N), |b| {
        b.iter(|| {
            let mut list = SortedList::new();
            for &v in values {
                list.insert(v);
            }
            list
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &v in values {
                set.insert(v);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("SortedVec", N), |b| {
        b.iter(|| {
            let mut vec = Vec::new();
            for &v in values {
                sorted_vec_insert(&mut vec, v);
            }
            vec
        });
    });

    group.finish();
}

fn bench_insert_ordered(c: &mut Criterion) {
    bench_insert(c, "insert_ordered", &ordered_values(N));
}

fn bench_insert_reverse(c: &mut Criterion) {
    bench_insert(c, "insert_reverse", &reverse_ordered_values(N));
}

fn bench_insert_random(c: &mut Criterion) {
    bench_insert(c, "insert_random", &random_values(N));
}

// ─── Contains and remove ────────────────────────────────────────────────────

fn bench_contains_random(c: &mut Criterion) {
    let values = random_values(N);
    let list: SortedList<i64> = values.iter().copied().collect();
    let set: BTreeSet<i64> = values.iter().copied().collect();

    let mut group = c.benchmark_group("contains_random");

    group.bench_function(BenchmarkId::new("SortedList", N), |b| {
        b.iter(|| values.iter().filter(|v| list.contains(v)).count());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| values.iter().filter(|v| set.contains(v)).count());
    });

    group.finish();
}

fn bench_remove_random(c: &mut Criterion) {
    let values = random_values(N);

    let mut group = c.benchmark_group("remove_random");

    group.bench_function(BenchmarkId::new("SortedList", N), |b| {
        b.iter_batched(
            || values.iter().copied().collect::<SortedList<i64>>(),
            |mut list| {
                for v in &values {
                    list.remove(v);
                }
                list
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter_batched(
            || values.iter().copied().collect::<BTreeSet<i64>>(),
            |mut set| {
                for v in &values {
                    set.remove(v);
                }
                set
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ─── Order statistics ───────────────────────────────────────────────────────

fn bench_get_by_rank(c: &mut Criterion) {
    let values = random_values(N);
    let list: SortedList<i64> = values.iter().copied().collect();
    let set: BTreeSet<i64> = values.iter().copied().collect();

    let mut group = c.benchmark_group("get_by_rank");

    group.bench_function(BenchmarkId::new("SortedList", N), |b| {
        b.iter(|| (0..list.len()).step_by(97).filter_map(|rank| list.get(rank).ok()).sum::<i64>());
    });

    // BTreeSet has no rank index, so it has to walk to every position.
    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| (0..set.len()).step_by(97).filter_map(|rank| set.iter().nth(rank)).sum::<i64>());
    });

    group.finish();
}

fn bench_rank_of(c: &mut Criterion) {
    let values = random_values(N);
    let list: SortedList<i64> = values.iter().copied().collect();

    let mut group = c.benchmark_group("rank_of");

    group.bench_function(BenchmarkId::new("SortedList", N), |b| {
        b.iter(|| values.iter().filter_map(|v| list.rank_of(black_box(v)).ok()).sum::<usize>());
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(insert_benches, bench_insert_ordered, bench_insert_reverse, bench_insert_random,);

criterion_group!(lookup_benches, bench_contains_random, bench_remove_random,);

criterion_group!(order_statistic_benches, bench_get_by_rank, bench_rank_of,);

criterion_main!(insert_benches, lookup_benches, order_statistic_benches,);
