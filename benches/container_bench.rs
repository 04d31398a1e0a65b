//! Benchmark for the Maybe, Outcome and Choice containers.
//!
//! Compares container pipelines against the equivalent `Option` and `Result`
//! code, and measures the memoization cache when the `memo` feature is on.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fun::choice::Choice4;
use fun::maybe::Maybe;
use fun::outcome::Outcome;
use std::hint::black_box;

fn checked_halve(value: u64) -> Maybe<u64> {
    if value % 2 == 0 { Maybe::just(value / 2) } else { Maybe::Nothing }
}

fn checked_decrement(value: u64) -> Outcome<u64, String> {
    value
        .checked_sub(1)
        .map_or_else(|| Outcome::fail("underflow".to_string()), Outcome::succeed)
}

// =============================================================================
// Maybe vs Option
// =============================================================================

fn benchmark_maybe_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("maybe_chain");

    for depth in [4, 16, 64] {
        group.bench_with_input(BenchmarkId::new("Maybe", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut current = Maybe::just(black_box(u64::MAX - 1));
                for _ in 0..depth {
                    current = current.map(|value| value.wrapping_add(2)).bind(checked_halve);
                }
                black_box(current)
            });
        });

        group.bench_with_input(BenchmarkId::new("Option", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut current = Some(black_box(u64::MAX - 1));
                for _ in 0..depth {
                    current = current
                        .map(|value| value.wrapping_add(2))
                        .and_then(|value| checked_halve(value).into_option());
                }
                black_box(current)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Outcome vs Result
// =============================================================================

fn benchmark_outcome_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_chain");

    for depth in [4, 16, 64] {
        group.bench_with_input(BenchmarkId::new("Outcome", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut current: Outcome<u64, String> = Outcome::succeed(black_box(1_000));
                for _ in 0..depth {
                    current = current.bind(checked_decrement).tee_bind(|value| checked_decrement(*value));
                }
                black_box(current)
            });
        });

        group.bench_with_input(BenchmarkId::new("Result", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut current: Result<u64, String> = Ok(black_box(1_000));
                for _ in 0..depth {
                    current = current.and_then(|value| checked_decrement(value).into_result());
                }
                black_box(current)
            });
        });
    }

    group.finish();
}

fn benchmark_outcome_failure_path(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_failure_path");

    group.bench_function("short_circuit", |bencher| {
        bencher.iter(|| {
            let mut current: Outcome<u64, String> = Outcome::succeed(black_box(0));
            for _ in 0..64 {
                current = current.bind(checked_decrement);
            }
            black_box(current)
        });
    });

    group.finish();
}

// =============================================================================
// Choice dispatch
// =============================================================================

fn benchmark_choice_dispatch(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("choice_dispatch");

    let values: Vec<Choice4<u8, u16, u32, u64>> = (0..1024_u32)
        .map(|index| match index % 4 {
            0 => Choice4::case_1(1),
            1 => Choice4::case_2(2),
            2 => Choice4::case_3(index),
            _ => Choice4::case_4(u64::from(index)),
        })
        .collect();

    group.bench_function("match_with", |bencher| {
        bencher.iter(|| {
            let total: u64 = values
                .iter()
                .map(|value| {
                    value.match_with(u64::from, u64::from, u64::from, |value| value)
                })
                .sum();
            black_box(total)
        });
    });

    group.bench_function("matcher", |bencher| {
        bencher.iter(|| {
            let total: u64 = values
                .iter()
                .map(|value| {
                    value
                        .matcher()
                        .case_3(u64::from)
                        .case_4(|value| value)
                        .or_else(|| 0)
                })
                .sum();
            black_box(total)
        });
    });

    group.finish();
}

// =============================================================================
// Memoization
// =============================================================================

#[cfg(feature = "memo")]
fn benchmark_memoized_get(criterion: &mut Criterion) {
    use fun::memo::memoize;

    let mut group = criterion.benchmark_group("memoized_get");

    for capacity in [16, 256] {
        let cache = memoize(|key: u64| key.wrapping_mul(0x9E37_79B9_7F4A_7C15), capacity);
        for key in 0..capacity as u64 {
            cache.get(key);
        }

        group.bench_with_input(BenchmarkId::new("hit", capacity), &capacity, |bencher, _| {
            bencher.iter(|| black_box(cache.get(black_box(3))));
        });

        group.bench_with_input(
            BenchmarkId::new("miss_with_eviction", capacity),
            &capacity,
            |bencher, &capacity| {
                let mut key = capacity as u64;
                bencher.iter(|| {
                    key += 1;
                    black_box(cache.get(key))
                });
            },
        );
    }

    group.finish();
}

#[cfg(not(feature = "memo"))]
fn benchmark_memoized_get(_criterion: &mut Criterion) {}

criterion_group!(
    benches,
    benchmark_maybe_chain,
    benchmark_outcome_chain,
    benchmark_outcome_failure_path,
    benchmark_choice_dispatch,
    benchmark_memoized_get
);

criterion_main!(benches);
