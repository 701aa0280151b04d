//! Benchmarks for complex construction and generation splitting
//!
//! Measures the two hot paths of the complex:
//!
//! 1. **`Complex::new`**: root cell construction, centroid insertion and template capture
//! 2. **`Complex::split_generation`**: repeated hypercube splitting and symmetric bisection
//!
//! The objective is a cheap quadratic so timings are dominated by the
//! vertex cache and adjacency bookkeeping.

#![allow(missing_docs)] // Criterion macros generate undocumented functions

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use shgo_complex::prelude::*;
use std::hint::black_box;

fn quadratic<const D: usize>() -> BoxedScalarFunction<D> {
    Box::new(|x: &[f64; D]| x.iter().map(|v| (v - 0.4) * (v - 0.4)).sum::<f64>())
}

fn fresh_complex<const D: usize>(symmetry: bool) -> Complex<D> {
    let config = ComplexConfigBuilder::<D>::default()
        .symmetry(symmetry)
        .build()
        .unwrap();
    Complex::new(config, quadratic(), Vec::new()).unwrap()
}

/// Macro to generate construction and splitting benchmarks for one dimension
macro_rules! generate_dimensional_benchmarks {
    ($dim:literal, $max_splits:literal) => {
        pastey::paste! {
            /// Benchmark root construction for [<$dim>]D
            fn [<benchmark_construction_ $dim d>](c: &mut Criterion) {
                let mut group = c.benchmark_group(concat!("construction_", stringify!($dim), "d"));
                group.bench_function("hypercube", |b| {
                    b.iter(|| black_box(fresh_complex::<$dim>(false)));
                });
                if $dim >= 2 {
                    group.bench_function("symmetric", |b| {
                        b.iter(|| black_box(fresh_complex::<$dim>(true)));
                    });
                }
                group.finish();
            }

            /// Benchmark repeated generation splits for [<$dim>]D
            fn [<benchmark_split_generation_ $dim d>](c: &mut Criterion) {
                let mut group = c.benchmark_group(concat!("split_generation_", stringify!($dim), "d"));
                for splits in 1..=$max_splits {
                    let cells = 1u64 << ($dim * splits);
                    group.throughput(Throughput::Elements(cells));
                    group.bench_with_input(
                        BenchmarkId::new("hypercube", splits),
                        &splits,
                        |b, &splits| {
                            b.iter_batched(
                                || fresh_complex::<$dim>(false),
                                |mut complex| {
                                    for _ in 0..splits {
                                        complex.split_generation().unwrap();
                                    }
                                    black_box(complex)
                                },
                                BatchSize::LargeInput,
                            );
                        },
                    );
                }
                group.finish();
            }
        }
    };
}

generate_dimensional_benchmarks!(2, 4);
generate_dimensional_benchmarks!(3, 3);
generate_dimensional_benchmarks!(4, 2);

/// Symmetric bisection doubles the generation each split, so go deeper.
fn benchmark_symmetric_bisection(c: &mut Criterion) {
    let mut group = c.benchmark_group("symmetric_bisection");
    for splits in [4usize, 8, 12] {
        group.throughput(Throughput::Elements(1u64 << splits));
        group.bench_with_input(BenchmarkId::new("3d", splits), &splits, |b, &splits| {
            b.iter_batched(
                || fresh_complex::<3>(true),
                |mut complex| {
                    for _ in 0..splits {
                        complex.split_generation().unwrap();
                    }
                    black_box(complex)
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

/// Rank queries over a split generation, ranks invalidated between runs.
fn benchmark_homology_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("homology_rank");
    group.bench_function("2d_gen3", |b| {
        b.iter_batched(
            || {
                let mut complex = fresh_complex::<2>(false);
                for _ in 0..3 {
                    complex.split_generation().unwrap();
                }
                complex
            },
            |mut complex| {
                let generation = complex.generation_index();
                let count = complex.current_generation().len();
                let total: usize = (0..count)
                    .map(|index| complex.homology_group_rank(generation, index).unwrap())
                    .sum();
                black_box(total)
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction_2d,
    benchmark_construction_3d,
    benchmark_construction_4d,
    benchmark_split_generation_2d,
    benchmark_split_generation_3d,
    benchmark_split_generation_4d,
    benchmark_symmetric_bisection,
    benchmark_homology_rank,
);
criterion_main!(benches);
