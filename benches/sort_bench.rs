// In benches/sort_bench.rs

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use sortvision::harness::generate::{generate_f64, generate_i64, InputShape};
use sortvision::{Algorithm, RecursionMode, SortConfig, Sorter};

// --- Benchmark Suite ---

const QUADRATIC_SIZE: usize = 1_000;
const FAST_SIZE: usize = 20_000;
const SEED: u64 = 0x5eed;

fn bench_size(algorithm: Algorithm) -> usize {
    match algorithm {
        Algorithm::Bubble
        | Algorithm::Selection
        | Algorithm::BidirectionalSelection
        | Algorithm::Insertion => QUADRATIC_SIZE,
        _ => FAST_SIZE,
    }
}

fn bench_all_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("Algorithms (random i64)");

    for algorithm in Algorithm::ALL {
        let size = bench_size(algorithm);
        let input = generate_i64(InputShape::Random, size, SEED);
        let sorter = Sorter::with_defaults(algorithm);
        group.throughput(criterion::Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new(algorithm.to_string(), size), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut data| black_box(sorter.sort(&mut data)),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_input_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Quick vs Merge by input shape");

    for shape in InputShape::ALL {
        // Sorted input drives Lomuto quick sort quadratic; keep it small.
        let size = match shape {
            InputShape::Random | InputShape::FewUnique => FAST_SIZE,
            _ => QUADRATIC_SIZE,
        };
        let input = generate_i64(shape, size, SEED);
        for algorithm in [Algorithm::Quick, Algorithm::Merge] {
            let sorter = Sorter::new(
                algorithm,
                SortConfig::default().with_recursion(RecursionMode::Iterative),
            )
            .unwrap();
            let id = BenchmarkId::new(format!("{} {:?}", algorithm, shape), size);
            group.bench_with_input(id, &input, |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |mut data| black_box(sorter.sort(&mut data)),
                    BatchSize::LargeInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_distribution_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("Distribution sorts");
    let floats = generate_f64(InputShape::Random, FAST_SIZE, SEED);
    let ints = generate_i64(InputShape::Random, FAST_SIZE, SEED);

    let bucket = Sorter::with_defaults(Algorithm::Bucket);
    group.bench_function("bucket f64 (n buckets)", |b| {
        b.iter_batched(
            || floats.clone(),
            |mut data| black_box(bucket.sort(&mut data)),
            BatchSize::LargeInput,
        )
    });

    for base in [2u32, 10, 256] {
        let radix =
            Sorter::new(Algorithm::Radix, SortConfig::default().with_radix_base(base)).unwrap();
        group.bench_function(format!("radix i64 base {}", base), |b| {
            b.iter_batched(
                || ints.clone(),
                |mut data| black_box(radix.sort(&mut data)),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_all_algorithms,
    bench_input_shapes,
    bench_distribution_sorts
);
criterion_main!(benches);
