use chainsort::{deterministic_quicksort, randomized_quicksort_with, PivotRng};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};

fn generate_array(shape: &str, size: usize) -> Vec<i64> {
    let mut rng = PivotRng::new(42);
    match shape {
        "sorted" => (0..size as i64).collect(),
        "reverse" => (0..size as i64).rev().collect(),
        "repeated" => (0..size).map(|_| rng.gen_range(0..8)).collect(),
        _ => (0..size).map(|_| rng.gen_range(0..1_000_000)).collect(),
    }
}

fn bench_randomized_quicksort(c: &mut Criterion) {
    let mut group = c.benchmark_group("randomized_quicksort");

    for shape in ["random", "sorted", "reverse", "repeated"] {
        for size in [100usize, 1_000, 10_000] {
            let input = generate_array(shape, size);
            group.bench_with_input(BenchmarkId::new(shape, size), &input, |b, input| {
                let mut rng = PivotRng::from_entropy();
                b.iter_batched(
                    || input.clone(),
                    |mut data| {
                        let high = data.len() as isize - 1;
                        randomized_quicksort_with(&mut data, 0, high, &mut rng).unwrap();
                        black_box(data)
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_deterministic_quicksort(c: &mut Criterion) {
    let mut group = c.benchmark_group("deterministic_quicksort");

    // ordered inputs are quadratic for the first-element pivot; keep them small
    for shape in ["random", "sorted", "reverse", "repeated"] {
        for size in [100usize, 1_000] {
            let input = generate_array(shape, size);
            group.bench_with_input(BenchmarkId::new(shape, size), &input, |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |mut data| {
                        let high = data.len() as isize - 1;
                        deterministic_quicksort(&mut data, 0, high).unwrap();
                        black_box(data)
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_randomized_quicksort, bench_deterministic_quicksort);
criterion_main!(benches);
