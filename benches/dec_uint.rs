use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use decimal_bigint::{DecUint, SqrtStream};

/// Digit count of the operands used in the arithmetic benchmarks.
const NDIGITS: usize = 100;

fn operand(seed: &str) -> DecUint {
    seed.chars()
        .cycle()
        .take(NDIGITS)
        .collect::<String>()
        .parse()
        .expect("seed is a digit string")
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("schoolbook ops");

    group.bench_function("add", |b| {
        b.iter_batched(
            || (operand("271828182845904523"), operand("314159265358979323")),
            |(x, y)| black_box(&x + &y),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("mul", |b| {
        b.iter_batched(
            || (operand("271828182845904523"), operand("314159265358979323")),
            |(x, y)| black_box(&x * &y),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt stream");

    group.bench_function("sqrt_2_100_digits", |b| {
        b.iter_batched(
            || SqrtStream::new(DecUint::from(2u32)),
            |mut sqrt| {
                for _ in 0..100 {
                    black_box(sqrt.next_digit());
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_arithmetic, bench_sqrt);
criterion_main!(benches);
