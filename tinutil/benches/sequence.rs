use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use tinutil::collection::contains;
use tinutil::sequence::{erase, insert_ordered};

const LEN: i64 = 1024;

fn sorted() -> Vec<i64> {
    (0..LEN).map(|x| x * 2).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("insert_ordered middle", |bench| {
        bench.iter_batched(
            sorted,
            |mut v| insert_ordered(&mut v, black_box(LEN + 1), |a, b| a < b),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("erase middle", |bench| {
        bench.iter_batched(
            sorted,
            |mut v| erase(&mut v, &black_box(LEN)),
            BatchSize::SmallInput,
        )
    });

    let v = sorted();
    c.bench_function("contains missing", |bench| {
        bench.iter(|| contains(&v, &black_box(-1)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
