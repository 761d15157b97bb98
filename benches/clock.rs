//! Benchmark for commit overhead of the stage clocks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stagetime::{stages, BucketedStageClock, StageClock};

stages! {
    enum BenchStage {
        First => "first",
        Second => "second",
    }
}

fn bench_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("commit");

    group.bench_function("switch_stage", |b| {
        let clock = StageClock::new();
        clock.start(BenchStage::First);
        b.iter(|| {
            clock.switch_stage(black_box(BenchStage::Second));
            clock.switch_stage(black_box(BenchStage::First));
        });
    });

    group.bench_function("count_4x4x2", |b| {
        let clock = BucketedStageClock::with_dims(4, 4, 2);
        clock.start(BenchStage::First);
        b.iter(|| {
            clock.count(black_box(BenchStage::Second), 1, 2, 0);
            clock.count(black_box(BenchStage::First), 3, 3, 1);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_commit);
criterion_main!(benches);
