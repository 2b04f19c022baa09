use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use throttlekit::Throttler;

fn benchmark_throttler(c: &mut Criterion) {
    let mut group = c.benchmark_group("throttler");
    group.throughput(Throughput::Elements(1));

    // Zero cooldown: every call takes the accept path.
    group.bench_function("execute_accepted", |b| {
        let throttler = Throttler::new(Duration::ZERO);

        b.iter(|| {
            let accepted = throttler.execute(|| {
                black_box(());
            });
            black_box(accepted)
        });
    });

    // Long cooldown with one committed acceptance: every call takes the
    // suppress path (worst case for a hot caller).
    group.bench_function("execute_suppressed", |b| {
        let throttler = Throttler::new(Duration::from_secs(3_600));
        throttler.execute(|| {});

        b.iter(|| {
            let accepted = throttler.execute(|| {
                black_box(());
            });
            black_box(accepted)
        });
    });

    group.bench_function("reset", |b| {
        let throttler = Throttler::new(Duration::from_secs(3_600));

        b.iter(|| {
            throttler.reset();
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_throttler);
criterion_main!(benches);
