// File: crates/strata-core/benches/layout_bench.rs
// Summary: Relayout and candle mapping throughput.

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strata_core::{Candle, Container, EdgeSpace};

fn build(windows: usize, candles: usize) -> Container {
    let t0 = Utc.with_ymd_and_hms(2015, 2, 1, 9, 0, 0).unwrap();
    let t1 = t0 + Duration::minutes(candles.max(1) as i64);
    let mut c = Container::new(1300.0, 650.0, 5.0);
    for i in 0..windows {
        let name = format!("w{i}");
        c.add_window(&name, EdgeSpace::ALL, 0.0, 1000.0, 100.0 / windows as f64, t0, t1).unwrap();
    }
    for k in 0..candles {
        let t = t0 + Duration::minutes(k as i64);
        let o = 400.0 + (k as f64 * 0.1).sin() * 100.0;
        let candle = Candle::try_new(t, o, o + 50.0, o - 50.0, o + 10.0).unwrap();
        c.stock_candle("w0", &candle).unwrap();
    }
    c
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &n in &[2usize, 8usize] {
        group.bench_function(format!("add_windows_{n}"), |b| {
            b.iter(|| black_box(build(n, 0)));
        });
    }
    group.bench_function("candles_2000_init_complete", |b| {
        b.iter(|| {
            let mut ch = build(3, 2000);
            ch.init().unwrap();
            ch.complete();
            black_box(ch.root().node_count())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
