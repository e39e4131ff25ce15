use criterion::{Criterion, criterion_group, criterion_main};
use passline::core::{
    ClusterTuning, EventKind, TimelineEvent, ViewRange, cluster_lane, generate_ticks,
};
use std::hint::black_box;

fn synthetic_events(count: usize) -> Vec<TimelineEvent> {
    (0..count)
        .map(|i| {
            let start = (i as i64 * 7_919) % 86_400_000;
            TimelineEvent {
                id: format!("e-{i}"),
                start_time: start,
                end_time: start + 300_000,
                lane_key: format!("target-{}", i % 8),
                kind: EventKind::Opportunity,
            }
        })
        .collect()
}

fn bench_cluster_sweep_10k(c: &mut Criterion) {
    let events = synthetic_events(10_000);
    let range = ViewRange {
        min: 0,
        max: 86_400_000,
    };

    c.bench_function("cluster_sweep_10k", |b| {
        b.iter(|| {
            let _ = cluster_lane(
                black_box(&events),
                black_box(range),
                black_box("target-3"),
                black_box(ClusterTuning::default()),
            );
        })
    });
}

fn bench_tick_generation(c: &mut Criterion) {
    let range = ViewRange {
        min: 1_700_000_123_456,
        max: 1_700_086_523_456,
    };

    c.bench_function("tick_generation_day_view", |b| {
        b.iter(|| {
            let _ = generate_ticks(black_box(range), black_box(8));
        })
    });
}

criterion_group!(benches, bench_cluster_sweep_10k, bench_tick_generation);
criterion_main!(benches);
