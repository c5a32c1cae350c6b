use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use nawm_schedule::calculate;
use nawm_types::{AnchorTimes, BedtimeOverride};
use std::hint::black_box;

fn bench_calculate(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let anchors = AnchorTimes::new(
        today.and_hms_opt(20, 30, 0).unwrap(),
        today.succ_opt().unwrap().and_hms_opt(5, 0, 0).unwrap(),
    )
    .unwrap();
    let bedtime = BedtimeOverride::new(1, 15).unwrap();

    c.bench_function("calculate_default", |b| {
        b.iter(|| calculate(black_box(&anchors), None, black_box(today)))
    });
    c.bench_function("calculate_override", |b| {
        b.iter(|| calculate(black_box(&anchors), Some(black_box(bedtime)), black_box(today)))
    });
}

criterion_group!(benches, bench_calculate);
criterion_main!(benches);
