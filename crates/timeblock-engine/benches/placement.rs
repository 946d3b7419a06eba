use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use timeblock_engine::{collapse, find_slot, generate_slots, Booking, WallClock};

/// A busy family day: a booking every 75 minutes from 05:30.
fn busy_day() -> Vec<Booking> {
    (0..14)
        .map(|i| {
            let start = WallClock::from_minutes(330 + 75 * i);
            Booking::new(format!("b{i}"), start, start.add_minutes(45))
        })
        .collect()
}

fn bench_engine(c: &mut Criterion) {
    let bookings = busy_day();

    c.bench_function("generate_slots/full_day", |b| {
        b.iter(|| generate_slots(black_box(5), black_box(23), black_box(&bookings)))
    });

    let grid = generate_slots(5, 23, &bookings).unwrap();

    c.bench_function("collapse/full_day", |b| {
        b.iter(|| collapse(black_box(&grid), black_box(4)))
    });

    c.bench_function("find_slot/30min", |b| {
        b.iter(|| find_slot(black_box(&grid), black_box(30), None))
    });
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
