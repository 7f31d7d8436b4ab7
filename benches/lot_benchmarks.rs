//! Benchmarks for the allocator's hot paths
//!
//! The position scan is quadratic in the worst case, which is fine at the
//! default scale; these benches keep an eye on where it starts to hurt.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lotkeeper::{ParkingLot, Vehicle};

fn half_full_lot(capacity: u32) -> ParkingLot {
    let mut lot = ParkingLot::with_capacity(capacity).unwrap();
    for i in 0..capacity / 2 {
        lot.park(Vehicle::new(format!("BM-{i:04}"))).unwrap();
    }
    lot
}

fn bench_park_until_full(c: &mut Criterion) {
    c.bench_function("park_until_full_100", |b| {
        b.iter(|| {
            let mut lot = ParkingLot::with_capacity(100).unwrap();
            for i in 0..100 {
                black_box(lot.park(Vehicle::new(format!("BM-{i:04}"))).unwrap());
            }
        });
    });
}

fn bench_park_fetch_cycle(c: &mut Criterion) {
    c.bench_function("park_fetch_cycle_half_full_1000", |b| {
        let mut lot = half_full_lot(1_000);
        b.iter(|| {
            let ticket = lot.park(Vehicle::new("BM-9999")).unwrap();
            black_box(lot.fetch(&ticket).unwrap());
        });
    });
}

fn bench_position_scan(c: &mut Criterion) {
    c.bench_function("position_to_park_half_full_1000", |b| {
        let lot = half_full_lot(1_000);
        b.iter(|| black_box(lot.position_to_park().unwrap()));
    });
}

criterion_group!(
    benches,
    bench_park_until_full,
    bench_park_fetch_cycle,
    bench_position_scan
);
criterion_main!(benches);
