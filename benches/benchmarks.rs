use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use curbside::{GeocodedPlace, LocationStore, Signal, TripStore};

fn signal_read_benchmark(c: &mut Criterion) {
    let signal: Signal<i32> = Signal::new(42);

    c.bench_function("signal_read", |b| {
        b.iter(|| {
            black_box(signal.get());
        });
    });
}

fn signal_write_benchmark(c: &mut Criterion) {
    let signal: Signal<i32> = Signal::new(0);

    c.bench_function("signal_write", |b| {
        let mut i = 0;
        b.iter(|| {
            signal.set(black_box(i));
            i += 1;
        });
    });
}

fn signal_notify_benchmark(c: &mut Criterion) {
    let signal: Signal<i32> = Signal::new(0);
    let _guard = signal.watch(|value| {
        black_box(*value);
    });

    c.bench_function("signal_notify_one_watcher", |b| {
        let mut i = 0;
        b.iter(|| {
            signal.set(black_box(i));
            i += 1;
        });
    });
}

fn select_location_benchmark(c: &mut Criterion) {
    let store = LocationStore::new();
    let place = GeocodedPlace {
        display_name: Some("Alexanderplatz, Berlin".to_string()),
        lat: Some(52.5219),
        lon: Some(13.4132),
    };

    c.bench_function("location_store_select", |b| {
        b.iter(|| {
            store.set_selected_location(black_box(&place));
        });
    });
}

fn trip_reset_benchmark(c: &mut Criterion) {
    let store = TripStore::new();

    c.bench_function("trip_store_reset", |b| {
        b.iter(|| {
            store.is_started.set(true);
            store.reset();
        });
    });
}

criterion_group!(
    benches,
    signal_read_benchmark,
    signal_write_benchmark,
    signal_notify_benchmark,
    select_location_benchmark,
    trip_reset_benchmark
);
criterion_main!(benches);
