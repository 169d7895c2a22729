// Benchmark for the hot conversion paths used when decoding weather payloads.
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skycast::{epoch_to_iso8601, iso8601_to_epoch, kelvin_to_celsius, kelvin_to_fahrenheit};

fn conversion_benchmarks(c: &mut Criterion) {
    c.bench_function("epoch_to_iso8601", |b| {
        b.iter(|| epoch_to_iso8601(black_box(1_609_459_200)).expect("format"));
    });

    c.bench_function("iso8601_to_epoch", |b| {
        b.iter(|| iso8601_to_epoch(black_box("2021-01-01 00:00:00+00")).expect("parse"));
    });

    c.bench_function("kelvin_to_celsius", |b| {
        b.iter(|| kelvin_to_celsius(black_box(293.4)).expect("convert"));
    });

    c.bench_function("kelvin_to_fahrenheit", |b| {
        b.iter(|| kelvin_to_fahrenheit(black_box(293.4)).expect("convert"));
    });
}

criterion_group!(benches, conversion_benchmarks);
criterion_main!(benches);
