use animdata_core::{decode_curve, encode_curve, parse_timeline, CurveSample, EventKinds};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn dense_samples(count: usize) -> Vec<CurveSample> {
    (0..count)
        .map(|i| {
            let t = i as f32 / 60.0;
            CurveSample::new(t, t.sin(), t.cos(), t.cos())
        })
        .collect()
}

fn bench_codec(c: &mut Criterion) {
    let samples = dense_samples(3600);
    c.bench_function("encode_curve_3600", |b| {
        b.iter(|| encode_curve(black_box(&samples)).unwrap())
    });

    let curve = encode_curve(&samples).unwrap();
    c.bench_function("decode_curve_3600", |b| {
        b.iter(|| decode_curve(black_box(&curve)))
    });
}

fn bench_timeline(c: &mut Criterion) {
    let kinds = EventKinds::from_names(["Jump", "Land", "Attack", "Hit"]);
    let text: String = (0..1000)
        .map(|i| format!("{},{}\n", ["Hit", "Attack", "Jump"][i % 3], 1000 - i))
        .collect();
    c.bench_function("parse_timeline_1000", |b| {
        b.iter(|| parse_timeline(black_box(&text), &kinds).unwrap())
    });
}

criterion_group!(benches, bench_codec, bench_timeline);
criterion_main!(benches);
