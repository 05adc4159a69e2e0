use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fourier_engine::{Backend, FourierTransform, Transform, TransformConfig};
use num_complex::Complex;

fn signal(n: usize) -> Vec<Complex<f64>> {
    (0..n)
        .map(|i| Complex::new((i as f64 * 0.1).sin(), (i as f64 * 0.3).cos()))
        .collect()
}

fn bench_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip");

    for &n in &[64usize, 1024, 4096] {
        let native = Transform::new(n).unwrap();
        let mut buffer = signal(n);
        group.bench_with_input(BenchmarkId::new("native_radix2", n), &n, |b, _| {
            b.iter(|| {
                native.forward(black_box(&mut buffer));
                native.inverse(black_box(&mut buffer));
            })
        });

        if Backend::Vendor.is_available() {
            let config = TransformConfig::default().with_backend(Backend::Vendor);
            let vendor = Transform::with_config(n, &config).unwrap();
            let mut buffer = signal(n);
            group.bench_with_input(BenchmarkId::new("vendor", n), &n, |b, _| {
                b.iter(|| {
                    vendor.forward(black_box(&mut buffer));
                    vendor.inverse(black_box(&mut buffer));
                })
            });
        }
    }

    for &n in &[60usize, 300] {
        let native = Transform::new(n).unwrap();
        let mut buffer = signal(n);
        group.bench_with_input(BenchmarkId::new("native_direct", n), &n, |b, _| {
            b.iter(|| {
                native.forward(black_box(&mut buffer));
                native.inverse(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    // Table already cached after the first iteration
    c.bench_function("construct_cached_1024", |b| {
        b.iter(|| Transform::new(black_box(1024)).unwrap())
    });
}

criterion_group!(benches, bench_round_trip, bench_construction);
criterion_main!(benches);
