//! Benchmark comparing reference vs separable DCT kernels
//!
//! Run with: cargo bench --bench dct_comparison

use blockdct_transform::{
    dct8x8_forward, dct8x8_forward_separable, dct8x8_inverse, dct8x8_inverse_separable,
    FrequencyMask,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_dct_8x8_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT 8x8 Comparison");
    let input: [f64; 64] = core::array::from_fn(|i| ((i * 7) % 256) as f64);

    group.bench_function("reference_forward", |b| {
        let mut output = [0.0f64; 64];
        b.iter(|| {
            dct8x8_forward(black_box(&input), black_box(&mut output));
        });
    });

    group.bench_function("separable_forward", |b| {
        let mut output = [0.0f64; 64];
        b.iter(|| {
            dct8x8_forward_separable(black_box(&input), black_box(&mut output));
        });
    });

    group.bench_function("reference_inverse", |b| {
        let mut output = [0.0f64; 64];
        b.iter(|| {
            dct8x8_inverse(black_box(&input), black_box(&mut output));
        });
    });

    group.bench_function("separable_inverse", |b| {
        let mut output = [0.0f64; 64];
        b.iter(|| {
            dct8x8_inverse_separable(black_box(&input), black_box(&mut output));
        });
    });

    group.finish();
}

fn bench_frequency_mask(c: &mut Criterion) {
    let mut group = c.benchmark_group("Frequency Mask");
    let input: [f64; 64] = core::array::from_fn(|i| i as f64);

    for cutoff in [1, 4, 7] {
        let mask = FrequencyMask::new(cutoff).unwrap();
        group.bench_function(format!("cutoff_{}", cutoff), |b| {
            b.iter(|| {
                let mut block = input;
                mask.apply_block(black_box(&mut block));
                block
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dct_8x8_comparison, bench_frequency_mask);
criterion_main!(benches);
