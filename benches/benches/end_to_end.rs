//! Whole-raster forward/inverse benchmarks
//!
//! Run with: cargo bench --bench end_to_end

use blockdct_codec::{BlockCodec, TransformKernel, TransformOptions};
use blockdct_core::{Dimensions, Raster};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn create_test_raster(size: usize) -> Raster {
    let mut raster = Raster::new(Dimensions::new(size as u32, size as u32)).unwrap();
    for y in 0..size {
        for x in 0..size {
            let rgb = [
                ((x * 255) / size) as u8,
                ((y * 255) / size) as u8,
                ((x ^ y) % 256) as u8,
            ];
            raster.set_pixel(y, x, rgb).unwrap();
        }
    }
    raster
}

fn bench_forward_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Forward by Raster Size");

    for &size in &[64, 128, 256, 512] {
        let raster = create_test_raster(size);
        group.throughput(Throughput::Elements((size * size) as u64));

        for (label, parallel) in [("parallel", true), ("sequential", false)] {
            let codec = BlockCodec::new(TransformOptions::new().parallel(parallel));
            group.bench_with_input(
                BenchmarkId::new(label, format!("{}x{}", size, size)),
                &raster,
                |b, raster| b.iter(|| codec.forward(black_box(raster)).unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_inverse_by_cutoff(c: &mut Criterion) {
    let mut group = c.benchmark_group("Lossy Inverse by Cutoff");
    let codec = BlockCodec::default();
    let coeffs = codec.forward(&create_test_raster(256)).unwrap();

    for cutoff in [1, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(cutoff), &cutoff, |b, &cutoff| {
            b.iter(|| codec.lossy_inverse(black_box(&coeffs), cutoff).unwrap())
        });
    }

    group.finish();
}

fn bench_kernels_on_raster(c: &mut Criterion) {
    let mut group = c.benchmark_group("Kernel on 128x128");
    let raster = create_test_raster(128);

    for kernel in [TransformKernel::Reference, TransformKernel::Separable] {
        let codec = BlockCodec::new(TransformOptions::new().kernel(kernel));
        group.bench_function(format!("{:?}", kernel), |b| {
            b.iter(|| codec.forward(black_box(&raster)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_forward_by_size,
    bench_inverse_by_cutoff,
    bench_kernels_on_raster
);
criterion_main!(benches);
