//! Integration tests for forward/inverse round trips

use blockdct::quality::{max_abs_error, psnr};
use blockdct::*;

/// Deterministic noise-like pattern covering the full sample range
fn create_test_raster(width: u32, height: u32) -> Raster {
    let mut raster = Raster::new(Dimensions::new(width, height)).unwrap();
    let mut state: u32 = 0x1234_5678;
    for row in 0..height as usize {
        for col in 0..width as usize {
            let mut rgb = [0u8; 3];
            for value in rgb.iter_mut() {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                *value = (state >> 24) as u8;
            }
            raster.set_pixel(row, col, rgb).unwrap();
        }
    }
    raster
}

/// Smooth gradient pattern
fn create_gradient_raster(width: u32, height: u32) -> Raster {
    let mut raster = Raster::new(Dimensions::new(width, height)).unwrap();
    for row in 0..height as usize {
        for col in 0..width as usize {
            let rgb = [
                (col * 255 / width as usize) as u8,
                (row * 255 / height as usize) as u8,
                128,
            ];
            raster.set_pixel(row, col, rgb).unwrap();
        }
    }
    raster
}

#[test]
fn test_roundtrip_error_at_most_one() {
    for (width, height) in [(8, 8), (64, 48), (40, 120)] {
        let raster = create_test_raster(width, height);
        let coeffs = forward_transform(&raster).unwrap();
        let restored = inverse_transform(&coeffs).unwrap();

        assert_eq!(restored.dimensions(), raster.dimensions());
        let err = max_abs_error(&raster, &restored).unwrap();
        assert!(err <= 1, "{}x{}: max error {}", width, height, err);
    }
}

#[test]
fn test_roundtrip_with_rounding_is_lossless() {
    let codec = BlockCodec::new(TransformOptions::new().conversion(SampleConversion::Round));
    for raster in [create_test_raster(32, 32), create_gradient_raster(64, 16)] {
        let coeffs = codec.forward(&raster).unwrap();
        let restored = codec.inverse(&coeffs).unwrap();
        assert!(psnr(&raster, &restored).unwrap().is_infinite());
    }
}

#[test]
fn test_all_zero_block() {
    let raster = Raster::new(Dimensions::new(8, 8)).unwrap();
    let coeffs = forward_transform(&raster).unwrap();

    for channel in Channel::ALL {
        assert!(coeffs.plane(channel).iter().all(|&c| c.abs() < 1e-12));
    }

    let restored = inverse_transform(&coeffs).unwrap();
    assert_eq!(restored, raster);
}

#[test]
fn test_all_white_block() {
    let raster = Raster::filled(Dimensions::new(8, 8), [255, 255, 255]).unwrap();
    let coeffs = forward_transform(&raster).unwrap();

    for channel in Channel::ALL {
        let block = coeffs.block(channel, 0, 0).unwrap();
        assert!((block[0] - 2040.0).abs() < 1e-9, "DC = {}", block[0]);
        for &c in &block[1..] {
            assert!(c.abs() < 1e-9);
        }
    }

    let codec = BlockCodec::new(TransformOptions::new().conversion(SampleConversion::Round));
    let restored = codec.inverse(&coeffs).unwrap();
    assert!(restored.plane(Channel::Green).iter().all(|&v| v == 255));

    let truncated = inverse_transform(&coeffs).unwrap();
    for channel in Channel::ALL {
        assert!(truncated.plane(channel).iter().all(|&v| v == 255));
    }
    assert_eq!(truncated, raster);
}

#[test]
fn test_constant_blocks_roundtrip_exactly_with_truncation() {
    for kernel in [TransformKernel::Separable, TransformKernel::Reference] {
        let codec = BlockCodec::new(TransformOptions::new().kernel(kernel));
        for value in [1u8, 3, 7, 51, 100, 129, 200, 254, 255] {
            let raster = Raster::filled(Dimensions::new(16, 8), [value, 255 - value, value / 2])
                .unwrap();
            let coeffs = codec.forward(&raster).unwrap();
            let restored = codec.inverse(&coeffs).unwrap();
            assert_eq!(restored, raster, "{:?} kernel, value {}", kernel, value);
        }
    }
}

#[test]
fn test_constant_blocks_are_dc_only() {
    // Each block gets its own constant, different per channel
    let mut raster = Raster::new(Dimensions::new(24, 16)).unwrap();
    let value_at = |br: usize, bc: usize, c: usize| ((br * 3 + bc) * 29 + c * 61) as u8;
    for row in 0..16 {
        for col in 0..24 {
            let (br, bc) = (row / 8, col / 8);
            let rgb = [value_at(br, bc, 0), value_at(br, bc, 1), value_at(br, bc, 2)];
            raster.set_pixel(row, col, rgb).unwrap();
        }
    }

    let coeffs = forward_transform(&raster).unwrap();
    for br in 0..2 {
        for bc in 0..3 {
            for channel in Channel::ALL {
                let block = coeffs.block(channel, br, bc).unwrap();
                let v = value_at(br, bc, channel.index()) as f64;
                assert!((block[0] - 8.0 * v).abs() < 1e-9);
                assert!(block[1..].iter().all(|c| c.abs() < 1e-9));
            }
        }
    }
}

#[test]
fn test_coefficients_follow_spatial_layout() {
    // A bright top-right block only affects coefficients in that block
    let mut raster = Raster::new(Dimensions::new(16, 16)).unwrap();
    for row in 0..8 {
        for col in 8..16 {
            raster.set_sample(row, col, Channel::Red, 100).unwrap();
        }
    }

    let coeffs = forward_transform(&raster).unwrap();
    assert!((coeffs.get(0, 8, Channel::Red).unwrap() - 800.0).abs() < 1e-9);
    assert!(coeffs.get(0, 0, Channel::Red).unwrap().abs() < 1e-12);
    assert!(coeffs.get(8, 8, Channel::Red).unwrap().abs() < 1e-12);
    assert!(coeffs.get(0, 8, Channel::Green).unwrap().abs() < 1e-12);
}

#[test]
fn test_inverse_into_existing_raster() {
    let raster = create_gradient_raster(32, 24);
    let codec = BlockCodec::default();
    let coeffs = codec.forward(&raster).unwrap();

    let mut target = Raster::filled(raster.dimensions(), [9, 9, 9]).unwrap();
    codec.inverse_into(&coeffs, &mut target).unwrap();
    assert_eq!(target, codec.inverse(&coeffs).unwrap());
}

#[test]
fn test_transform_does_not_modify_source() {
    let raster = create_test_raster(16, 16);
    let snapshot = raster.clone();
    let _ = forward_transform(&raster).unwrap();
    assert_eq!(raster, snapshot);
}
