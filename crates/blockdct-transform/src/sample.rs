//! Conversion of reconstructed values to stored samples

use crate::blocks::BlockOrigin;
use blockdct_core::consts::{BLOCK_AREA, BLOCK_SIZE, MAX_SAMPLE};

/// How a real reconstruction becomes an integer sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleConversion {
    /// Truncate toward zero (up to one unit of error per sample)
    #[default]
    Truncate,
    /// Round to nearest
    Round,
}

/// Reconstructions this close below an integer are treated as that integer
/// before truncating, so float noise from the cosine sums cannot cost a unit.
pub const TRUNCATE_TOLERANCE: f64 = 1e-9;

/// Clamp to `[0, 255]` and convert
#[inline]
pub fn to_sample(value: f64, conversion: SampleConversion) -> u8 {
    let value = match conversion {
        SampleConversion::Truncate => (value + TRUNCATE_TOLERANCE).trunc(),
        SampleConversion::Round => value.round(),
    };
    // NaN saturates to 0 through the cast
    value.clamp(0.0, MAX_SAMPLE as f64) as u8
}

/// Convert a reconstructed block and store it into a row-major sample plane
pub fn store_block(
    block: &[f64; BLOCK_AREA],
    plane: &mut [u8],
    width: usize,
    origin: BlockOrigin,
    conversion: SampleConversion,
) {
    for (k, src) in block.chunks_exact(BLOCK_SIZE).enumerate() {
        let start = (origin.row + k) * width + origin.col;
        for (dst, &value) in plane[start..start + BLOCK_SIZE].iter_mut().zip(src) {
            *dst = to_sample(value, conversion);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_vs_round() {
        assert_eq!(to_sample(99.9, SampleConversion::Truncate), 99);
        assert_eq!(to_sample(99.9, SampleConversion::Round), 100);
        assert_eq!(to_sample(12.4, SampleConversion::Round), 12);
    }

    #[test]
    fn test_truncate_snaps_float_noise() {
        let below = 255.0 - 4.0 * f64::EPSILON * 255.0;
        assert!(below < 255.0);
        assert_eq!(to_sample(below, SampleConversion::Truncate), 255);
        assert_eq!(to_sample(100.0 - 1e-12, SampleConversion::Truncate), 100);
        assert_eq!(to_sample(99.999, SampleConversion::Truncate), 99);
        assert_eq!(to_sample(-1e-12, SampleConversion::Truncate), 0);
    }

    #[test]
    fn test_clamps_both_ends() {
        for conversion in [SampleConversion::Truncate, SampleConversion::Round] {
            assert_eq!(to_sample(4000.0, conversion), 255);
            assert_eq!(to_sample(-350.2, conversion), 0);
            assert_eq!(to_sample(-0.7, conversion), 0);
            assert_eq!(to_sample(f64::NAN, conversion), 0);
        }
    }

    #[test]
    fn test_store_block() {
        let block: [f64; 64] = core::array::from_fn(|i| i as f64 * 10.0 - 100.0);
        let mut plane = vec![7u8; 16 * 8];
        store_block(&block, &mut plane, 16, BlockOrigin::new(0, 8), SampleConversion::Truncate);

        assert_eq!(plane[0], 7);
        assert_eq!(plane[8], 0);
        assert_eq!(plane[16 + 8 + 3], 10);
        assert_eq!(plane[7 * 16 + 15], 255);
    }
}
