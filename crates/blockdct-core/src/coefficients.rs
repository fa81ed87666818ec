//! Frequency-domain coefficient storage
//!
//! Coefficients share the spatial layout of the raster they came from:
//! coefficient (i, j) of the block at origin (r, c) lives at row `r + i`,
//! column `c + j` of its channel plane.

use crate::consts::{BLOCK_AREA, BLOCK_SIZE, CHANNELS};
use crate::{BlockError, BlockResult, Channel, Dimensions};

/// Three planes of real-valued DCT coefficients
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientArray {
    /// Block-aligned extent of the planes
    dimensions: Dimensions,
    /// Extent of the raster the coefficients describe (smaller when padded)
    source: Dimensions,
    planes: Vec<f64>,
}

impl CoefficientArray {
    /// Create a zeroed coefficient array
    pub fn new(dimensions: Dimensions) -> BlockResult<Self> {
        check_aligned(dimensions)?;

        Ok(Self {
            dimensions,
            source: dimensions,
            planes: vec![0.0; dimensions.pixel_count() * CHANNELS],
        })
    }

    /// Wrap planar coefficient data (R plane, G plane, B plane)
    pub fn from_planes(dimensions: Dimensions, planes: Vec<f64>) -> BlockResult<Self> {
        check_aligned(dimensions)?;

        let expected = dimensions.pixel_count() * CHANNELS;
        if planes.len() != expected {
            return Err(BlockError::BufferSize {
                expected,
                actual: planes.len(),
            });
        }

        Ok(Self {
            dimensions,
            source: dimensions,
            planes,
        })
    }

    /// Record that the planes cover a padded copy of a smaller raster
    pub fn with_source(mut self, source: Dimensions) -> BlockResult<Self> {
        if source.is_empty() || source.padded_to_blocks() != self.dimensions {
            return Err(BlockError::Dimension {
                width: source.width,
                height: source.height,
            });
        }
        self.source = source;
        Ok(self)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Extent of the raster reconstructed from these coefficients
    pub fn source_dimensions(&self) -> Dimensions {
        self.source
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    /// Number of 8x8 blocks per channel
    pub fn block_count(&self) -> usize {
        self.dimensions.pixel_count() / BLOCK_AREA
    }

    pub fn get(&self, row: usize, col: usize, channel: Channel) -> BlockResult<f64> {
        let idx = self.index(row, col, channel)?;
        Ok(self.planes[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, channel: Channel, value: f64) -> BlockResult<()> {
        let idx = self.index(row, col, channel)?;
        self.planes[idx] = value;
        Ok(())
    }

    /// The 64 coefficients of one block, row-major by frequency
    pub fn block(
        &self,
        channel: Channel,
        block_row: usize,
        block_col: usize,
    ) -> BlockResult<[f64; BLOCK_AREA]> {
        let origin_row = block_row * BLOCK_SIZE;
        let origin_col = block_col * BLOCK_SIZE;
        // Validates the whole block before copying
        self.index(origin_row + BLOCK_SIZE - 1, origin_col + BLOCK_SIZE - 1, channel)?;

        let width = self.width() as usize;
        let plane = self.plane(channel);
        let mut out = [0.0; BLOCK_AREA];
        for i in 0..BLOCK_SIZE {
            let start = (origin_row + i) * width + origin_col;
            out[i * BLOCK_SIZE..(i + 1) * BLOCK_SIZE]
                .copy_from_slice(&plane[start..start + BLOCK_SIZE]);
        }
        Ok(out)
    }

    pub fn plane(&self, channel: Channel) -> &[f64] {
        let len = self.dimensions.pixel_count();
        let start = channel.index() * len;
        &self.planes[start..start + len]
    }

    pub fn plane_mut(&mut self, channel: Channel) -> &mut [f64] {
        let len = self.dimensions.pixel_count();
        let start = channel.index() * len;
        &mut self.planes[start..start + len]
    }

    /// Disjoint mutable views of all three planes
    pub fn planes_mut(&mut self) -> [&mut [f64]; CHANNELS] {
        let len = self.dimensions.pixel_count();
        let (red, rest) = self.planes.split_at_mut(len);
        let (green, blue) = rest.split_at_mut(len);
        [red, green, blue]
    }

    fn index(&self, row: usize, col: usize, channel: Channel) -> BlockResult<usize> {
        let (width, height) = (self.width() as usize, self.height() as usize);
        if row >= height || col >= width {
            return Err(BlockError::OutOfRange {
                row,
                col,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(channel.index() * width * height + row * width + col)
    }
}

fn check_aligned(dimensions: Dimensions) -> BlockResult<()> {
    if !dimensions.is_block_aligned() {
        return Err(BlockError::Dimension {
            width: dimensions.width,
            height: dimensions.height,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_block_alignment() {
        assert!(CoefficientArray::new(Dimensions::new(16, 8)).is_ok());
        assert!(matches!(
            CoefficientArray::new(Dimensions::new(12, 8)),
            Err(BlockError::Dimension { width: 12, height: 8 })
        ));
    }

    #[test]
    fn test_block_access() {
        let mut coeffs = CoefficientArray::new(Dimensions::new(16, 16)).unwrap();
        assert_eq!(coeffs.block_count(), 4);

        coeffs.set(8, 8, Channel::Blue, 42.0).unwrap();
        coeffs.set(15, 15, Channel::Blue, -3.5).unwrap();

        let block = coeffs.block(Channel::Blue, 1, 1).unwrap();
        assert_eq!(block[0], 42.0);
        assert_eq!(block[63], -3.5);
        assert!(coeffs.block(Channel::Red, 1, 1).unwrap().iter().all(|&c| c == 0.0));
        assert!(coeffs.block(Channel::Blue, 2, 0).is_err());
    }

    #[test]
    fn test_with_source() {
        let coeffs = CoefficientArray::new(Dimensions::new(16, 8)).unwrap();
        let padded = coeffs.clone().with_source(Dimensions::new(13, 5)).unwrap();
        assert_eq!(padded.source_dimensions(), Dimensions::new(13, 5));
        assert!(coeffs.with_source(Dimensions::new(7, 5)).is_err());
    }
}
