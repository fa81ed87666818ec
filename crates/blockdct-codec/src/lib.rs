//! Whole-raster block DCT codec
//!
//! Drives the 8x8 kernels from `blockdct-transform` over every block and
//! channel of a [`Raster`], producing a [`CoefficientArray`] and turning one
//! back into samples, optionally discarding high frequencies on the way.

mod codec;
pub mod options;
pub mod progress;

pub use codec::BlockCodec;
pub use options::{EdgePolicy, TransformKernel, TransformOptions};
pub use progress::{BlockProgress, ProgressObserver};

use blockdct_core::{BlockResult, CoefficientArray, Raster};

/// Forward-transform a block-aligned raster with default options
pub fn forward_transform(raster: &Raster) -> BlockResult<CoefficientArray> {
    BlockCodec::default().forward(raster)
}

/// Reconstruct a raster from coefficients with default options
pub fn inverse_transform(coeffs: &CoefficientArray) -> BlockResult<Raster> {
    BlockCodec::default().inverse(coeffs)
}

/// Reconstruct keeping only frequencies below `cutoff` in each block
pub fn lossy_inverse_transform(coeffs: &CoefficientArray, cutoff: usize) -> BlockResult<Raster> {
    BlockCodec::default().lossy_inverse(coeffs, cutoff)
}
