//! Codec configuration

use blockdct_core::consts::{self, BLOCK_AREA};
use blockdct_transform::{
    dct8x8_forward, dct8x8_forward_separable, dct8x8_inverse, dct8x8_inverse_separable,
};

pub use blockdct_transform::SampleConversion;

/// Which 8x8 kernel implementation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransformKernel {
    /// Direct quadruple summation
    Reference,
    /// Row/column 1D passes
    #[default]
    Separable,
}

impl TransformKernel {
    #[inline]
    pub fn forward(&self, input: &[f64; BLOCK_AREA], output: &mut [f64; BLOCK_AREA]) {
        match self {
            TransformKernel::Reference => dct8x8_forward(input, output),
            TransformKernel::Separable => dct8x8_forward_separable(input, output),
        }
    }

    #[inline]
    pub fn inverse(&self, input: &[f64; BLOCK_AREA], output: &mut [f64; BLOCK_AREA]) {
        match self {
            TransformKernel::Reference => dct8x8_inverse(input, output),
            TransformKernel::Separable => dct8x8_inverse_separable(input, output),
        }
    }
}

/// What to do with rasters whose sides are not multiples of 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgePolicy {
    /// Fail with a dimension error
    #[default]
    Reject,
    /// Pad partial blocks by repeating the last row/column; the inverse crops
    /// back to the original extent
    Replicate,
}

/// Codec options
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformOptions {
    /// Spread block bands over the rayon thread pool
    pub parallel: bool,
    /// 8x8 kernel implementation
    pub kernel: TransformKernel,
    /// Real-to-sample conversion on reconstruction
    pub conversion: SampleConversion,
    /// Handling of non block-aligned rasters
    pub edge_policy: EdgePolicy,
    /// Cutoff used by [`crate::BlockCodec::lossy_inverse_default`]
    pub cutoff: usize,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            kernel: TransformKernel::default(),
            conversion: SampleConversion::default(),
            edge_policy: EdgePolicy::default(),
            cutoff: consts::DEFAULT_CUTOFF,
        }
    }
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn kernel(mut self, kernel: TransformKernel) -> Self {
        self.kernel = kernel;
        self
    }

    pub fn conversion(mut self, conversion: SampleConversion) -> Self {
        self.conversion = conversion;
        self
    }

    pub fn edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    /// Validated when [`crate::BlockCodec::lossy_inverse_default`] runs
    pub fn cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = cutoff;
        self
    }
}
