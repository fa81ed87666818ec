//! # blockdct
//!
//! Block-based discrete cosine transform over three-channel 8-bit rasters.
//!
//! ## Quick Start
//!
//! ```no_run
//! use blockdct::{forward_transform, lossy_inverse_transform, io};
//!
//! let raster = io::load_raster("input.png").unwrap();
//! let coeffs = forward_transform(&raster).unwrap();
//! let blurred = lossy_inverse_transform(&coeffs, 4).unwrap();
//! io::save_raster(&blurred, "blurred.png").unwrap();
//! ```
//!
//! ### Configuring the codec
//!
//! ```
//! use blockdct::{BlockCodec, Dimensions, EdgePolicy, Raster, SampleConversion, TransformOptions};
//!
//! let raster = Raster::filled(Dimensions::new(13, 9), [200, 100, 50]).unwrap();
//! let codec = BlockCodec::new(
//!     TransformOptions::new()
//!         .edge_policy(EdgePolicy::Replicate)
//!         .conversion(SampleConversion::Round),
//! );
//!
//! let coeffs = codec.forward(&raster).unwrap();
//! assert_eq!(codec.inverse(&coeffs).unwrap(), raster);
//! ```
//!
//! ## Architecture
//!
//! - `blockdct-core`: rasters, coefficient arrays, errors
//! - `blockdct-transform`: 8x8 kernels, partitioning, frequency masks
//! - `blockdct-codec`: whole-raster transforms, options, progress reporting

pub mod io;
pub mod quality;

// Re-export core types
pub use blockdct_core::{
    consts, ops, BlockError, BlockResult, Channel, CoefficientArray, Dimensions, Raster,
};

// Re-export transform building blocks
pub use blockdct_transform::{
    dct8x8_forward, dct8x8_forward_separable, dct8x8_inverse, dct8x8_inverse_separable,
    partition, BlockGrid, BlockOrigin, FrequencyMask, SampleConversion,
};

// Re-export codec
pub use blockdct_codec::{
    forward_transform, inverse_transform, lossy_inverse_transform, BlockCodec, BlockProgress,
    EdgePolicy, ProgressObserver, TransformKernel, TransformOptions,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
