//! Transform operations for the block codec
//!
//! This crate implements the 8x8 DCT-II/DCT-III pair (a direct reference form
//! and a separable form), block partitioning, low-frequency masking, and the
//! conversion of reconstructed values back to 8-bit samples.

pub mod basis;
pub mod blocks;
pub mod dct;
pub mod dct_optimized;
pub mod mask;
pub mod sample;

pub use basis::*;
pub use blocks::*;
pub use dct::*;
pub use dct_optimized::*;
pub use mask::*;
pub use sample::*;
