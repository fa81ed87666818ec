//! Core types and utilities for the block DCT codec
//!
//! This crate provides the fundamental data structures shared by the transform
//! and codec crates: raster and coefficient storage, dimensions, channels, and
//! error types.

pub mod coefficients;
pub mod consts;
pub mod error;
pub mod ops;
pub mod raster;
pub mod types;

pub use coefficients::CoefficientArray;
pub use error::{BlockError, BlockResult};
pub use raster::Raster;
pub use types::*;
