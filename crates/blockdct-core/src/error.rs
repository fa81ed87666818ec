//! Error types for block transform operations

use thiserror::Error;

/// Result type for block transform operations
pub type BlockResult<T> = Result<T, BlockError>;

/// Errors that can occur while building rasters or running transforms
#[derive(Error, Debug)]
pub enum BlockError {
    #[error("Invalid dimensions: {width}x{height} (must be a positive multiple of 8)")]
    Dimension { width: u32, height: u32 },

    #[error("Sample ({row}, {col}) out of range for {width}x{height} raster")]
    OutOfRange {
        row: usize,
        col: usize,
        width: u32,
        height: u32,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(String),
}
