//! Constants used throughout the block codec

/// Edge length of a transform block
pub const BLOCK_SIZE: usize = 8;

/// Number of samples in one block
pub const BLOCK_AREA: usize = BLOCK_SIZE * BLOCK_SIZE;

/// Number of colour channels carried by a raster
pub const CHANNELS: usize = 3;

/// Largest storable sample value
pub const MAX_SAMPLE: u8 = 255;

/// Default low-frequency cutoff for lossy reconstruction
pub const DEFAULT_CUTOFF: usize = 4;

/// Minimum and maximum cutoff values
pub const MIN_CUTOFF: usize = 1;
pub const MAX_CUTOFF: usize = BLOCK_SIZE;
