//! Core types for the block codec

use crate::consts::BLOCK_SIZE;

/// Colour channel of a raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl Channel {
    /// All channels in storage order
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Raster dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True when both sides are positive multiples of the block size
    pub fn is_block_aligned(&self) -> bool {
        !self.is_empty()
            && self.width as usize % BLOCK_SIZE == 0
            && self.height as usize % BLOCK_SIZE == 0
    }

    /// Smallest block-aligned dimensions covering these
    pub fn padded_to_blocks(&self) -> Self {
        let b = BLOCK_SIZE as u32;
        Self {
            width: self.width.div_ceil(b) * b,
            height: self.height.div_ceil(b) * b,
        }
    }
}
