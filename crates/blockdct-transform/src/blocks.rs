//! Block partitioning
//!
//! A raster is covered by non-overlapping 8x8 blocks visited in row-major
//! block order. A horizontal run of blocks (8 full rows of a plane) is a
//! *band*; bands are the unit of parallel work.

use blockdct_core::consts::{BLOCK_AREA, BLOCK_SIZE};
use blockdct_core::{BlockError, BlockResult, Dimensions};

/// Top-left sample position of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockOrigin {
    pub row: usize,
    pub col: usize,
}

impl BlockOrigin {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Block layout of a block-aligned raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGrid {
    pub blocks_wide: usize,
    pub blocks_tall: usize,
}

impl BlockGrid {
    /// Partition `dims`, failing unless both sides are positive multiples of 8
    pub fn for_dimensions(dims: Dimensions) -> BlockResult<Self> {
        if !dims.is_block_aligned() {
            return Err(BlockError::Dimension {
                width: dims.width,
                height: dims.height,
            });
        }

        Ok(Self {
            blocks_wide: num_blocks(dims.width as usize),
            blocks_tall: num_blocks(dims.height as usize),
        })
    }

    pub fn block_count(&self) -> usize {
        self.blocks_wide * self.blocks_tall
    }

    /// Samples per band for one plane
    pub fn band_len(&self) -> usize {
        self.blocks_wide * BLOCK_AREA
    }

    /// Block origins, top-to-bottom then left-to-right
    pub fn origins(&self) -> impl Iterator<Item = BlockOrigin> + '_ {
        (0..self.blocks_tall).flat_map(move |by| {
            (0..self.blocks_wide)
                .map(move |bx| BlockOrigin::new(by * BLOCK_SIZE, bx * BLOCK_SIZE))
        })
    }
}

/// Number of blocks needed to cover `size` samples
pub fn num_blocks(size: usize) -> usize {
    size.div_ceil(BLOCK_SIZE)
}

/// Collect the block origins of a raster
pub fn partition(dims: Dimensions) -> BlockResult<Vec<BlockOrigin>> {
    let grid = BlockGrid::for_dimensions(dims)?;
    Ok(grid.origins().collect())
}

/// Copy the 8x8 block at `origin` out of a row-major plane
pub fn extract_block<T>(plane: &[T], width: usize, origin: BlockOrigin) -> [f64; BLOCK_AREA]
where
    T: Copy + Into<f64>,
{
    let mut block = [0.0f64; BLOCK_AREA];
    for (k, dst) in block.chunks_exact_mut(BLOCK_SIZE).enumerate() {
        let start = (origin.row + k) * width + origin.col;
        for (d, &s) in dst.iter_mut().zip(&plane[start..start + BLOCK_SIZE]) {
            *d = s.into();
        }
    }
    block
}

/// Write an 8x8 block back into a row-major plane at `origin`
pub fn insert_block(
    block: &[f64; BLOCK_AREA],
    plane: &mut [f64],
    width: usize,
    origin: BlockOrigin,
) {
    for (k, src) in block.chunks_exact(BLOCK_SIZE).enumerate() {
        let start = (origin.row + k) * width + origin.col;
        plane[start..start + BLOCK_SIZE].copy_from_slice(src);
    }
}
