//! Low-frequency masking for lossy reconstruction
//!
//! Zeroing every coefficient whose row or column frequency index reaches the
//! cutoff throws away fine detail; reconstructing from what is left gives a
//! blurred image.

use blockdct_core::consts::{BLOCK_AREA, BLOCK_SIZE, MAX_CUTOFF, MIN_CUTOFF};
use blockdct_core::{BlockError, BlockResult, Channel, CoefficientArray};

/// Keeps the `cutoff x cutoff` low-frequency corner of every block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyMask {
    cutoff: usize,
}

impl FrequencyMask {
    /// Create a mask; `cutoff` must be in `1..=8`
    pub fn new(cutoff: usize) -> BlockResult<Self> {
        if !(MIN_CUTOFF..=MAX_CUTOFF).contains(&cutoff) {
            return Err(BlockError::InvalidParameter(format!(
                "cutoff {} outside [{}, {}]",
                cutoff, MIN_CUTOFF, MAX_CUTOFF
            )));
        }
        Ok(Self { cutoff })
    }

    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    /// A cutoff of 8 keeps every coefficient
    pub fn is_identity(&self) -> bool {
        self.cutoff == MAX_CUTOFF
    }

    /// Whether coefficient (i, j) of a block survives
    #[inline]
    pub fn keeps(&self, i: usize, j: usize) -> bool {
        i < self.cutoff && j < self.cutoff
    }

    /// Zero the discarded coefficients of one row-major block
    pub fn apply_block(&self, block: &mut [f64; BLOCK_AREA]) {
        if self.is_identity() {
            return;
        }
        for (i, row) in block.chunks_exact_mut(BLOCK_SIZE).enumerate() {
            for (j, coeff) in row.iter_mut().enumerate() {
                if !self.keeps(i, j) {
                    *coeff = 0.0;
                }
            }
        }
    }

    /// Zero the discarded coefficients across a whole block-aligned plane
    pub fn apply_plane(&self, plane: &mut [f64], width: usize) {
        if self.is_identity() {
            return;
        }
        for (row, line) in plane.chunks_exact_mut(width).enumerate() {
            let i = row % BLOCK_SIZE;
            for (col, coeff) in line.iter_mut().enumerate() {
                if !self.keeps(i, col % BLOCK_SIZE) {
                    *coeff = 0.0;
                }
            }
        }
    }

    /// Mask every channel of a coefficient array in place
    pub fn apply(&self, coeffs: &mut CoefficientArray) {
        let width = coeffs.width() as usize;
        for channel in Channel::ALL {
            self.apply_plane(coeffs.plane_mut(channel), width);
        }
    }
}
