//! Shared DCT basis tables
//!
//! Both tables depend only on the frequency index and the block size, so they
//! are built once per process and read by every transform.

use blockdct_core::consts::BLOCK_SIZE;
use std::f64::consts::{PI, SQRT_2};

lazy_static::lazy_static! {
    /// `COS_TABLE[u][x] = cos((2x + 1) * u * pi / 16)`
    static ref COS_TABLE: [[f64; BLOCK_SIZE]; BLOCK_SIZE] = {
        let mut table = [[0.0f64; BLOCK_SIZE]; BLOCK_SIZE];
        for (u, row) in table.iter_mut().enumerate() {
            for (x, value) in row.iter_mut().enumerate() {
                let angle = ((2 * x + 1) as f64 * u as f64 * PI) / (2 * BLOCK_SIZE) as f64;
                *value = angle.cos();
            }
        }
        table
    };

    /// Orthonormal scale: 1/sqrt(8) for DC, sqrt(2)/sqrt(8) otherwise
    static ref NORMALIZATION: [f64; BLOCK_SIZE] = {
        let n = (BLOCK_SIZE as f64).sqrt();
        let mut factors = [SQRT_2 / n; BLOCK_SIZE];
        factors[0] = 1.0 / n;
        factors
    };
}

/// Normalization factor for frequency index `u`
#[inline]
pub fn normalization(u: usize) -> f64 {
    NORMALIZATION[u]
}

/// Cosine basis value for frequency `u` at spatial position `x`
#[inline]
pub fn cosine(u: usize, x: usize) -> f64 {
    COS_TABLE[u][x]
}

/// Full cosine table, indexed `[frequency][position]`
pub fn cos_table() -> &'static [[f64; BLOCK_SIZE]; BLOCK_SIZE] {
    &COS_TABLE
}
