//! Separable 8x8 DCT
//!
//! The 2D DCT factors into 1D transforms over rows and then columns, which
//! drops the per-block cost from O(N^4) to O(N^3) multiply-adds. Results
//! match [`crate::dct`] to within floating point rounding.

use crate::basis::{cos_table, normalization};
use blockdct_core::consts::{BLOCK_AREA, BLOCK_SIZE};

/// 1D DCT-II (forward) on 8 samples
#[inline]
fn dct_1d_forward(input: &[f64; BLOCK_SIZE], output: &mut [f64; BLOCK_SIZE]) {
    let table = cos_table();
    for (u, out) in output.iter_mut().enumerate() {
        let sum: f64 = input.iter().zip(&table[u]).map(|(x, c)| x * c).sum();
        *out = normalization(u) * sum;
    }
}

/// 1D DCT-III (inverse) on 8 samples
#[inline]
fn dct_1d_inverse(input: &[f64; BLOCK_SIZE], output: &mut [f64; BLOCK_SIZE]) {
    let table = cos_table();
    for (x, out) in output.iter_mut().enumerate() {
        let mut sum = 0.0;
        for (u, &coeff) in input.iter().enumerate() {
            sum += normalization(u) * coeff * table[u][x];
        }
        *out = sum;
    }
}

/// Run `pass` over every row, then over every column
fn separable(
    input: &[f64; BLOCK_AREA],
    output: &mut [f64; BLOCK_AREA],
    pass: fn(&[f64; BLOCK_SIZE], &mut [f64; BLOCK_SIZE]),
) {
    let mut temp = [0.0f64; BLOCK_AREA];
    let mut line = [0.0f64; BLOCK_SIZE];
    let mut transformed = [0.0f64; BLOCK_SIZE];

    // Rows
    for y in 0..BLOCK_SIZE {
        line.copy_from_slice(&input[y * BLOCK_SIZE..(y + 1) * BLOCK_SIZE]);
        pass(&line, &mut transformed);
        temp[y * BLOCK_SIZE..(y + 1) * BLOCK_SIZE].copy_from_slice(&transformed);
    }

    // Columns
    for x in 0..BLOCK_SIZE {
        for y in 0..BLOCK_SIZE {
            line[y] = temp[y * BLOCK_SIZE + x];
        }
        pass(&line, &mut transformed);
        for y in 0..BLOCK_SIZE {
            output[y * BLOCK_SIZE + x] = transformed[y];
        }
    }
}

/// Separable 8x8 DCT-II (forward transform)
pub fn dct8x8_forward_separable(input: &[f64; BLOCK_AREA], output: &mut [f64; BLOCK_AREA]) {
    separable(input, output, dct_1d_forward);
}

/// Separable 8x8 DCT-III (inverse transform)
pub fn dct8x8_inverse_separable(input: &[f64; BLOCK_AREA], output: &mut [f64; BLOCK_AREA]) {
    separable(input, output, dct_1d_inverse);
}
