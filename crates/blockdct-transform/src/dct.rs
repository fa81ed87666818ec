//! Reference 8x8 DCT-II / DCT-III
//!
//! Direct quadruple summation, one output at a time. Blocks are row-major:
//! sample (k, l) and coefficient (i, j) live at index `row * 8 + col`.

use crate::basis::{cosine, normalization};
use blockdct_core::consts::{BLOCK_AREA, BLOCK_SIZE};

/// 8x8 DCT-II (forward transform)
///
/// `coefficient(i, j) = c(i) c(j) sum_k sum_l sample(k, l) cos_i(k) cos_j(l)`
pub fn dct8x8_forward(input: &[f64; BLOCK_AREA], output: &mut [f64; BLOCK_AREA]) {
    const N: usize = BLOCK_SIZE;

    for i in 0..N {
        for j in 0..N {
            let mut sum = 0.0;
            for k in 0..N {
                for l in 0..N {
                    sum += input[k * N + l] * cosine(i, k) * cosine(j, l);
                }
            }
            output[i * N + j] = normalization(i) * normalization(j) * sum;
        }
    }
}

/// 8x8 DCT-III (inverse transform)
///
/// The normalization is applied per (k, l) term inside the sum.
pub fn dct8x8_inverse(input: &[f64; BLOCK_AREA], output: &mut [f64; BLOCK_AREA]) {
    const N: usize = BLOCK_SIZE;

    for i in 0..N {
        for j in 0..N {
            let mut sum = 0.0;
            for k in 0..N {
                for l in 0..N {
                    sum += normalization(k)
                        * normalization(l)
                        * input[k * N + l]
                        * cosine(k, i)
                        * cosine(l, j);
                }
            }
            output[i * N + j] = sum;
        }
    }
}
