//! Simple whole-raster manipulations
//!
//! Per-sample utilities used alongside the transforms: channel zeroing,
//! mirroring, clipped copies for collage assembly, and edge detection.

use crate::{BlockResult, Channel, Raster};

const BLACK: [u8; 3] = [0, 0, 0];
const WHITE: [u8; 3] = [255, 255, 255];

impl Raster {
    /// Set every sample of `channel` to zero
    pub fn zero_channel(&mut self, channel: Channel) {
        self.plane_mut(channel).fill(0);
    }

    /// Mirror the left half onto the right half around the vertical centre line
    pub fn mirror_vertical(&mut self) {
        let width = self.width() as usize;
        for plane in self.planes_mut() {
            for row in plane.chunks_exact_mut(width) {
                for col in 0..width / 2 {
                    row[width - 1 - col] = row[col];
                }
            }
        }
    }

    /// Copy `src` into this raster with its top-left corner at
    /// (`start_row`, `start_col`), clipping whatever falls outside.
    pub fn copy_from(&mut self, src: &Raster, start_row: usize, start_col: usize) {
        let (dst_w, dst_h) = (self.width() as usize, self.height() as usize);
        let src_w = src.width() as usize;
        if start_row >= dst_h || start_col >= dst_w {
            return;
        }

        let rows = (src.height() as usize).min(dst_h - start_row);
        let cols = src_w.min(dst_w - start_col);

        for channel in Channel::ALL {
            let from = src.plane(channel);
            let to = self.plane_mut(channel);
            for row in 0..rows {
                let s = row * src_w;
                let d = (start_row + row) * dst_w + start_col;
                to[d..d + cols].copy_from_slice(&from[s..s + cols]);
            }
        }
    }

    /// Mean of the three channels at a pixel
    pub fn average(&self, row: usize, col: usize) -> BlockResult<f64> {
        let [r, g, b] = self.pixel(row, col)?;
        Ok((r as f64 + g as f64 + b as f64) / 3.0)
    }

    /// Replace each pixel by black when its colour distance to the right
    /// neighbour exceeds `distance`, white otherwise. The last column is kept.
    pub fn edge_detect(&mut self, distance: f64) {
        let (width, height) = (self.width() as usize, self.height() as usize);
        let original = self.clone();

        for row in 0..height {
            for col in 0..width.saturating_sub(1) {
                let left = pixel_at(&original, row, col);
                let right = pixel_at(&original, row, col + 1);
                let rgb = if color_distance(left, right) > distance {
                    BLACK
                } else {
                    WHITE
                };
                for channel in Channel::ALL {
                    let idx = row * width + col;
                    self.plane_mut(channel)[idx] = rgb[channel.index()];
                }
            }
        }
    }
}

fn pixel_at(raster: &Raster, row: usize, col: usize) -> [u8; 3] {
    let idx = row * raster.width() as usize + col;
    Channel::ALL.map(|channel| raster.plane(channel)[idx])
}

/// Euclidean distance between two RGB colours
pub fn color_distance(a: [u8; 3], b: [u8; 3]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x as f64 - y as f64;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}
