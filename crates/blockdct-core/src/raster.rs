//! Raster storage
//!
//! A [`Raster`] holds three 8-bit channel planes of identical extent in one
//! flat buffer. Plane `c` occupies `data[c * w * h..(c + 1) * w * h]` and a
//! sample lives at `row * w + col` inside its plane.

use crate::consts::{CHANNELS, MAX_SAMPLE};
use crate::{BlockError, BlockResult, Channel, Dimensions};

/// Three-channel 8-bit raster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    dimensions: Dimensions,
    data: Vec<u8>,
}

impl Raster {
    /// Create a zero-filled raster
    pub fn new(dimensions: Dimensions) -> BlockResult<Self> {
        Self::filled(dimensions, [0; CHANNELS])
    }

    /// Create a raster with every pixel set to `rgb`
    pub fn filled(dimensions: Dimensions, rgb: [u8; CHANNELS]) -> BlockResult<Self> {
        check_dimensions(dimensions)?;

        let plane_len = dimensions.pixel_count();
        let mut data = Vec::with_capacity(plane_len * CHANNELS);
        for value in rgb {
            data.resize(data.len() + plane_len, value);
        }

        Ok(Self { dimensions, data })
    }

    /// Wrap planar data laid out as R plane, G plane, B plane
    pub fn from_planar(dimensions: Dimensions, data: Vec<u8>) -> BlockResult<Self> {
        check_dimensions(dimensions)?;

        let expected = dimensions.pixel_count() * CHANNELS;
        if data.len() != expected {
            return Err(BlockError::BufferSize {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { dimensions, data })
    }

    /// Build from pixel-interleaved RGB bytes
    pub fn from_interleaved(dimensions: Dimensions, rgb: &[u8]) -> BlockResult<Self> {
        check_dimensions(dimensions)?;

        let plane_len = dimensions.pixel_count();
        let expected = plane_len * CHANNELS;
        if rgb.len() != expected {
            return Err(BlockError::BufferSize {
                expected,
                actual: rgb.len(),
            });
        }

        let mut data = vec![0u8; expected];
        for (i, pixel) in rgb.chunks_exact(CHANNELS).enumerate() {
            for (c, &value) in pixel.iter().enumerate() {
                data[c * plane_len + i] = value;
            }
        }

        Ok(Self { dimensions, data })
    }

    /// Pixel-interleaved RGB copy of the raster
    pub fn to_interleaved(&self) -> Vec<u8> {
        let plane_len = self.dimensions.pixel_count();
        let mut rgb = Vec::with_capacity(plane_len * CHANNELS);
        for i in 0..plane_len {
            for c in 0..CHANNELS {
                rgb.push(self.data[c * plane_len + i]);
            }
        }
        rgb
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Read one sample
    pub fn get_sample(&self, row: usize, col: usize, channel: Channel) -> BlockResult<u8> {
        let idx = self.index(row, col, channel)?;
        Ok(self.data[idx])
    }

    /// Store one sample, clamping `value` into the 8-bit range
    pub fn set_sample(
        &mut self,
        row: usize,
        col: usize,
        channel: Channel,
        value: i32,
    ) -> BlockResult<()> {
        let idx = self.index(row, col, channel)?;
        self.data[idx] = value.clamp(0, MAX_SAMPLE as i32) as u8;
        Ok(())
    }

    /// Read all three channels of a pixel
    pub fn pixel(&self, row: usize, col: usize) -> BlockResult<[u8; CHANNELS]> {
        let mut rgb = [0u8; CHANNELS];
        for channel in Channel::ALL {
            rgb[channel.index()] = self.get_sample(row, col, channel)?;
        }
        Ok(rgb)
    }

    /// Write all three channels of a pixel
    pub fn set_pixel(&mut self, row: usize, col: usize, rgb: [u8; CHANNELS]) -> BlockResult<()> {
        for channel in Channel::ALL {
            let idx = self.index(row, col, channel)?;
            self.data[idx] = rgb[channel.index()];
        }
        Ok(())
    }

    /// One channel plane in row-major order
    pub fn plane(&self, channel: Channel) -> &[u8] {
        let len = self.dimensions.pixel_count();
        let start = channel.index() * len;
        &self.data[start..start + len]
    }

    pub fn plane_mut(&mut self, channel: Channel) -> &mut [u8] {
        let len = self.dimensions.pixel_count();
        let start = channel.index() * len;
        &mut self.data[start..start + len]
    }

    /// Disjoint mutable views of all three planes
    pub fn planes_mut(&mut self) -> [&mut [u8]; CHANNELS] {
        let len = self.dimensions.pixel_count();
        let (red, rest) = self.data.split_at_mut(len);
        let (green, blue) = rest.split_at_mut(len);
        [red, green, blue]
    }

    /// Copy into a larger raster, repeating the last row and column outward
    pub fn padded(&self, target: Dimensions) -> BlockResult<Raster> {
        if target.width < self.width() || target.height < self.height() {
            return Err(BlockError::InvalidParameter(format!(
                "cannot pad {}x{} raster to smaller {}x{}",
                self.width(),
                self.height(),
                target.width,
                target.height
            )));
        }

        let mut out = Raster::new(target)?;
        let (src_w, src_h) = (self.width() as usize, self.height() as usize);
        let dst_w = target.width as usize;

        for channel in Channel::ALL {
            let src = self.plane(channel);
            let dst = out.plane_mut(channel);
            for (row, dst_row) in dst.chunks_exact_mut(dst_w).enumerate() {
                let src_row = &src[row.min(src_h - 1) * src_w..][..src_w];
                dst_row[..src_w].copy_from_slice(src_row);
                dst_row[src_w..].fill(src_row[src_w - 1]);
            }
        }

        Ok(out)
    }

    /// Copy of the top-left `target` region
    pub fn cropped(&self, target: Dimensions) -> BlockResult<Raster> {
        if target.width > self.width() || target.height > self.height() {
            return Err(BlockError::InvalidParameter(format!(
                "cannot crop {}x{} raster to larger {}x{}",
                self.width(),
                self.height(),
                target.width,
                target.height
            )));
        }
        if target == self.dimensions {
            return Ok(self.clone());
        }

        let mut out = Raster::new(target)?;
        let src_w = self.width() as usize;
        let dst_w = target.width as usize;

        for channel in Channel::ALL {
            let src = self.plane(channel);
            let dst = out.plane_mut(channel);
            for (row, dst_row) in dst.chunks_exact_mut(dst_w).enumerate() {
                dst_row.copy_from_slice(&src[row * src_w..row * src_w + dst_w]);
            }
        }

        Ok(out)
    }

    fn index(&self, row: usize, col: usize, channel: Channel) -> BlockResult<usize> {
        let (width, height) = (self.width() as usize, self.height() as usize);
        if row >= height || col >= width {
            return Err(BlockError::OutOfRange {
                row,
                col,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(channel.index() * width * height + row * width + col)
    }
}

fn check_dimensions(dimensions: Dimensions) -> BlockResult<()> {
    if dimensions.is_empty() {
        return Err(BlockError::Dimension {
            width: dimensions.width,
            height: dimensions.height,
        });
    }
    Ok(())
}
