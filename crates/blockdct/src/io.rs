//! Raster file I/O through the `image` crate

use blockdct_core::{BlockError, BlockResult, Dimensions, Raster};
use image::{ImageError, RgbImage};
use log::debug;
use std::path::Path;

/// Decode any format the `image` crate understands into an RGB raster
pub fn load_raster<P: AsRef<Path>>(path: P) -> BlockResult<Raster> {
    let path = path.as_ref();
    let image = image::open(path).map_err(image_error)?.to_rgb8();
    debug!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    raster_from_rgb(&image)
}

/// Encode a raster; the format follows the file extension
pub fn save_raster<P: AsRef<Path>>(raster: &Raster, path: P) -> BlockResult<()> {
    let path = path.as_ref();
    rgb_from_raster(raster)?.save(path).map_err(image_error)?;
    debug!(
        "saved {} ({}x{})",
        path.display(),
        raster.width(),
        raster.height()
    );
    Ok(())
}

pub fn raster_from_rgb(image: &RgbImage) -> BlockResult<Raster> {
    let dims = Dimensions::new(image.width(), image.height());
    Raster::from_interleaved(dims, image.as_raw())
}

pub fn rgb_from_raster(raster: &Raster) -> BlockResult<RgbImage> {
    let data = raster.to_interleaved();
    let actual = data.len();
    RgbImage::from_raw(raster.width(), raster.height(), data).ok_or(BlockError::BufferSize {
        expected: raster.dimensions().pixel_count() * 3,
        actual,
    })
}

fn image_error(err: ImageError) -> BlockError {
    match err {
        ImageError::IoError(e) => BlockError::Io(e),
        other => BlockError::Image(other.to_string()),
    }
}
