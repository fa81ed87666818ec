//! Reconstruction quality measures

use blockdct_core::{BlockError, BlockResult, Channel, Raster};

/// Mean squared error over all samples of all channels
pub fn mse(original: &Raster, decoded: &Raster) -> BlockResult<f64> {
    if original.dimensions() != decoded.dimensions() {
        return Err(BlockError::Dimension {
            width: decoded.width(),
            height: decoded.height(),
        });
    }

    let mut sum = 0.0;
    for channel in Channel::ALL {
        for (&o, &d) in original.plane(channel).iter().zip(decoded.plane(channel)) {
            let diff = o as f64 - d as f64;
            sum += diff * diff;
        }
    }
    Ok(sum / (original.dimensions().pixel_count() * Channel::ALL.len()) as f64)
}

/// Peak signal-to-noise ratio in dB; infinite for identical rasters
pub fn psnr(original: &Raster, decoded: &Raster) -> BlockResult<f64> {
    let mse = mse(original, decoded)?;
    if mse == 0.0 {
        Ok(f64::INFINITY)
    } else {
        Ok(10.0 * (255.0 * 255.0 / mse).log10())
    }
}

/// Largest absolute per-sample difference
pub fn max_abs_error(original: &Raster, decoded: &Raster) -> BlockResult<u8> {
    mse(original, decoded)?;
    Ok(Channel::ALL
        .iter()
        .flat_map(|&c| original.plane(c).iter().zip(decoded.plane(c)))
        .map(|(&o, &d)| o.abs_diff(d))
        .max()
        .unwrap_or(0))
}

/// Mean brightness over all pixels, each pixel being the mean of its channels
pub fn mean_intensity(raster: &Raster) -> BlockResult<f64> {
    let (width, height) = (raster.width() as usize, raster.height() as usize);
    let mut sum = 0.0;
    for row in 0..height {
        for col in 0..width {
            sum += raster.average(row, col)?;
        }
    }
    Ok(sum / raster.dimensions().pixel_count() as f64)
}

/// Sample variance of one channel
pub fn variance(raster: &Raster, channel: Channel) -> f64 {
    let plane = raster.plane(channel);
    let n = plane.len() as f64;
    let mean = plane.iter().map(|&v| v as f64).sum::<f64>() / n;
    plane
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockdct_core::Dimensions;

    #[test]
    fn test_identical_rasters() {
        let raster = Raster::filled(Dimensions::new(4, 4), [1, 2, 3]).unwrap();
        assert_eq!(mse(&raster, &raster).unwrap(), 0.0);
        assert!(psnr(&raster, &raster).unwrap().is_infinite());
        assert_eq!(max_abs_error(&raster, &raster).unwrap(), 0);
    }

    #[test]
    fn test_known_error() {
        let a = Raster::filled(Dimensions::new(2, 2), [10, 10, 10]).unwrap();
        let b = Raster::filled(Dimensions::new(2, 2), [12, 10, 10]).unwrap();
        // one channel off by 2 everywhere: (4 * 4) / 12
        assert!((mse(&a, &b).unwrap() - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(max_abs_error(&a, &b).unwrap(), 2);
    }

    #[test]
    fn test_mismatched_dimensions() {
        let a = Raster::new(Dimensions::new(2, 2)).unwrap();
        let b = Raster::new(Dimensions::new(2, 3)).unwrap();
        assert!(mse(&a, &b).is_err());
    }

    #[test]
    fn test_mean_intensity() {
        let raster = Raster::filled(Dimensions::new(3, 2), [30, 60, 90]).unwrap();
        assert!((mean_intensity(&raster).unwrap() - 60.0).abs() < 1e-12);

        let mut mixed = Raster::new(Dimensions::new(2, 1)).unwrap();
        mixed.set_pixel(0, 1, [255, 255, 255]).unwrap();
        assert!((mean_intensity(&mixed).unwrap() - 127.5).abs() < 1e-12);
    }

    #[test]
    fn test_variance() {
        let flat = Raster::filled(Dimensions::new(4, 4), [7, 7, 7]).unwrap();
        assert_eq!(variance(&flat, Channel::Red), 0.0);

        let raster = Raster::from_planar(
            Dimensions::new(2, 1),
            vec![0, 10, 0, 0, 0, 0],
        )
        .unwrap();
        assert_eq!(variance(&raster, Channel::Red), 25.0);
    }
}
