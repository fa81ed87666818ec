//! Block codec driver

use crate::options::{EdgePolicy, TransformOptions};
use crate::progress::{ProgressObserver, ProgressTracker};
use blockdct_core::consts::{BLOCK_AREA, BLOCK_SIZE, CHANNELS};
use blockdct_core::{BlockError, BlockResult, Channel, CoefficientArray, Dimensions, Raster};
use blockdct_transform::{
    extract_block, insert_block, store_block, BlockGrid, BlockOrigin, FrequencyMask,
};
use log::debug;
use rayon::prelude::*;
use std::borrow::Cow;
use std::time::Instant;

/// One band of one channel for the forward pass
struct ForwardJob<'a> {
    channel: Channel,
    band: usize,
    samples: &'a [u8],
    coeffs: &'a mut [f64],
}

/// One band of one channel for the inverse pass
struct InverseJob<'a> {
    channel: Channel,
    band: usize,
    coeffs: &'a [f64],
    samples: &'a mut [u8],
}

/// Forward and inverse block DCT over whole rasters
///
/// Every block and channel is independent, so work is split into bands of
/// eight full rows per channel and each band writes only its own slice of the
/// output.
#[derive(Default)]
pub struct BlockCodec {
    options: TransformOptions,
    observer: Option<Box<dyn ProgressObserver>>,
}

impl BlockCodec {
    pub fn new(options: TransformOptions) -> Self {
        Self {
            options,
            observer: None,
        }
    }

    /// Attach a progress observer, called once per channel of every block
    pub fn with_observer<O: ProgressObserver + 'static>(mut self, observer: O) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Compute the DCT-II of every 8x8 block of every channel
    ///
    /// Fails with [`BlockError::Dimension`] when the raster is not block
    /// aligned and the edge policy is [`EdgePolicy::Reject`].
    pub fn forward(&self, raster: &Raster) -> BlockResult<CoefficientArray> {
        let source = raster.dimensions();
        let input: Cow<'_, Raster> = match self.options.edge_policy {
            EdgePolicy::Reject => Cow::Borrowed(raster),
            EdgePolicy::Replicate if source.is_block_aligned() => Cow::Borrowed(raster),
            EdgePolicy::Replicate => Cow::Owned(raster.padded(source.padded_to_blocks())?),
        };

        let grid = BlockGrid::for_dimensions(input.dimensions())?;
        let width = input.width() as usize;
        let band_len = grid.band_len();
        let kernel = self.options.kernel;

        debug!(
            "forward transform: {}x{} ({} blocks, {:?} kernel, parallel={})",
            input.width(),
            input.height(),
            grid.block_count(),
            kernel,
            self.options.parallel
        );
        let start = Instant::now();

        let mut coeffs = CoefficientArray::new(input.dimensions())?;
        let tracker =
            ProgressTracker::new(grid.block_count() * CHANNELS, self.observer.as_deref());

        let mut jobs = Vec::with_capacity(grid.blocks_tall * CHANNELS);
        for (channel, plane) in Channel::ALL.into_iter().zip(coeffs.planes_mut()) {
            let bands = input
                .plane(channel)
                .chunks(band_len)
                .zip(plane.chunks_mut(band_len));
            for (band, (band_samples, band_coeffs)) in bands.enumerate() {
                jobs.push(ForwardJob {
                    channel,
                    band,
                    samples: band_samples,
                    coeffs: band_coeffs,
                });
            }
        }

        let run = |job: ForwardJob<'_>| {
            let mut transformed = [0.0f64; BLOCK_AREA];
            for bx in 0..grid.blocks_wide {
                let origin = BlockOrigin::new(0, bx * BLOCK_SIZE);
                let block = extract_block(job.samples, width, origin);
                kernel.forward(&block, &mut transformed);
                insert_block(&transformed, job.coeffs, width, origin);
                tracker.record(job.channel, band_origin(job.band, origin));
            }
        };
        dispatch(self.options.parallel, jobs, run);

        debug!(
            "forward transform: {} block channels in {:?}",
            tracker.completed(),
            start.elapsed()
        );

        if source != coeffs.dimensions() {
            coeffs = coeffs.with_source(source)?;
        }
        Ok(coeffs)
    }

    /// Reconstruct a raster from every coefficient (DCT-III)
    pub fn inverse(&self, coeffs: &CoefficientArray) -> BlockResult<Raster> {
        self.reconstruct(coeffs, None)
    }

    /// Reconstruct keeping only frequencies `< cutoff` in both directions
    ///
    /// Fails with [`BlockError::InvalidParameter`] unless `1 <= cutoff <= 8`.
    pub fn lossy_inverse(&self, coeffs: &CoefficientArray, cutoff: usize) -> BlockResult<Raster> {
        let mask = FrequencyMask::new(cutoff)?;
        self.reconstruct(coeffs, Some(mask))
    }

    /// Lossy reconstruction with the configured cutoff
    pub fn lossy_inverse_default(&self, coeffs: &CoefficientArray) -> BlockResult<Raster> {
        self.lossy_inverse(coeffs, self.options.cutoff)
    }

    /// Reconstruct into an existing raster of the source extent
    pub fn inverse_into(&self, coeffs: &CoefficientArray, target: &mut Raster) -> BlockResult<()> {
        self.reconstruct_into_target(coeffs, target, None)
    }

    /// Lossy reconstruction into an existing raster of the source extent
    pub fn lossy_inverse_into(
        &self,
        coeffs: &CoefficientArray,
        target: &mut Raster,
        cutoff: usize,
    ) -> BlockResult<()> {
        let mask = FrequencyMask::new(cutoff)?;
        self.reconstruct_into_target(coeffs, target, Some(mask))
    }

    fn reconstruct(
        &self,
        coeffs: &CoefficientArray,
        mask: Option<FrequencyMask>,
    ) -> BlockResult<Raster> {
        let mut raster = Raster::new(coeffs.dimensions())?;
        self.reconstruct_blocks(coeffs, &mut raster, mask)?;

        let source = coeffs.source_dimensions();
        if source != coeffs.dimensions() {
            return raster.cropped(source);
        }
        Ok(raster)
    }

    fn reconstruct_into_target(
        &self,
        coeffs: &CoefficientArray,
        target: &mut Raster,
        mask: Option<FrequencyMask>,
    ) -> BlockResult<()> {
        let source = coeffs.source_dimensions();
        if target.dimensions() != source {
            return Err(dimension_error(target.dimensions()));
        }

        if source == coeffs.dimensions() {
            self.reconstruct_blocks(coeffs, target, mask)
        } else {
            let full = self.reconstruct(coeffs, mask)?;
            target.copy_from(&full, 0, 0);
            Ok(())
        }
    }

    /// Inverse transform every block into a raster of the coefficient extent
    fn reconstruct_blocks(
        &self,
        coeffs: &CoefficientArray,
        raster: &mut Raster,
        mask: Option<FrequencyMask>,
    ) -> BlockResult<()> {
        if raster.dimensions() != coeffs.dimensions() {
            return Err(dimension_error(raster.dimensions()));
        }

        let grid = BlockGrid::for_dimensions(coeffs.dimensions())?;
        let width = coeffs.width() as usize;
        let band_len = grid.band_len();
        let kernel = self.options.kernel;
        let conversion = self.options.conversion;

        debug!(
            "inverse transform: {}x{} ({} blocks, cutoff {}, {:?})",
            coeffs.width(),
            coeffs.height(),
            grid.block_count(),
            mask.map_or(BLOCK_SIZE, |m| m.cutoff()),
            conversion
        );
        let start = Instant::now();

        let tracker =
            ProgressTracker::new(grid.block_count() * CHANNELS, self.observer.as_deref());

        let mut jobs = Vec::with_capacity(grid.blocks_tall * CHANNELS);
        for (channel, plane) in Channel::ALL.into_iter().zip(raster.planes_mut()) {
            let bands = coeffs
                .plane(channel)
                .chunks(band_len)
                .zip(plane.chunks_mut(band_len));
            for (band, (band_coeffs, band_samples)) in bands.enumerate() {
                jobs.push(InverseJob {
                    channel,
                    band,
                    coeffs: band_coeffs,
                    samples: band_samples,
                });
            }
        }

        let run = |job: InverseJob<'_>| {
            let mut reconstructed = [0.0f64; BLOCK_AREA];
            for bx in 0..grid.blocks_wide {
                let origin = BlockOrigin::new(0, bx * BLOCK_SIZE);
                let mut block = extract_block(job.coeffs, width, origin);
                if let Some(mask) = mask {
                    mask.apply_block(&mut block);
                }
                kernel.inverse(&block, &mut reconstructed);
                store_block(&reconstructed, job.samples, width, origin, conversion);
                tracker.record(job.channel, band_origin(job.band, origin));
            }
        };
        dispatch(self.options.parallel, jobs, run);

        debug!(
            "inverse transform: {} block channels in {:?}",
            tracker.completed(),
            start.elapsed()
        );
        Ok(())
    }
}

/// Run jobs on the rayon pool or in order on the calling thread
fn dispatch<J, F>(parallel: bool, jobs: Vec<J>, run: F)
where
    J: Send,
    F: Fn(J) + Send + Sync,
{
    if parallel {
        jobs.into_par_iter().for_each(run);
    } else {
        jobs.into_iter().for_each(run);
    }
}

/// Raster position of a block given its band and in-band origin
fn band_origin(band: usize, origin: BlockOrigin) -> BlockOrigin {
    BlockOrigin::new(band * BLOCK_SIZE + origin.row, origin.col)
}

fn dimension_error(dims: Dimensions) -> BlockError {
    BlockError::Dimension {
        width: dims.width,
        height: dims.height,
    }
}
