// Blur an image by discarding high DCT frequencies in every 8x8 block

use anyhow::{Context, Result};
use blockdct::consts::DEFAULT_CUTOFF;
use blockdct::quality::{mean_intensity, psnr};
use blockdct::{io, BlockCodec, EdgePolicy, SampleConversion, TransformKernel, TransformOptions};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use simplelog::{Config, LevelFilter, SimpleLogger};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kernel {
    Separable,
    Reference,
}

impl From<Kernel> for TransformKernel {
    fn from(kernel: Kernel) -> Self {
        match kernel {
            Kernel::Separable => TransformKernel::Separable,
            Kernel::Reference => TransformKernel::Reference,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Conversion {
    Truncate,
    Round,
}

impl From<Conversion> for SampleConversion {
    fn from(conversion: Conversion) -> Self {
        match conversion {
            Conversion::Truncate => SampleConversion::Truncate,
            Conversion::Round => SampleConversion::Round,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Edges {
    /// Fail unless width and height are multiples of 8
    Reject,
    /// Pad partial blocks by repeating the last row/column
    Replicate,
}

impl From<Edges> for EdgePolicy {
    fn from(edges: Edges) -> Self {
        match edges {
            Edges::Reject => EdgePolicy::Reject,
            Edges::Replicate => EdgePolicy::Replicate,
        }
    }
}

/// Blur an image by keeping only the low-frequency DCT coefficients of each 8x8 block
#[derive(Debug, Parser)]
#[command(name = "dct-blur", version)]
struct Args {
    /// Image to read
    input: PathBuf,

    /// Where to write the blurred image (format from the extension)
    output: PathBuf,

    /// Keep coefficients with both indices below this value (1..=8, 8 is lossless)
    #[arg(long, default_value_t = DEFAULT_CUTOFF)]
    cutoff: usize,

    #[arg(long, value_enum, default_value_t = Kernel::Separable)]
    kernel: Kernel,

    /// How reconstructed values become samples
    #[arg(long, value_enum, default_value_t = Conversion::Truncate)]
    conversion: Conversion,

    /// Handling of images whose size is not a multiple of 8
    #[arg(long, value_enum, default_value_t = Edges::Reject)]
    edges: Edges,

    /// Run on a single thread
    #[arg(long)]
    sequential: bool,

    /// Debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Warnings only
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn options(&self) -> TransformOptions {
        TransformOptions::new()
            .parallel(!self.sequential)
            .kernel(self.kernel.into())
            .conversion(self.conversion.into())
            .edge_policy(self.edges.into())
            .cutoff(self.cutoff)
    }

    fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    SimpleLogger::init(args.level(), Config::default())?;

    let raster = io::load_raster(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    info!(
        "{}: {}x{}",
        args.input.display(),
        raster.width(),
        raster.height()
    );

    let codec = BlockCodec::new(args.options());

    let start = Instant::now();
    let coeffs = codec.forward(&raster).context("forward transform failed")?;
    let forward_time = start.elapsed();

    let start = Instant::now();
    let blurred = codec
        .lossy_inverse_default(&coeffs)
        .context("inverse transform failed")?;
    let inverse_time = start.elapsed();

    io::save_raster(&blurred, &args.output)
        .with_context(|| format!("failed to save {}", args.output.display()))?;

    debug!(
        "mean intensity: input {:.3}, output {:.3}",
        mean_intensity(&raster)?,
        mean_intensity(&blurred)?
    );
    let quality = psnr(&raster, &blurred)?;
    info!(
        "cutoff {}: forward {:?}, inverse {:?}, PSNR {:.2} dB",
        args.cutoff, forward_time, inverse_time, quality
    );
    info!("wrote {}", args.output.display());

    Ok(())
}
