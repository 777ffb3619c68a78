use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use studio_core::consts::DEFAULT_JPEG_QUALITY;
use studio_core::document::Document;
use studio_core::io::image_io::{load_raster, save_with_quality, validate_quality};
use studio_core::ops::Operation;
use studio_core::raster::CropRect;

#[derive(Args)]
pub struct ApplyArgs {
    /// Input image file (PNG or JPEG)
    pub file: PathBuf,

    /// Built-in color filter: None, Grayscale, Invert, Sepia or Funk
    #[arg(long)]
    pub filter: Option<String>,

    /// Brightness adjustment (-100 to 100)
    #[arg(long, allow_hyphen_values = true)]
    pub brightness: Option<i32>,

    /// Contrast adjustment (-100 to 100)
    #[arg(long, allow_hyphen_values = true)]
    pub contrast: Option<i32>,

    /// Gaussian blur radius in pixels (0 disables)
    #[arg(long, default_value = "0")]
    pub blur: i32,

    /// Apply the 3x3 sharpen kernel
    #[arg(long)]
    pub sharpen: bool,

    /// Mirror left to right
    #[arg(long)]
    pub flip_h: bool,

    /// Mirror top to bottom
    #[arg(long)]
    pub flip_v: bool,

    /// Rotate clockwise by this many degrees
    #[arg(long, allow_hyphen_values = true)]
    pub rotate: Option<f64>,

    /// Crop rectangle in pixels: "x,y,width,height"
    #[arg(long)]
    pub crop: Option<String>,

    /// JPEG quality (0.1 to 1.0), used for .jpg/.jpeg output
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY)]
    pub quality: f32,

    /// Output file path
    #[arg(short, long, default_value = "edited.png")]
    pub output: PathBuf,
}

pub fn run(args: &ApplyArgs) -> Result<()> {
    validate_quality(args.quality).context("Invalid --quality")?;
    let op = build_operation(args)?;

    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    println!("Loaded {}x{} image", raster.width(), raster.height());

    let mut document = Document::new();
    let label = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    document.load(&raster, label);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    spinner.set_message(op.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = document
        .apply(&op)
        .context("No image loaded")?;
    spinner.finish_with_message(format!("Applied {op}"));

    let saved = save_with_quality(result, &args.output, args.quality)?;
    println!(
        "Saved {}x{} image to {}",
        result.width(),
        result.height(),
        saved.display()
    );

    Ok(())
}

/// Compose the requested edits in a fixed order: color filter, brightness,
/// contrast, blur, sharpen, flips, rotation, crop.
fn build_operation(args: &ApplyArgs) -> Result<Operation> {
    let filter = match args.filter.as_deref() {
        Some(name) => Some(Operation::parse_name(name)?),
        None => None,
    };
    let crop = match args.crop.as_deref() {
        Some(spec) => Some(Operation::crop(parse_crop(spec)?)),
        None => None,
    };

    Ok(Operation::compose([
        filter,
        args.brightness
            .map(|b| Operation::brightness(b as f32 / 100.0)),
        args.contrast.map(|c| Operation::contrast(c as f32 / 100.0)),
        (args.blur > 0).then(|| Operation::gaussian_blur(args.blur)),
        args.sharpen.then(Operation::sharpen),
        args.flip_h.then(Operation::flip_h),
        args.flip_v.then(Operation::flip_v),
        args.rotate.map(Operation::rotate),
        crop,
    ]))
}

fn parse_crop(spec: &str) -> Result<CropRect> {
    let parts: Vec<i32> = spec
        .split(',')
        .map(|s| s.trim().parse::<i32>())
        .collect::<std::result::Result<_, _>>()
        .context("Invalid crop format (expected 'x,y,width,height')")?;
    if parts.len() != 4 {
        anyhow::bail!("Crop requires exactly 4 values: x,y,width,height");
    }
    Ok(CropRect::new(parts[0], parts[1], parts[2], parts[3]))
}
