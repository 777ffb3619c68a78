use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use studio_core::io::image_io::load_raster;

#[derive(Args)]
pub struct InfoArgs {
    /// Image file (PNG or JPEG)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", raster.width(), raster.height());
    println!("Pixels:      {}", raster.pixel_count());
    println!(
        "Alpha:       {}",
        if raster.is_opaque() {
            "opaque"
        } else {
            "translucent"
        }
    );

    Ok(())
}
