use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::info;

use crate::consts::{DEFAULT_JPEG_QUALITY, JPEG_QUALITY_MAX, JPEG_QUALITY_MIN};
use crate::error::{Result, StudioError};
use crate::raster::Raster;

/// Decode any format the `image` crate understands into an RGBA raster.
pub fn load_raster(path: &Path) -> Result<Raster> {
    let img = image::open(path)?;
    let raster = Raster::try_from(img.to_rgba8())?;
    info!(
        path = %path.display(),
        width = raster.width(),
        height = raster.height(),
        "Decoded raster"
    );
    Ok(raster)
}

/// Save as 8-bit RGBA PNG. A missing `.png` extension is appended.
pub fn save_png(raster: &Raster, path: &Path) -> Result<PathBuf> {
    let path = ensure_extension(path, "png");
    let img = RgbaImage::from(raster);
    img.save_with_format(&path, ImageFormat::Png)?;
    info!(path = %path.display(), "Saved PNG");
    Ok(path)
}

/// Save as baseline JPEG. Alpha is discarded.
///
/// `quality` must lie in [0.1, 1.0]; it maps onto the encoder's 1..=100 scale.
/// A missing `.jpg`/`.jpeg` extension gets `.jpg` appended.
pub fn save_jpeg(raster: &Raster, path: &Path, quality: f32) -> Result<PathBuf> {
    let quality = validate_quality(quality)?;
    let path = if has_extension(path, "jpeg") {
        path.to_path_buf()
    } else {
        ensure_extension(path, "jpg")
    };

    let rgb = DynamicImage::ImageRgba8(RgbaImage::from(raster)).to_rgb8();
    let writer = BufWriter::new(File::create(&path)?);
    let encoder = JpegEncoder::new_with_quality(writer, (quality * 100.0).round() as u8);
    rgb.write_with_encoder(encoder)?;
    info!(path = %path.display(), quality, "Saved JPEG");
    Ok(path)
}

/// Pick the format from the extension: PNG, JPEG at the default quality,
/// or PNG with `.png` appended for anything else.
pub fn save_auto(raster: &Raster, path: &Path) -> Result<PathBuf> {
    if has_extension(path, "jpg") || has_extension(path, "jpeg") {
        save_jpeg(raster, path, DEFAULT_JPEG_QUALITY)
    } else {
        save_png(raster, path)
    }
}

/// Like [`save_auto`], with an explicit JPEG quality.
pub fn save_with_quality(raster: &Raster, path: &Path, quality: f32) -> Result<PathBuf> {
    if has_extension(path, "jpg") || has_extension(path, "jpeg") {
        save_jpeg(raster, path, quality)
    } else {
        save_png(raster, path)
    }
}

/// The path [`save_auto`] and [`save_with_quality`] actually write to.
pub fn auto_save_path(path: &Path) -> PathBuf {
    if has_extension(path, "jpg") || has_extension(path, "jpeg") {
        path.to_path_buf()
    } else {
        ensure_extension(path, "png")
    }
}

/// Reject JPEG quality values outside [0.1, 1.0].
pub fn validate_quality(quality: f32) -> Result<f32> {
    if (JPEG_QUALITY_MIN..=JPEG_QUALITY_MAX).contains(&quality) {
        Ok(quality)
    } else {
        Err(StudioError::InvalidQuality(quality))
    }
}

/// `path` unchanged if it already ends in `.ext` (any case), otherwise
/// with `.ext` appended to the full file name.
pub fn ensure_extension(path: &Path, ext: &str) -> PathBuf {
    if has_extension(path, ext) {
        return path.to_path_buf();
    }
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(ext);
    path.with_file_name(name)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}
