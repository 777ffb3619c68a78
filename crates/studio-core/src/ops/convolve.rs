use ndarray::{Array3, ArrayViewMut2, Axis};
use rayon::prelude::*;

use crate::consts::{CHANNELS, PARALLEL_PIXEL_THRESHOLD, SHARPEN_KERNEL};
use crate::raster::Raster;

/// Normalized 1-D Gaussian of length `2 * radius + 1`, sigma = `radius / 2 + 0.5`.
pub fn gaussian_kernel(radius: u32) -> Vec<f32> {
    let size = 2 * radius as usize + 1;
    let sigma = radius as f32 / 2.0 + 0.5;
    let s2 = 2.0 * sigma * sigma;
    let mut kernel = vec![0.0f32; size];
    let mut sum = 0.0f32;

    for (i, k) in kernel.iter_mut().enumerate() {
        let x = i as f32 - radius as f32;
        *k = (-x * x / s2).exp();
        sum += *k;
    }

    for v in &mut kernel {
        *v /= sum;
    }

    kernel
}

/// Separable Gaussian blur: a horizontal pass, then a vertical pass over
/// the 8-bit result of the first.
///
/// Radius 0 returns an exact copy.
pub fn gaussian_blur(src: &Raster, radius: u32) -> Raster {
    if radius == 0 {
        return src.clone();
    }
    let kernel = gaussian_kernel(radius);
    let horizontal = convolve(&src.data, &kernel, kernel.len(), 1);
    Raster::from_array(convolve(&horizontal, &kernel, 1, kernel.len()))
}

/// Single 3x3 pass of the fixed sharpen kernel.
pub fn sharpen(src: &Raster) -> Raster {
    Raster::from_array(convolve(&src.data, &SHARPEN_KERNEL, 3, 3))
}

/// Convolve every channel (alpha included) with a `kw` x `kh` kernel.
///
/// Output pixels whose kernel footprint would leave the source keep their
/// source value unchanged; no sample is ever read out of bounds.
fn convolve(src: &Array3<u8>, kernel: &[f32], kw: usize, kh: usize) -> Array3<u8> {
    let (h, w, _) = src.dim();
    let (rx, ry) = (kw / 2, kh / 2);
    let mut out = src.clone();

    if w < kw || h < kh {
        return out;
    }

    let fill_row = |row: usize, mut dst: ArrayViewMut2<u8>| {
        if row < ry || row + ry >= h {
            return;
        }
        for col in rx..w - rx {
            for ch in 0..CHANNELS {
                let mut sum = 0.0f32;
                for ky in 0..kh {
                    for kx in 0..kw {
                        let kv = kernel[ky * kw + kx];
                        if kv != 0.0 {
                            sum += f32::from(src[[row + ky - ry, col + kx - rx, ch]]) * kv;
                        }
                    }
                }
                dst[[col, ch]] = sum.round().clamp(0.0, 255.0) as u8;
            }
        }
    };

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        out.axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, dst)| fill_row(row, dst));
    } else {
        for (row, dst) in out.axis_iter_mut(Axis(0)).enumerate() {
            fill_row(row, dst);
        }
    }

    out
}
