//! Geometric transforms: rotation about the center, mirroring, cropping.
//!
//! Rotation uses inverse mapping. Each destination pixel center is rotated
//! back into source space and sampled with Catmull-Rom bicubic weights:
//!
//! ```text
//! src_x =  dx * cos + dy * sin + src_cx
//! src_y = -dx * sin + dy * cos + src_cy
//! ```
//!
//! where `(dx, dy)` is the destination pixel center relative to the
//! destination center. Positive angles turn the image clockwise on screen
//! (y grows downward).

use ndarray::{s, Array3, ArrayViewMut2, Axis};
use rayon::prelude::*;

use crate::consts::{CHANNELS, PARALLEL_PIXEL_THRESHOLD};
use crate::raster::{CropRect, Raster};

/// Fold any angle into [0, 360). Non-finite angles become 0.
pub fn normalize_degrees(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Canvas size that holds a `width` x `height` raster rotated by `degrees`.
pub fn rotated_bounds(width: u32, height: u32, degrees: f64) -> (u32, u32) {
    let normalized = normalize_degrees(degrees);
    if normalized == 0.0 || normalized == 180.0 {
        return (width, height);
    }
    if normalized == 90.0 || normalized == 270.0 {
        return (height, width);
    }

    let theta = normalized.to_radians();
    let (sin, cos) = (theta.sin().abs(), theta.cos().abs());
    let (w, h) = (f64::from(width), f64::from(height));
    let new_w = (w * cos + h * sin).floor() as u32;
    let new_h = (h * cos + w * sin).floor() as u32;
    (new_w, new_h)
}

/// Rotate about the image center, expanding the canvas to the rotated
/// bounding box. Uncovered pixels are fully transparent.
///
/// Quarter turns are exact pixel permutations.
pub fn rotate(src: &Raster, degrees: f64) -> Raster {
    let normalized = normalize_degrees(degrees);
    let mut view = src.data.view();
    match normalized {
        n if n == 0.0 => return src.clone(),
        n if n == 90.0 => {
            view.swap_axes(0, 1);
            view.invert_axis(Axis(1));
        }
        n if n == 180.0 => {
            view.invert_axis(Axis(0));
            view.invert_axis(Axis(1));
        }
        n if n == 270.0 => {
            view.swap_axes(0, 1);
            view.invert_axis(Axis(0));
        }
        _ => return rotate_bicubic(src, normalized),
    }
    Raster::from_array(view.as_standard_layout().into_owned())
}

fn rotate_bicubic(src: &Raster, degrees: f64) -> Raster {
    let (src_w, src_h) = src.dimensions();
    let (dst_w, dst_h) = rotated_bounds(src_w, src_h, degrees);

    let theta = degrees.to_radians();
    let (sin, cos) = (theta.sin(), theta.cos());
    let (src_cx, src_cy) = (f64::from(src_w) / 2.0, f64::from(src_h) / 2.0);
    let (dst_cx, dst_cy) = (f64::from(dst_w) / 2.0, f64::from(dst_h) / 2.0);

    let mut out = Array3::<u8>::zeros((dst_h as usize, dst_w as usize, CHANNELS));

    let fill_row = |row: usize, mut dst: ArrayViewMut2<u8>| {
        let dy = row as f64 + 0.5 - dst_cy;
        for col in 0..dst_w as usize {
            let dx = col as f64 + 0.5 - dst_cx;
            let sx = dx * cos + dy * sin + src_cx;
            let sy = -dx * sin + dy * cos + src_cy;
            if let Some(px) = sample_bicubic(src, sx, sy) {
                for (ch, v) in px.into_iter().enumerate() {
                    dst[[col, ch]] = v;
                }
            }
        }
    };

    if dst_w as usize * dst_h as usize >= PARALLEL_PIXEL_THRESHOLD {
        out.axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, dst)| fill_row(row, dst));
    } else {
        for (row, dst) in out.axis_iter_mut(Axis(0)).enumerate() {
            fill_row(row, dst);
        }
    }

    Raster::from_array(out)
}

/// Catmull-Rom weights for the four taps around `t` in [0, 1).
#[inline]
fn catmull_rom_weights(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        -0.5 * t3 + t2 - 0.5 * t,
        1.5 * t3 - 2.5 * t2 + 1.0,
        -1.5 * t3 + 2.0 * t2 + 0.5 * t,
        0.5 * t3 - 0.5 * t2,
    ]
}

/// Sample at continuous source coordinates (pixel edges at integers).
///
/// Returns `None` outside the source rectangle. Taps that fall past the
/// border reuse the nearest edge pixel.
fn sample_bicubic(src: &Raster, x: f64, y: f64) -> Option<[u8; 4]> {
    let (w, h) = (src.width() as i64, src.height() as i64);
    if x < 0.0 || y < 0.0 || x >= w as f64 || y >= h as f64 {
        return None;
    }

    let fx = x - 0.5;
    let fy = y - 0.5;
    let x0 = fx.floor();
    let y0 = fy.floor();
    let wx = catmull_rom_weights(fx - x0);
    let wy = catmull_rom_weights(fy - y0);
    let (x0, y0) = (x0 as i64, y0 as i64);

    let mut acc = [0.0f64; CHANNELS];
    for (j, &wyj) in wy.iter().enumerate() {
        let sy = (y0 - 1 + j as i64).clamp(0, h - 1) as usize;
        for (i, &wxi) in wx.iter().enumerate() {
            let sx = (x0 - 1 + i as i64).clamp(0, w - 1) as usize;
            let weight = wxi * wyj;
            for (ch, a) in acc.iter_mut().enumerate() {
                *a += f64::from(src.data[[sy, sx, ch]]) * weight;
            }
        }
    }

    Some(acc.map(|v| v.round().clamp(0.0, 255.0) as u8))
}

/// Mirror about the vertical center axis.
pub fn flip_h(src: &Raster) -> Raster {
    let mut view = src.data.view();
    view.invert_axis(Axis(1));
    Raster::from_array(view.as_standard_layout().into_owned())
}

/// Mirror about the horizontal center axis.
pub fn flip_v(src: &Raster) -> Raster {
    let mut view = src.data.view();
    view.invert_axis(Axis(0));
    Raster::from_array(view.as_standard_layout().into_owned())
}

/// Cut out `rect` after clipping it to the source.
///
/// A rectangle with nothing left after clipping returns the source unchanged.
pub fn crop(src: &Raster, rect: &CropRect) -> Raster {
    let Some((x, y, w, h)) = rect.clipped(src.width(), src.height()) else {
        return src.clone();
    };
    let (x, y) = (x as usize, y as usize);
    let region = src
        .data
        .slice(s![y..y + h as usize, x..x + w as usize, ..])
        .to_owned();
    Raster::from_array(region)
}
