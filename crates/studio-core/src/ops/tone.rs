use crate::raster::Raster;

/// Add `255 * delta` to R, G and B.
///
/// `delta` is clamped into -1.0..=1.0 and NaN counts as 0.
pub fn brightness(src: &Raster, delta: f32) -> Raster {
    rescale(src, 1.0, 255.0 * clamp_unit(delta))
}

/// Scale R, G and B around mid-grey.
///
/// Gain is `1 + amount` and bias `128 * (1 - gain)`, so 0.0 leaves the
/// raster unchanged and -1.0 flattens everything to 128. `amount` is
/// clamped like the brightness delta.
pub fn contrast(src: &Raster, amount: f32) -> Raster {
    let gain = 1.0 + clamp_unit(amount);
    rescale(src, gain, 128.0 * (1.0 - gain))
}

/// `clamp(scale * channel + offset)` on R, G and B; alpha untouched.
///
/// The linear result is clamped to [0, 255] first and then truncated, so
/// a zero offset with unit scale is an exact identity.
fn rescale(src: &Raster, scale: f32, offset: f32) -> Raster {
    let apply = |v: u8| (scale * f32::from(v) + offset).clamp(0.0, 255.0) as u8;
    src.map_pixels(|[r, g, b, a]| [apply(r), apply(g), apply(b), a])
}

/// Clamp a tone parameter into -1.0..=1.0; NaN becomes 0.
pub fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(-1.0, 1.0)
    }
}
