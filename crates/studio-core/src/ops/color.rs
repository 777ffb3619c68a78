use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R, SEPIA_MATRIX};
use crate::raster::Raster;

/// Replace R, G and B with BT.601 luminance. Alpha passes through.
pub fn grayscale(src: &Raster) -> Raster {
    src.map_pixels(|[r, g, b, a]| {
        let gray = (LUMINANCE_R * f64::from(r) + LUMINANCE_G * f64::from(g) + LUMINANCE_B * f64::from(b))
            as u8;
        [gray, gray, gray, a]
    })
}

/// `255 - channel` for R, G and B.
pub fn invert(src: &Raster) -> Raster {
    src.map_pixels(|[r, g, b, a]| [255 - r, 255 - g, 255 - b, a])
}

/// Fixed sepia tone matrix, each output channel clamped to [0, 255].
pub fn sepia(src: &Raster) -> Raster {
    src.map_pixels(|[r, g, b, a]| {
        let rgb = [f64::from(r), f64::from(g), f64::from(b)];
        let tone = |m: &[f64; 3]| (m[0] * rgb[0] + m[1] * rgb[1] + m[2] * rgb[2]).clamp(0.0, 255.0) as u8;
        [
            tone(&SEPIA_MATRIX[0]),
            tone(&SEPIA_MATRIX[1]),
            tone(&SEPIA_MATRIX[2]),
            a,
        ]
    })
}

/// Channel swizzle: R takes G, G takes B, B takes R.
pub fn funk(src: &Raster) -> Raster {
    src.map_pixels(|[r, g, b, a]| [g, b, r, a])
}
