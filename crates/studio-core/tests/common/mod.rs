#![allow(dead_code)]

use studio_core::raster::Raster;

/// Raster where each pixel encodes its own position: `[x, y, x + y, 255]`.
pub fn coded_raster(width: u32, height: u32) -> Raster {
    Raster::from_fn(width, height, |x, y| [x as u8, y as u8, (x + y) as u8, 255])
}

/// Raster with varying color and alpha, for channel-preservation checks.
pub fn gradient_raster(width: u32, height: u32) -> Raster {
    Raster::from_fn(width, height, |x, y| {
        [
            (x * 37 % 256) as u8,
            (y * 53 % 256) as u8,
            ((x * y) % 256) as u8,
            ((x * 11 + y * 7) % 256) as u8,
        ]
    })
}

pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Raster {
    Raster::filled(width, height, rgba)
}

/// Assert every pixel satisfies `check`, reporting the first failure.
pub fn assert_all_pixels(raster: &Raster, check: impl Fn(u32, u32, [u8; 4]) -> bool) {
    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let px = raster.pixel(x, y);
            assert!(check(x, y, px), "pixel ({x},{y}) = {px:?} failed check");
        }
    }
}
