use image::RgbaImage;
use ndarray::{Array3, ArrayView1, ArrayViewMut1, Axis, Zip};
use serde::{Deserialize, Serialize};

use crate::consts::{CHANNELS, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{Result, StudioError};

/// An 8-bit RGBA pixel grid, row-major with the origin at the top-left.
///
/// Operations never mutate their input; each produces a new `Raster`.
/// `Clone` is a deep copy of the pixel buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    /// Pixel data, shape = (height, width, 4)
    pub(crate) data: Array3<u8>,
}

impl Raster {
    /// Fully transparent raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: Array3::zeros((height as usize, width as usize, CHANNELS)),
        }
    }

    /// Raster with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::from_fn(width, height, |_, _| rgba)
    }

    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> Self {
        let data = Array3::from_shape_fn(
            (height as usize, width as usize, CHANNELS),
            |(row, col, ch)| f(col as u32, row as u32)[ch],
        );
        Self { data }
    }

    /// Build a raster from a packed RGBA byte buffer.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(StudioError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * CHANNELS;
        if pixels.len() != expected {
            return Err(StudioError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        let data = Array3::from_shape_vec((height as usize, width as usize, CHANNELS), pixels)
            .map_err(|_| StudioError::InvalidDimensions { width, height })?;
        Ok(Self { data })
    }

    pub(crate) fn from_array(data: Array3<u8>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> u32 {
        self.data.dim().1 as u32
    }

    pub fn height(&self) -> u32 {
        self.data.dim().0 as u32
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// RGBA value at (`x`, `y`). Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let px = self.data.index_axis(Axis(0), y as usize);
        let px = px.index_axis(Axis(0), x as usize);
        [px[0], px[1], px[2], px[3]]
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let mut row = self.data.index_axis_mut(Axis(0), y as usize);
        row.index_axis_mut(Axis(0), x as usize)
            .assign(&ArrayView1::from(&rgba));
    }

    /// Packed RGBA bytes in row-major order.
    pub fn to_raw_vec(&self) -> Vec<u8> {
        self.data.iter().copied().collect()
    }

    /// True when every pixel has alpha 255.
    pub fn is_opaque(&self) -> bool {
        self.data
            .index_axis(Axis(2), crate::consts::ALPHA)
            .iter()
            .all(|&a| a == u8::MAX)
    }

    /// Apply `f` to every pixel, producing a new raster of the same size.
    ///
    /// Pixels are independent, so the rows are spread over the Rayon pool
    /// for large rasters without changing the result.
    pub(crate) fn map_pixels<F>(&self, f: F) -> Raster
    where
        F: Fn([u8; 4]) -> [u8; 4] + Sync + Send,
    {
        let mut out = Array3::<u8>::zeros(self.data.dim());
        let write = |mut dst: ArrayViewMut1<u8>, src: ArrayView1<u8>| {
            let px = f([src[0], src[1], src[2], src[3]]);
            dst.assign(&ArrayView1::from(&px));
        };

        let zip = Zip::from(out.lanes_mut(Axis(2))).and(self.data.lanes(Axis(2)));
        if self.pixel_count() >= PARALLEL_PIXEL_THRESHOLD {
            zip.par_for_each(write);
        } else {
            zip.for_each(write);
        }
        Raster::from_array(out)
    }
}

impl TryFrom<RgbaImage> for Raster {
    type Error = StudioError;

    /// Fails on an empty image or a buffer that does not match its dimensions.
    fn try_from(img: RgbaImage) -> Result<Self> {
        let (w, h) = img.dimensions();
        Self::from_rgba(w, h, img.into_raw())
    }
}

impl From<&Raster> for RgbaImage {
    fn from(raster: &Raster) -> Self {
        let (w, h) = raster.dimensions();
        RgbaImage::from_fn(w, h, |x, y| image::Rgba(raster.pixel(x, y)))
    }
}

/// A crop rectangle in raster-pixel coordinates.
///
/// Fields are signed: callers may pass rectangles that hang off any edge,
/// and `crop` clips them against the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl CropRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clip against a `src_w` x `src_h` source.
    ///
    /// Returns `(x, y, w, h)` or `None` when nothing of the rectangle survives.
    pub fn clipped(&self, src_w: u32, src_h: u32) -> Option<(u32, u32, u32, u32)> {
        let x = i64::from(self.x).max(0);
        let y = i64::from(self.y).max(0);
        let w = (i64::from(src_w) - x).min(i64::from(self.width));
        let h = (i64::from(src_h) - y).min(i64::from(self.height));
        if w <= 0 || h <= 0 {
            return None;
        }
        Some((x as u32, y as u32, w as u32, h as u32))
    }
}

impl std::fmt::Display for CropRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{} {}x{}", self.x, self.y, self.width, self.height)
    }
}
