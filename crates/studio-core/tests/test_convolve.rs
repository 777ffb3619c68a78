mod common;

use approx::assert_relative_eq;

use studio_core::ops::convolve::{gaussian_blur, gaussian_kernel, sharpen};
use studio_core::ops::Operation;
use studio_core::raster::Raster;

use common::{assert_all_pixels, gradient_raster, solid};

fn impulse(size: u32, background: [u8; 4], spike: [u8; 4]) -> Raster {
    let c = size / 2;
    Raster::from_fn(size, size, |x, y| if x == c && y == c { spike } else { background })
}

// ---------------------------------------------------------------------------
// kernel
// ---------------------------------------------------------------------------

#[test]
fn test_gaussian_kernel_shape() {
    for radius in [1u32, 2, 5, 10] {
        let k = gaussian_kernel(radius);
        assert_eq!(k.len(), 2 * radius as usize + 1);
        assert_relative_eq!(k.iter().sum::<f32>(), 1.0, epsilon = 1e-5);
        let center = radius as usize;
        for i in 0..center {
            assert_relative_eq!(k[i], k[k.len() - 1 - i], epsilon = 1e-7);
            assert!(k[i] < k[i + 1], "kernel must rise toward the center");
        }
    }
}

#[test]
fn test_gaussian_kernel_radius_one_weights() {
    // sigma = 1.0: [e^-0.5, 1, e^-0.5] normalized
    let k = gaussian_kernel(1);
    let side = (-0.5f32).exp();
    let sum = 1.0 + 2.0 * side;
    assert_relative_eq!(k[0], side / sum, epsilon = 1e-6);
    assert_relative_eq!(k[1], 1.0 / sum, epsilon = 1e-6);
}

// ---------------------------------------------------------------------------
// gaussian blur
// ---------------------------------------------------------------------------

#[test]
fn test_blur_radius_zero_equals_none() {
    let src = gradient_raster(20, 11);
    assert_eq!(Operation::gaussian_blur(0).apply(&src), Operation::none().apply(&src));
    assert_eq!(gaussian_blur(&src, 0), src);
}

#[test]
fn test_negative_radius_is_identity() {
    let op = Operation::gaussian_blur(-4);
    assert_eq!(op, Operation::GaussianBlur { radius: 0 });
    assert!(op.is_identity());
    let src = gradient_raster(6, 6);
    assert_eq!(op.apply(&src), src);
}

#[test]
fn test_blur_uniform_is_unchanged() {
    let src = solid(15, 12, [90, 180, 30, 200]);
    assert_eq!(gaussian_blur(&src, 3), src);
}

#[test]
fn test_blur_spreads_impulse() {
    let src = impulse(9, [0, 0, 0, 255], [255, 255, 255, 255]);
    let out = gaussian_blur(&src, 1);
    let center = out.pixel(4, 4);
    assert!(center[0] > 0 && center[0] < 255, "center = {center:?}");
    assert!(out.pixel(3, 4)[0] > 0);
    assert!(out.pixel(4, 3)[0] > 0);
    assert_eq!(out.pixel(3, 4), out.pixel(5, 4));
    assert_eq!(out.pixel(4, 3), out.pixel(4, 5));
    assert_eq!(out.pixel(0, 0), [0, 0, 0, 255]);
    // Opaque alpha is convolved too and stays opaque.
    assert_all_pixels(&out, |_, _, px| px[3] == 255);
}

#[test]
fn test_blur_keeps_corner_pixels() {
    let src = gradient_raster(10, 10);
    let out = gaussian_blur(&src, 2);
    for (x, y) in [(0, 0), (1, 1), (9, 0), (0, 9), (8, 8), (9, 9)] {
        assert_eq!(out.pixel(x, y), src.pixel(x, y), "corner ({x},{y})");
    }
}

#[test]
fn test_blur_larger_than_raster_is_identity() {
    let src = gradient_raster(4, 4);
    assert_eq!(gaussian_blur(&src, 3), src);
}

#[test]
fn test_blur_deterministic() {
    let src = gradient_raster(300, 250);
    assert_eq!(gaussian_blur(&src, 2), gaussian_blur(&src, 2));
}

// ---------------------------------------------------------------------------
// sharpen
// ---------------------------------------------------------------------------

#[test]
fn test_sharpen_uniform_is_unchanged() {
    let src = solid(7, 5, [10, 120, 250, 255]);
    assert_eq!(sharpen(&src), src);
}

#[test]
fn test_sharpen_kernel_values() {
    let src = impulse(5, [100, 100, 100, 255], [150, 150, 150, 255]);
    let out = sharpen(&src);
    // 5*150 - 4*100 = 350, clamped
    assert_eq!(out.pixel(2, 2), [255, 255, 255, 255]);
    // 5*100 - 150 - 3*100 = 50
    assert_eq!(out.pixel(2, 1), [50, 50, 50, 255]);
    assert_eq!(out.pixel(1, 1), [100, 100, 100, 255]);
}

#[test]
fn test_sharpen_leaves_border_untouched() {
    let src = gradient_raster(6, 6);
    let out = sharpen(&src);
    for i in 0..6 {
        assert_eq!(out.pixel(i, 0), src.pixel(i, 0));
        assert_eq!(out.pixel(i, 5), src.pixel(i, 5));
        assert_eq!(out.pixel(0, i), src.pixel(0, i));
        assert_eq!(out.pixel(5, i), src.pixel(5, i));
    }
}
