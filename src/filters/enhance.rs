//! Enhancement curves: each blends the image with a flat "degenerate"
//! image by a factor. 0.0 yields the degenerate image, 1.0 the input.

use image::{DynamicImage, Pixel};

use crate::filters::color::luma;

/// Blend every colour channel toward `pivot`; alpha is carried over
fn blend_toward(img: &DynamicImage, pivot: f32, factor: f32) -> DynamicImage {
    let curve = |v: u8| (pivot + factor * (f32::from(v) - pivot)).clamp(0.0, 255.0) as u8;

    if img.color().has_alpha() {
        let mut rgba = img.to_rgba8();
        for pixel in rgba.pixels_mut() {
            pixel.apply_without_alpha(curve);
        }
        DynamicImage::ImageRgba8(rgba)
    } else {
        let mut rgb = img.to_rgb8();
        for pixel in rgb.pixels_mut() {
            pixel.apply(curve);
        }
        DynamicImage::ImageRgb8(rgb)
    }
}

/// Mean luminance rounded to the nearest level
pub fn mean_luminance(img: &DynamicImage) -> f32 {
    let gray = luma(img);
    let count = u64::from(gray.width()) * u64::from(gray.height());
    if count == 0 {
        return 0.0;
    }
    let sum: u64 = gray.pixels().map(|p| u64::from(p[0])).sum();
    (sum as f64 / count as f64 + 0.5).floor() as f32
}

/// Scale toward black: > 1 brightens, < 1 darkens
pub fn brightness(img: &DynamicImage, factor: f32) -> DynamicImage {
    blend_toward(img, 0.0, factor)
}

/// Scale around the mean gray level of the image
pub fn contrast(img: &DynamicImage, factor: f32) -> DynamicImage {
    blend_toward(img, mean_luminance(img), factor)
}
