use image::{DynamicImage, GrayImage};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;

use crate::filters::color::luma;

/// Gaussian low-pass over every channel, alpha included
pub fn apply_blur(img: &DynamicImage, sigma: f32) -> DynamicImage {
    if img.color().has_alpha() {
        DynamicImage::ImageRgba8(gaussian_blur_f32(&img.to_rgba8(), sigma))
    } else {
        DynamicImage::ImageRgb8(gaussian_blur_f32(&img.to_rgb8(), sigma))
    }
}

/// Detect edges using Canny on the luminance channel
pub fn detect_edges(img: &GrayImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    canny(img, low_threshold, high_threshold)
}

/// Edge map replicated across three channels
pub fn edges_rgb(img: &DynamicImage, low_threshold: f32, high_threshold: f32) -> DynamicImage {
    let edges = detect_edges(&luma(img), low_threshold, high_threshold);
    DynamicImage::ImageRgb8(DynamicImage::ImageLuma8(edges).to_rgb8())
}
