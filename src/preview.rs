use image::DynamicImage;
use image::imageops::FilterType;

use crate::config::CANVAS_PADDING;

/// Dimensions that fit `(width, height)` inside a `bound` square, never upscaling
pub fn fit_dimensions(width: u32, height: u32, bound: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= bound {
        return (width, height);
    }
    // floor(d * bound / longest), exact in integers
    let scale = |d: u32| ((u64::from(d) * u64::from(bound)) / u64::from(longest)).max(1) as u32;
    (scale(width), scale(height))
}

/// Downscale for display, preserving aspect ratio (Lanczos resampling)
pub fn scale_to_fit(img: &DynamicImage, bound: u32) -> DynamicImage {
    let (width, height) = (img.width(), img.height());
    let (new_w, new_h) = fit_dimensions(width, height, bound);
    if (new_w, new_h) == (width, height) {
        return img.clone();
    }
    img.resize_exact(new_w, new_h, FilterType::Lanczos3)
}

/// Screen placement of the two previews on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLayout {
    pub bound: u32,
    pub margin: u32,
}

impl PreviewLayout {
    pub fn new(bound: u32, margin: u32) -> Self {
        Self { bound, margin }
    }

    pub fn original_origin(&self) -> (u32, u32) {
        (0, 0)
    }

    pub fn filtered_origin(&self) -> (u32, u32) {
        (self.bound.saturating_add(self.margin), 0)
    }

    /// Canvas large enough for both previews side by side
    pub fn canvas_size(&self) -> (u32, u32) {
        let width = self.bound.saturating_mul(2).saturating_add(CANVAS_PADDING);
        (width, self.bound)
    }
}
