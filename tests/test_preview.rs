//! Tests for the preview scaler and canvas placement.

mod common;

use image::{ColorType, DynamicImage, GenericImageView};
use imgfilter::config::MAX_PREVIEW_LIMIT;
use imgfilter::preview::fit_dimensions;
use imgfilter::{PreviewLayout, scale_to_fit};

use common::*;

#[test]
fn test_landscape_fits_bound() {
    assert_eq!(fit_dimensions(500, 300, 400), (400, 240));
    assert_eq!(fit_dimensions(1920, 1080, 400), (400, 225));
}

#[test]
fn test_portrait_fits_bound() {
    assert_eq!(fit_dimensions(300, 1200, 400), (100, 400));
}

#[test]
fn test_never_upscales() {
    assert_eq!(fit_dimensions(300, 200, 400), (300, 200));
    assert_eq!(fit_dimensions(400, 400, 400), (400, 400));
    assert_eq!(fit_dimensions(1, 1, 400), (1, 1));
}

#[test]
fn test_thin_image_keeps_one_pixel() {
    assert_eq!(fit_dimensions(2000, 1, 400), (400, 1));
}

#[test]
fn test_bound_and_aspect_hold_across_sizes() {
    let sizes = [(401, 400), (640, 480), (333, 999), (1000, 7), (4000, 3000), (257, 1023)];
    for &(w, h) in &sizes {
        for &bound in &[1u32, 50, 256, 400] {
            let (out_w, out_h) = fit_dimensions(w, h, bound);
            assert!(out_w.max(out_h) <= bound.max(1), "{}x{} @ {}", w, h, bound);
            assert!(out_w >= 1 && out_h >= 1);

            // Flooring each side loses less than one pixel, so the
            // cross products differ by at most the longer input side
            // unless a side was clamped up to one pixel.
            if (u64::from(w.min(h)) * u64::from(bound)) >= u64::from(w.max(h)) {
                let skew =
                    (i64::from(out_w) * i64::from(h) - i64::from(out_h) * i64::from(w)).abs();
                assert!(skew <= i64::from(w.max(h)), "{}x{} @ {}", w, h, bound);
            }
        }
    }
}

#[test]
fn test_scale_to_fit_resizes_pixels() {
    let img = DynamicImage::ImageRgb8(gradient(500, 300));
    let preview = scale_to_fit(&img, 400);
    assert_eq!(preview.dimensions(), (400, 240));
    assert_eq!(preview.color(), ColorType::Rgb8);
}

#[test]
fn test_scale_to_fit_small_image_is_identical() {
    let img = DynamicImage::ImageRgb8(gradient(40, 30));
    let preview = scale_to_fit(&img, 400);
    assert_eq!(preview, img);
}

#[test]
fn test_layout_offsets() {
    let layout = PreviewLayout::new(400, 20);
    assert_eq!(layout.original_origin(), (0, 0));
    assert_eq!(layout.filtered_origin(), (420, 0));
    assert_eq!(layout.canvas_size(), (850, 400));
}

#[test]
fn test_preview_bound_is_capped() {
    let settings = Settings::new().with_max_preview(u32::MAX);
    assert_eq!(settings.max_preview, MAX_PREVIEW_LIMIT);
    assert_eq!(Settings::new().with_max_preview(0).max_preview, 1);

    let layout = Dispatcher::new(&settings).layout();
    assert_eq!(
        layout.canvas_size(),
        (2 * MAX_PREVIEW_LIMIT + 50, MAX_PREVIEW_LIMIT)
    );
    assert_eq!(layout.filtered_origin(), (MAX_PREVIEW_LIMIT + 20, 0));
}

#[test]
fn test_layout_saturates_instead_of_overflowing() {
    let layout = PreviewLayout::new(u32::MAX, 20);
    assert_eq!(layout.filtered_origin(), (u32::MAX, 0));
    assert_eq!(layout.canvas_size(), (u32::MAX, u32::MAX));
}
