#![allow(dead_code)]

use image::{DynamicImage, ImageBuffer, Rgb, RgbImage, Rgba};
use imgfilter::{Command, Dispatcher, Settings};
use tempfile::{NamedTempFile, TempDir};

/// Horizontal red / vertical green gradient with constant blue
pub fn gradient(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        let r = (x * 255 / (width - 1).max(1)) as u8;
        let g = (y * 255 / (height - 1).max(1)) as u8;
        Rgb([r, g, 128])
    })
}

pub fn solid(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_pixel(width, height, Rgb(color)))
}

pub fn solid_rgba(width: u32, height: u32, color: [u8; 4]) -> DynamicImage {
    DynamicImage::ImageRgba8(ImageBuffer::from_pixel(width, height, Rgba(color)))
}

/// Dark square in the middle of a white field, for edge detection
pub fn square_on_white(size: u32) -> DynamicImage {
    let lo = size / 4;
    let hi = size - size / 4;
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(size, size, |x, y| {
        if (lo..hi).contains(&x) && (lo..hi).contains(&y) {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    }))
}

/// Writes a gradient PNG of the given size into a temp file.
/// The file is removed when dropped.
pub fn create_test_image(width: u32, height: u32) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    gradient(width, height)
        .save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// A file with an image extension but garbage content
pub fn create_corrupt_image() -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp file");
    std::fs::write(file.path(), b"definitely not a png").expect("Failed to write temp file");
    file
}

/// Dispatcher with default settings and an image already opened
pub fn loaded_dispatcher(width: u32, height: u32) -> (Dispatcher, NamedTempFile) {
    let img_file = create_test_image(width, height);
    let mut dispatcher = Dispatcher::new(&Settings::default());
    let outcome = dispatcher.dispatch(Command::Open(img_file.path().to_path_buf()));
    assert!(outcome.notice.is_none(), "fixture image failed to open");
    (dispatcher, img_file)
}

pub fn scratch_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}
