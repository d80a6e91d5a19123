use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};

/// Rows of the sepia recombination, applied to (R, G, B)
pub const SEPIA_MATRIX: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// ITU-R 601 luma in 16.16 fixed point, rounded to nearest
pub fn luma(img: &DynamicImage) -> GrayImage {
    let rgb = img.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0.map(u32::from);
        Luma([((r * 19595 + g * 38470 + b * 7471 + 0x8000) >> 16) as u8])
    })
}

/// Single luminance channel expanded back to three equal channels
pub fn grayscale(img: &DynamicImage) -> DynamicImage {
    let gray = luma(img);
    DynamicImage::ImageRgb8(DynamicImage::ImageLuma8(gray).to_rgb8())
}

pub fn sepia_pixel(pixel: Rgb<u8>) -> Rgb<u8> {
    let [r, g, b] = pixel.0.map(f32::from);
    let mix = |row: [f32; 3]| (row[0] * r + row[1] * g + row[2] * b).clamp(0.0, 255.0) as u8;
    Rgb([mix(SEPIA_MATRIX[0]), mix(SEPIA_MATRIX[1]), mix(SEPIA_MATRIX[2])])
}

/// Fixed 3x3 channel matrix; alpha is dropped
pub fn sepia(img: &DynamicImage) -> DynamicImage {
    let rgb = img.to_rgb8();
    let toned = RgbImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        sepia_pixel(*rgb.get_pixel(x, y))
    });
    DynamicImage::ImageRgb8(toned)
}
