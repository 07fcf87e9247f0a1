//! Test fixtures and constants.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

/// A few entries in the xkcd `rgb.txt` format
pub const XKCD_SAMPLE: &str = "# License: http://creativecommons.org/publicdomain/zero/1.0/\n\
cloudy blue\t#acc2d9\t\n\
red\t#e50000\t\n\
blue\t#0343df\t\n\
white\t#ffffff\t\n\
black\t#000000\t\n";

/// Path the mock server serves the xkcd list on
pub const XKCD_PATH: &str = "/color/rgb.txt";

pub const RED: [u8; 3] = [255, 0, 0];
pub const BLUE: [u8; 3] = [0, 0, 255];

/// Encode an image as PNG
pub fn encode_png(image: DynamicImage) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("Failed to encode PNG");
    bytes.into_inner()
}

/// Single-color RGB PNG
pub fn solid_png(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    encode_png(DynamicImage::ImageRgb8(RgbImage::from_pixel(
        width,
        height,
        Rgb(color),
    )))
}

/// RGB PNG with the left half `left` and the right half `right`
pub fn halves_png(width: u32, height: u32, left: [u8; 3], right: [u8; 3]) -> Vec<u8> {
    let image = RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb(left)
        } else {
            Rgb(right)
        }
    });
    encode_png(DynamicImage::ImageRgb8(image))
}

/// RGBA PNG where every pixel has alpha 0
pub fn transparent_png(width: u32, height: u32) -> Vec<u8> {
    encode_png(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba([12, 34, 56, 0]),
    )))
}
