//! Bounded downscaling.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Pixel, Rgb, Rgba};

use super::error::PreprocessError;
use super::grid::PixelGrid;
use super::options::PreprocessOptions;

/// Dimensions after bounding the height to `max_height`, then the width
/// to `max_width` if given.
///
/// The other side scales by the same ratio and is truncated, never below
/// 1 pixel. Grids already within the bounds keep their size.
pub(crate) fn target_dimensions(
    width: u32,
    height: u32,
    max_height: u32,
    max_width: Option<u32>,
) -> (u32, u32) {
    if height == 0 || width == 0 {
        return (width, height);
    }

    let (mut width, mut height) = (width, height);
    if height > max_height {
        width = scale_side(width, max_height, height);
        height = max_height;
    }
    if let Some(max_width) = max_width.filter(|&max| width > max) {
        height = scale_side(height, max_width, width);
        width = max_width;
    }
    (width, height)
}

/// `side * num / den`, truncated, at least 1.
fn scale_side(side: u32, num: u32, den: u32) -> u32 {
    (side as u64 * num as u64 / den as u64).max(1) as u32
}

/// Downscale `grid` to fit the bounds in `options`.
pub(crate) fn downscale(
    grid: &PixelGrid,
    options: &PreprocessOptions,
) -> Result<PixelGrid, PreprocessError> {
    let (width, height) = (grid.width(), grid.height());
    let (new_width, new_height) =
        target_dimensions(width, height, options.max_height, options.max_width);
    let filter = options.filter;
    if (new_width, new_height) == (width, height) {
        return Ok(grid.clone());
    }

    let resized = match grid.channels() {
        4 => resize_premultiplied(grid, new_width, new_height, filter),
        _ => resize_buffer::<Rgb<u8>>(grid, new_width, new_height, filter),
    };

    let data = resized.ok_or(PreprocessError::DimensionMismatch {
        expected: grid.pixel_count() * grid.channels(),
        actual: grid.as_bytes().len(),
    })?;

    PixelGrid::new(new_width, new_height, grid.channels(), data)
}

fn resize_buffer<P>(
    grid: &PixelGrid,
    new_width: u32,
    new_height: u32,
    filter: FilterType,
) -> Option<Vec<u8>>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    let source = ImageBuffer::<P, &[u8]>::from_raw(grid.width(), grid.height(), grid.as_bytes())?;
    Some(imageops::resize(&source, new_width, new_height, filter).into_raw())
}

/// Resample RGBA with color weighted by alpha.
///
/// Transparent pixels contribute no color to their neighbours; an output
/// pixel's color is the alpha-weighted mean of the inputs it covers.
/// Channels are kept as `0.0..=1.0` floats while filtering.
fn resize_premultiplied(
    grid: &PixelGrid,
    new_width: u32,
    new_height: u32,
    filter: FilterType,
) -> Option<Vec<u8>> {
    let premultiplied: Vec<f32> = grid
        .as_bytes()
        .chunks_exact(4)
        .flat_map(|px| {
            let alpha = px[3] as f32 / 255.0;
            [
                px[0] as f32 / 255.0 * alpha,
                px[1] as f32 / 255.0 * alpha,
                px[2] as f32 / 255.0 * alpha,
                alpha,
            ]
        })
        .collect();

    let source =
        ImageBuffer::<Rgba<f32>, Vec<f32>>::from_raw(grid.width(), grid.height(), premultiplied)?;
    let resized = imageops::resize(&source, new_width, new_height, filter);

    Some(resized.pixels().flat_map(|px| unpremultiply(px.0)).collect())
}

fn unpremultiply([r, g, b, a]: [f32; 4]) -> [u8; 4] {
    let alpha = a.clamp(0.0, 1.0);
    let alpha_byte = (alpha * 255.0).round() as u8;
    if alpha_byte == 0 {
        return [0, 0, 0, 0];
    }
    let channel = |c: f32| ((c / alpha).clamp(0.0, 1.0) * 255.0).round() as u8;
    [channel(r), channel(g), channel(b), alpha_byte]
}
