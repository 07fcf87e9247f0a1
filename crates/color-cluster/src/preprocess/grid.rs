//! Decoded pixel grids and the flat samples derived from them.

use image::DynamicImage;

use super::error::PreprocessError;

/// A decoded image: `height` rows of `width` pixels, row-major, with 3 (RGB)
/// or 4 (RGBA) 8-bit channels per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    channels: usize,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Wrap a raw interleaved buffer.
    ///
    /// # Errors
    ///
    /// - [`PreprocessError::InvalidChannelCount`] unless `channels` is 3 or 4
    /// - [`PreprocessError::DimensionMismatch`] if `data` is not exactly
    ///   `width * height * channels` bytes
    ///
    /// # Example
    ///
    /// ```
    /// use color_cluster::{PixelGrid, PreprocessError};
    ///
    /// let grid = PixelGrid::new(1, 2, 3, vec![255, 0, 0, 0, 0, 255]).unwrap();
    /// assert!(!grid.has_alpha());
    ///
    /// let err = PixelGrid::new(1, 1, 2, vec![0, 0]).unwrap_err();
    /// assert_eq!(err, PreprocessError::InvalidChannelCount(2));
    /// ```
    pub fn new(
        width: u32,
        height: u32,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, PreprocessError> {
        if channels != 3 && channels != 4 {
            return Err(PreprocessError::InvalidChannelCount(channels));
        }

        let expected = width as usize * height as usize * channels;
        if data.len() != expected {
            return Err(PreprocessError::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Build a grid of `width * height` copies of one RGB or RGBA pixel.
    pub fn filled(width: u32, height: u32, pixel: &[u8]) -> Result<Self, PreprocessError> {
        let count = width as usize * height as usize;
        Self::new(width, height, pixel.len(), pixel.repeat(count))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Whether pixels carry an alpha channel.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    /// Raw interleaved bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Number of pixels in the grid.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl From<DynamicImage> for PixelGrid {
    /// Convert a decoded image, keeping alpha only when the source has it.
    ///
    /// Grey images are expanded to RGB and 16-bit or float images are reduced
    /// to 8 bits per channel.
    fn from(image: DynamicImage) -> Self {
        let (width, height) = (image.width(), image.height());
        if image.color().has_alpha() {
            Self {
                width,
                height,
                channels: 4,
                data: image.into_rgba8().into_raw(),
            }
        } else {
            Self {
                width,
                height,
                channels: 3,
                data: image.into_rgb8().into_raw(),
            }
        }
    }
}

/// Flat list of opaque RGB pixels ready for clustering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSample {
    /// Pixels in row-major order, fully transparent ones removed.
    pub pixels: Vec<[u8; 3]>,
    /// Whether the source grid had an alpha channel.
    pub has_alpha: bool,
    /// Width of the (possibly downscaled) grid the sample came from.
    pub width: u32,
    /// Height of the (possibly downscaled) grid the sample came from.
    pub height: u32,
}

impl PixelSample {
    /// Number of pixels in the sample.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True when nothing is left to cluster (e.g. fully transparent image).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// Flatten interleaved bytes into RGB vectors, dropping fully transparent
/// pixels and the alpha channel when `channels == 4`.
///
/// Partially transparent pixels are kept as-is; their alpha is discarded,
/// not blended.
pub(crate) fn flatten_opaque(data: &[u8], channels: usize) -> Vec<[u8; 3]> {
    match channels {
        4 => data
            .chunks_exact(4)
            .filter(|px| px[3] != 0)
            .map(|px| [px[0], px[1], px[2]])
            .collect(),
        _ => data
            .chunks_exact(3)
            .map(|px| [px[0], px[1], px[2]])
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Luma, LumaA, Rgba};

    #[test]
    fn test_new_rejects_bad_channel_counts() {
        for channels in [0, 1, 2, 5] {
            let result = PixelGrid::new(1, 1, channels, vec![0; channels]);
            assert_eq!(result, Err(PreprocessError::InvalidChannelCount(channels)));
        }
    }

    #[test]
    fn test_new_rejects_short_buffer() {
        let result = PixelGrid::new(2, 2, 3, vec![0; 11]);
        assert_eq!(
            result,
            Err(PreprocessError::DimensionMismatch {
                expected: 12,
                actual: 11
            })
        );
    }

    #[test]
    fn test_filled() {
        let grid = PixelGrid::filled(3, 2, &[1, 2, 3, 4]).unwrap();
        assert_eq!(grid.pixel_count(), 6);
        assert!(grid.has_alpha());
        assert_eq!(&grid.as_bytes()[4..8], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_from_grey_image_expands_to_rgb() {
        let img = ImageBuffer::from_pixel(2, 1, Luma([90u8]));
        let grid = PixelGrid::from(DynamicImage::ImageLuma8(img));
        assert_eq!(grid.channels(), 3);
        assert_eq!(grid.as_bytes(), &[90, 90, 90, 90, 90, 90]);
    }

    #[test]
    fn test_from_grey_alpha_image_keeps_alpha() {
        let img = ImageBuffer::from_pixel(1, 1, LumaA([10u8, 0]));
        let grid = PixelGrid::from(DynamicImage::ImageLumaA8(img));
        assert_eq!(grid.channels(), 4);
        assert_eq!(grid.as_bytes(), &[10, 10, 10, 0]);
    }

    #[test]
    fn test_from_rgba_image() {
        let img = ImageBuffer::from_pixel(2, 2, Rgba([1u8, 2, 3, 255]));
        let grid = PixelGrid::from(DynamicImage::ImageRgba8(img));
        assert_eq!((grid.width(), grid.height(), grid.channels()), (2, 2, 4));
    }

    #[test]
    fn test_flatten_rgb_keeps_everything() {
        let data = [1, 2, 3, 4, 5, 6];
        assert_eq!(flatten_opaque(&data, 3), vec![[1, 2, 3], [4, 5, 6]]);
    }

    #[test]
    fn test_flatten_rgba_drops_only_alpha_zero() {
        let data = [
            10, 10, 10, 0, // transparent
            20, 20, 20, 1, // barely visible
            30, 30, 30, 128, // half
            40, 40, 40, 255, // opaque
        ];
        assert_eq!(
            flatten_opaque(&data, 4),
            vec![[20, 20, 20], [30, 30, 30], [40, 40, 40]]
        );
    }
}
