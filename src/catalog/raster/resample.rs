use crate::error::Result;
use image::{DynamicImage, ImageFormat, imageops::FilterType};
use std::io::Cursor;

/// Resizes decoded sources and encodes the result as PNG.
pub trait Resampler: Clone + Send + Sync + 'static {
    /// Resizes to exactly `width` x `height`, ignoring aspect ratio.
    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage;

    /// Encodes the image as PNG bytes.
    fn encode_png(&self, image: &DynamicImage) -> Result<Vec<u8>>;
}

/// Lanczos3 resampling with the `image` crate's PNG encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanczosResampler;

impl Resampler for LanczosResampler {
    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        if image.width() == width && image.height() == height {
            return image.clone();
        }
        image.resize_exact(width, height, FilterType::Lanczos3)
    }

    fn encode_png(&self, image: &DynamicImage) -> Result<Vec<u8>> {
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, ImageFormat::Png)?;
        Ok(bytes.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_resize_exact_dimensions() {
        let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(300, 150, Rgba([0, 0, 255, 255])));
        let resized = LanczosResampler.resize(&source, 64, 64);

        assert_eq!((resized.width(), resized.height()), (64, 64));
    }

    #[test]
    fn test_encode_png_signature() {
        let source = DynamicImage::ImageRgba8(RgbaImage::new(4, 4));
        let bytes = LanczosResampler.encode_png(&source).unwrap();

        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 4);
    }
}
