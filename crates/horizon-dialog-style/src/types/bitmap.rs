//! Inline bitmaps held by themes.

use std::fmt;
use std::sync::Arc;

use image::{Rgba, RgbaImage};

use crate::error::{Result, StyleError};
use crate::types::{Color, Size};

/// A decoded RGBA bitmap.
///
/// `Bitmap` is a shared handle: cloning it adds an owner, dropping it
/// releases that owner's hold on the pixel buffer. The pixels are freed
/// when the last owner goes away.
#[derive(Clone)]
pub struct Bitmap {
    pixels: Arc<RgbaImage>,
}

impl Bitmap {
    /// Wrap an already decoded image.
    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(image),
        }
    }

    /// Create a bitmap from raw RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        let actual = bytes.len();
        RgbaImage::from_raw(width, height, bytes)
            .map(Self::from_image)
            .ok_or(StyleError::BitmapSize {
                width,
                height,
                expected,
                actual,
            })
    }

    /// Create a bitmap filled with a single color.
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        Self::from_image(RgbaImage::from_pixel(width, height, Rgba(color.to_rgba8())))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Get the size of the bitmap in pixels.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width() as f32, self.height() as f32)
    }

    /// Access the decoded pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Number of live handles to the pixel buffer.
    pub fn owner_count(&self) -> usize {
        Arc::strong_count(&self.pixels)
    }

    /// Whether two handles point at the same pixel buffer.
    pub fn ptr_eq(&self, other: &Bitmap) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl PartialEq for Bitmap {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("owners", &self.owner_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_bytes_must_match_dimensions() {
        assert!(Bitmap::from_rgba8(2, 2, vec![0; 16]).is_ok());
        let err = Bitmap::from_rgba8(2, 2, vec![0; 3]).unwrap_err();
        assert!(matches!(err, StyleError::BitmapSize { expected: 16, actual: 3, .. }));
    }

    #[test]
    fn test_clones_share_pixels() {
        let a = Bitmap::solid(4, 4, Color::RED);
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert_eq!(a.owner_count(), 2);
        drop(b);
        assert_eq!(a.owner_count(), 1);
    }
}
