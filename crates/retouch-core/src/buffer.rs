//! RGB pixel buffer shared by every stage of the editor.
//!
//! All stages (source, working, display) and all kernels exchange this type.
//! Pixels are stored row-major with three interleaved bytes per pixel.

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// A 3-channel, 8-bit image buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length is always width * height * 3.
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a buffer where every pixel has the same color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * 3);
        for _ in 0..count {
            pixels.extend_from_slice(&color.to_array());
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Take ownership of an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Copy into an `image::RgbImage` for use with `image::imageops`.
    ///
    /// Returns `None` only if the pixel data does not match the dimensions.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Byte offset of pixel (x, y). Caller guarantees the coordinate is in bounds.
    #[inline]
    pub(crate) fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width as usize + x) * 3
    }

    /// Read the pixel at (x, y), or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x as usize, y as usize);
        Some(Rgb::new(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
        ))
    }

    /// Write the pixel at (x, y). Out-of-bounds writes are ignored.
    pub fn put(&mut self, x: u32, y: u32, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = self.offset(x as usize, y as usize);
        self.pixels[i..i + 3].copy_from_slice(&color.to_array());
    }

    /// Expand to RGBA with an opaque alpha channel (canvas `ImageData` layout).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixel_count() * 4);
        for px in self.pixels.chunks_exact(3) {
            out.extend_from_slice(px);
            out.push(255);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_buffer() {
        let buf = PixelBuffer::filled(4, 3, Rgb::new(10, 20, 30));
        assert_eq!(buf.dimensions(), (4, 3));
        assert_eq!(buf.pixels.len(), 4 * 3 * 3);
        assert_eq!(buf.get(3, 2), Some(Rgb::new(10, 20, 30)));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let buf = PixelBuffer::filled(2, 2, Rgb::default());
        assert_eq!(buf.get(2, 0), None);
        assert_eq!(buf.get(0, 2), None);
    }

    #[test]
    fn test_put_ignores_out_of_bounds() {
        let mut buf = PixelBuffer::filled(2, 2, Rgb::default());
        let before = buf.clone();
        buf.put(5, 5, Rgb::new(255, 255, 255));
        assert_eq!(buf, before);

        buf.put(1, 0, Rgb::new(1, 2, 3));
        assert_eq!(buf.get(1, 0), Some(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn test_rgb_image_round_trip_keeps_layout() {
        let buf = PixelBuffer::new(2, 1, vec![1, 2, 3, 4, 5, 6]);
        let img = buf.to_rgb_image().unwrap();
        assert_eq!(img.get_pixel(1, 0).0, [4, 5, 6]);
        assert_eq!(PixelBuffer::from_rgb_image(img), buf);
    }

    #[test]
    fn test_to_rgba_adds_opaque_alpha() {
        let buf = PixelBuffer::new(2, 1, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(buf.to_rgba(), vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn test_empty() {
        assert!(PixelBuffer::new(0, 0, vec![]).is_empty());
        assert!(!PixelBuffer::filled(1, 1, Rgb::default()).is_empty());
    }
}
