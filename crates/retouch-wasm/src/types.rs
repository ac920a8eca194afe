//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Retouch types,
//! handling the conversion between Rust and JavaScript data representations.

use retouch_core::{PixelBuffer, ResizeFilter};
use wasm_bindgen::prelude::*;

/// An RGB image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()` or
/// `rgba()`, a copy is made to JavaScript memory as a `Uint8Array`.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Create a new JsPixelBuffer from dimensions and RGB pixel data
    /// (3 bytes per pixel, row-major order).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsPixelBuffer {
        JsPixelBuffer {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3 for RGB)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns opaque RGBA pixel data, ready for `new ImageData(...)`.
    ///
    /// Empty if the pixel data does not match the dimensions.
    pub fn rgba(&self) -> Vec<u8> {
        self.to_buffer().map(|b| b.to_rgba()).unwrap_or_default()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelBuffer {
    pub(crate) fn from_buffer(buffer: &PixelBuffer) -> Self {
        Self {
            width: buffer.width,
            height: buffer.height,
            pixels: buffer.pixels.clone(),
        }
    }

    /// Convert to a core PixelBuffer, or `None` if the pixel data does not
    /// match the dimensions.
    pub(crate) fn to_buffer(&self) -> Option<PixelBuffer> {
        let expected = self.width as usize * self.height as usize * 3;
        (self.pixels.len() == expected)
            .then(|| PixelBuffer::new(self.width, self.height, self.pixels.clone()))
    }
}

/// Convert a u8 filter type value to the core ResizeFilter enum.
///
/// Values:
/// - 0 = Nearest (fastest, lowest quality)
/// - 1 = Bilinear (good balance of speed and quality)
/// - 2 = Lanczos3 (best quality, slowest)
///
/// Any other value defaults to Bilinear.
pub(crate) fn resize_filter_from_u8(value: u8) -> ResizeFilter {
    match value {
        0 => ResizeFilter::Nearest,
        2 => ResizeFilter::Lanczos3,
        _ => ResizeFilter::Bilinear, // Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retouch_core::Rgb;

    #[test]
    fn test_js_pixel_buffer_creation() {
        let img = JsPixelBuffer::new(100, 50, vec![0u8; 100 * 50 * 3]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 15000);
    }

    #[test]
    fn test_rgba_adds_opaque_alpha() {
        let img = JsPixelBuffer::new(2, 1, vec![255, 128, 64, 32, 16, 8]);
        assert_eq!(img.rgba(), vec![255, 128, 64, 255, 32, 16, 8, 255]);
    }

    #[test]
    fn test_buffer_round_trip() {
        let core = PixelBuffer::filled(3, 2, Rgb::new(1, 2, 3));
        let js = JsPixelBuffer::from_buffer(&core);
        assert_eq!(js.to_buffer(), Some(core));
    }

    #[test]
    fn test_to_buffer_rejects_bad_length() {
        let js = JsPixelBuffer::new(4, 4, vec![0u8; 10]);
        assert!(js.to_buffer().is_none());
    }

    #[test]
    fn test_resize_filter_from_u8() {
        assert_eq!(resize_filter_from_u8(0), ResizeFilter::Nearest);
        assert_eq!(resize_filter_from_u8(1), ResizeFilter::Bilinear);
        assert_eq!(resize_filter_from_u8(2), ResizeFilter::Lanczos3);
        // Unknown values default to Bilinear
        assert_eq!(resize_filter_from_u8(3), ResizeFilter::Bilinear);
        assert_eq!(resize_filter_from_u8(255), ResizeFilter::Bilinear);
    }
}
