//! Image encoding WASM bindings.
//!
//! # Functions
//!
//! - [`encode_image`] - Encode a JsPixelBuffer as PNG or JPEG
//! - [`encode_jpeg`] - Encode raw RGB pixel data to JPEG bytes
//! - [`export_mime_type`] - Media type for a `Blob` of exported bytes
//!
//! # Example
//!
//! ```typescript
//! import { encode_image } from '@retouch/wasm';
//!
//! const png = encode_image(session.display(), "png", 95);
//! const blob = new Blob([png], { type: export_mime_type("png") });
//! ```

use crate::types::JsPixelBuffer;
use retouch_core::encode::{self, EncodeError, ExportFormat};
use retouch_core::EditError;
use wasm_bindgen::prelude::*;

/// Parse a format name or file extension (`png`, `jpg`, `jpeg`, optionally
/// with a leading dot).
pub(crate) fn parse_format(name: &str) -> Result<ExportFormat, EditError> {
    let trimmed = name.trim().trim_start_matches('.');
    ExportFormat::from_extension(trimmed)
        .ok_or_else(|| EditError::UnsupportedFormat(trimmed.to_string()))
}

fn mime_for(name: &str) -> Result<&'static str, EditError> {
    parse_format(name).map(ExportFormat::mime_type)
}

fn encode_js_image(
    image: &JsPixelBuffer,
    format: ExportFormat,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    let buffer = image.to_buffer().ok_or(EncodeError::InvalidPixelData {
        expected: image.width() as usize * image.height() as usize * 3,
        actual: image.byte_length(),
    })?;
    encode::encode(&buffer, format, quality)
}

/// Encode a JsPixelBuffer in the named format.
///
/// `quality` (1-100) only affects JPEG output.
#[wasm_bindgen]
pub fn encode_image(image: &JsPixelBuffer, format: &str, quality: u8) -> Result<Vec<u8>, JsValue> {
    let format = parse_format(format).map_err(|e| JsValue::from_str(&e.to_string()))?;
    encode_js_image(image, format, quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Media type to tag exported bytes with, e.g. `image/jpeg` for `"jpg"`.
#[wasm_bindgen]
pub fn export_mime_type(format: &str) -> Result<String, JsValue> {
    mime_for(format)
        .map(str::to_string)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode RGB pixel data to JPEG bytes.
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 3
/// - Width or height is zero
/// - Encoding fails internally
#[wasm_bindgen]
pub fn encode_jpeg(pixels: &[u8], width: u32, height: u32, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, quality).map_err(|e| JsValue::from_str(&e.to_string()))
}


/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_jpeg_basic() {
        let pixels = vec![128u8; 100 * 100 * 3];
        let jpeg = encode_jpeg(&pixels, 100, 100, 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[wasm_bindgen_test]
    fn test_encode_jpeg_invalid_dimensions() {
        let pixels = vec![128u8; 100];
        assert!(encode_jpeg(&pixels, 0, 100, 90).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_image_unknown_format() {
        let img = JsPixelBuffer::new(2, 2, vec![0u8; 12]);
        assert!(encode_image(&img, "tiff", 90).is_err());
    }

    #[wasm_bindgen_test]
    fn test_export_mime_type() {
        assert_eq!(export_mime_type("JPEG").unwrap(), "image/jpeg");
        assert!(export_mime_type("bmp").is_err());
    }
}
