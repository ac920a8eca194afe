//! PNG and JPEG encoders backed by the `image` crate.

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::PixelBuffer;

/// Errors that can occur while encoding an export.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The codec itself failed
    #[error("{format} encoding failed: {reason}")]
    EncodingFailed {
        format: ExportFormat,
        reason: String,
    },
}

/// Target container for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Png,
    Jpeg,
}

impl ExportFormat {
    /// Match a file extension (without the dot), ignoring case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpeg),
            _ => None,
        }
    }

    /// Pick the format from the extension of a save path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Media type for download links and blobs.
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Png => write!(f, "PNG"),
            ExportFormat::Jpeg => write!(f, "JPEG"),
        }
    }
}

/// Encode a buffer in the given format.
///
/// # Arguments
///
/// * `buffer` - Image to encode
/// * `format` - Target container
/// * `quality` - JPEG quality (clamped to 1-100); ignored for PNG
///
/// # Errors
///
/// Returns an [`EncodeError`] if the buffer is empty or malformed, or if the
/// codec fails.
pub fn encode(
    buffer: &PixelBuffer,
    format: ExportFormat,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    match format {
        ExportFormat::Png => encode_png(&buffer.pixels, buffer.width, buffer.height),
        ExportFormat::Jpeg => encode_jpeg(&buffer.pixels, buffer.width, buffer.height, quality),
    }
}

/// Encode RGB pixel data to JPEG bytes.
///
/// `quality` is clamped to 1-100.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height)?;

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed {
            format: ExportFormat::Jpeg,
            reason: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}

/// Encode RGB pixel data to lossless PNG bytes.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height)?;

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed {
            format: ExportFormat::Png,
            reason: e.to_string(),
        })?;

    Ok(buffer)
}

fn validate(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgb;

    #[test]
    fn test_encode_jpeg_markers() {
        let jpeg = encode_jpeg(&vec![128u8; 100 * 100 * 3], 100, 100, 90).unwrap();

        // SOI and EOI markers
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_png_signature() {
        let png = encode_png(&[1, 2, 3], 1, 1).unwrap();
        assert_eq!(&png[0..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_png_is_lossless() {
        let pixels: Vec<u8> = (0..4 * 3 * 3).map(|i| (i * 7) as u8).collect();
        let buffer = PixelBuffer::new(4, 3, pixels);
        let png = encode(&buffer, ExportFormat::Png, 0).unwrap();

        let decoded = image::load_from_memory(&png).unwrap().into_rgb8();
        assert_eq!(decoded.into_raw(), buffer.pixels);
    }

    #[test]
    fn test_jpeg_quality_clamped() {
        let pixels = vec![128u8; 10 * 10 * 3];
        assert!(encode_jpeg(&pixels, 10, 10, 0).is_ok());
        assert!(encode_jpeg(&pixels, 10, 10, 255).is_ok());
    }

    #[test]
    fn test_invalid_dimensions() {
        let result = encode_png(&[], 0, 10);
        assert!(matches!(
            result,
            Err(EncodeError::InvalidDimensions { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_invalid_pixel_data() {
        let result = encode_jpeg(&[0u8; 10], 2, 2, 90);
        assert!(matches!(
            result,
            Err(EncodeError::InvalidPixelData { expected: 12, actual: 10 })
        ));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ExportFormat::from_extension("png"), Some(ExportFormat::Png));
        assert_eq!(ExportFormat::from_extension("JPG"), Some(ExportFormat::Jpeg));
        assert_eq!(ExportFormat::from_extension("jpeg"), Some(ExportFormat::Jpeg));
        assert_eq!(ExportFormat::from_extension("bmp"), None);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("/tmp/out.Jpeg")),
            Some(ExportFormat::Jpeg)
        );
        assert_eq!(ExportFormat::from_path(Path::new("out")), None);
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(ExportFormat::Png.mime_type(), "image/png");
        assert_eq!(ExportFormat::Jpeg.mime_type(), "image/jpeg");
    }

    #[test]
    fn test_encode_dispatches_on_format() {
        let buffer = PixelBuffer::filled(3, 3, Rgb::new(200, 10, 10));
        let png = encode(&buffer, ExportFormat::Png, 90).unwrap();
        let jpeg = encode(&buffer, ExportFormat::Jpeg, 90).unwrap();
        assert_eq!(png[1], b'P');
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}
