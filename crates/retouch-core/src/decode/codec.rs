//! PNG/JPEG decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageFormat};

use super::{DecodeError, Orientation};
use crate::buffer::PixelBuffer;

/// Decode a PNG or JPEG image from bytes, applying EXIF orientation correction.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a known image container,
/// `DecodeError::UnsupportedFormat` for containers other than PNG and JPEG, and
/// `DecodeError::CorruptedFile` if the data is truncated or damaged.
pub fn decode_image(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let img = decode_dynamic(bytes)?;
    let orientation = extract_orientation(bytes);
    finish(orientation.apply(img))
}

fn decode_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    let format = image::guess_format(bytes).map_err(|_| DecodeError::InvalidFormat)?;
    if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
        return Err(DecodeError::UnsupportedFormat(format!("{format:?}")));
    }

    image::load_from_memory_with_format(bytes, format)
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

/// Flatten to 3-channel RGB; alpha and 16-bit depth are discarded.
fn finish(img: DynamicImage) -> Result<PixelBuffer, DecodeError> {
    let buffer = PixelBuffer::from_rgb_image(img.into_rgb8());
    if buffer.is_empty() {
        return Err(DecodeError::CorruptedFile("image has no pixels".to_string()));
    }
    Ok(buffer)
}

/// Returns `Orientation::Normal` when there is no EXIF block or no orientation tag.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    let Ok(exif) = Reader::new().read_from_container(&mut cursor) else {
        return Orientation::Normal;
    };

    exif.get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(Orientation::from)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::jpeg::JpegEncoder;
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};

    fn png_bytes(width: u32, height: u32, pixels: &[u8], color: ExtendedColorType) -> Vec<u8> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(pixels, width, height, color)
            .unwrap();
        out
    }

    #[test]
    fn test_decode_png() {
        let pixels = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 9, 9, 9];
        let bytes = png_bytes(2, 2, &pixels, ExtendedColorType::Rgb8);

        let img = decode_image(&bytes).unwrap();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.pixels, pixels);
    }

    #[test]
    fn test_decode_png_drops_alpha() {
        let pixels = vec![10, 20, 30, 0];
        let bytes = png_bytes(1, 1, &pixels, ExtendedColorType::Rgba8);

        let img = decode_image(&bytes).unwrap();
        assert_eq!(img.pixels, vec![10, 20, 30]);
    }

    #[test]
    fn test_decode_grayscale_png_expands_to_rgb() {
        let bytes = png_bytes(2, 1, &[7, 200], ExtendedColorType::L8);

        let img = decode_image(&bytes).unwrap();
        assert_eq!(img.pixels, vec![7, 7, 7, 200, 200, 200]);
    }

    #[test]
    fn test_decode_jpeg() {
        let mut bytes = Vec::new();
        JpegEncoder::new_with_quality(&mut bytes, 90)
            .write_image(&vec![128u8; 8 * 4 * 3], 8, 4, ExtendedColorType::Rgb8)
            .unwrap();

        let img = decode_image(&bytes).unwrap();
        assert_eq!(img.dimensions(), (8, 4));
        assert_eq!(img.pixels.len(), 8 * 4 * 3);
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_image(&[]).is_err());
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = png_bytes(4, 4, &[50u8; 4 * 4 * 3], ExtendedColorType::Rgb8);
        let result = decode_image(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_decode_rejects_other_containers() {
        // "GIF89a" header
        let result = decode_image(b"GIF89a\x01\x00\x01\x00\x00\x00\x00");
        assert!(matches!(result, Err(DecodeError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_orientation_without_exif() {
        let bytes = png_bytes(1, 1, &[0, 0, 0], ExtendedColorType::Rgb8);
        assert_eq!(extract_orientation(&bytes), Orientation::Normal);
        assert_eq!(extract_orientation(&[0x00, 0x01, 0x02]), Orientation::Normal);
    }
}
