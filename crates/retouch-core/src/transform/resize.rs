//! Resampling to exact dimensions.

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::{EditError, Result};

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResizeFilter {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl ResizeFilter {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            ResizeFilter::Nearest => image::imageops::FilterType::Nearest,
            ResizeFilter::Bilinear => image::imageops::FilterType::Triangle,
            ResizeFilter::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Resize an image to exact dimensions.
///
/// # Arguments
///
/// * `image` - Buffer to resample
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `filter` - Resampling filter
///
/// # Returns
///
/// A new buffer of exactly `width x height`. Aspect ratio is not preserved.
///
/// # Errors
///
/// Returns [`EditError::InvalidDimension`] if either target dimension is zero.
pub fn resize(
    image: &PixelBuffer,
    width: u32,
    height: u32,
    filter: ResizeFilter,
) -> Result<PixelBuffer> {
    if width == 0 || height == 0 {
        return Err(EditError::InvalidDimension(format!(
            "resize target must be positive, got {width}x{height}"
        )));
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image.to_rgb_image().ok_or_else(|| {
        EditError::InvalidDimension(format!(
            "{}x{} buffer has {} bytes of pixel data",
            image.width,
            image.height,
            image.pixels.len()
        ))
    })?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(PixelBuffer::from_rgb_image(resized))
}
