//! Tonal transforms computed from the source image.
//!
//! Both brightness and blur start over from the decoded source each time, so
//! dragging a slider back and forth never compounds rounding error.

use crate::buffer::PixelBuffer;
use crate::error::{EditError, Result};
use crate::filters::gaussian_blur;

/// Lower bound for the blur sigma.
pub const MIN_BLUR_SIGMA: f32 = 0.1;

/// Upper bound for the blur sigma.
pub const MAX_BLUR_SIGMA: f32 = 5.0;

/// Scale the source by `1 + factor`, clamped to `[0, 255]` and truncated.
///
/// `factor` is clamped to `[-1, 1]`. The result is a weighted blend in which
/// the working buffer takes weight zero; it still has to match the source in
/// size, since a blend of mismatched buffers is undefined.
///
/// # Errors
///
/// [`EditError::BufferMismatch`] if `source` and `working` differ in dimensions.
pub fn brightness(source: &PixelBuffer, working: &PixelBuffer, factor: f32) -> Result<PixelBuffer> {
    if source.dimensions() != working.dimensions() {
        return Err(EditError::BufferMismatch {
            source_width: source.width,
            source_height: source.height,
            working_width: working.width,
            working_height: working.height,
        });
    }

    let gain = 1.0 + factor.clamp(-1.0, 1.0) as f64;
    let pixels = source
        .pixels
        .iter()
        .map(|&v| (v as f64 * gain).clamp(0.0, 255.0) as u8)
        .collect();

    Ok(PixelBuffer::new(source.width, source.height, pixels))
}

/// Gaussian smoothing of the source with `sigma` clamped to `[0.1, 5.0]`.
pub fn blur(source: &PixelBuffer, sigma: f32) -> PixelBuffer {
    let sigma = if sigma.is_nan() {
        MIN_BLUR_SIGMA
    } else {
        sigma.clamp(MIN_BLUR_SIGMA, MAX_BLUR_SIGMA)
    };
    gaussian_blur(source, sigma)
}
