//! Warm and cold color casts.
//!
//! Each channel is shifted by `intensity` times a fixed weight, clamped to
//! `[0, 255]` and truncated. Intensity is signed; negative values invert the cast.

use crate::buffer::PixelBuffer;

/// Intensity is clamped to `[-INTENSITY_LIMIT, INTENSITY_LIMIT]`.
pub const INTENSITY_LIMIT: i32 = 255;

/// Per-channel (R, G, B) weights for the warm cast.
pub const WARM_WEIGHTS: [f64; 3] = [0.2, 0.1, -0.1];

/// Per-channel (R, G, B) weights for the cold cast.
pub const COLD_WEIGHTS: [f64; 3] = [-0.2, -0.1, 0.2];

/// Push colors toward red/yellow.
///
/// # Arguments
///
/// * `buffer` - Image to tint
/// * `intensity` - Strength of the cast, clamped to `±INTENSITY_LIMIT`
///
/// # Returns
///
/// The tinted copy. An intensity of zero returns the input unchanged.
pub fn warm(buffer: &PixelBuffer, intensity: i32) -> PixelBuffer {
    shift_channels(buffer, intensity, WARM_WEIGHTS)
}

/// Push colors toward blue.
pub fn cold(buffer: &PixelBuffer, intensity: i32) -> PixelBuffer {
    shift_channels(buffer, intensity, COLD_WEIGHTS)
}

fn shift_channels(buffer: &PixelBuffer, intensity: i32, weights: [f64; 3]) -> PixelBuffer {
    let intensity = intensity.clamp(-INTENSITY_LIMIT, INTENSITY_LIMIT) as f64;
    let offsets = weights.map(|w| intensity * w);

    let mut out = buffer.clone();
    for px in out.pixels.chunks_exact_mut(3) {
        for (value, offset) in px.iter_mut().zip(offsets) {
            *value = (*value as f64 + offset).clamp(0.0, 255.0) as u8;
        }
    }
    out
}
