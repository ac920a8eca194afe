//! Contrast stretch between percentile-like bounds.

use crate::buffer::PixelBuffer;

/// Stretch values so the band `[lower, upper]` fills `[0, 255]`.
///
/// `lower = min + (max - min) * percent / 200` and
/// `upper = max - (max - min) * percent / 200`, where `min`/`max` are taken
/// over every channel value in the buffer. Values outside the band saturate;
/// results are truncated.
///
/// If the band is empty (a uniform image, or `percent >= 100`) there is nothing
/// to stretch and the input is returned unchanged.
///
/// # Arguments
///
/// * `buffer` - Image to stretch
/// * `percent` - How much of the value range to clip, split between both ends
pub fn contrast_stretch(buffer: &PixelBuffer, percent: u32) -> PixelBuffer {
    let (Some(&min), Some(&max)) = (buffer.pixels.iter().min(), buffer.pixels.iter().max())
    else {
        return buffer.clone();
    };

    let min = min as f64;
    let max = max as f64;
    let trim = (max - min) * (percent as f64 / 200.0);
    let lower = min + trim;
    let upper = max - trim;
    let span = upper - lower;

    if span <= 0.0 {
        return buffer.clone();
    }

    let mut out = buffer.clone();
    for value in out.pixels.iter_mut() {
        let stretched = (*value as f64 - lower) * 255.0 / span;
        *value = stretched.clamp(0.0, 255.0) as u8;
    }
    out
}
