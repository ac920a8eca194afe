//! Desaturation: luma written back into all three channels.

use crate::buffer::PixelBuffer;
use crate::luminance::calculate_luma_u8;

/// Convert to BT.601 luma and expand back to three equal channels.
///
/// The output keeps three channels so it can flow through the rest of the
/// pipeline like any other buffer.
pub fn greyscale(buffer: &PixelBuffer) -> PixelBuffer {
    let mut out = buffer.clone();
    for px in out.pixels.chunks_exact_mut(3) {
        let luma = calculate_luma_u8(px[0], px[1], px[2]);
        px.fill(luma);
    }
    out
}
