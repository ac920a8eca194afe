//! Border handling and separable convolution shared by the neighborhood kernels.
//!
//! Index helpers never fail: any signed offset, however far outside the image,
//! maps back to a valid coordinate. Kernels larger than the image and 1x1
//! images therefore need no special casing.

use crate::buffer::PixelBuffer;

/// Mirror an index about the edge without repeating the edge sample
/// (`gfedcb|abcdefgh|gfedcba`).
#[inline]
pub(crate) fn reflect_101(mut i: isize, n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    let last = n as isize - 1;
    loop {
        if i < 0 {
            i = -i;
        } else if i > last {
            i = 2 * last - i;
        } else {
            return i as usize;
        }
    }
}

/// Clamp an index to the nearest edge sample (`aaaaaa|abcdefgh|hhhhhhh`).
#[inline]
pub(crate) fn replicate(i: isize, n: usize) -> usize {
    i.clamp(0, n.saturating_sub(1) as isize) as usize
}

/// Convolve every channel with `horizontal` along rows, then `vertical` along
/// columns, using reflect-101 borders.
///
/// Both kernels must have odd length. Returns unrounded samples in the same
/// interleaved layout as `buffer.pixels`.
pub(crate) fn convolve_separable(
    buffer: &PixelBuffer,
    horizontal: &[f32],
    vertical: &[f32],
) -> Vec<f32> {
    debug_assert!(horizontal.len() % 2 == 1 && vertical.len() % 2 == 1);

    let w = buffer.width as usize;
    let h = buffer.height as usize;
    let rx = (horizontal.len() / 2) as isize;
    let ry = (vertical.len() / 2) as isize;

    let mut rows = vec![0.0f32; w * h * 3];
    for y in 0..h {
        let row = y * w * 3;
        for x in 0..w {
            let mut acc = [0.0f32; 3];
            for (k, weight) in horizontal.iter().enumerate() {
                let sx = reflect_101(x as isize + k as isize - rx, w);
                let src = row + sx * 3;
                for c in 0..3 {
                    acc[c] += weight * buffer.pixels[src + c] as f32;
                }
            }
            rows[row + x * 3..row + x * 3 + 3].copy_from_slice(&acc);
        }
    }

    let mut out = vec![0.0f32; w * h * 3];
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0.0f32; 3];
            for (k, weight) in vertical.iter().enumerate() {
                let sy = reflect_101(y as isize + k as isize - ry, h);
                let src = (sy * w + x) * 3;
                for c in 0..3 {
                    acc[c] += weight * rows[src + c];
                }
            }
            let dst = (y * w + x) * 3;
            out[dst..dst + 3].copy_from_slice(&acc);
        }
    }
    out
}
