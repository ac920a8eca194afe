//! Median smoothing with a square, odd-sized window.
//!
//! Uses a running 256-bin histogram per channel that slides along each row
//! (Huang's algorithm), so the cost per pixel grows with the window width
//! rather than its area. Borders replicate the edge pixel.

use super::border::replicate;
use crate::buffer::PixelBuffer;
use crate::selection::KernelSize;

/// Replace every channel value with the median of its `size x size` neighborhood.
///
/// # Arguments
///
/// * `buffer` - Image to smooth
/// * `size` - Window side length; always odd, so the window has a center
///
/// # Returns
///
/// The smoothed copy. Empty buffers come back as they are.
pub fn median(buffer: &PixelBuffer, size: KernelSize) -> PixelBuffer {
    if buffer.is_empty() {
        return buffer.clone();
    }

    let w = buffer.width as usize;
    let h = buffer.height as usize;
    let r = size.radius() as isize;
    let window = size.get() * size.get();
    // Zero-based rank of the median in a sorted window.
    let rank = window / 2;

    let mut out = vec![0u8; buffer.pixels.len()];
    let mut hist = [[0u32; 256]; 3];

    for y in 0..h {
        for channel in hist.iter_mut() {
            channel.fill(0);
        }

        // Prime the histogram with the window around x = 0.
        for dy in -r..=r {
            let sy = replicate(y as isize + dy, h);
            for dx in -r..=r {
                let sx = replicate(dx, w);
                add_pixel(&mut hist, buffer, sx, sy);
            }
        }

        for x in 0..w {
            let dst = (y * w + x) * 3;
            for c in 0..3 {
                out[dst + c] = select_rank(&hist[c], rank);
            }

            if x + 1 < w {
                let leaving = replicate(x as isize - r, w);
                let entering = replicate(x as isize + r + 1, w);
                for dy in -r..=r {
                    let sy = replicate(y as isize + dy, h);
                    remove_pixel(&mut hist, buffer, leaving, sy);
                    add_pixel(&mut hist, buffer, entering, sy);
                }
            }
        }
    }

    PixelBuffer::new(buffer.width, buffer.height, out)
}

#[inline]
fn add_pixel(hist: &mut [[u32; 256]; 3], buffer: &PixelBuffer, x: usize, y: usize) {
    let i = buffer.offset(x, y);
    for c in 0..3 {
        hist[c][buffer.pixels[i + c] as usize] += 1;
    }
}

#[inline]
fn remove_pixel(hist: &mut [[u32; 256]; 3], buffer: &PixelBuffer, x: usize, y: usize) {
    let i = buffer.offset(x, y);
    for c in 0..3 {
        hist[c][buffer.pixels[i + c] as usize] -= 1;
    }
}

/// Smallest value whose cumulative count exceeds `rank`.
#[inline]
fn select_rank(hist: &[u32; 256], rank: u32) -> u8 {
    let mut seen = 0u32;
    for (value, &count) in hist.iter().enumerate() {
        seen += count;
        if seen > rank {
            return value as u8;
        }
    }
    255
}
