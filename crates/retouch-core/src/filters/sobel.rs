//! Sobel edge magnitude, normalized to the full 8-bit range.

use super::border::convolve_separable;
use crate::buffer::PixelBuffer;

/// 5-tap binomial smoothing applied across the gradient direction.
const SMOOTH_5: [f32; 5] = [1.0, 4.0, 6.0, 4.0, 1.0];

/// 5-tap first derivative applied along the gradient direction.
const DERIV_5: [f32; 5] = [-1.0, -2.0, 0.0, 2.0, 1.0];

/// Per-channel gradient magnitude `sqrt(gx² + gy²)` with 5x5 Sobel kernels.
///
/// The magnitudes of all channels are min-max normalized together into
/// `[0, 255]` and rounded. A buffer with no gradient at all (including
/// uniform and 1x1 images) comes back black.
pub fn sobel(buffer: &PixelBuffer) -> PixelBuffer {
    if buffer.is_empty() {
        return buffer.clone();
    }

    let gx = convolve_separable(buffer, &DERIV_5, &SMOOTH_5);
    let gy = convolve_separable(buffer, &SMOOTH_5, &DERIV_5);

    let magnitude: Vec<f32> = gx
        .iter()
        .zip(&gy)
        .map(|(x, y)| (x * x + y * y).sqrt())
        .collect();

    let (min, max) = magnitude
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &m| {
            (lo.min(m), hi.max(m))
        });
    let range = max - min;

    let pixels = if range > f32::EPSILON {
        let scale = 255.0 / range;
        magnitude
            .iter()
            .map(|&m| ((m - min) * scale).round().clamp(0.0, 255.0) as u8)
            .collect()
    } else {
        vec![0u8; magnitude.len()]
    };

    PixelBuffer::new(buffer.width, buffer.height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgb;

    #[test]
    fn test_uniform_image_is_black() {
        let img = PixelBuffer::filled(8, 8, Rgb::new(90, 180, 30));
        let out = sobel(&img);
        assert!(out.pixels.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_vertical_edge_peaks_at_boundary() {
        // Left half black, right half white.
        let mut img = PixelBuffer::filled(10, 5, Rgb::new(0, 0, 0));
        for y in 0..5 {
            for x in 5..10 {
                img.put(x, y, Rgb::new(255, 255, 255));
            }
        }
        let out = sobel(&img);
        assert_eq!(out.get(0, 2), Some(Rgb::new(0, 0, 0)));
        let at_edge = out.get(4, 2).map(|p| p.r).unwrap_or(0);
        let far = out.get(1, 2).map(|p| p.r).unwrap_or(255);
        assert!(at_edge > far);
        assert!(out.pixels.contains(&255));
    }

    #[test]
    fn test_single_pixel() {
        let img = PixelBuffer::new(1, 1, vec![10, 20, 30]);
        assert_eq!(sobel(&img).pixels, vec![0, 0, 0]);
    }

    #[test]
    fn test_dimensions_preserved() {
        let img = PixelBuffer::new(3, 2, (0..18).map(|v| v * 10).collect());
        assert_eq!(sobel(&img).dimensions(), (3, 2));
    }
}
