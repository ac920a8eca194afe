//! Laplacian edge response.

use super::border::reflect_101;
use crate::buffer::PixelBuffer;

/// Multiplier applied to the raw Laplacian before saturation.
pub const DEFAULT_EDGE_STRENGTH: f32 = 10.0;

/// Second-derivative response `|strength * (N + S + E + W - 4C)|`, rounded and
/// saturated to `[0, 255]`.
///
/// Flat regions go to zero; edges light up. Borders reflect without repeating
/// the edge sample.
///
/// # Arguments
///
/// * `buffer` - Image to filter
/// * `strength` - Gain on the raw response, usually [`DEFAULT_EDGE_STRENGTH`]
pub fn edge_enhance(buffer: &PixelBuffer, strength: f32) -> PixelBuffer {
    let w = buffer.width as usize;
    let h = buffer.height as usize;
    let mut out = vec![0u8; buffer.pixels.len()];

    for y in 0..h {
        let up = reflect_101(y as isize - 1, h);
        let down = reflect_101(y as isize + 1, h);
        for x in 0..w {
            let left = reflect_101(x as isize - 1, w);
            let right = reflect_101(x as isize + 1, w);

            let center = buffer.offset(x, y);
            let neighbors = [
                buffer.offset(x, up),
                buffer.offset(x, down),
                buffer.offset(left, y),
                buffer.offset(right, y),
            ];

            for c in 0..3 {
                let sum: f32 = neighbors
                    .iter()
                    .map(|&i| buffer.pixels[i + c] as f32)
                    .sum();
                let response = sum - 4.0 * buffer.pixels[center + c] as f32;
                out[center + c] = (response * strength).abs().round().min(255.0) as u8;
            }
        }
    }

    PixelBuffer::new(buffer.width, buffer.height, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgb;

    #[test]
    fn test_flat_region_is_zero() {
        let img = PixelBuffer::filled(6, 6, Rgb::new(120, 30, 240));
        let out = edge_enhance(&img, DEFAULT_EDGE_STRENGTH);
        assert!(out.pixels.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_isolated_dot() {
        let mut img = PixelBuffer::filled(5, 5, Rgb::new(0, 0, 0));
        img.put(2, 2, Rgb::new(2, 2, 2));
        let out = edge_enhance(&img, 1.0);
        // Center: |0*4 - 4*2| = 8, direct neighbors: |2| = 2, diagonals untouched.
        assert_eq!(out.get(2, 2), Some(Rgb::new(8, 8, 8)));
        assert_eq!(out.get(2, 1), Some(Rgb::new(2, 2, 2)));
        assert_eq!(out.get(1, 1), Some(Rgb::new(0, 0, 0)));
    }

    #[test]
    fn test_strength_scales_and_saturates() {
        let mut img = PixelBuffer::filled(5, 5, Rgb::new(0, 0, 0));
        img.put(2, 2, Rgb::new(2, 2, 2));
        let out = edge_enhance(&img, DEFAULT_EDGE_STRENGTH);
        assert_eq!(out.get(2, 1), Some(Rgb::new(20, 20, 20)));
        assert_eq!(out.get(2, 2), Some(Rgb::new(80, 80, 80)));

        let out = edge_enhance(&img, 100.0);
        assert_eq!(out.get(2, 2), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_single_pixel() {
        let img = PixelBuffer::new(1, 1, vec![200, 100, 50]);
        assert_eq!(edge_enhance(&img, DEFAULT_EDGE_STRENGTH).pixels, vec![0, 0, 0]);
    }
}
