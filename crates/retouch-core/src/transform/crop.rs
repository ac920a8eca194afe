//! Pixel-rectangle cropping.
//!
//! # Example
//!
//! ```ignore
//! let rect = Rect::new(25, 25, 50, 50);
//! let cropped = crop(&image, rect)?;
//! assert_eq!(cropped.dimensions(), (50, 50));
//! ```

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::{EditError, Result};

/// An axis-aligned region in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the rectangle lies entirely inside a `width x height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        let right = self.x as u64 + self.width as u64;
        let bottom = self.y as u64 + self.height as u64;
        right <= width as u64 && bottom <= height as u64
    }
}

/// Extract `rect` from `image`.
///
/// # Errors
///
/// [`EditError::InvalidRegion`] if the rectangle has zero area or extends
/// past the image edges. Nothing is clamped: the caller gets exactly the
/// region it asked for or an error.
pub fn crop(image: &PixelBuffer, rect: Rect) -> Result<PixelBuffer> {
    if rect.is_empty() || !rect.fits_within(image.width, image.height) {
        return Err(EditError::InvalidRegion {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            image_width: image.width,
            image_height: image.height,
        });
    }

    if rect.x == 0 && rect.y == 0 && rect.width == image.width && rect.height == image.height {
        return Ok(image.clone());
    }

    let row_bytes = rect.width as usize * 3;
    let mut output = Vec::with_capacity(row_bytes * rect.height as usize);

    // Copy pixel data row by row
    for y in rect.y..rect.y + rect.height {
        let start = image.offset(rect.x as usize, y as usize);
        output.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    Ok(PixelBuffer::new(rect.width, rect.height, output))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where each pixel has a unique value based on position.
    fn test_image(width: u32, height: u32) -> PixelBuffer {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        PixelBuffer::new(width, height, pixels)
    }

    #[test]
    fn test_full_crop() {
        let img = test_image(100, 100);
        let result = crop(&img, Rect::new(0, 0, 100, 100)).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_center_crop() {
        let img = test_image(10, 10);
        let result = crop(&img, Rect::new(2, 2, 6, 6)).unwrap();

        assert_eq!(result.dimensions(), (6, 6));
        // Value at (2, 2) = 2 * 10 + 2 = 22
        assert_eq!(result.pixels[0], 22);
        // Last pixel comes from (7, 7) = 77
        assert_eq!(result.pixels[result.pixels.len() - 1], 77);
    }

    #[test]
    fn test_single_pixel_crop() {
        let img = test_image(4, 4);
        let result = crop(&img, Rect::new(3, 3, 1, 1)).unwrap();
        assert_eq!(result.pixels, vec![15, 15, 15]);
    }

    #[test]
    fn test_zero_area_rejected() {
        let img = test_image(10, 10);
        for rect in [Rect::new(0, 0, 0, 5), Rect::new(0, 0, 5, 0)] {
            let err = crop(&img, rect).unwrap_err();
            assert!(matches!(err, EditError::InvalidRegion { .. }));
        }
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let img = test_image(10, 10);
        for rect in [
            Rect::new(8, 8, 5, 5),
            Rect::new(10, 0, 1, 1),
            Rect::new(0, 0, 11, 10),
            Rect::new(u32::MAX, 0, 2, 2),
        ] {
            assert!(
                matches!(crop(&img, rect), Err(EditError::InvalidRegion { .. })),
                "{rect:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_error_reports_image_size() {
        let img = test_image(7, 3);
        match crop(&img, Rect::new(1, 1, 9, 1)) {
            Err(EditError::InvalidRegion {
                image_width,
                image_height,
                ..
            }) => assert_eq!((image_width, image_height), (7, 3)),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
