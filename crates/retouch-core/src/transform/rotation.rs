//! Quarter-turn rotation.
//!
//! Rotation is lossless: pixels are moved, never resampled, so four turns in
//! the same direction return the original buffer exactly.

use image::imageops;
use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

/// Rotate by 90 degrees. Width and height swap.
///
/// # Arguments
///
/// * `image` - Buffer to rotate; it is not modified
/// * `direction` - Which way to turn
///
/// # Returns
///
/// The rotated copy. A buffer whose pixel data does not match its
/// dimensions is returned unchanged.
pub fn rotate(image: &PixelBuffer, direction: RotationDirection) -> PixelBuffer {
    let Some(rgb) = image.to_rgb_image() else {
        return image.clone();
    };
    let rotated = match direction {
        RotationDirection::Clockwise => imageops::rotate90(&rgb),
        RotationDirection::CounterClockwise => imageops::rotate270(&rgb),
    };
    PixelBuffer::from_rgb_image(rotated)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Four quarter turns in one direction are the identity.
        #[test]
        fn prop_four_turns_identity(
            w in 1u32..12,
            h in 1u32..12,
            seed in any::<u8>(),
            clockwise in any::<bool>(),
        ) {
            let pixels = (0..w * h * 3).map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed)).collect();
            let img = PixelBuffer::new(w, h, pixels);
            let dir = if clockwise {
                RotationDirection::Clockwise
            } else {
                RotationDirection::CounterClockwise
            };

            let mut out = img.clone();
            for _ in 0..4 {
                out = rotate(&out, dir);
            }
            prop_assert_eq!(out, img);
        }
    }
}
