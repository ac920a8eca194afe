//! Image decoding for the editor's load path.
//!
//! This module provides:
//! - Decoding PNG and JPEG byte streams into a [`PixelBuffer`](crate::PixelBuffer)
//! - EXIF orientation correction, so the working image is upright
//!
//! Any other container (GIF, BMP, TIFF, ...) is rejected with
//! [`DecodeError::UnsupportedFormat`], even when the `image` crate could read it.
//!
//! # Examples
//!
//! ```ignore
//! use retouch_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod codec;
mod types;

pub use codec::decode_image;
pub use types::{DecodeError, Orientation};
