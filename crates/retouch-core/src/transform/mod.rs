//! Geometric and tonal operations that rebase the working buffer.
//!
//! Each function takes buffers by reference and returns a new buffer; the
//! session swaps it in only after the whole result exists, so a failed
//! transform never leaves a half-written stage behind.
//!
//! # Inputs
//!
//! - Rotation, crop and resize read the working buffer
//! - Brightness and blur read the source image
//!
//! # Coordinate System
//!
//! - Crop rectangles are in pixels of the working buffer
//! - Origin is top-left corner

mod crop;
mod resize;
mod rotation;
mod tone;

pub use crop::{crop, Rect};
pub use resize::{resize, ResizeFilter};
pub use rotation::{rotate, RotationDirection};
pub use tone::{blur, brightness, MAX_BLUR_SIGMA, MIN_BLUR_SIGMA};
