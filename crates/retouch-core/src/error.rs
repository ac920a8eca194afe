//! Error type for edit session operations.
//!
//! Every variant is recoverable: an operation that returns an error leaves the
//! session exactly as it was before the call.

use std::path::PathBuf;

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Result alias for edit session operations.
pub type Result<T> = std::result::Result<T, EditError>;

#[derive(Debug, Error)]
pub enum EditError {
    /// The origin could not be read or is not a decodable color image.
    #[error("Failed to decode image: {0}")]
    Decode(#[from] DecodeError),

    /// Undo, reset or an edit was requested before anything was loaded.
    #[error("No image has been loaded")]
    NoOrigin,

    /// Crop rectangle has zero area or falls outside the working image.
    #[error("Invalid crop region {width}x{height} at ({x}, {y}) for a {image_width}x{image_height} image")]
    InvalidRegion {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },

    /// Resize target is non-positive or could not be parsed.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Brightness blend needs the source and working images to match in size.
    #[error("Cannot blend a {source_width}x{source_height} source with a {working_width}x{working_height} working image")]
    BufferMismatch {
        source_width: u32,
        source_height: u32,
        working_width: u32,
        working_height: u32,
    },

    /// Export target has an extension we cannot encode.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// The encoder rejected the display buffer.
    #[error("Failed to encode image: {0}")]
    Encode(#[from] EncodeError),

    /// Writing the export target failed.
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(EditError::NoOrigin.to_string(), "No image has been loaded");

        let err = EditError::InvalidDimension("width must be positive, got 0".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid dimension: width must be positive, got 0"
        );

        let err = EditError::InvalidRegion {
            x: 1,
            y: 2,
            width: 0,
            height: 5,
            image_width: 10,
            image_height: 10,
        };
        assert_eq!(
            err.to_string(),
            "Invalid crop region 0x5 at (1, 2) for a 10x10 image"
        );
    }

    #[test]
    fn test_decode_error_converts() {
        let err: EditError = DecodeError::InvalidFormat.into();
        assert!(matches!(err, EditError::Decode(DecodeError::InvalidFormat)));
    }
}
