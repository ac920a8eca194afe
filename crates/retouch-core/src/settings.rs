//! Editor settings that tune how edits are carried out.
//!
//! Nothing here is persisted by the crate itself. Hosts that want to keep
//! settings between runs can serialize [`EditorSettings`] with serde.

use serde::{Deserialize, Serialize};

use crate::annotate::MAX_STROKE;
use crate::transform::ResizeFilter;

/// Default JPEG export quality.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Default text stroke thickness in pixels.
pub const DEFAULT_TEXT_THICKNESS: u32 = 2;

/// Tunables for an edit session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// JPEG quality used by `save` and `export` (1 to 100)
    pub jpeg_quality: u8,
    /// Resampling filter used by `resize`
    pub resize_filter: ResizeFilter,
    /// Stroke thickness for stamped text (1 to `MAX_STROKE`)
    pub text_thickness: u32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            resize_filter: ResizeFilter::default(),
            text_thickness: DEFAULT_TEXT_THICKNESS,
        }
    }
}

impl EditorSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy with every field pulled into its valid range.
    pub fn normalized(self) -> Self {
        Self {
            jpeg_quality: self.jpeg_quality.clamp(1, 100),
            resize_filter: self.resize_filter,
            text_thickness: self.text_thickness.clamp(1, MAX_STROKE),
        }
    }
}
