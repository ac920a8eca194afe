//! The three buffer stages of a loaded image and where they came from.
//!
//! ```text
//! origin ──decode──▶ source ──transforms──▶ working ──filter──▶ display
//! ```
//!
//! The store only holds and swaps stages. Deciding what goes into them is
//! the session's job.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::buffer::PixelBuffer;
use crate::decode::{decode_image, DecodeError};
use crate::error::{EditError, Result};

/// Where an image's encoded bytes live.
///
/// Re-reading an origin always yields the bytes that were first loaded, which
/// is what undo relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// A file on disk, re-read on every reset.
    File(PathBuf),
    /// Encoded bytes kept in memory, for hosts without a filesystem.
    Memory { name: String, bytes: Arc<[u8]> },
}

impl Origin {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Origin::File(path.into())
    }

    pub fn memory(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Origin::Memory {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Human-readable name: the path, or the in-memory name.
    pub fn name(&self) -> String {
        match self {
            Origin::File(path) => path.display().to_string(),
            Origin::Memory { name, .. } => name.clone(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Origin::File(path) => Some(path),
            Origin::Memory { .. } => None,
        }
    }

    /// Read and decode the origin.
    pub fn decode(&self) -> std::result::Result<PixelBuffer, DecodeError> {
        match self {
            Origin::File(path) => {
                let bytes = std::fs::read(path)
                    .map_err(|e| DecodeError::IoError(format!("{}: {e}", path.display())))?;
                decode_image(&bytes)
            }
            Origin::Memory { bytes, .. } => decode_image(bytes),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Source, working and display buffers of one loaded image.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Stages {
    source: PixelBuffer,
    working: PixelBuffer,
    display: PixelBuffer,
}

impl Stages {
    fn from_decoded(decoded: PixelBuffer) -> Self {
        Self {
            source: decoded.clone(),
            working: decoded.clone(),
            display: decoded,
        }
    }
}

/// Owns the buffer stages and the origin they were decoded from.
///
/// Either nothing is loaded, or all three stages exist together with their
/// origin.
#[derive(Debug, Clone, Default)]
pub struct ImageStore {
    loaded: Option<(Origin, Stages)>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `origin` and make it the current image with all three stages
    /// identical.
    ///
    /// # Errors
    ///
    /// [`EditError::Decode`] if the origin cannot be read or decoded. The
    /// previously loaded image, if any, is kept.
    pub fn load(&mut self, origin: Origin) -> Result<()> {
        let decoded = origin.decode()?;
        info!(
            origin = %origin,
            width = decoded.width,
            height = decoded.height,
            "image loaded"
        );
        self.loaded = Some((origin, Stages::from_decoded(decoded)));
        Ok(())
    }

    /// Re-decode the recorded origin and reset every stage to it.
    ///
    /// # Errors
    ///
    /// [`EditError::NoOrigin`] if nothing was ever loaded, or
    /// [`EditError::Decode`] if the origin can no longer be decoded. Either
    /// way the current stages are untouched.
    pub fn reset_from_origin(&mut self) -> Result<()> {
        let (origin, stages) = self.loaded.as_mut().ok_or(EditError::NoOrigin)?;
        let decoded = origin.decode()?;
        *stages = Stages::from_decoded(decoded);
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn origin(&self) -> Option<&Origin> {
        self.loaded.as_ref().map(|(origin, _)| origin)
    }

    pub fn source(&self) -> Option<&PixelBuffer> {
        self.stages().map(|s| &s.source)
    }

    pub fn current_working(&self) -> Option<&PixelBuffer> {
        self.stages().map(|s| &s.working)
    }

    pub fn current_display(&self) -> Option<&PixelBuffer> {
        self.stages().map(|s| &s.display)
    }

    /// Replace working and display together. No-op when nothing is loaded.
    pub(crate) fn commit(&mut self, working: PixelBuffer, display: PixelBuffer) {
        if let Some((_, stages)) = self.loaded.as_mut() {
            stages.working = working;
            stages.display = display;
        }
    }

    /// Replace only the display. No-op when nothing is loaded.
    pub(crate) fn set_display(&mut self, display: PixelBuffer) {
        if let Some((_, stages)) = self.loaded.as_mut() {
            stages.display = display;
        }
    }

    fn stages(&self) -> Option<&Stages> {
        self.loaded.as_ref().map(|(_, stages)| stages)
    }
}
