//! Retouch Core - Raster image editing library
//!
//! This crate provides the editing core for Retouch: a loaded image layered
//! into source, working and display stages, a library of stylistic filters,
//! destructive transforms, text stamping and single-step undo.
//!
//! The entry point is [`EditSession`]. Everything else is exposed for hosts
//! that want to run individual kernels or transforms directly.

pub mod annotate;
pub mod buffer;
pub mod controls;
pub mod decode;
pub mod encode;
pub mod error;
pub mod filters;
pub mod luminance;
pub mod pipeline;
pub mod selection;
pub mod session;
pub mod settings;
pub mod store;
pub mod transform;

pub use annotate::{FontScale, TextPosition};
pub use buffer::{PixelBuffer, Rgb};
pub use encode::ExportFormat;
pub use error::{EditError, Result};
pub use selection::{FilterKind, FilterSelection, KernelSize};
pub use session::EditSession;
pub use settings::EditorSettings;
pub use store::{ImageStore, Origin};
pub use transform::{Rect, ResizeFilter, RotationDirection};
