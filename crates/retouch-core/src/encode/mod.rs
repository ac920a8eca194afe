//! Image encoding for export.
//!
//! This module provides:
//! - [`ExportFormat`], chosen explicitly or from a target path's extension
//! - PNG and JPEG encoders working on raw RGB pixel data
//!
//! # Examples
//!
//! ```ignore
//! use retouch_core::encode::{encode, ExportFormat};
//!
//! let jpeg_bytes = encode(&buffer, ExportFormat::Jpeg, 95).unwrap();
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod export;

pub use export::{encode, encode_jpeg, encode_png, EncodeError, ExportFormat};
