//! Retouch WASM - WebAssembly bindings for Retouch
//!
//! This crate exposes a `retouch-core` edit session to a browser UI. The UI
//! owns windows, dialogs, pickers and region selection; it forwards raw
//! control events here and redraws from the display buffer.
//!
//! # Module Structure
//!
//! - `session` - The `WasmEditSession` class driven by UI events
//! - `types` - WASM-compatible wrapper types for image data
//! - `encode` - Image encoding bindings (PNG/JPEG export)
//!
//! # Usage
//!
//! ```typescript
//! import init, { WasmEditSession } from '@retouch/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new WasmEditSession();
//! session.load(file.name, new Uint8Array(await file.arrayBuffer()));
//! console.log(`Loaded ${session.display_width}x${session.display_height}`);
//! ```

use wasm_bindgen::prelude::*;

mod encode;
mod session;
mod types;

// Re-export public types
pub use encode::{encode_image, encode_jpeg, export_mime_type};
pub use session::WasmEditSession;
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Names of the filters the session can select, in UI order.
#[wasm_bindgen]
pub fn filter_names() -> Vec<String> {
    retouch_core::FilterKind::ALL
        .iter()
        .map(|kind| kind.name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_filter_names() {
        let names = filter_names();
        assert_eq!(names.len(), 7);
        assert_eq!(names[0], "None");
        assert!(names.contains(&"Sobel".to_string()));
    }
}
