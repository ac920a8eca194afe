//! Edit session WASM bindings.
//!
//! `WasmEditSession` is the browser UI's handle on one editing session. Each
//! method takes raw control values (slider integers, text-box strings, radio
//! button labels) and maps them to validated session calls. Rejected
//! operations are logged to the browser console and returned as errors; the
//! session is left as it was.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const session = new WasmEditSession();
//! session.load(file.name, new Uint8Array(await file.arrayBuffer()));
//!
//! session.select_filter("Median");
//! session.set_filter_control(7);
//! session.rotate_right();
//!
//! const rgba = session.display_rgba();
//! ctx.putImageData(new ImageData(rgba, session.display_width, session.display_height), 0, 0);
//! ```

use retouch_core::controls;
use retouch_core::{
    EditError, EditSession, EditorSettings, FilterKind, FontScale, Origin, Rect, Rgb,
    RotationDirection, TextPosition,
};
use wasm_bindgen::prelude::*;

use crate::encode::parse_format;
use crate::types::{resize_filter_from_u8, JsPixelBuffer};

/// Convert a rejected operation into a JS error, logging it to the console.
fn reject(operation: &str, error: EditError) -> JsValue {
    let message = format!("{operation}: {error}");
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

/// One editing session, driven by UI events.
#[wasm_bindgen]
pub struct WasmEditSession {
    inner: EditSession,
}

#[wasm_bindgen]
impl WasmEditSession {
    /// Create an empty session with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: EditSession::new(EditorSettings::default()),
        }
    }

    /// Load encoded PNG or JPEG bytes. `name` is kept for display only.
    pub fn load(&mut self, name: &str, bytes: &[u8]) -> Result<(), JsValue> {
        self.inner
            .load(Origin::memory(name, bytes))
            .map_err(|e| reject("load", e))
    }

    #[wasm_bindgen(getter)]
    pub fn is_loaded(&self) -> bool {
        self.inner.is_loaded()
    }

    /// Name of the loaded image, if any.
    #[wasm_bindgen(getter)]
    pub fn origin_name(&self) -> Option<String> {
        self.inner.origin().map(Origin::name)
    }

    // -- transforms --

    pub fn rotate_left(&mut self) -> Result<(), JsValue> {
        self.inner
            .rotate(RotationDirection::CounterClockwise)
            .map_err(|e| reject("rotate", e))
    }

    pub fn rotate_right(&mut self) -> Result<(), JsValue> {
        self.inner
            .rotate(RotationDirection::Clockwise)
            .map_err(|e| reject("rotate", e))
    }

    /// Resize from the width and height text fields.
    pub fn resize(&mut self, width: &str, height: &str) -> Result<(), JsValue> {
        self.inner
            .resize_from_input(width, height)
            .map_err(|e| reject("resize", e))
    }

    /// Crop to a region picked in the UI, in working-buffer pixels.
    pub fn crop(&mut self, x: u32, y: u32, width: u32, height: u32) -> Result<(), JsValue> {
        self.inner
            .crop(Rect::new(x, y, width, height))
            .map_err(|e| reject("crop", e))
    }

    /// Brightness slider, -100 to 100.
    pub fn set_brightness(&mut self, control: i32) -> Result<(), JsValue> {
        self.inner
            .brightness(controls::brightness_factor_from_control(control))
            .map_err(|e| reject("brightness", e))
    }

    /// Blur slider; sigma is `control / 10`, clamped to 0.1 - 5.0.
    pub fn set_blur(&mut self, control: i32) -> Result<(), JsValue> {
        self.inner
            .blur(controls::blur_sigma_from_control(control))
            .map_err(|e| reject("blur", e))
    }

    // -- filters --

    /// Select a filter by its radio-button label.
    pub fn select_filter(&mut self, label: &str) -> Result<(), JsValue> {
        let kind = FilterKind::from_control_label(label).ok_or_else(|| {
            let message = format!("unknown filter: {label:?}");
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(&JsValue::from_str(&message));
            JsValue::from_str(&message)
        })?;
        self.inner.set_filter(kind);
        Ok(())
    }

    /// Filter parameter slider; normalized to an odd value in 3 - 99.
    pub fn set_filter_control(&mut self, value: i32) {
        self.inner.set_filter_control(value as i64);
    }

    #[wasm_bindgen(getter)]
    pub fn filter_name(&self) -> String {
        self.inner.selection().kind.name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn filter_parameter(&self) -> u32 {
        self.inner.selection().parameter.get()
    }

    /// Whether the parameter slider affects the selected filter; the UI
    /// disables the slider otherwise.
    #[wasm_bindgen(getter)]
    pub fn filter_uses_parameter(&self) -> bool {
        self.inner.selection().kind.uses_parameter()
    }

    // -- annotation --

    /// Stamp text with its bottom-left corner at (x, y).
    ///
    /// Returns false if nothing was drawn (blank text or no image).
    #[allow(clippy::too_many_arguments)]
    pub fn add_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        r: u8,
        g: u8,
        b: u8,
        point_size: u32,
    ) -> bool {
        self.inner
            .stamp(
                TextPosition::new(x, y),
                text,
                Rgb::new(r, g, b),
                FontScale::from_point_size(point_size),
            )
            .is_some()
    }

    // -- history and export --

    /// Discard all edits and reload the original image.
    pub fn undo(&mut self) -> Result<(), JsValue> {
        self.inner.undo().map_err(|e| reject("undo", e))
    }

    /// Encode the display as `png` or `jpeg`.
    pub fn export(&self, format: &str) -> Result<Vec<u8>, JsValue> {
        let format = parse_format(format).map_err(|e| reject("export", e))?;
        self.inner.export(format).map_err(|e| reject("export", e))
    }

    // -- display accessors --

    /// Copy of the display buffer, or undefined when nothing is loaded.
    pub fn display(&self) -> Option<JsPixelBuffer> {
        self.inner.display().map(JsPixelBuffer::from_buffer)
    }

    /// Display pixels as RGBA for a canvas `ImageData`.
    pub fn display_rgba(&self) -> Option<js_sys::Uint8ClampedArray> {
        self.inner
            .display()
            .map(|d| js_sys::Uint8ClampedArray::from(d.to_rgba().as_slice()))
    }

    #[wasm_bindgen(getter)]
    pub fn display_width(&self) -> u32 {
        self.inner.display().map(|d| d.width).unwrap_or(0)
    }

    #[wasm_bindgen(getter)]
    pub fn display_height(&self) -> u32 {
        self.inner.display().map(|d| d.height).unwrap_or(0)
    }

    // -- settings --

    /// Serialize settings to a JS object
    pub fn settings(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.settings())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replace settings from a JS object; missing fields take defaults
    pub fn set_settings(&mut self, value: JsValue) -> Result<(), JsValue> {
        let settings: EditorSettings =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner.set_settings(settings);
        Ok(())
    }

    /// Resize filter: 0 = Nearest, 1 = Bilinear, 2 = Lanczos3
    pub fn set_resize_filter(&mut self, value: u8) {
        let mut settings = *self.inner.settings();
        settings.resize_filter = resize_filter_from_u8(value);
        self.inner.set_settings(settings);
    }
}

impl Default for WasmEditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmEditSession {
    #[cfg(test)]
    pub(crate) fn inner(&self) -> &EditSession {
        &self.inner
    }
}
