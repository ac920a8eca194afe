//! An editing session: one loaded image, its filter selection and settings.
//!
//! All mutation goes through `&mut self`. Every operation either completes
//! and leaves the session in a new consistent state, or fails and leaves it
//! exactly as it was.
//!
//! # Examples
//!
//! ```ignore
//! use retouch_core::{EditSession, EditorSettings, FilterKind, Origin, RotationDirection};
//!
//! let mut session = EditSession::open(Origin::file("photo.jpg"), EditorSettings::default())?;
//! session.rotate(RotationDirection::Clockwise)?;
//! session.set_filter(FilterKind::Warm);
//! session.save("photo-warm.png")?;
//! session.undo()?;
//! ```

use std::path::Path;

use tracing::{debug, info, warn};

use crate::annotate::{stamp_text, FontScale, TextPosition};
use crate::buffer::{PixelBuffer, Rgb};
use crate::controls;
use crate::encode::{encode, ExportFormat};
use crate::error::{EditError, Result};
use crate::pipeline::recompute;
use crate::selection::{FilterKind, FilterSelection, KernelSize};
use crate::settings::EditorSettings;
use crate::store::{ImageStore, Origin};
use crate::transform::{self, Rect, RotationDirection};

#[derive(Debug, Clone, Default)]
pub struct EditSession {
    store: ImageStore,
    selection: FilterSelection,
    settings: EditorSettings,
}

impl EditSession {
    /// Empty session with nothing loaded.
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            store: ImageStore::new(),
            selection: FilterSelection::default(),
            settings: settings.normalized(),
        }
    }

    /// Session with `origin` already loaded.
    pub fn open(origin: Origin, settings: EditorSettings) -> Result<Self> {
        let mut session = Self::new(settings);
        session.load(origin)?;
        Ok(session)
    }

    /// Decode `origin` and make it the current image.
    ///
    /// Source, working and display all start out as the decoded image. The
    /// current filter selection is kept but takes effect on the next
    /// recompute.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::Decode`] if the origin cannot be read or decoded.
    /// The previously loaded image, if any, stays in place.
    pub fn load(&mut self, origin: Origin) -> Result<()> {
        self.store.load(origin).inspect_err(|e| warn!(error = %e, "load rejected"))
    }

    pub fn is_loaded(&self) -> bool {
        self.store.is_loaded()
    }

    pub fn origin(&self) -> Option<&Origin> {
        self.store.origin()
    }

    pub fn source(&self) -> Option<&PixelBuffer> {
        self.store.source()
    }

    pub fn working(&self) -> Option<&PixelBuffer> {
        self.store.current_working()
    }

    pub fn display(&self) -> Option<&PixelBuffer> {
        self.store.current_display()
    }

    pub fn selection(&self) -> FilterSelection {
        self.selection
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: EditorSettings) {
        self.settings = settings.normalized();
    }

    // -- filter pipeline --

    /// Select a filter and rebuild the display from the working buffer.
    pub fn set_filter(&mut self, kind: FilterKind) {
        self.selection.kind = kind;
        self.refresh_display();
    }

    /// Change the filter parameter and rebuild the display.
    pub fn set_filter_parameter(&mut self, parameter: KernelSize) {
        self.selection.parameter = parameter;
        self.refresh_display();
    }

    /// Change the filter parameter from a raw slider value.
    pub fn set_filter_control(&mut self, value: i64) {
        self.set_filter_parameter(controls::filter_parameter_from_control(value));
    }

    fn refresh_display(&mut self) {
        if let Some(working) = self.store.current_working() {
            let display = recompute(working, &self.selection);
            self.store.set_display(display);
        }
    }

    // -- transforms --

    /// Turn the working buffer a quarter turn.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NoOrigin`] if nothing is loaded.
    pub fn rotate(&mut self, direction: RotationDirection) -> Result<()> {
        self.rebase("rotate", |_, working| Ok(transform::rotate(working, direction)))
    }

    /// Resample the working buffer to `width x height`.
    ///
    /// # Arguments
    ///
    /// * `width` - Target width in pixels
    /// * `height` - Target height in pixels
    ///
    /// The resampling filter comes from the session settings.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NoOrigin`] if nothing is loaded, or
    /// [`EditError::InvalidDimension`] if either dimension is zero.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let filter = self.settings.resize_filter;
        self.rebase("resize", |_, working| {
            transform::resize(working, width, height, filter)
        })
    }

    /// Resize from free-text width and height fields.
    pub fn resize_from_input(&mut self, width: &str, height: &str) -> Result<()> {
        let parsed = controls::parse_dimension(width)
            .and_then(|w| controls::parse_dimension(height).map(|h| (w, h)));
        match parsed {
            Ok((w, h)) => self.resize(w, h),
            Err(e) => {
                warn!(error = %e, "resize rejected");
                Err(e)
            }
        }
    }

    /// Keep only `rect` of the working buffer.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NoOrigin`] if nothing is loaded, or
    /// [`EditError::InvalidRegion`] if `rect` is empty or out of bounds.
    pub fn crop(&mut self, rect: Rect) -> Result<()> {
        self.rebase("crop", |_, working| transform::crop(working, rect))
    }

    /// Rebuild the working buffer as the source scaled by `1 + factor`.
    ///
    /// Earlier edits to the working buffer are discarded.
    ///
    /// # Arguments
    ///
    /// * `factor` - Brightness change in `[-1, 1]`; 0 restores the source
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NoOrigin`] if nothing is loaded, or
    /// [`EditError::BufferMismatch`] if the working buffer no longer has the
    /// source's dimensions.
    pub fn brightness(&mut self, factor: f32) -> Result<()> {
        self.rebase("brightness", |source, working| {
            transform::brightness(source, working, factor)
        })
    }

    /// Rebuild the working buffer as a Gaussian blur of the source.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NoOrigin`] if nothing is loaded.
    pub fn blur(&mut self, sigma: f32) -> Result<()> {
        self.rebase("blur", |source, _| Ok(transform::blur(source, sigma)))
    }

    /// Run `op` on (source, working), then swap in the new working buffer and
    /// its recomputed display.
    fn rebase<F>(&mut self, name: &str, op: F) -> Result<()>
    where
        F: FnOnce(&PixelBuffer, &PixelBuffer) -> Result<PixelBuffer>,
    {
        let (Some(source), Some(working)) = (self.store.source(), self.store.current_working())
        else {
            warn!(operation = name, "no image loaded");
            return Err(EditError::NoOrigin);
        };

        let next = op(source, working).inspect_err(|e| {
            warn!(operation = name, error = %e, "transform rejected");
        })?;
        debug!(
            operation = name,
            width = next.width,
            height = next.height,
            "working buffer rebased"
        );

        let display = recompute(&next, &self.selection);
        self.store.commit(next, display);
        Ok(())
    }

    // -- annotation --

    /// Stamp `text` onto the current display and make the result the new
    /// working and display buffers.
    ///
    /// # Arguments
    ///
    /// * `position` - Bottom-left corner of the first character
    /// * `text` - Text to draw; blank text is ignored
    /// * `color` - Stroke color
    /// * `scale` - Glyph size
    ///
    /// Stroke thickness comes from the session settings.
    ///
    /// # Returns
    ///
    /// The stamped display, or `None` if the text is blank or no image is
    /// loaded.
    pub fn stamp(
        &mut self,
        position: TextPosition,
        text: &str,
        color: Rgb,
        scale: FontScale,
    ) -> Option<&PixelBuffer> {
        if text.trim().is_empty() {
            return None;
        }
        let display = self.store.current_display()?;
        let stamped = stamp_text(
            display,
            position,
            text,
            color,
            scale,
            self.settings.text_thickness,
        );
        debug!(x = position.x, y = position.y, chars = text.chars().count(), "text stamped");

        self.store.commit(stamped.clone(), stamped);
        self.store.current_display()
    }

    // -- history --

    /// Discard every edit and restore the image as originally loaded.
    ///
    /// The filter selection is kept, but the display shows the unfiltered
    /// image until the selection or the working buffer next changes.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NoOrigin`] if nothing was ever loaded, or
    /// [`EditError::Decode`] if the origin can no longer be read. The current
    /// edits are kept in either case.
    pub fn undo(&mut self) -> Result<()> {
        self.store
            .reset_from_origin()
            .inspect_err(|e| warn!(error = %e, "undo rejected"))?;
        if let Some(origin) = self.store.origin() {
            info!(origin = %origin, "edits discarded");
        }
        Ok(())
    }

    // -- export --

    /// Encode the display buffer.
    ///
    /// JPEG output uses the quality from the session settings.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NoOrigin`] if nothing is loaded, or
    /// [`EditError::Encode`] if encoding fails.
    pub fn export(&self, format: ExportFormat) -> Result<Vec<u8>> {
        let display = self.store.current_display().ok_or(EditError::NoOrigin)?;
        Ok(encode(display, format, self.settings.jpeg_quality)?)
    }

    /// Write the display buffer to `path`, choosing the format from the
    /// extension.
    ///
    /// # Errors
    ///
    /// - [`EditError::UnsupportedFormat`] if the extension is not png, jpg or jpeg
    /// - [`EditError::NoOrigin`] if nothing is loaded
    /// - [`EditError::Io`] if the file cannot be written
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = ExportFormat::from_path(path).ok_or_else(|| {
            let ext = path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default();
            EditError::UnsupportedFormat(ext)
        })?;

        let bytes = self.export(format)?;
        std::fs::write(path, &bytes).map_err(|source| EditError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), format = %format, bytes = bytes.len(), "image saved");
        Ok(())
    }
}
