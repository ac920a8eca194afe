//! Text stamping with 8x8 bitmap glyphs.
//!
//! Text is drawn onto a copy of the buffer; the caller decides what to do
//! with the stamped result. The session bakes it into the working buffer so
//! it survives later filter changes.
//!
//! # Examples
//!
//! ```ignore
//! use retouch_core::annotate::{stamp_text, FontScale, TextPosition};
//! use retouch_core::Rgb;
//!
//! let stamped = stamp_text(
//!     &display,
//!     TextPosition::new(10, 40),
//!     "Hello",
//!     Rgb::new(255, 255, 255),
//!     FontScale::from_point_size(12),
//!     2,
//! );
//! ```

use font8x8::{UnicodeFonts, BASIC_FONTS};
use serde::{Deserialize, Serialize};

use crate::buffer::{PixelBuffer, Rgb};

/// Width and height of one glyph in font units.
pub const GLYPH_SIZE: i32 = 8;

/// Font units are drawn as `round(scale * CELL_PER_SCALE)` pixel squares.
const CELL_PER_SCALE: f32 = 3.0;

/// Largest glyph dot, in pixels. Bigger scales are clamped to it.
pub const MAX_CELL_SIZE: i32 = 4096;

/// Widest stroke `stamp_text` will draw, in pixels.
pub const MAX_STROKE: u32 = 1024;

/// Bottom-left corner of the first character, in buffer pixels.
///
/// Coordinates may lie outside the buffer; anything drawn there is clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextPosition {
    pub x: i32,
    pub y: i32,
}

impl TextPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Relative text size, where 1.0 corresponds to a 10 point font.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontScale(f32);

impl FontScale {
    /// Non-finite and non-positive scales fall back to the smallest glyph;
    /// scales past [`MAX_CELL_SIZE`] are clamped to it.
    pub fn new(scale: f32) -> Self {
        if scale.is_finite() && scale > 0.0 {
            Self(scale.min(MAX_CELL_SIZE as f32 / CELL_PER_SCALE))
        } else {
            Self(0.0)
        }
    }

    /// Convert a UI point size: `scale = points / 10`.
    pub fn from_point_size(points: u32) -> Self {
        Self::new(points as f32 / 10.0)
    }

    pub fn get(self) -> f32 {
        self.0
    }

    /// Side length in pixels of one glyph dot.
    pub fn cell_size(self) -> i32 {
        ((self.0 * CELL_PER_SCALE).round() as i32).clamp(1, MAX_CELL_SIZE)
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Draw `text` onto a copy of `buffer`.
///
/// Each glyph dot becomes a `cell x cell` square, and every lit pixel is
/// widened to a `thickness x thickness` stroke. Characters outside the basic
/// Latin range are drawn as `?`.
///
/// # Arguments
///
/// * `buffer` - Image to draw on; it is not modified
/// * `position` - Bottom-left corner of the first character
/// * `text` - Characters to draw, left to right
/// * `color` - Fill color of the strokes
/// * `scale` - Glyph size, see [`FontScale`]
/// * `thickness` - Stroke width in pixels, clamped to `1..=MAX_STROKE`
///
/// # Returns
///
/// A stamped copy with the same dimensions. Strokes outside the buffer are
/// clipped.
pub fn stamp_text(
    buffer: &PixelBuffer,
    position: TextPosition,
    text: &str,
    color: Rgb,
    scale: FontScale,
    thickness: u32,
) -> PixelBuffer {
    let mut out = buffer.clone();
    let cell = scale.cell_size();
    let stroke = thickness.clamp(1, MAX_STROKE) as i32;
    let offset = (stroke - 1) / 2;
    let advance = GLYPH_SIZE * cell;
    let top = position.y.saturating_sub(advance - 1);

    for (index, ch) in text.chars().enumerate() {
        let Some(glyph) = BASIC_FONTS.get(ch).or_else(|| BASIC_FONTS.get('?')) else {
            continue;
        };
        let index = i32::try_from(index).unwrap_or(i32::MAX);
        let left = position.x.saturating_add(index.saturating_mul(advance));

        for (row_idx, &row_bits) in (0..).zip(glyph.iter()) {
            for col_idx in 0..GLYPH_SIZE {
                if (row_bits >> col_idx) & 1 == 0 {
                    continue;
                }
                let px = left.saturating_add(col_idx * cell - offset);
                let py = top.saturating_add(row_idx * cell - offset);
                fill_square(&mut out, px, py, cell + stroke - 1, color);
            }
        }
    }

    out
}

fn fill_square(buffer: &mut PixelBuffer, x: i32, y: i32, size: i32, color: Rgb) {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = i64::from(x.saturating_add(size)).min(i64::from(buffer.width));
    let y1 = i64::from(y.saturating_add(size)).min(i64::from(buffer.height));
    for ty in i64::from(y0)..y1 {
        for tx in i64::from(x0)..x1 {
            buffer.put(tx as u32, ty as u32, color);
        }
    }
}
