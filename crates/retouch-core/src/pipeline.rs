//! Display recomputation: working buffer plus filter selection.
//!
//! The display is always derived fresh from the working buffer. It is never
//! fed back into another filter, so changing the selection or its parameter
//! any number of times gives the same result as selecting it once.

use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::filters;
use crate::selection::{FilterKind, FilterSelection};

/// Build the display buffer for `working` under `selection`.
///
/// The parameter is read per filter: kernel size for Median, intensity for
/// Cold and Warm, stretch percentage for Contrast. GreyScale and Sobel
/// ignore it.
///
/// # Arguments
///
/// * `working` - The edited image; it is never modified
/// * `selection` - Filter kind and its parameter
///
/// # Returns
///
/// A new buffer with the same dimensions as `working`. With
/// [`FilterKind::None`] it is a plain copy.
pub fn recompute(working: &PixelBuffer, selection: &FilterSelection) -> PixelBuffer {
    let parameter = selection.parameter;
    debug!(
        filter = %selection.kind,
        parameter = parameter.get(),
        width = working.width,
        height = working.height,
        "recomputing display"
    );

    match selection.kind {
        FilterKind::None => working.clone(),
        FilterKind::Median => filters::median(working, parameter),
        FilterKind::GreyScale => filters::greyscale(working),
        FilterKind::Cold => filters::cold(working, parameter.get() as i32),
        FilterKind::Warm => filters::warm(working, parameter.get() as i32),
        FilterKind::Contrast => filters::contrast_stretch(working, parameter.get()),
        FilterKind::Sobel => filters::sobel(working),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgb;
    use crate::selection::KernelSize;

    fn sample() -> PixelBuffer {
        let mut pixels = Vec::new();
        for i in 0..48u32 {
            pixels.push((i * 5 % 256) as u8);
            pixels.push((i * 17 % 256) as u8);
            pixels.push((255 - i * 3) as u8);
        }
        PixelBuffer::new(8, 6, pixels)
    }

    #[test]
    fn test_none_is_a_copy() {
        let working = sample();
        let display = recompute(&working, &FilterSelection::default());
        assert_eq!(display, working);
    }

    #[test]
    fn test_dispatches_to_kernels() {
        let working = sample();
        let p = KernelSize::new(9);
        let cases = [
            (FilterKind::Median, filters::median(&working, p)),
            (FilterKind::GreyScale, filters::greyscale(&working)),
            (FilterKind::Cold, filters::cold(&working, 9)),
            (FilterKind::Warm, filters::warm(&working, 9)),
            (FilterKind::Contrast, filters::contrast_stretch(&working, 9)),
            (FilterKind::Sobel, filters::sobel(&working)),
        ];
        for (kind, expected) in cases {
            let got = recompute(&working, &FilterSelection::new(kind, p));
            assert_eq!(got, expected, "{kind}");
        }
    }

    #[test]
    fn test_working_is_not_mutated() {
        let working = sample();
        let before = working.clone();
        for kind in FilterKind::ALL {
            let _ = recompute(&working, &FilterSelection::new(kind, KernelSize::new(15)));
        }
        assert_eq!(working, before);
    }

    #[test]
    fn test_red_square_median_unchanged() {
        let red = PixelBuffer::filled(100, 100, Rgb::new(255, 0, 0));
        let sel = FilterSelection::new(FilterKind::Median, KernelSize::new(4));
        assert_eq!(recompute(&red, &sel), red);
    }

    #[test]
    fn test_every_filter_accepts_single_pixel() {
        let one = PixelBuffer::new(1, 1, vec![10, 120, 240]);
        for kind in FilterKind::ALL {
            let out = recompute(&one, &FilterSelection::new(kind, KernelSize::new(99)));
            assert_eq!(out.dimensions(), (1, 1), "{kind}");
        }
    }
}
