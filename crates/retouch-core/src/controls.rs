//! Mapping raw UI control values into validated edit parameters.
//!
//! Sliders and text boxes deliver integers and free text. Everything that
//! reaches the session goes through one of these functions first, so the
//! session only ever sees in-range values.

use crate::error::{EditError, Result};
use crate::selection::KernelSize;
use crate::transform::{MAX_BLUR_SIGMA, MIN_BLUR_SIGMA};

/// Brightness slider range, inclusive on both ends.
pub const BRIGHTNESS_CONTROL_RANGE: (i32, i32) = (-100, 100);

/// Map the brightness slider `[-100, 100]` to a factor in `[-1.0, 1.0]`.
///
/// Values outside the slider range are clamped.
pub fn brightness_factor_from_control(value: i32) -> f32 {
    let (lo, hi) = BRIGHTNESS_CONTROL_RANGE;
    value.clamp(lo, hi) as f32 / 100.0
}

/// Map the blur slider to a sigma: `value / 10`, clamped to `[0.1, 5.0]`.
pub fn blur_sigma_from_control(value: i32) -> f32 {
    (value as f32 / 10.0).clamp(MIN_BLUR_SIGMA, MAX_BLUR_SIGMA)
}

/// Map the filter slider to an odd kernel size in `[3, 99]`.
pub fn filter_parameter_from_control(value: i64) -> KernelSize {
    KernelSize::new(value)
}

/// Parse a width or height typed by the user.
///
/// Surrounding whitespace is ignored. Anything that is not a positive integer
/// is rejected with [`EditError::InvalidDimension`].
pub fn parse_dimension(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| EditError::InvalidDimension(format!("not a whole number: {trimmed:?}")))?;
    if value <= 0 {
        return Err(EditError::InvalidDimension(format!(
            "must be positive, got {value}"
        )));
    }
    u32::try_from(value)
        .map_err(|_| EditError::InvalidDimension(format!("too large: {value}")))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Brightness factor is always within [-1, 1].
        #[test]
        fn prop_brightness_factor_in_range(value in any::<i32>()) {
            let f = brightness_factor_from_control(value);
            prop_assert!((-1.0..=1.0).contains(&f));
        }

        /// Property: Blur sigma is always within the blur bounds.
        #[test]
        fn prop_blur_sigma_in_range(value in any::<i32>()) {
            let s = blur_sigma_from_control(value);
            prop_assert!((MIN_BLUR_SIGMA..=MAX_BLUR_SIGMA).contains(&s));
        }

        /// Property: Every positive integer in text form parses back to itself.
        #[test]
        fn prop_parse_positive(value in 1u32..=u32::MAX) {
            prop_assert_eq!(parse_dimension(&value.to_string()).ok(), Some(value));
        }
    }
}
