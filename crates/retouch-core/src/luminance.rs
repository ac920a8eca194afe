//! Luma calculation using ITU-R BT.601 coefficients.
//!
//! These are the weights used by the GreyScale filter, matching the classic
//! RGB-to-gray conversion that desktop image tools apply.

/// ITU-R BT.601 coefficient for the red channel.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for the green channel.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for the blue channel.
pub const LUMA_B: f32 = 0.114;

/// Calculate luma from u8 RGB values, rounded to the nearest integer.
#[inline]
pub fn calculate_luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let luma = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    luma.clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        let sum = LUMA_R + LUMA_G + LUMA_B;
        assert!((sum - 1.0).abs() < 1e-6, "Coefficients should sum to 1.0");
    }

    #[test]
    fn test_luma_extremes() {
        assert_eq!(calculate_luma_u8(255, 255, 255), 255);
        assert_eq!(calculate_luma_u8(0, 0, 0), 0);
    }

    #[test]
    fn test_luma_gray_preserves_value() {
        for v in [0u8, 1, 64, 128, 192, 254, 255] {
            assert_eq!(calculate_luma_u8(v, v, v), v);
        }
    }

    #[test]
    fn test_luma_primaries() {
        // 0.299 * 255 = 76.2, 0.587 * 255 = 149.7, 0.114 * 255 = 29.1
        assert_eq!(calculate_luma_u8(255, 0, 0), 76);
        assert_eq!(calculate_luma_u8(0, 255, 0), 150);
        assert_eq!(calculate_luma_u8(0, 0, 255), 29);
    }
}
