//! Common unit and color conversions

use tiny_skia::Color;

/// Convert [u8; 4] RGBA array to tiny_skia Color
#[inline]
pub fn color_from_rgba(rgba: [u8; 4]) -> Color {
    Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// Convert density-independent units to whole surface pixels, rounding half
/// up (truncation after adding 0.5)
#[inline]
pub fn dp_to_px(dp: f32, density: f32) -> f32 {
    (density * dp + 0.5).trunc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_to_px() {
        assert_eq!(dp_to_px(0.0, 2.0), 0.0);
        assert_eq!(dp_to_px(10.0, 1.0), 10.0);
        assert_eq!(dp_to_px(10.0, 2.75), 28.0);
        assert_eq!(dp_to_px(3.0, 1.5), 5.0);
        assert_eq!(dp_to_px(1.0, 1.4), 1.0);
    }

    #[test]
    fn test_color_from_rgba() {
        let color = color_from_rgba([255, 0, 0, 255]);
        assert_eq!(color.red(), 1.0);
        assert_eq!(color.alpha(), 1.0);
    }
}
