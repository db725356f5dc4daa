//! Touch helpers built on the resolved highlight rect
//!
//! The overlay does not interpret events itself; these let the host decide
//! whether a tap landed in the hole, whether a drag was a slide, and whether
//! a release should dismiss the guide.

use guidemask_types::GuideConfig;

use crate::geometry::Rect;
use crate::utils::dp_to_px;

/// Vertical travel (dp) a drag must exceed to count as a slide
pub const SLIDE_THRESHOLD_DP: f32 = 30.0;

/// Where a touch landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchRegion {
    /// Inside the undimmed hole
    Highlight,
    /// On the dimmed mask
    Mask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Up,
    Down,
}

pub fn hit_test(highlight: Rect, x: f32, y: f32) -> TouchRegion {
    if highlight.contains(x, y) {
        TouchRegion::Highlight
    } else {
        TouchRegion::Mask
    }
}

/// Classify a press/release pair by vertical travel
pub fn classify_slide(start_y: f32, end_y: f32, density: f32) -> Option<SlideDirection> {
    let threshold = dp_to_px(SLIDE_THRESHOLD_DP, density);
    if start_y - end_y > threshold {
        Some(SlideDirection::Up)
    } else if end_y - start_y > threshold {
        Some(SlideDirection::Down)
    } else {
        None
    }
}

/// Touch behavior derived from the guide configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPolicy {
    /// Touches fall through the mask to the screen below
    pub pass_through: bool,
    /// A release on the mask dismisses the guide
    pub dismiss_on_release: bool,
}

impl TouchPolicy {
    pub fn from_config(config: &GuideConfig) -> Self {
        Self {
            pass_through: config.outside_touchable,
            dismiss_on_release: config.auto_dismiss && !config.outside_touchable,
        }
    }
}
