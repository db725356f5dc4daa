//! Shared configuration types for guidemask
//!
//! This crate contains the serializable configuration record consumed by the
//! overlay engine: padding rules, highlight shape, mask color/alpha and the
//! placement requests for decoration elements. Out-of-range values are
//! clamped by [`GuideConfig::sanitized`] rather than rejected.

use serde::{Deserialize, Serialize};

/// RGBA color stored as `[r, g, b, a]`
pub type Color = [u8; 4];

pub mod mask_colors {
    use super::Color;

    pub const BLACK: Color = [0, 0, 0, 255];
    pub const WHITE: Color = [255, 255, 255, 255];
    /// Slate tone used by the demo screen
    pub const SLATE: Color = [40, 44, 52, 255];
}

// ─────────────────────────────────────────────────────────────────────────────
// Padding
// ─────────────────────────────────────────────────────────────────────────────

/// Insets applied around the target rectangle to form the highlight rectangle.
///
/// `uniform` expands every edge unless that edge carries an override. An
/// override that is set (including an explicit `0.0`) replaces the uniform
/// contribution for its edge only; an unset override leaves the uniform value
/// in effect.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PaddingSpec {
    #[serde(default)]
    pub uniform: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f32>,
}

/// Per-edge insets after uniform/override resolution
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PaddingSpec {
    /// Padding with only the uniform inset set
    pub fn uniform(value: f32) -> Self {
        Self {
            uniform: value,
            ..Default::default()
        }
    }

    pub fn with_left(mut self, value: f32) -> Self {
        self.left = Some(value);
        self
    }

    pub fn with_top(mut self, value: f32) -> Self {
        self.top = Some(value);
        self
    }

    pub fn with_right(mut self, value: f32) -> Self {
        self.right = Some(value);
        self
    }

    pub fn with_bottom(mut self, value: f32) -> Self {
        self.bottom = Some(value);
        self
    }

    /// Resolve the effective inset for each edge
    pub fn insets(&self) -> EdgeInsets {
        let edge = |over: Option<f32>| over.unwrap_or(self.uniform);
        EdgeInsets {
            left: edge(self.left),
            top: edge(self.top),
            right: edge(self.right),
            bottom: edge(self.bottom),
        }
    }

    /// Non-finite insets become 0. Negative insets are kept and shrink the
    /// highlight instead of growing it.
    pub fn clamped(&self) -> Self {
        let clamp = |v: f32| if v.is_finite() { v } else { 0.0 };
        Self {
            uniform: clamp(self.uniform),
            left: self.left.map(clamp),
            top: self.top.map(clamp),
            right: self.right.map(clamp),
            bottom: self.bottom.map(clamp),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Highlight Shape
// ─────────────────────────────────────────────────────────────────────────────

/// Shape of the hole cut out of the mask
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HighlightShape {
    /// Rectangle with rounded corners; a radius of 0 is a plain rectangle
    RoundedRect {
        #[serde(default)]
        corner_radius: f32,
    },
    /// Circle centered on the highlight rect, radius = half its width
    Circle,
}

impl Default for HighlightShape {
    fn default() -> Self {
        Self::RoundedRect { corner_radius: 0.0 }
    }
}

impl HighlightShape {
    pub fn rounded_rect(corner_radius: f32) -> Self {
        Self::RoundedRect { corner_radius }
    }

    fn clamped(self) -> Self {
        match self {
            Self::RoundedRect { corner_radius } if !corner_radius.is_finite() => {
                Self::RoundedRect { corner_radius: 0.0 }
            }
            Self::RoundedRect { corner_radius } => Self::RoundedRect {
                corner_radius: corner_radius.max(0.0),
            },
            Self::Circle => Self::Circle,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decoration Placement
// ─────────────────────────────────────────────────────────────────────────────

/// Which side of the highlight rect a decoration attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Left,
    Top,
    Right,
    #[default]
    Bottom,
    /// Centered directly over the highlight rect on both axes
    Over,
}

/// Cross-axis alignment relative to the highlight rect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fit {
    Start,
    #[default]
    Center,
    End,
}

/// Placement request for a single decoration element.
/// Offsets are in density-independent units and applied after anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Placement {
    #[serde(default)]
    pub anchor: Anchor,
    #[serde(default)]
    pub fit: Fit,
    #[serde(default)]
    pub offset_x: f32,
    #[serde(default)]
    pub offset_y: f32,
}

impl Placement {
    pub fn new(anchor: Anchor, fit: Fit) -> Self {
        Self {
            anchor,
            fit,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    pub fn with_offset(mut self, offset_x: f32, offset_y: f32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Guide Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration record for one guide overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideConfig {
    #[serde(default)]
    pub padding: PaddingSpec,
    #[serde(default)]
    pub shape: HighlightShape,
    #[serde(default = "default_mask_color")]
    pub mask_color: Color,
    #[serde(default = "default_mask_alpha")]
    pub mask_alpha: u8,
    /// Draw the full mask with no hole, covering the target as well
    #[serde(default)]
    pub overlay_target: bool,
    /// Let touches pass through the mask to the screen below
    #[serde(default)]
    pub outside_touchable: bool,
    #[serde(default = "default_true")]
    pub auto_dismiss: bool,
    /// Display density: surface pixels per density-independent unit
    #[serde(default = "default_density")]
    pub density: f32,
    #[serde(default)]
    pub decorations: Vec<Placement>,
}

fn default_mask_color() -> Color {
    mask_colors::BLACK
}
fn default_mask_alpha() -> u8 {
    255
}
fn default_true() -> bool {
    true
}
fn default_density() -> f32 {
    1.0
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            padding: PaddingSpec::default(),
            shape: HighlightShape::default(),
            mask_color: default_mask_color(),
            mask_alpha: default_mask_alpha(),
            overlay_target: false,
            outside_touchable: false,
            auto_dismiss: true,
            density: default_density(),
            decorations: Vec::new(),
        }
    }
}

impl GuideConfig {
    /// Copy of this config with cosmetic values clamped into range
    pub fn sanitized(&self) -> Self {
        let density = if self.density.is_finite() && self.density > 0.0 {
            self.density
        } else {
            default_density()
        };
        Self {
            padding: self.padding.clamped(),
            shape: self.shape.clamped(),
            density,
            ..self.clone()
        }
    }
}

/// Map a raw integer alpha to `u8`; values outside 0..=255 become 0
pub fn alpha_from_raw(raw: i64) -> u8 {
    u8::try_from(raw).unwrap_or(0)
}
