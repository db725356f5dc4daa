//! Guidemask Overlay Library
//!
//! Anchored-overlay layout and compositing for guided-tour highlights: a
//! full-surface dimming mask with one hole punched around a target, plus
//! decoration elements positioned relative to that hole.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                      guide                          │
//! │                      Guide                          │
//! │         (per-frame driver, owns everything)         │
//! ├──────────────────────────┬──────────────────────────┤
//! │       compositor         │         layout           │
//! │      MaskCompositor      │   place / decorations    │
//! │  (erase buffer + blit)   │  (anchor, fit, offset)   │
//! ├──────────────────────────┴──────────────────────────┤
//! │                     resolver                        │
//! │                 HighlightResolver                   │
//! │       (padding, surface height tracking)            │
//! ├─────────────────────────────────────────────────────┤
//! │              geometry / renderer                    │
//! │             Rect, Size, tiny-skia paths             │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod compositor;
pub mod config;
pub mod error;
pub mod geometry;
pub mod guide;
pub mod layout;
pub mod renderer;
pub mod resolver;
pub mod touch;
pub mod utils;

// Re-export commonly used types
pub use compositor::{MaskCompositor, MaskStyle};
pub use config::{load_config, parse_config};
pub use error::{CompositeError, ConfigError, GuideError, ResolveError};
pub use geometry::{Rect, Size};
pub use guide::{FrameOutput, Guide};
pub use layout::{Decoration, ElementId, PlacedDecoration, layout_decorations, place};
pub use resolver::{HighlightResolver, apply_padding};
pub use touch::{SlideDirection, TouchPolicy, TouchRegion, classify_slide, hit_test};

pub use guidemask_types as types;
