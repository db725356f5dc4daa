//! Per-frame guide driver
//!
//! `Guide` is the overlay instance. It owns the highlight resolver, the mask
//! compositor and the decoration requests, and runs one frame at a time from
//! the host's measure/draw cycle:
//!
//! ```text
//! set_target ──► HighlightResolver ──► highlight rect ─┬─► MaskCompositor ──► surface
//!                     ▲                                └─► layout ──► decoration rects
//! measure ────────────┘ (height changes)
//! ```

use guidemask_types::{GuideConfig, Placement};

use crate::compositor::{MaskCompositor, MaskStyle};
use crate::error::GuideError;
use crate::geometry::{Rect, Size};
use crate::layout::{Decoration, ElementId, PlacedDecoration, layout_decorations};
use crate::resolver::HighlightResolver;
use crate::touch::TouchPolicy;

/// Result of a rendered frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    /// Highlight rect the mask was cut around
    pub highlight: Rect,
    /// Final bounds for each decoration, in request order
    pub decorations: Vec<PlacedDecoration>,
}

/// A guide overlay: one highlighted target plus its decorations
#[derive(Debug)]
pub struct Guide {
    config: GuideConfig,
    style: MaskStyle,
    resolver: HighlightResolver,
    compositor: MaskCompositor,
    decorations: Vec<Decoration>,
    surface_size: Option<(u32, u32)>,
}

impl Guide {
    /// Create a guide from a config. Decorations listed in the config get
    /// element ids matching their index.
    pub fn new(config: GuideConfig) -> Self {
        let config = config.sanitized();
        let decorations = config
            .decorations
            .iter()
            .enumerate()
            .map(|(index, placement)| Decoration {
                id: ElementId(index as u32),
                placement: *placement,
            })
            .collect();

        Self {
            style: MaskStyle::from_config(&config),
            resolver: HighlightResolver::new(config.padding),
            compositor: MaskCompositor::new(),
            decorations,
            surface_size: None,
            config,
        }
    }

    /// Add a decoration to be placed every frame
    pub fn add_decoration(&mut self, id: ElementId, placement: Placement) {
        self.decorations.push(Decoration { id, placement });
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    pub fn touch_policy(&self) -> TouchPolicy {
        TouchPolicy::from_config(&self.config)
    }

    /// Assign the target rect in surface coordinates, or `None` when the
    /// target could not be resolved
    pub fn set_target(&mut self, target: Option<Rect>) {
        self.resolver.set_target(target);
    }

    /// Highlight rect as of the last frame, for hit testing
    pub fn highlight(&self) -> Option<Rect> {
        self.resolver.highlight()
    }

    /// Record the surface size from the host's measure pass.
    ///
    /// Height changes are forwarded to the resolver and the erase buffer is
    /// reallocated when the size differs from the previous measure.
    pub fn measure(&mut self, width: u32, height: u32) {
        self.resolver.observe_surface_height(height);
        if self.surface_size != Some((width, height)) {
            if let Some((old_width, old_height)) = self.surface_size {
                tracing::debug!(old_width, old_height, width, height, "Surface size changed");
            }
            self.surface_size = Some((width, height));
            self.compositor.prepare(width, height);
        }
    }

    /// Render one frame onto `surface` (RGBA, `width` x `height`).
    ///
    /// `sizes` holds the measured size of each decoration in request order.
    /// When no target is available the surface is left untouched and
    /// [`GuideError::Resolve`] is returned; callers skip the frame and retry.
    pub fn render(
        &mut self,
        surface: &mut [u8],
        width: u32,
        height: u32,
        sizes: &[Size],
    ) -> Result<FrameOutput, GuideError> {
        if self.surface_size != Some((width, height)) {
            self.measure(width, height);
        }

        let highlight = match self.resolver.resolve() {
            Ok(rect) => rect,
            Err(err) => {
                tracing::debug!("No target available, skipping frame");
                return Err(err.into());
            }
        };

        self.compositor
            .composite(surface, width, height, highlight, &self.style)?;

        let decorations =
            layout_decorations(highlight, &self.decorations, sizes, self.config.density);

        Ok(FrameOutput {
            highlight,
            decorations,
        })
    }

    /// Release the erase buffer. A later render reallocates it.
    pub fn teardown(&mut self) {
        self.compositor.release();
        self.surface_size = None;
    }

    /// Erase buffer dimensions, if currently allocated
    pub fn buffer_dimensions(&self) -> Option<(u32, u32)> {
        self.compositor.dimensions()
    }
}
