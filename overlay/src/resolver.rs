//! Highlight rectangle resolution
//!
//! Turns a raw target rect into the highlight rect by applying padding once
//! per target assignment, then keeps it aligned with the content when the
//! surface height changes between frames (e.g. a software keyboard pushes
//! the host content up or down).

use guidemask_types::PaddingSpec;

use crate::error::ResolveError;
use crate::geometry::Rect;

/// Expand `target` by the resolved padding insets.
///
/// Negative insets contract the rect, at most down to its center line on
/// each axis so the result never turns inside out.
///
/// Pure: calling it twice on the same raw target yields the same result.
pub fn apply_padding(target: Rect, padding: &PaddingSpec) -> Rect {
    let insets = padding.insets();
    let min_x = -target.width() / 2.0;
    let min_y = -target.height() / 2.0;
    Rect::from_ltrb(
        target.left - insets.left.max(min_x),
        target.top - insets.top.max(min_y),
        target.right + insets.right.max(min_x),
        target.bottom + insets.bottom.max(min_y),
    )
}

/// Tracks the highlight rect for one overlay instance
#[derive(Debug, Clone)]
pub struct HighlightResolver {
    padding: PaddingSpec,
    highlight: Option<Rect>,
    /// Surface height the current highlight rect is expressed against
    baseline_height: Option<i64>,
    /// Height delta observed since the last resolve, not yet applied
    pending_shift: i64,
}

impl HighlightResolver {
    pub fn new(padding: PaddingSpec) -> Self {
        Self {
            padding: padding.clamped(),
            highlight: None,
            baseline_height: None,
            pending_shift: 0,
        }
    }

    /// Assign a new raw target rect (or clear it).
    ///
    /// Padding is applied here and nowhere else. The new rect is already in
    /// current surface coordinates, so any pending height shift is absorbed.
    pub fn set_target(&mut self, target: Option<Rect>) {
        self.highlight = target.map(|rect| apply_padding(rect, &self.padding));
        self.absorb_pending_shift();
    }

    /// Record the surface height from the host's measure pass
    pub fn observe_surface_height(&mut self, height: u32) {
        let height = i64::from(height);
        match self.baseline_height {
            None => self.baseline_height = Some(height),
            Some(baseline) => self.pending_shift = height - baseline,
        }
    }

    /// Resolve the highlight rect for the frame about to be drawn.
    ///
    /// A pending height change shifts the stored rect vertically by the
    /// delta and is then cleared, so each change is applied exactly once.
    pub fn resolve(&mut self) -> Result<Rect, ResolveError> {
        if self.pending_shift != 0 {
            let shift = self.pending_shift;
            if let Some(rect) = self.highlight.as_mut() {
                rect.offset(0.0, shift as f32);
                tracing::debug!(shift, "Shifted highlight for surface height change");
            }
            self.absorb_pending_shift();
        }
        self.highlight.ok_or(ResolveError::InvalidTarget)
    }

    /// Most recently resolved highlight rect, if any
    pub fn highlight(&self) -> Option<Rect> {
        self.highlight
    }

    fn absorb_pending_shift(&mut self) {
        if let Some(baseline) = self.baseline_height.as_mut() {
            *baseline += self.pending_shift;
        }
        self.pending_shift = 0;
    }
}
