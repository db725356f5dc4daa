//! Anchored layout of decoration elements
//!
//! Each decoration is placed against the highlight rect independently:
//!
//! 1. Primary axis: the element sits flush against the anchored edge,
//!    extending away from the highlight (`Over` centers it on both axes).
//! 2. Cross axis: `Fit` aligns it to the start, center or end of the
//!    highlight's extent on that axis.
//! 3. The dp offset is converted to pixels and added.
//!
//! Elements never interact, so overlapping results are expected and fine.

use guidemask_types::{Anchor, Fit, Placement};

use crate::geometry::{Rect, Size};
use crate::utils::dp_to_px;

/// Handle identifying a decoration element in the host's view tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u32);

/// A decoration element and where it should go
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoration {
    pub id: ElementId,
    pub placement: Placement,
}

/// Final bounds of a decoration for the host's layout commit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedDecoration {
    pub id: ElementId,
    pub rect: Rect,
}

/// Compute the bounds of one element of `size` placed around `highlight`
pub fn place(highlight: Rect, size: Size, placement: &Placement, density: f32) -> Rect {
    let mut rect = match placement.anchor {
        Anchor::Left => {
            let right = highlight.left;
            let (top, bottom) = fit_span(highlight.top, highlight.bottom, size.height, placement.fit);
            Rect::from_ltrb(right - size.width, top, right, bottom)
        }
        Anchor::Right => {
            let left = highlight.right;
            let (top, bottom) = fit_span(highlight.top, highlight.bottom, size.height, placement.fit);
            Rect::from_ltrb(left, top, left + size.width, bottom)
        }
        Anchor::Top => {
            let bottom = highlight.top;
            let (left, right) = fit_span(highlight.left, highlight.right, size.width, placement.fit);
            Rect::from_ltrb(left, bottom - size.height, right, bottom)
        }
        Anchor::Bottom => {
            let top = highlight.bottom;
            let (left, right) = fit_span(highlight.left, highlight.right, size.width, placement.fit);
            Rect::from_ltrb(left, top, right, top + size.height)
        }
        Anchor::Over => {
            let (left, right) = fit_span(highlight.left, highlight.right, size.width, Fit::Center);
            let (top, bottom) = fit_span(highlight.top, highlight.bottom, size.height, Fit::Center);
            Rect::from_ltrb(left, top, right, bottom)
        }
    };

    rect.offset(
        dp_to_px(placement.offset_x, density),
        dp_to_px(placement.offset_y, density),
    );
    rect
}

/// Align a span of `extent` within `[start, end]` on one axis
fn fit_span(start: f32, end: f32, extent: f32, fit: Fit) -> (f32, f32) {
    match fit {
        Fit::Start => (start, start + extent),
        Fit::Center => {
            let lead = start + (end - start - extent) / 2.0;
            (lead, lead + extent)
        }
        Fit::End => (end - extent, end),
    }
}

/// Place every decoration against the same highlight rect.
///
/// `sizes` holds the measured size of each decoration, index for index.
/// Decorations without a measured size are skipped.
pub fn layout_decorations(
    highlight: Rect,
    decorations: &[Decoration],
    sizes: &[Size],
    density: f32,
) -> Vec<PlacedDecoration> {
    if decorations.len() != sizes.len() {
        tracing::warn!(
            decorations = decorations.len(),
            sizes = sizes.len(),
            "Measured size count does not match decoration count"
        );
    }

    decorations
        .iter()
        .zip(sizes)
        .map(|(decoration, &size)| PlacedDecoration {
            id: decoration.id,
            rect: place(highlight, size, &decoration.placement, density),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlight() -> Rect {
        Rect::from_ltrb(80.0, 180.0, 320.0, 420.0)
    }

    fn at(anchor: Anchor, fit: Fit) -> Placement {
        Placement::new(anchor, fit)
    }

    #[test]
    fn left_center_scenario() {
        let rect = place(highlight(), Size::new(50.0, 30.0), &at(Anchor::Left, Fit::Center), 1.0);
        assert_eq!(rect, Rect::from_ltrb(30.0, 285.0, 80.0, 315.0));
    }

    #[test]
    fn left_end_aligns_bottom_edges() {
        let hl = highlight();
        let rect = place(hl, Size::new(50.0, 30.0), &at(Anchor::Left, Fit::End), 1.0);
        assert_eq!(rect.right, hl.left);
        assert_eq!(rect.bottom, hl.bottom);
        assert_eq!(rect.width(), 50.0);
        assert_eq!(rect.height(), 30.0);
    }

    #[test]
    fn side_anchor_centers_on_highlight_height() {
        // Wide, short highlight: centering must follow the vertical extent
        let hl = Rect::from_ltrb(0.0, 100.0, 600.0, 140.0);
        let rect = place(hl, Size::new(20.0, 20.0), &at(Anchor::Right, Fit::Center), 1.0);
        assert_eq!(rect, Rect::from_ltrb(600.0, 110.0, 620.0, 130.0));
    }

    #[test]
    fn right_start_aligns_top_edges() {
        let hl = highlight();
        let rect = place(hl, Size::new(40.0, 10.0), &at(Anchor::Right, Fit::Start), 1.0);
        assert_eq!(rect, Rect::from_ltrb(320.0, 180.0, 360.0, 190.0));
    }

    #[test]
    fn top_and_bottom_anchors() {
        let hl = highlight();
        let size = Size::new(100.0, 24.0);

        let top = place(hl, size, &at(Anchor::Top, Fit::Start), 1.0);
        assert_eq!(top, Rect::from_ltrb(80.0, 156.0, 180.0, 180.0));

        let bottom = place(hl, size, &at(Anchor::Bottom, Fit::Center), 1.0);
        assert_eq!(bottom, Rect::from_ltrb(150.0, 420.0, 250.0, 444.0));

        let bottom_end = place(hl, size, &at(Anchor::Bottom, Fit::End), 1.0);
        assert_eq!(bottom_end, Rect::from_ltrb(220.0, 420.0, 320.0, 444.0));
    }

    #[test]
    fn over_ignores_fit() {
        let hl = highlight();
        let size = Size::new(60.0, 40.0);
        for fit in [Fit::Start, Fit::Center, Fit::End] {
            let rect = place(hl, size, &at(Anchor::Over, fit), 1.0);
            assert_eq!(rect.center_x(), hl.center_x());
            assert_eq!(rect.center_y(), hl.center_y());
            assert_eq!(rect.size(), size);
        }
    }

    #[test]
    fn offsets_scale_with_density() {
        let placement = at(Anchor::Bottom, Fit::Start).with_offset(10.0, -4.0);
        let rect = place(highlight(), Size::new(10.0, 10.0), &placement, 2.0);
        // 2.0 * 10 + 0.5 -> 20; 2.0 * -4 + 0.5 -> -7.5 truncated to -7
        assert_eq!(rect, Rect::from_ltrb(100.0, 413.0, 110.0, 423.0));
    }

    #[test]
    fn elements_are_independent() {
        let decorations = [
            Decoration {
                id: ElementId(1),
                placement: at(Anchor::Over, Fit::Center),
            },
            Decoration {
                id: ElementId(2),
                placement: at(Anchor::Over, Fit::Center),
            },
        ];
        let sizes = [Size::new(20.0, 20.0), Size::new(20.0, 20.0)];
        let placed = layout_decorations(highlight(), &decorations, &sizes, 1.0);
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].id, ElementId(1));
        assert_eq!(placed[0].rect, placed[1].rect);
    }

    #[test]
    fn missing_sizes_are_skipped() {
        let decorations = [
            Decoration {
                id: ElementId(7),
                placement: Placement::default(),
            },
            Decoration {
                id: ElementId(8),
                placement: Placement::default(),
            },
        ];
        let placed = layout_decorations(highlight(), &decorations, &[Size::new(5.0, 5.0)], 1.0);
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].id, ElementId(7));
    }
}
