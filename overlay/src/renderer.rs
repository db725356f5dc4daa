//! Software drawing primitives using tiny-skia
//!
//! Surfaces are plain RGBA byte buffers (premultiplied, as tiny-skia stores
//! them). Every helper wraps the buffer in a `PixmapMut` for the duration of
//! the call and silently skips drawing if the buffer and dimensions disagree.

use guidemask_types::HighlightShape;
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, PixmapMut, Stroke, Transform,
};

use crate::geometry::Rect;

/// Offset of a cubic control point along a quarter-circle corner, as a
/// fraction of the radius
const KAPPA: f32 = 0.552_284_8;

/// Create a new pixel buffer (RGBA format), fully transparent
pub fn create_buffer(width: u32, height: u32) -> Vec<u8> {
    vec![0u8; width as usize * height as usize * 4]
}

/// Clear a pixel buffer with a color
pub fn clear(buffer: &mut [u8], width: u32, height: u32, color: Color) {
    if let Some(mut pixmap) = PixmapMut::from_bytes(buffer, width, height) {
        pixmap.fill(color);
    }
}

/// Fill `shape` laid out over `rect`
pub fn fill_shape(
    buffer: &mut [u8],
    width: u32,
    height: u32,
    rect: Rect,
    shape: HighlightShape,
    color: Color,
) {
    let Some(mut pixmap) = PixmapMut::from_bytes(buffer, width, height) else {
        return;
    };
    if let Some(path) = shape_path(rect, shape) {
        pixmap.fill_path(
            &path,
            &solid(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}

/// Outline `shape` laid out over `rect`
pub fn stroke_shape(
    buffer: &mut [u8],
    width: u32,
    height: u32,
    rect: Rect,
    shape: HighlightShape,
    stroke_width: f32,
    color: Color,
) {
    let Some(mut pixmap) = PixmapMut::from_bytes(buffer, width, height) else {
        return;
    };
    let stroke = Stroke {
        width: stroke_width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    };
    if let Some(path) = shape_path(rect, shape) {
        pixmap.stroke_path(&path, &solid(color), &stroke, Transform::identity(), None);
    }
}

fn solid(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;
    paint
}

/// Outline of `shape` placed over `rect`, or `None` for an empty rect.
///
/// A circle is centered on the rect with a radius of half its width. Corner
/// radii are clamped to half the shorter side; 0 gives a sharp rectangle.
pub fn shape_path(rect: Rect, shape: HighlightShape) -> Option<Path> {
    let bounds = rect.to_skia()?;
    match shape {
        HighlightShape::Circle => {
            PathBuilder::from_circle(rect.center_x(), rect.center_y(), rect.width() / 2.0)
        }
        HighlightShape::RoundedRect { corner_radius } => {
            let r = corner_radius
                .max(0.0)
                .min(rect.width() / 2.0)
                .min(rect.height() / 2.0);
            if r == 0.0 {
                return Some(PathBuilder::from_rect(bounds));
            }

            let (l, t, rt, b) = (rect.left, rect.top, rect.right, rect.bottom);
            let k = r * (1.0 - KAPPA);
            let mut pb = PathBuilder::new();
            pb.move_to(l + r, t);
            pb.line_to(rt - r, t);
            pb.cubic_to(rt - k, t, rt, t + k, rt, t + r);
            pb.line_to(rt, b - r);
            pb.cubic_to(rt, b - k, rt - k, b, rt - r, b);
            pb.line_to(l + r, b);
            pb.cubic_to(l + k, b, l, b - k, l, b - r);
            pb.line_to(l, t + r);
            pb.cubic_to(l, t + k, l + k, t, l + r, t);
            pb.close();
            pb.finish()
        }
    }
}
