//! Mask compositing
//!
//! The compositor owns an off-surface erase buffer the size of the overlay
//! surface. Each frame it is cleared, flooded with the mask color, has the
//! highlight shape cut out with a clear blend, and is then blitted onto the
//! output surface. The buffer is reused across frames and only reallocated
//! when the surface size changes.

use guidemask_types::{Color, GuideConfig, HighlightShape};
use tiny_skia::{BlendMode, FillRule, Paint, Pixmap, PixmapMut, PixmapPaint, Transform};

use crate::error::CompositeError;
use crate::geometry::Rect;
use crate::renderer::shape_path;
use crate::utils::color_from_rgba;

/// Everything about the mask's look that does not change per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskStyle {
    pub shape: HighlightShape,
    pub color: Color,
    pub alpha: u8,
    /// Draw the full mask with no hole
    pub overlay_target: bool,
}

impl MaskStyle {
    pub fn from_config(config: &GuideConfig) -> Self {
        Self {
            shape: config.shape,
            color: config.mask_color,
            alpha: config.mask_alpha,
            overlay_target: config.overlay_target,
        }
    }

    fn fill_color(&self) -> tiny_skia::Color {
        let [r, g, b, _] = self.color;
        color_from_rgba([r, g, b, self.alpha])
    }
}

/// Owner of the reusable erase buffer
#[derive(Debug, Default)]
pub struct MaskCompositor {
    buffer: Option<Pixmap>,
}

impl MaskCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure the erase buffer matches the surface size, reallocating if
    /// it does not. A zero-sized surface releases the buffer.
    pub fn prepare(&mut self, width: u32, height: u32) {
        if self.dimensions() == Some((width, height)) {
            return;
        }
        self.buffer = Pixmap::new(width, height);
        match self.buffer {
            Some(_) => tracing::debug!(width, height, "Allocated mask erase buffer"),
            None => tracing::debug!(width, height, "Zero-sized surface, erase buffer released"),
        }
    }

    /// Drop the erase buffer. The next composite allocates a fresh one.
    pub fn release(&mut self) {
        if self.buffer.take().is_some() {
            tracing::debug!("Released mask erase buffer");
        }
    }

    /// Current buffer size, if allocated
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.buffer.as_ref().map(|p| (p.width(), p.height()))
    }

    /// Contents of the erase buffer after the last composite
    pub fn buffer(&self) -> Option<&Pixmap> {
        self.buffer.as_ref()
    }

    /// Composite one frame of the mask onto `surface` (RGBA, `width` x `height`).
    ///
    /// The buffer is allocated on first use. If it exists with different
    /// dimensions the call fails with [`CompositeError::StaleBuffer`]; the
    /// caller must `prepare` for the new size first.
    pub fn composite(
        &mut self,
        surface: &mut [u8],
        width: u32,
        height: u32,
        highlight: Rect,
        style: &MaskStyle,
    ) -> Result<(), CompositeError> {
        let size_error = CompositeError::SurfaceSize {
            width,
            height,
            len: surface.len(),
        };
        if surface.len() != width as usize * height as usize * 4 {
            return Err(size_error);
        }
        if width == 0 || height == 0 {
            return Ok(());
        }

        if self.buffer.is_none() {
            self.prepare(width, height);
        }
        let buffer = self.buffer.as_mut().ok_or(size_error.clone())?;
        if (buffer.width(), buffer.height()) != (width, height) {
            return Err(CompositeError::StaleBuffer {
                buffer: (buffer.width(), buffer.height()),
                surface: (width, height),
            });
        }

        buffer.fill(tiny_skia::Color::TRANSPARENT);
        buffer.fill(style.fill_color());

        if !style.overlay_target {
            erase_highlight(buffer, highlight, style.shape);
        }

        let mut output = PixmapMut::from_bytes(surface, width, height).ok_or(size_error)?;
        output.draw_pixmap(
            0,
            0,
            buffer.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        Ok(())
    }
}

/// Cut the highlight shape out of the buffer, leaving fully transparent pixels
fn erase_highlight(buffer: &mut Pixmap, highlight: Rect, shape: HighlightShape) {
    let Some(path) = shape_path(highlight, shape) else {
        return;
    };

    let mut eraser = Paint::default();
    eraser.blend_mode = BlendMode::Clear;
    eraser.anti_alias = true;

    buffer.fill_path(
        &path,
        &eraser,
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}
