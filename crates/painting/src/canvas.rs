//! Offscreen canvas - CPU RGBA8 pixel buffer with a transform stack

use std::ops::{Deref, DerefMut};

use tiny_skia::{Color, Path, Pixmap, Transform};

use crate::style::StrokeStyle;
use crate::types::ViewportSize;
use crate::validation::RenderError;

/// A premultiplied RGBA8 software canvas sized to the viewport.
///
/// Rasterization never touches the GPU, so the virtual geometry can be
/// arbitrarily large while the canvas stays within texture limits.
pub struct OffscreenCanvas {
    pixmap: Pixmap,
    /// Current transform applied to vector drawing
    transform: Transform,
    /// Saved transforms, most recent at end
    saved: Vec<Transform>,
}

impl OffscreenCanvas {
    /// Allocate a transparent canvas of exactly `size` pixels
    pub fn new(size: ViewportSize) -> Result<Self, RenderError> {
        let ViewportSize { width, height } = size;
        let pixmap =
            Pixmap::new(width, height).ok_or(RenderError::AllocationFailed { width, height })?;

        Ok(Self {
            pixmap,
            transform: Transform::identity(),
            saved: Vec::new(),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    #[inline]
    pub fn size(&self) -> ViewportSize {
        ViewportSize::new(self.width(), self.height())
    }

    /// Save the current state. The returned scope restores it when dropped,
    /// so a transform applied through the scope cannot outlive it.
    pub fn save(&mut self) -> CanvasScope<'_> {
        self.saved.push(self.transform);
        CanvasScope { canvas: self }
    }

    fn restore(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.transform = transform;
        }
    }

    /// Number of currently saved states
    #[inline]
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    /// Pre-translate the current transform
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.transform = self.transform.pre_translate(dx, dy);
    }

    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Fill every pixel with `color`, ignoring the transform
    pub fn draw_color(&mut self, color: Color) {
        self.pixmap.fill(color);
    }

    /// Stroke `path` under the current transform. Geometry outside the
    /// canvas is clipped by the rasterizer.
    pub fn stroke_path(&mut self, path: &Path, style: &StrokeStyle) {
        self.pixmap
            .stroke_path(path, style.paint(), style.stroke(), self.transform, None);
    }

    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Raw premultiplied RGBA8 bytes
    #[inline]
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }
}

/// Saved canvas state; restores on drop
pub struct CanvasScope<'a> {
    canvas: &'a mut OffscreenCanvas,
}

impl Deref for CanvasScope<'_> {
    type Target = OffscreenCanvas;

    fn deref(&self) -> &Self::Target {
        self.canvas
    }
}

impl DerefMut for CanvasScope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.canvas
    }
}

impl Drop for CanvasScope<'_> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}
