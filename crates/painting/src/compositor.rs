//! Offscreen compositor
//!
//! Owns the viewport-sized offscreen canvas. Each frame the whole canvas is
//! cleared and the path is re-rasterized translated by the scroll offset, then
//! the finished buffer is blitted onto the display at `(0, 0)`.

use glam::IVec2;
use pathview_config::SessionConfig;
use tiny_skia::{Color, FilterQuality, Path, Pixmap, PixmapMut, PixmapPaint, Transform};
use tracing::{debug, info};

use crate::canvas::OffscreenCanvas;
use crate::style::StrokeStyle;
use crate::types::ViewportSize;
use crate::validation::{RenderError, validate_viewport};

/// Host-provided surface the finished frame is composited onto
pub trait DisplaySurface {
    /// Borrow the drawable pixels, or `None` if the surface is not ready.
    fn target(&mut self) -> Option<PixmapMut<'_>>;

    /// Called after a frame has been composited onto the target.
    fn present(&mut self) {}
}

impl DisplaySurface for Pixmap {
    fn target(&mut self) -> Option<PixmapMut<'_>> {
        Some(self.as_mut())
    }
}

/// Renders the path through a sliding window into the virtual surface
pub struct OffscreenCompositor {
    /// Lazily allocated once the viewport is known
    canvas: Option<OffscreenCanvas>,
    background: Color,
    max_texture_size: u32,
    /// Number of buffer (re)allocations so far
    allocations: u32,
}

impl OffscreenCompositor {
    pub fn new(background: [u8; 4], max_texture_size: u32) -> Self {
        let [r, g, b, a] = background;
        Self {
            canvas: None,
            background: Color::from_rgba8(r, g, b, a),
            max_texture_size,
            allocations: 0,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.style.background, config.render.max_texture_size)
    }

    /// Make sure a buffer of exactly `viewport` pixels exists.
    ///
    /// The first call allocates; later calls with the same size are no-ops.
    /// A different size drops the old buffer and allocates a new one.
    pub fn ensure_buffer(
        &mut self,
        viewport: ViewportSize,
    ) -> Result<&mut OffscreenCanvas, RenderError> {
        validate_viewport(viewport, self.max_texture_size)?;

        let canvas = match self.canvas.take() {
            Some(canvas) if canvas.size() == viewport => canvas,
            previous => {
                if let Some(previous) = previous {
                    debug!(
                        "ensure_buffer: viewport resized {}x{} -> {}x{}, reallocating",
                        previous.width(),
                        previous.height(),
                        viewport.width,
                        viewport.height
                    );
                }
                let canvas = OffscreenCanvas::new(viewport)?;
                self.allocations += 1;
                info!(
                    "Allocated {}x{} offscreen buffer ({} bytes)",
                    viewport.width,
                    viewport.height,
                    canvas.data().len()
                );
                canvas
            }
        };

        Ok(self.canvas.insert(canvas))
    }

    /// Render one frame into the offscreen buffer.
    ///
    /// The translation is applied inside a saved scope, so it never leaks
    /// into later drawing. The outer style is stroked first and the inner
    /// style on top. A `None` path renders background only.
    pub fn render_frame(
        &mut self,
        path: Option<&Path>,
        offset: IVec2,
        inner: &StrokeStyle,
        outer: &StrokeStyle,
    ) -> Result<&Pixmap, RenderError> {
        let background = self.background;
        let canvas = self.canvas.as_mut().ok_or(RenderError::BufferNotAllocated)?;

        {
            let mut scope = canvas.save();
            scope.translate(offset.x as f32, offset.y as f32);
            scope.draw_color(background);
            if let Some(path) = path {
                scope.stroke_path(path, outer);
                scope.stroke_path(path, inner);
            }
        }

        debug!(
            "render_frame: {}x{} at offset {}",
            canvas.width(),
            canvas.height(),
            offset
        );

        Ok(canvas.pixmap())
    }

    /// Blit the last rendered frame onto `destination` at `(0, 0)`, using the
    /// inner style's alpha and blend mode. Pixels outside the destination
    /// are clipped.
    pub fn composite(
        &self,
        destination: &mut PixmapMut<'_>,
        inner: &StrokeStyle,
    ) -> Result<(), RenderError> {
        let canvas = self.canvas.as_ref().ok_or(RenderError::BufferNotAllocated)?;

        let paint = PixmapPaint {
            opacity: inner.alpha(),
            blend_mode: inner.blend_mode(),
            quality: FilterQuality::Nearest,
        };
        destination.draw_pixmap(
            0,
            0,
            canvas.pixmap().as_ref(),
            &paint,
            Transform::identity(),
            None,
        );

        debug!(
            "composite: {}x{} onto {}x{}",
            canvas.width(),
            canvas.height(),
            destination.width(),
            destination.height()
        );
        Ok(())
    }

    /// The offscreen buffer, if allocated
    #[inline]
    pub fn buffer(&self) -> Option<&Pixmap> {
        self.canvas.as_ref().map(OffscreenCanvas::pixmap)
    }

    #[inline]
    pub fn buffer_size(&self) -> Option<ViewportSize> {
        self.canvas.as_ref().map(OffscreenCanvas::size)
    }

    #[inline]
    pub fn allocation_count(&self) -> u32 {
        self.allocations
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathview_config::StyleConfig;
    use tiny_skia::{PathBuilder, PremultipliedColorU8};

    const BACKGROUND: [u8; 4] = [0xf9, 0xf9, 0xf9, 0xff];

    fn styles() -> (StrokeStyle, StrokeStyle) {
        let config = StyleConfig::default();
        (StrokeStyle::inner(&config), StrokeStyle::outer(&config))
    }

    fn rgba(px: PremultipliedColorU8) -> [u8; 4] {
        [px.red(), px.green(), px.blue(), px.alpha()]
    }

    /// Long horizontal run at `y` with a short hook at the far end
    fn horizontal_path(y: f32) -> Path {
        let mut pb = PathBuilder::new();
        pb.move_to(-100.0, y);
        pb.line_to(5000.0, y);
        pb.line_to(5000.0, y + 10.0);
        pb.finish().unwrap()
    }

    fn vertical_path(x: f32) -> Path {
        let mut pb = PathBuilder::new();
        pb.move_to(x, -100.0);
        pb.line_to(x, 5000.0);
        pb.line_to(x + 10.0, 5000.0);
        pb.finish().unwrap()
    }

    #[test]
    fn test_ensure_buffer_allocates_once() {
        let mut compositor = OffscreenCompositor::new(BACKGROUND, 8192);
        assert!(compositor.buffer().is_none());

        compositor.ensure_buffer(ViewportSize::new(800, 600)).unwrap();
        compositor.ensure_buffer(ViewportSize::new(800, 600)).unwrap();

        assert_eq!(compositor.allocation_count(), 1);
        assert_eq!(compositor.buffer_size(), Some(ViewportSize::new(800, 600)));
    }

    #[test]
    fn test_ensure_buffer_recreates_on_resize() {
        let mut compositor = OffscreenCompositor::new(BACKGROUND, 8192);
        compositor.ensure_buffer(ViewportSize::new(800, 600)).unwrap();
        compositor.ensure_buffer(ViewportSize::new(1024, 768)).unwrap();

        assert_eq!(compositor.allocation_count(), 2);
        let buffer = compositor.buffer().unwrap();
        assert_eq!((buffer.width(), buffer.height()), (1024, 768));
    }

    #[test]
    fn test_ensure_buffer_rejects_invalid_viewports() {
        let mut compositor = OffscreenCompositor::new(BACKGROUND, 2048);

        assert_eq!(
            compositor.ensure_buffer(ViewportSize::new(0, 0)).err(),
            Some(RenderError::EmptyViewport { width: 0, height: 0 })
        );
        assert_eq!(
            compositor.ensure_buffer(ViewportSize::new(4096, 100)).err(),
            Some(RenderError::ExceedsTextureLimit {
                width: 4096,
                height: 100,
                max: 2048
            })
        );
        assert!(compositor.buffer().is_none());
    }

    #[test]
    fn test_render_without_buffer() {
        let mut compositor = OffscreenCompositor::new(BACKGROUND, 8192);
        let (inner, outer) = styles();
        let result = compositor.render_frame(None, IVec2::ZERO, &inner, &outer);
        assert_eq!(result.err(), Some(RenderError::BufferNotAllocated));
    }

    #[test]
    fn test_render_draws_two_tone_line() {
        let mut compositor = OffscreenCompositor::new(BACKGROUND, 8192);
        let (inner, outer) = styles();
        let path = horizontal_path(50.0);

        compositor.ensure_buffer(ViewportSize::new(800, 600)).unwrap();
        let frame = compositor
            .render_frame(Some(&path), IVec2::ZERO, &inner, &outer)
            .unwrap();

        assert_eq!((frame.width(), frame.height()), (800, 600));
        assert_eq!(frame.data().len(), 800 * 600 * 4);

        // Inner stroke covers y in 48..52
        assert_eq!(rgba(frame.pixel(400, 50).unwrap()), [0x00, 0x99, 0xcc, 0xff]);
        // Outer stroke alone covers y in 46..48
        assert_eq!(rgba(frame.pixel(400, 47).unwrap()), [0x33, 0xb5, 0xe5, 0xff]);
        // Far from the line only background remains
        assert_eq!(rgba(frame.pixel(400, 300).unwrap()), BACKGROUND);
    }

    #[test]
    fn test_render_applies_offset() {
        let mut compositor = OffscreenCompositor::new(BACKGROUND, 8192);
        let (inner, outer) = styles();
        let path = vertical_path(350.0);

        compositor.ensure_buffer(ViewportSize::new(800, 600)).unwrap();
        let frame = compositor
            .render_frame(Some(&path), IVec2::new(50, 0), &inner, &outer)
            .unwrap();

        assert_eq!(rgba(frame.pixel(400, 300).unwrap()), [0x00, 0x99, 0xcc, 0xff]);
        assert_eq!(rgba(frame.pixel(350, 300).unwrap()), BACKGROUND);
    }

    #[test]
    fn test_render_far_offset_is_background_only() {
        let mut compositor = OffscreenCompositor::new(BACKGROUND, 8192);
        let (inner, outer) = styles();
        let path = horizontal_path(50.0);

        compositor.ensure_buffer(ViewportSize::new(320, 240)).unwrap();
        let frame = compositor
            .render_frame(Some(&path), IVec2::new(1_000_000, 0), &inner, &outer)
            .unwrap();

        assert!(frame.pixels().iter().all(|&px| rgba(px) == BACKGROUND));
    }

    #[test]
    fn test_render_does_not_leak_translation() {
        let mut compositor = OffscreenCompositor::new(BACKGROUND, 8192);
        let (inner, outer) = styles();
        let path = horizontal_path(50.0);

        compositor.ensure_buffer(ViewportSize::new(100, 100)).unwrap();
        compositor
            .render_frame(Some(&path), IVec2::new(0, 30), &inner, &outer)
            .unwrap();

        let canvas = compositor.ensure_buffer(ViewportSize::new(100, 100)).unwrap();
        assert_eq!(canvas.transform(), Transform::identity());
        assert_eq!(canvas.save_depth(), 0);
    }

    #[test]
    fn test_composite_copies_verbatim() {
        let mut compositor = OffscreenCompositor::new(BACKGROUND, 8192);
        let (inner, outer) = styles();
        let path = horizontal_path(20.0);

        compositor.ensure_buffer(ViewportSize::new(64, 48)).unwrap();
        compositor
            .render_frame(Some(&path), IVec2::ZERO, &inner, &outer)
            .unwrap();

        let mut display = Pixmap::new(64, 48).unwrap();
        display.fill(Color::from_rgba8(255, 0, 0, 255));
        compositor.composite(&mut display.as_mut(), &inner).unwrap();

        assert_eq!(display.data(), compositor.buffer().unwrap().data());
    }

    #[test]
    fn test_composite_clips_to_smaller_display() {
        let mut compositor = OffscreenCompositor::new(BACKGROUND, 8192);
        let (inner, outer) = styles();

        compositor.ensure_buffer(ViewportSize::new(64, 64)).unwrap();
        compositor.render_frame(None, IVec2::ZERO, &inner, &outer).unwrap();

        let mut display = Pixmap::new(16, 16).unwrap();
        compositor.composite(&mut display.as_mut(), &inner).unwrap();
        assert!(display.pixels().iter().all(|&px| rgba(px) == BACKGROUND));
    }

    #[test]
    fn test_composite_without_buffer() {
        let compositor = OffscreenCompositor::new(BACKGROUND, 8192);
        let (inner, _) = styles();
        let mut display = Pixmap::new(4, 4).unwrap();
        assert_eq!(
            compositor.composite(&mut display.as_mut(), &inner),
            Err(RenderError::BufferNotAllocated)
        );
    }
}
