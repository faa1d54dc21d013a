//! Stroke styles for the two-tone outlined path
//!
//! Styles are built once per session and reused for every frame, so the
//! tiny-skia [`Paint`] and [`Stroke`] records are prepared up front.

use pathview_config::StyleConfig;
use tiny_skia::{BlendMode, Color, Paint, Stroke};

/// Immutable stroke-only style: width, color, and anti-aliasing
#[derive(Debug, Clone)]
pub struct StrokeStyle {
    color: Color,
    paint: Paint<'static>,
    stroke: Stroke,
}

impl StrokeStyle {
    /// Create a style from a straight-alpha RGBA8 color. Negative widths
    /// are clamped to zero (hairline).
    pub fn new(width: f32, color: [u8; 4], anti_alias: bool) -> Self {
        let [r, g, b, a] = color;
        let color = Color::from_rgba8(r, g, b, a);

        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = anti_alias;

        let stroke = Stroke {
            width: width.max(0.0),
            ..Stroke::default()
        };

        Self {
            color,
            paint,
            stroke,
        }
    }

    /// Narrow, aliased style drawn on top
    pub fn inner(config: &StyleConfig) -> Self {
        Self::new(config.inner_width, config.inner_color, false)
    }

    /// Wide, anti-aliased style drawn first
    pub fn outer(config: &StyleConfig) -> Self {
        Self::new(config.outer_width(), config.outer_color, true)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.stroke.width
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.color.alpha()
    }

    #[inline]
    pub fn anti_alias(&self) -> bool {
        self.paint.anti_alias
    }

    #[inline]
    pub fn blend_mode(&self) -> BlendMode {
        self.paint.blend_mode
    }

    #[inline]
    pub fn paint(&self) -> &Paint<'static> {
        &self.paint
    }

    #[inline]
    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }
}
