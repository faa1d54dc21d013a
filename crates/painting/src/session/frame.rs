//! Frame production for the render session

use tiny_skia::Pixmap;
use tracing::{debug, warn};

use crate::compositor::DisplaySurface;
use crate::types::TickOutcome;
use crate::validation::RenderError;

use super::RenderSession;

impl RenderSession {
    /// True once the host measured a viewport with a non-zero area
    pub fn is_drawable(&self) -> bool {
        self.viewport.is_some_and(|viewport| !viewport.is_empty())
    }

    /// Periodic check. Requests a redraw if the offset moved or a redraw
    /// is owed since the previous tick.
    ///
    /// While the viewport is unmeasured or empty nothing is drawn, and any
    /// owed redraw is kept for the first tick after a usable measurement.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_drawable() {
            return TickOutcome::Idle;
        }

        let moved = self.driver.tick();
        let owed = std::mem::take(&mut self.redraw_pending);

        if moved.is_redraw() || owed {
            TickOutcome::RedrawRequested
        } else {
            TickOutcome::Idle
        }
    }

    /// Render the current window into the offscreen buffer
    pub fn render(&mut self) -> Result<&Pixmap, RenderError> {
        let viewport = self.viewport.ok_or(RenderError::NotMeasured)?;
        self.compositor.ensure_buffer(viewport)?;
        self.compositor.render_frame(
            self.skia_path.as_ref(),
            self.driver.offset(),
            &self.inner,
            &self.outer,
        )
    }

    /// Render and composite onto the display, then present it.
    ///
    /// Returns `Ok(false)` if the display had no drawable target. The frame
    /// stays owed and the next tick requests it again.
    pub fn draw<D: DisplaySurface + ?Sized>(
        &mut self,
        display: &mut D,
    ) -> Result<bool, RenderError> {
        self.render()?;

        let Some(mut target) = display.target() else {
            warn!("draw: display surface unavailable, frame deferred");
            self.redraw_pending = true;
            return Ok(false);
        };
        self.compositor.composite(&mut target, &self.inner)?;
        drop(target);

        display.present();
        self.driver.mark_observed();
        self.redraw_pending = false;
        debug!("draw: presented frame at offset {}", self.driver.offset());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use glam::IVec2;
    use pathview_config::SessionConfig;
    use tiny_skia::{Pixmap, PixmapMut};

    use crate::compositor::DisplaySurface;
    use crate::path::StepPath;
    use crate::types::{TickOutcome, ViewportSize};

    use super::RenderSession;

    /// Display that has no target for its first `unavailable` requests
    struct LateSurface {
        pixmap: Pixmap,
        unavailable: u32,
        presented: u32,
    }

    impl DisplaySurface for LateSurface {
        fn target(&mut self) -> Option<PixmapMut<'_>> {
            if self.unavailable > 0 {
                self.unavailable -= 1;
                return None;
            }
            Some(self.pixmap.as_mut())
        }

        fn present(&mut self) {
            self.presented += 1;
        }
    }

    fn session() -> RenderSession {
        let path = StepPath::from_points(vec![IVec2::new(-20, 8), IVec2::new(20, 8)]);
        RenderSession::with_path(path, &SessionConfig::default())
    }

    #[test]
    fn test_unavailable_display_keeps_redraw_owed() {
        let mut session = session();
        session.set_viewport(ViewportSize::new(16, 16));
        assert_eq!(session.tick(), TickOutcome::RedrawRequested);

        let mut display = LateSurface {
            pixmap: Pixmap::new(16, 16).unwrap(),
            unavailable: 1,
            presented: 0,
        };
        assert_eq!(session.draw(&mut display), Ok(false));
        assert_eq!(display.presented, 0);

        assert_eq!(session.tick(), TickOutcome::RedrawRequested);
        assert_eq!(session.draw(&mut display), Ok(true));
        assert_eq!(display.presented, 1);
        assert_eq!(session.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_draw_satisfies_owed_redraw() {
        let mut session = session();
        session.set_viewport(ViewportSize::new(16, 16));
        session.on_drag_delta(-3.0, 0.0);

        let mut display = Pixmap::new(16, 16).unwrap();
        assert_eq!(session.draw(&mut display), Ok(true));
        assert_eq!(session.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_empty_viewport_defers_redraw() {
        let mut session = session();
        assert_eq!(session.tick(), TickOutcome::Idle);

        session.set_viewport(ViewportSize::new(0, 0));
        session.on_drag_delta(-5.0, 0.0);
        assert!(!session.is_drawable());
        assert_eq!(session.tick(), TickOutcome::Idle);
        assert_eq!(session.tick(), TickOutcome::Idle);

        session.set_viewport(ViewportSize::new(16, 16));
        assert!(session.is_drawable());
        assert_eq!(session.tick(), TickOutcome::RedrawRequested);
        assert_eq!(session.tick(), TickOutcome::Idle);
    }
}
