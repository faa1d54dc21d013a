//! Scroll driver - drag accumulation and redraw detection
//!
//! Drag distances move the content with the finger: the offset is
//! decremented by each reported distance. Fractional distances are kept in
//! a sub-pixel accumulator so that a sequence of drags lands on exactly the
//! same offset as their sum.

use glam::{DVec2, IVec2};
use tracing::{trace, warn};

use crate::types::TickOutcome;

#[derive(Debug, Default)]
pub struct ScrollDriver {
    /// Exact scroll position, in pixels
    scroll: DVec2,
    /// Integer offset applied when rendering (floor of `scroll`)
    offset: IVec2,
    /// Offset seen by the most recent tick
    last_observed: IVec2,
}

impl ScrollDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pointer went down. Always consumed so the rest of the gesture
    /// keeps being delivered.
    pub fn on_press(&mut self) -> bool {
        true
    }

    /// Apply a drag distance. Never clamped; always consumed.
    pub fn on_drag_delta(&mut self, dx: f32, dy: f32) -> bool {
        if !dx.is_finite() || !dy.is_finite() {
            warn!("on_drag_delta: ignoring non-finite delta ({}, {})", dx, dy);
            return true;
        }

        self.scroll -= DVec2::new(dx as f64, dy as f64);
        self.offset = self.scroll.floor().as_ivec2();
        trace!("on_drag_delta: ({}, {}) -> offset {}", dx, dy, self.offset);
        true
    }

    /// Request a redraw if the offset moved since the previous tick
    pub fn tick(&mut self) -> TickOutcome {
        if self.offset == self.last_observed {
            return TickOutcome::Idle;
        }
        self.mark_observed();
        TickOutcome::RedrawRequested
    }

    /// Treat the current offset as drawn
    pub fn mark_observed(&mut self) {
        self.last_observed = self.offset;
    }

    #[inline]
    pub fn offset(&self) -> IVec2 {
        self.offset
    }

    #[inline]
    pub fn last_observed(&self) -> IVec2 {
        self.last_observed
    }
}
