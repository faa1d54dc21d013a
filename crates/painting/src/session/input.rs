//! Host input handling for the render session

use tracing::debug;

use crate::types::{HostEvent, ViewportSize};

use super::RenderSession;

impl RenderSession {
    /// Record the host's measured viewport. A changed size owes a redraw
    /// on the next tick; the buffer itself is reallocated lazily.
    pub fn set_viewport(&mut self, viewport: ViewportSize) {
        if self.viewport == Some(viewport) {
            return;
        }
        debug!(
            "set_viewport: {:?} -> {}x{}",
            self.viewport, viewport.width, viewport.height
        );
        self.viewport = Some(viewport);
        self.redraw_pending = true;
    }

    /// Pointer down; always consumed
    pub fn on_press(&mut self) -> bool {
        self.driver.on_press()
    }

    /// Drag by `(dx, dy)` pixels of scroll distance; always consumed
    pub fn on_drag_delta(&mut self, dx: f32, dy: f32) -> bool {
        self.driver.on_drag_delta(dx, dy)
    }

    /// Dispatch a host event. Returns true if it was consumed.
    pub fn handle_event(&mut self, event: HostEvent) -> bool {
        match event {
            HostEvent::Press => self.on_press(),
            HostEvent::Drag { dx, dy } => self.on_drag_delta(dx, dy),
            HostEvent::Resize { width, height } => {
                self.set_viewport(ViewportSize::new(width, height));
                true
            }
        }
    }
}
