use pathview_config::ViewportConfig;
use serde::{Deserialize, Serialize};

/// Measured viewport size in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Physical size for a configured viewport
    pub fn from_config(config: &ViewportConfig) -> Self {
        Self::new(config.scaled_width(), config.scaled_height())
    }

    /// Total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// True if either dimension is zero
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Result of a driver tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Nothing changed since the last tick
    Idle,
    /// The view must be redrawn
    RedrawRequested,
}

impl TickOutcome {
    #[inline]
    pub fn is_redraw(self) -> bool {
        self == Self::RedrawRequested
    }
}

/// Input delivered by the host platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HostEvent {
    /// A pointer went down; starts a gesture
    Press,
    /// Scroll distance since the previous drag event, in pixels
    Drag { dx: f32, dy: f32 },
    /// The host measured a new viewport size
    Resize { width: u32, height: u32 },
}
