//! Render session
//!
//! This module provides the single owner of all per-view rendering state:
//! - The fixed path (generated once, never recomputed)
//! - The prepared inner/outer stroke styles
//! - The offscreen compositor and its buffer
//! - The scroll driver and the measured viewport
//!
//! The session lives exactly as long as the host view. Its event loop in
//! [`event_loop`] runs on a single task, so no state is shared or locked.

mod event_loop;
mod frame;
mod input;

use glam::IVec2;
use pathview_config::SessionConfig;
use tracing::{info, warn};

use crate::compositor::OffscreenCompositor;
use crate::driver::ScrollDriver;
use crate::path::StepPath;
use crate::style::StrokeStyle;
use crate::types::ViewportSize;

pub use event_loop::{RunStats, run};

pub struct RenderSession {
    /// Fixed geometry in virtual surface coordinates
    path: StepPath,
    /// Rasterizer form of `path`, built once (`None` if it has no segments)
    skia_path: Option<tiny_skia::Path>,
    inner: StrokeStyle,
    outer: StrokeStyle,
    compositor: OffscreenCompositor,
    driver: ScrollDriver,
    /// Last measured viewport (None until the host measures)
    viewport: Option<ViewportSize>,
    /// A redraw is owed independent of the offset (viewport change or a
    /// dropped frame)
    redraw_pending: bool,
}

impl RenderSession {
    /// Create a session, generating the path from configuration
    pub fn new(config: &SessionConfig) -> Self {
        Self::with_path(StepPath::from_config(&config.path), config)
    }

    /// Create a session around an existing path
    pub fn with_path(path: StepPath, config: &SessionConfig) -> Self {
        let skia_path = path.to_skia_path();
        if skia_path.is_none() {
            warn!("Path has no drawable segments; frames will be background only");
        }

        info!(
            "Render session created: {} segments, half extent {}",
            path.segment_count(),
            path.half_extent()
        );

        Self {
            path,
            skia_path,
            inner: StrokeStyle::inner(&config.style),
            outer: StrokeStyle::outer(&config.style),
            compositor: OffscreenCompositor::from_config(config),
            driver: ScrollDriver::new(),
            viewport: None,
            redraw_pending: false,
        }
    }

    #[inline]
    pub fn path(&self) -> &StepPath {
        &self.path
    }

    /// Current scroll offset
    #[inline]
    pub fn offset(&self) -> IVec2 {
        self.driver.offset()
    }

    #[inline]
    pub fn viewport(&self) -> Option<ViewportSize> {
        self.viewport
    }

    #[inline]
    pub fn compositor(&self) -> &OffscreenCompositor {
        &self.compositor
    }

    #[inline]
    pub fn inner_style(&self) -> &StrokeStyle {
        &self.inner
    }

    #[inline]
    pub fn outer_style(&self) -> &StrokeStyle {
        &self.outer
    }
}
