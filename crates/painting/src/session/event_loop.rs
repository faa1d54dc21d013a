//! Single-task event loop driving a render session
//!
//! Host events and frame ticks are multiplexed on one task. Events are
//! applied as they arrive; rendering only happens on a tick that finds the
//! offset changed or a redraw owed, so a burst of drags between two ticks
//! costs a single frame. At most [`MAX_EVENTS_PER_TICK`] events are applied
//! before a due tick is serviced, so an event flood cannot stall frames.

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::compositor::DisplaySurface;
use crate::constants::MAX_EVENTS_PER_TICK;
use crate::ticker::FrameTicker;
use crate::types::HostEvent;
use crate::validation::RenderError;

use super::RenderSession;

/// Counters reported when the loop exits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub ticks: u64,
    /// Frames actually presented
    pub frames: u64,
    pub events: u64,
}

/// Run until the ticker is stopped. A closed event channel does not end the
/// loop; the session keeps ticking with its last state.
///
/// If the session is already measured, an initial frame is drawn before
/// the first event or tick.
pub async fn run<D: DisplaySurface + ?Sized>(
    session: &mut RenderSession,
    mut events: mpsc::UnboundedReceiver<HostEvent>,
    mut ticker: FrameTicker,
    display: &mut D,
) -> Result<RunStats, RenderError> {
    let mut stats = RunStats::default();
    let mut events_open = true;
    let mut budget = MAX_EVENTS_PER_TICK;

    if session.is_drawable() && session.draw(display)? {
        stats.frames += 1;
    }

    loop {
        tokio::select! {
            biased;
            event = events.recv(), if events_open && budget > 0 => match event {
                Some(event) => {
                    stats.events += 1;
                    budget -= 1;
                    session.handle_event(event);
                }
                None => {
                    debug!("run: event channel closed");
                    events_open = false;
                }
            },
            tick = ticker.next_tick() => {
                if tick.is_none() {
                    break;
                }
                stats.ticks += 1;
                budget = MAX_EVENTS_PER_TICK;
                if session.tick().is_redraw() && session.draw(display)? {
                    stats.frames += 1;
                }
            }
        }
    }

    info!(
        "Render loop stopped: {} ticks, {} frames, {} events",
        stats.ticks, stats.frames, stats.events
    );
    Ok(stats)
}
