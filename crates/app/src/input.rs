//! Scripted pointer input

use std::time::Duration;

use glam::Vec2;
use painting::HostEvent;
use tokio::sync::mpsc;
use tokio::time;
use tracing::debug;

/// A press followed by evenly spaced, equal drag deltas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    /// Distance reported by each drag event
    pub delta: Vec2,
    pub events: u32,
    pub spacing: Duration,
}

impl Default for DragGesture {
    fn default() -> Self {
        Self {
            delta: Vec2::new(-40.0, -30.0),
            events: 30,
            spacing: Duration::from_millis(16),
        }
    }
}

impl DragGesture {
    /// Sum of all deltas
    pub fn total(&self) -> Vec2 {
        self.delta * self.events as f32
    }

    /// Wall time the replay takes
    pub fn duration(&self) -> Duration {
        self.spacing * self.events
    }

    /// Send the gesture to the session. Returns false if the receiver went
    /// away before the gesture finished.
    pub async fn replay(&self, tx: &mpsc::UnboundedSender<HostEvent>) -> bool {
        if tx.send(HostEvent::Press).is_err() {
            return false;
        }

        for _ in 0..self.events {
            time::sleep(self.spacing).await;
            let event = HostEvent::Drag {
                dx: self.delta.x,
                dy: self.delta.y,
            };
            if tx.send(event).is_err() {
                debug!("replay: receiver closed");
                return false;
            }
        }
        true
    }
}
