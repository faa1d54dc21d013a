//! Cancellable frame ticker
//!
//! A fixed-cadence timer polled from the render loop's own task. The first
//! tick fires immediately; missed ticks are skipped rather than bursted.
//! The ticker runs until [`TickerHandle::stop`] is called or the handle is
//! dropped.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::debug;

use crate::constants::MIN_FRAME_PERIOD_MICROS;

pub struct FrameTicker {
    interval: Interval,
    stopped: watch::Receiver<bool>,
    ticks: u64,
}

/// Stop handle for a [`FrameTicker`]. Dropping it also stops the ticker.
#[derive(Debug)]
pub struct TickerHandle {
    stop: watch::Sender<bool>,
}

impl FrameTicker {
    /// Create a ticker with the given period.
    ///
    /// Must be called from within a tokio runtime with the time driver
    /// enabled.
    pub fn new(period: Duration) -> (Self, TickerHandle) {
        let period = period.max(Duration::from_micros(MIN_FRAME_PERIOD_MICROS));
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let (stop, stopped) = watch::channel(false);
        debug!("FrameTicker::new: period={:?}", period);

        (
            Self {
                interval,
                stopped,
                ticks: 0,
            },
            TickerHandle { stop },
        )
    }

    /// Wait for the next tick. Returns `None` once the ticker is stopped.
    pub async fn next_tick(&mut self) -> Option<Instant> {
        if self.is_stopped() {
            return None;
        }

        tokio::select! {
            biased;
            _ = self.stopped.changed() => None,
            instant = self.interval.tick() => {
                self.ticks += 1;
                Some(instant)
            }
        }
    }

    /// True once stopped through the handle or after the handle was dropped
    pub fn is_stopped(&self) -> bool {
        *self.stopped.borrow() || self.stopped.has_changed().is_err()
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.interval.period()
    }

    /// Number of ticks delivered so far
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl TickerHandle {
    pub fn stop(&self) {
        if !self.stop.send_replace(true) {
            debug!("TickerHandle::stop: ticker stopped");
        }
    }

    pub fn is_stopped(&self) -> bool {
        *self.stop.borrow()
    }
}
