//! Pathview - offscreen rendering of an oversized path into a fixed window
//!
//! Runs one render session headless: measures the configured viewport,
//! replays a drag gesture against it at the configured frame rate, and
//! saves the last presented frame as PNG.

use std::time::Duration;

use painting::{FrameTicker, RenderSession, ViewportSize};
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod display;
mod error;
mod input;

use config::AppConfig;
use display::Framebuffer;
use error::AppError;

/// Ticks kept running after the gesture so the final offset is drawn
const SETTLE_FRAMES: u32 = 3;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    if let Err(e) = run_app().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run_app() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let viewport = ViewportSize::from_config(&config.session.viewport);
    let period = config.session.frame.interval();

    info!(
        "Starting Pathview: viewport {}x{}, {} fps",
        viewport.width, viewport.height, config.session.frame.target_fps
    );

    let mut session = RenderSession::new(&config.session);
    let mut framebuffer = Framebuffer::new(viewport);

    // The host measures before any input arrives
    session.set_viewport(viewport);

    let (tx, rx) = mpsc::unbounded_channel();
    let (ticker, handle) = FrameTicker::new(period);

    let gesture = config.gesture;
    info!(
        "Replaying drag of ({}, {}) over {:?}",
        gesture.total().x,
        gesture.total().y,
        gesture.duration()
    );

    tokio::spawn(async move {
        gesture.replay(&tx).await;
        tokio::time::sleep(settle_time(period)).await;
        handle.stop();
    });

    let stats = painting::run(&mut session, rx, ticker, &mut framebuffer).await?;
    info!(
        "Run stats: {}",
        serde_json::to_string(&stats).unwrap_or_default()
    );
    info!(
        "Final offset {}, {} frames presented",
        session.offset(),
        framebuffer.presented()
    );

    framebuffer.save_png(&config.output)
}

fn settle_time(period: Duration) -> Duration {
    period * SETTLE_FRAMES
}
