//! Pathview painting core - windowed offscreen rendering
//!
//! A path far larger than any hardware texture is rasterized on the CPU into
//! an offscreen buffer sized to the viewport, then composited onto the
//! display. Only the translated window into the path is ever rasterized.
//!
//! This crate provides:
//! - [`path`] - Staircase path generator over a `2H x 2H` virtual surface
//! - [`canvas`] - Offscreen RGBA8 canvas with scoped transform state
//! - [`compositor`] - Buffer lifecycle, per-frame rendering, and blitting
//! - [`driver`] - Drag accumulation and tick-based redraw detection
//! - [`ticker`] - Cancellable fixed-cadence frame timer
//! - [`session`] - Single owner of all per-view state, plus its event loop

pub mod canvas;
pub mod compositor;
pub mod constants;
pub mod driver;
pub mod path;
pub mod session;
pub mod style;
pub mod ticker;
pub mod types;
pub mod validation;

pub use canvas::*;
pub use compositor::*;
pub use constants::*;
pub use driver::*;
pub use path::*;
pub use session::*;
pub use style::*;
pub use ticker::*;
pub use types::*;
pub use validation::*;
