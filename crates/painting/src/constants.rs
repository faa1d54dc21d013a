/// Smallest random path step. Zero-length steps are never sampled, so path
/// generation always terminates.
pub const MIN_PATH_STEP: i32 = 1;

/// Shortest frame period the ticker accepts.
pub const MIN_FRAME_PERIOD_MICROS: u64 = 1_000;

/// Host events applied per loop turn before a due tick is serviced.
pub const MAX_EVENTS_PER_TICK: u32 = 256;
