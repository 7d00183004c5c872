//! Timing constants for the simulator.
//!
//! These use `std::time::Duration`, which the `no_std` library can't, so
//! they live here rather than in `gauge_cluster::config`.

use std::time::Duration;

use gauge_cluster::config::TICK_INTERVAL_MS;

/// Target tick period. The main loop sleeps if a tick finishes early.
pub const TICK_TIME: Duration = Duration::from_millis(TICK_INTERVAL_MS);

/// Window pixel scale (320x240 panel shown at 640x480).
pub const WINDOW_SCALE: u32 = 2;
