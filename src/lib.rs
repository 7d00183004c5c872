//! Gauge cluster library - the display refresh engine for a touch-cycled
//! three-gauge instrument panel.
//!
//! Everything here is hardware-agnostic and testable on the host. The
//! firmware (`firmware/`) and desktop simulator (`simulator/`) binaries supply
//! the panel, the touch controller bus and the clock.
//!
//! - [`signal`]: sensor value sources (deterministic oscillator)
//! - [`touch`]: touch sensor trait and CST816 driver
//! - [`debounce`]: touch debouncing into rate-limited advance events
//! - [`mode`]: display modes, layouts and the mode state machine
//! - [`surface`]: panel drawing primitives and the embedded-graphics adapter
//! - [`renderer`]: dirty-region bar renderer
//! - [`cluster`]: the per-tick control loop
//!
//! # Testing
//!
//! ```bash
//! cargo test
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`); the library itself is `no_std`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod cluster;
pub mod colors;
pub mod config;
pub mod debounce;
pub mod gauge;
pub mod mode;
pub mod renderer;
pub mod signal;
pub mod surface;
pub mod touch;

#[cfg(test)]
mod test_support;

pub use cluster::{Cluster, TickReport};
pub use debounce::{AdvanceEvent, TouchDebouncer};
pub use gauge::{Gauge, GaugeId, GaugeSet, Readings};
pub use mode::{DisplayMode, GaugeSlot, ModeState};
pub use renderer::{BarRenderer, RenderStats, bar_length};
pub use signal::{Oscillator, SignalSource};
pub use surface::{EgSurface, PanelSurface};
pub use touch::{Cst816, TouchSensor};
