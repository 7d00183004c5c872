//! Gauge cluster simulator for desktop platforms.
//!
//! Runs the same control loop as the firmware against an
//! `embedded-graphics-simulator` window.
//!
//! # Controls
//!
//! - **Space** or **mouse button**: touch the panel (hold to see that a long
//!   press only advances once)
//! - Close the window to quit
//!
//! Log output goes to stderr; set `RUST_LOG` to change the level (default
//! `debug`).

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use gauge_cluster::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use gauge_cluster::{Cluster, EgSurface, Oscillator, TouchSensor};
use tracing_subscriber::EnvFilter;

use crate::timing::{TICK_TIME, WINDOW_SCALE};

/// Touch state driven by window input events.
#[derive(Default)]
struct WindowTouch {
    key_held: bool,
    mouse_held: bool,
}

impl WindowTouch {
    /// Fold one window event into the touch state. Returns `false` on quit.
    fn handle(
        &mut self,
        event: SimulatorEvent,
    ) -> bool {
        match event {
            SimulatorEvent::Quit => return false,
            SimulatorEvent::KeyDown {
                keycode: Keycode::Space,
                ..
            } => self.key_held = true,
            SimulatorEvent::KeyUp {
                keycode: Keycode::Space,
                ..
            } => self.key_held = false,
            SimulatorEvent::MouseButtonDown { .. } => self.mouse_held = true,
            SimulatorEvent::MouseButtonUp { .. } => self.mouse_held = false,
            _ => {}
        }
        true
    }
}

impl TouchSensor for WindowTouch {
    fn is_touched(&mut self) -> bool { self.key_held || self.mouse_held }
}

/// Install the fmt subscriber. It also forwards the library's `log` records.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("logging init failed: {e}");
    }
}

fn main() {
    init_logging();

    let display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Gauge Cluster Sim", &output_settings);

    let mut surface = EgSurface::new(display);
    let mut cluster = Cluster::new(Oscillator::new());
    let mut touch = WindowTouch::default();

    // SimulatorDisplay can't fail to draw
    cluster.start(&mut surface).ok();
    window.update(surface.target());
    log::info!("Simulator started, press space or click to change mode");

    let clock = Instant::now();
    let mut tick_count = 0u64;
    let mut redraw_count = 0u64;

    loop {
        let tick_start = Instant::now();

        for event in window.events() {
            if !touch.handle(event) {
                log::info!("{} ticks, {} gauge redraws", tick_count, redraw_count);
                return;
            }
        }

        let now_ms = clock.elapsed().as_millis() as u64;
        let report = match cluster.tick(&mut touch, &mut surface, now_ms) {
            Ok(report) => report,
            Err(never) => match never {},
        };
        tick_count += 1;
        redraw_count += u64::from(report.render.redrawn);

        window.update(surface.target());

        if let Some(remaining) = TICK_TIME.checked_sub(tick_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
