//! Gauge cluster firmware for Raspberry Pi Pico 2 (RP2350).
//!
//! Shows coolant temperature, oil temperature and oil pressure as bars on an
//! ST7789 panel. Tapping the CST816 touch panel cycles
//! Overview → Coolant → Oil temp → Oil pressure → Overview.
//!
//! # Architecture
//!
//! A single task runs the control loop from [`gauge_cluster::Cluster`]: sample
//! values, poll touch, advance mode, redraw dirty bars, then sleep for
//! `TICK_INTERVAL_MS`. Nothing else runs concurrently.

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]

mod display;

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::I2c;
use embassy_rp::spi::Spi;
use embassy_time::{Delay, Duration, Instant, Timer};
use gauge_cluster::config::TICK_INTERVAL_MS;
use gauge_cluster::{Cluster, Cst816, EgSurface, Oscillator};
use {defmt_rtt as _, panic_probe as _};

use crate::display::{display_spi_config, init_display, touch_i2c_config};

/// Interval between profiling log lines.
const PROFILE_LOG_INTERVAL: Duration = Duration::from_secs(2);

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"gauge-cluster"),
    embassy_rp::binary_info::rp_program_description!(c"Coolant/oil gauge cluster with touch mode cycling"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Gauge cluster starting...");

    let p = embassy_rp::init(Default::default());

    // Touch controller: wake it and let it settle before the panel comes up
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, touch_i2c_config());
    let mut touch = Cst816::new(i2c);
    if touch.wake(&mut Delay).is_err() {
        warn!("Touch wake failed, taps will be ignored until the controller answers");
    }
    info!("Touch initialized!");

    // Display pins
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let _backlight = Output::new(p.PIN_20, Level::High);

    // SPI is TX-only, the panel has no MISO
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, display_spi_config());
    let mut surface = EgSurface::new(init_display(spi, cs, dc));
    info!("Display initialized!");

    let mut cluster = Cluster::new(Oscillator::new());
    if cluster.start(&mut surface).is_err() {
        warn!("Initial draw failed, retrying on first tick");
    }

    // Profiling counters
    let mut tick_count = 0u32;
    let mut redraw_count = 0u32;
    let mut skip_count = 0u32;
    let mut worst_tick_us = 0u32;
    let mut last_profile_log = Instant::now();

    info!("Main loop starting");

    loop {
        let tick_start = Instant::now();

        match cluster.tick(&mut touch, &mut surface, tick_start.as_millis()) {
            Ok(report) => {
                if report.mode_changed {
                    info!("Mode: {}", report.mode);
                }
                redraw_count += u32::from(report.render.redrawn);
                skip_count += u32::from(report.render.skipped);
            }
            Err(_) => warn!("Render failed, continuing"),
        }

        tick_count = tick_count.wrapping_add(1);
        worst_tick_us = worst_tick_us.max(tick_start.elapsed().as_micros() as u32);

        if last_profile_log.elapsed() >= PROFILE_LOG_INTERVAL {
            info!(
                "PROFILE: ticks={} redrawn={} skipped={} worst={}us",
                tick_count, redraw_count, skip_count, worst_tick_us
            );
            tick_count = 0;
            redraw_count = 0;
            skip_count = 0;
            worst_tick_us = 0;
            last_profile_log = Instant::now();
        }

        Timer::after_millis(TICK_INTERVAL_MS).await;
    }
}
