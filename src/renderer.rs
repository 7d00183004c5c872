//! Dirty-region bar renderer.
//!
//! Repaints only what changed instead of the whole panel.
//!
//! # Update Strategy
//!
//! | Element | When repainted | Strategy |
//! |---------|----------------|----------|
//! | Whole screen | Mode switch / first frame | One clear per forced pass |
//! | Bar track + bar | Value moved by at least `REDRAW_THRESHOLD` | Erase track, fill bar |
//! | Readout | Same as bar | Erase box, print value |
//! | Label | Forced pass or gauge never drawn | Erase box, print label |
//!
//! A gauge whose value moved less than the threshold gets no draw calls at
//! all. Its `last_rendered` value is left alone, so slow drift accumulates
//! until it crosses the threshold.
//!
//! # Bar Mapping
//!
//! [`bar_length`] maps `[0, max_scale]` linearly onto `[BAR_MIN_LEN, BAR_MAX_LEN]`
//! and does **not** clamp: values below zero give lengths under 10 (down to
//! negative), values above full scale give lengths past 220. The renderer
//! hands those through to the surface unchanged; [`EgSurface`] draws nothing
//! for a non-positive width and clips anything past the panel edge.
//!
//! [`EgSurface`]: crate::surface::EgSurface

use crate::colors::{BACKGROUND, BAR_COLOR, TEXT_COLOR};
use crate::config::{
    BAR_HEIGHT,
    BAR_MAX_LEN,
    BAR_MIN_LEN,
    BAR_TRACK_WIDTH,
    BAR_X,
    LABEL_WIDTH,
    READOUT_DECIMALS,
    READOUT_WIDTH,
    READOUT_X,
    REDRAW_THRESHOLD,
    TEXT_BOX_HEIGHT,
    TEXT_OFFSET_Y,
    TEXT_SIZE,
};
use crate::gauge::{Gauge, GaugeSet};
use crate::mode::DisplayMode;
use crate::surface::PanelSurface;

/// Pixel length of a bar for `value` on a gauge with full scale `max_scale`.
///
/// `BAR_MIN_LEN + value / max_scale * (BAR_MAX_LEN - BAR_MIN_LEN)`, truncated
/// toward zero. Unclamped; see the module docs.
pub fn bar_length(
    value: f32,
    max_scale: f32,
) -> i32 {
    let span = (BAR_MAX_LEN - BAR_MIN_LEN) as f32;
    (BAR_MIN_LEN as f32 + value / max_scale * span) as i32
}

/// Whether a gauge needs repainting this pass.
///
/// A never-drawn gauge compares against NaN, which is never below the
/// threshold, so it always repaints.
#[inline]
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn is_dirty(
    gauge: &Gauge,
    forced: bool,
) -> bool {
    forced || !((gauge.current - gauge.last_rendered).abs() < REDRAW_THRESHOLD)
}

/// Counters for one render pass.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct RenderStats {
    /// Whether the whole screen was cleared.
    pub cleared: bool,
    /// Gauges that were repainted.
    pub redrawn: u8,
    /// Visible gauges left untouched.
    pub skipped: u8,
}

/// Stateless renderer; all render memory lives in the gauges.
#[derive(Clone, Copy, Default, Debug)]
pub struct BarRenderer;

impl BarRenderer {
    pub const fn new() -> Self { Self }

    /// Run one pass over the gauges visible in `mode`.
    ///
    /// With `force_full_redraw` the screen is cleared once, before any gauge
    /// is touched, and every visible gauge is repainted including its label.
    /// A surface error stops the pass. Gauges already painted keep their new
    /// `last_rendered`; the failing one is left marked never-drawn, so the
    /// next pass repaints it in full whatever its value.
    pub fn render<S: PanelSurface>(
        &self,
        surface: &mut S,
        gauges: &mut GaugeSet,
        mode: DisplayMode,
        force_full_redraw: bool,
    ) -> Result<RenderStats, S::Error> {
        let mut stats = RenderStats::default();

        if force_full_redraw {
            surface.clear_screen(BACKGROUND)?;
            stats.cleared = true;
            log::debug!("full redraw: {}", mode.name());
        }

        for slot in mode.visible_gauges() {
            let gauge = gauges.get_mut(slot.id);
            gauge.screen_row = slot.row;

            if !is_dirty(gauge, force_full_redraw) {
                stats.skipped += 1;
                continue;
            }

            self.draw_gauge(surface, gauge, force_full_redraw)?;
            stats.redrawn += 1;
        }

        Ok(stats)
    }

    /// Paint one gauge at its current `screen_row` and record what was drawn.
    fn draw_gauge<S: PanelSurface>(
        &self,
        surface: &mut S,
        gauge: &mut Gauge,
        forced: bool,
    ) -> Result<(), S::Error> {
        let row = gauge.screen_row;
        let text_y = row - TEXT_OFFSET_Y;
        let value = gauge.current;
        let draw_label = forced || !gauge.has_been_drawn();

        // Panel no longer matches last_rendered until the readout is done
        gauge.last_rendered = f32::NAN;

        // Bar
        surface.fill_rect(BAR_X, row, BAR_TRACK_WIDTH, BAR_HEIGHT, BACKGROUND)?;
        surface.fill_rect(BAR_X, row, bar_length(value, gauge.max_scale), BAR_HEIGHT, BAR_COLOR)?;

        // Label (static per mode)
        if draw_label {
            surface.fill_rect(BAR_X, text_y, LABEL_WIDTH, TEXT_BOX_HEIGHT, BACKGROUND)?;
            surface.set_cursor(BAR_X, text_y);
            surface.set_text_size(TEXT_SIZE);
            surface.set_text_color(TEXT_COLOR);
            surface.print_text(gauge.label)?;
        }

        // Readout
        surface.fill_rect(READOUT_X, text_y, READOUT_WIDTH, TEXT_BOX_HEIGHT, BACKGROUND)?;
        surface.set_cursor(READOUT_X, text_y);
        surface.set_text_size(TEXT_SIZE);
        surface.set_text_color(TEXT_COLOR);
        surface.print_value(value, READOUT_DECIMALS)?;

        gauge.last_rendered = value;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
