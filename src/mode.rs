//! Display modes and the mode state machine.
//!
//! # Modes
//!
//! - [`DisplayMode::Overview`]: all three bars stacked
//! - [`DisplayMode::WaterOnly`]: coolant temperature alone
//! - [`DisplayMode::OilTempOnly`]: oil temperature alone
//! - [`DisplayMode::OilPressureOnly`]: oil pressure alone
//!
//! Each accepted touch advances one step through that cycle. Every
//! transition, and the very first frame, arms a one-shot full redraw that the
//! renderer consumes on its next pass.

#[cfg(feature = "defmt")]
use defmt::Format;

use crate::debounce::AdvanceEvent;
use crate::gauge::GaugeId;

/// Row used by the single-gauge modes.
const SINGLE_ROW: i32 = 100;

/// A gauge placed in a layout.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GaugeSlot {
    pub id: GaugeId,
    /// Top edge of the bar in pixels.
    pub row: i32,
}

impl GaugeSlot {
    const fn new(
        id: GaugeId,
        row: i32,
    ) -> Self {
        Self { id, row }
    }
}

const OVERVIEW_LAYOUT: [GaugeSlot; 3] = [
    GaugeSlot::new(GaugeId::Coolant, 60),
    GaugeSlot::new(GaugeId::OilTemp, 140),
    GaugeSlot::new(GaugeId::OilPressure, 220),
];
const WATER_LAYOUT: [GaugeSlot; 1] = [GaugeSlot::new(GaugeId::Coolant, SINGLE_ROW)];
const OIL_TEMP_LAYOUT: [GaugeSlot; 1] = [GaugeSlot::new(GaugeId::OilTemp, SINGLE_ROW)];
const OIL_PRESSURE_LAYOUT: [GaugeSlot; 1] = [GaugeSlot::new(GaugeId::OilPressure, SINGLE_ROW)];

/// Screen shown on the panel.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum DisplayMode {
    /// All three gauges.
    #[default]
    Overview,
    /// Coolant temperature only.
    WaterOnly,
    /// Oil temperature only.
    OilTempOnly,
    /// Oil pressure only.
    OilPressureOnly,
}

impl DisplayMode {
    /// Number of modes in the cycle.
    pub const COUNT: usize = 4;

    /// Next mode (cycles: Overview → WaterOnly → OilTempOnly → OilPressureOnly → Overview).
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Overview => Self::WaterOnly,
            Self::WaterOnly => Self::OilTempOnly,
            Self::OilTempOnly => Self::OilPressureOnly,
            Self::OilPressureOnly => Self::Overview,
        }
    }

    /// Gauges shown in this mode, top to bottom.
    pub const fn visible_gauges(self) -> &'static [GaugeSlot] {
        match self {
            Self::Overview => &OVERVIEW_LAYOUT,
            Self::WaterOnly => &WATER_LAYOUT,
            Self::OilTempOnly => &OIL_TEMP_LAYOUT,
            Self::OilPressureOnly => &OIL_PRESSURE_LAYOUT,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::WaterOnly => "Coolant",
            Self::OilTempOnly => "Oil temp",
            Self::OilPressureOnly => "Oil pressure",
        }
    }
}

/// Active mode plus the pending full-redraw flag.
pub struct ModeState {
    mode: DisplayMode,
    force_full_redraw: bool,
}

impl ModeState {
    /// Start in [`DisplayMode::Overview`] with a full redraw pending.
    pub const fn new() -> Self {
        Self {
            mode: DisplayMode::Overview,
            force_full_redraw: true,
        }
    }

    #[inline]
    pub const fn mode(&self) -> DisplayMode { self.mode }

    /// Apply an advance event and arm a full redraw. Returns the new mode.
    pub fn advance(
        &mut self,
        _event: AdvanceEvent,
    ) -> DisplayMode {
        self.mode = self.mode.next();
        self.force_full_redraw = true;
        self.mode
    }

    /// Whether a full redraw is pending.
    #[inline]
    pub const fn needs_full_redraw(&self) -> bool { self.force_full_redraw }

    /// Consume the full-redraw flag.
    #[inline]
    pub fn take_full_redraw(&mut self) -> bool { core::mem::take(&mut self.force_full_redraw) }

    /// Re-arm the full-redraw flag, e.g. after a failed render pass left the
    /// panel in an unknown state.
    #[inline]
    pub fn request_full_redraw(&mut self) { self.force_full_redraw = true; }
}

impl Default for ModeState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
