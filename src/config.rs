//! Display, layout and timing configuration constants.
//!
//! Everything here is fixed at compile time. The bar geometry mirrors the
//! panel layout: a 220px track starting at x=10, a numeric readout box at
//! x=250, and a label line 25px above each bar.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 in landscape orientation).
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Bar Geometry
// =============================================================================

/// Left edge of every bar track.
pub const BAR_X: i32 = 10;

/// Width of the bar track erased before each repaint.
pub const BAR_TRACK_WIDTH: i32 = 220;

/// Height of a bar in pixels.
pub const BAR_HEIGHT: i32 = 20;

/// Bar length drawn for a value of zero.
pub const BAR_MIN_LEN: i32 = 10;

/// Bar length drawn for a value equal to the gauge's full scale.
pub const BAR_MAX_LEN: i32 = 220;

/// Vertical distance from the bar's top edge up to its text line.
pub const TEXT_OFFSET_Y: i32 = 25;

/// Height of the erased text boxes (label and readout).
pub const TEXT_BOX_HEIGHT: i32 = 20;

/// Left edge of the numeric readout box.
pub const READOUT_X: i32 = 250;

/// Width of the numeric readout box.
pub const READOUT_WIDTH: i32 = 60;

/// Width of the label box, running from `BAR_X` up to the readout.
pub const LABEL_WIDTH: i32 = READOUT_X - BAR_X - 10;

/// Text size used for labels and readouts.
pub const TEXT_SIZE: u8 = 2;

/// Decimal places shown in the numeric readout.
pub const READOUT_DECIMALS: u8 = 1;

// =============================================================================
// Redraw Policy
// =============================================================================

/// Minimum change in a gauge value before its bar is repainted.
/// Smaller changes are invisible at this bar resolution and only cost bus time.
pub const REDRAW_THRESHOLD: f32 = 0.5;

// =============================================================================
// Timing
// =============================================================================

/// Control loop period in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 30;

/// Minimum time between two mode transitions, in milliseconds.
pub const MODE_SWITCH_COOLDOWN_MS: u64 = 1000;

/// Time the touch controller needs after its wake command, in milliseconds.
pub const TOUCH_SETTLE_MS: u32 = 100;

// =============================================================================
// Touch Controller (CST816)
// =============================================================================

/// 7-bit I2C address of the touch controller.
pub const TOUCH_I2C_ADDRESS: u8 = 0x15;

/// Status register; bit 0 reads as 1 while a finger is on the panel.
pub const TOUCH_STATUS_REG: u8 = 0x02;

/// Wake/config register written once at startup.
pub const TOUCH_WAKE_REG: u8 = 0xD0;

/// Value written to `TOUCH_WAKE_REG`.
pub const TOUCH_WAKE_VALUE: u8 = 0x01;

/// Bit in the status byte that signals an active touch.
pub const TOUCH_ACTIVE_MASK: u8 = 0x01;
