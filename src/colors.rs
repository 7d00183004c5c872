//! Color constants for the gauge cluster.
//!
//! Rgb565 is native to the ST7789 panel, so these values go to the bus
//! without conversion. Standard colors come from the `RgbColor` trait.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black. Panel background and erase color.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Labels and numeric readouts.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Orange bar fill.
/// RGB565: (31, 41, 0), matching the common 0xFD20 "orange" on 16-bit panels.
pub const ORANGE: Rgb565 = Rgb565::new(31, 41, 0);

/// Background used for erasing bars, text boxes and the whole screen.
pub const BACKGROUND: Rgb565 = BLACK;

/// Bar foreground color.
pub const BAR_COLOR: Rgb565 = ORANGE;

/// Text color for labels and readouts.
pub const TEXT_COLOR: Rgb565 = WHITE;
