//! Panel drawing surface.
//!
//! [`PanelSurface`] is the small cursor-style primitive set the renderer
//! draws with: rectangle fills, a text cursor, and a screen clear. The
//! renderer never talks to a display driver directly, so the same code drives
//! the ST7789 panel, the desktop simulator and the test recorder.
//!
//! [`EgSurface`] implements the trait for any embedded-graphics
//! `DrawTarget<Color = Rgb565>`.
//!
//! # Text sizes
//!
//! | Size | Font | Cell |
//! |------|------|------|
//! | 1 | `FONT_6X10` | 6×10 |
//! | 2 | `FONT_10X20` | 10×20 |
//! | 3+ | `PROFONT_24_POINT` | 16×29 |

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use heapless::String;
use profont::PROFONT_24_POINT;

use crate::colors::WHITE;

/// Capacity of the scratch buffer used to format readouts.
const VALUE_BUF_LEN: usize = 16;

/// Shown in place of a readout that doesn't fit the buffer.
pub const OVERFLOW_READOUT: &str = "----";

/// Format `value` with `decimals` places, or [`OVERFLOW_READOUT`] if the text
/// would not fit in `VALUE_BUF_LEN` bytes.
pub fn format_value(
    value: f32,
    decimals: u8,
) -> String<VALUE_BUF_LEN> {
    let mut buf: String<VALUE_BUF_LEN> = String::new();
    if write!(buf, "{:.*}", usize::from(decimals), value).is_err() {
        log::warn!("readout overflow: {}", value);
        buf.clear();
        // Marker is shorter than the buffer
        let _ = buf.push_str(OVERFLOW_READOUT);
    }
    buf
}

/// Drawing primitives consumed by the bar renderer.
///
/// Coordinates and extents are signed: the renderer passes bar lengths
/// through unclamped, and implementations decide how to treat extents that
/// fall off the panel.
pub trait PanelSurface {
    type Error;

    /// Fill a rectangle. Non-positive extents draw nothing.
    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Rgb565,
    ) -> Result<(), Self::Error>;

    /// Move the text cursor to the top-left corner of the next glyph.
    fn set_cursor(
        &mut self,
        x: i32,
        y: i32,
    );

    fn set_text_size(
        &mut self,
        size: u8,
    );

    fn set_text_color(
        &mut self,
        color: Rgb565,
    );

    /// Print at the cursor and advance it past the text.
    fn print_text(
        &mut self,
        text: &str,
    ) -> Result<(), Self::Error>;

    /// Print a number with a fixed number of decimals.
    fn print_value(
        &mut self,
        value: f32,
        decimals: u8,
    ) -> Result<(), Self::Error> {
        self.print_text(format_value(value, decimals).as_str())
    }

    /// Fill the whole panel.
    fn clear_screen(
        &mut self,
        color: Rgb565,
    ) -> Result<(), Self::Error>;
}

impl<S: PanelSurface + ?Sized> PanelSurface for &mut S {
    type Error = S::Error;

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        (**self).fill_rect(x, y, width, height, color)
    }

    fn set_cursor(
        &mut self,
        x: i32,
        y: i32,
    ) {
        (**self).set_cursor(x, y);
    }

    fn set_text_size(
        &mut self,
        size: u8,
    ) {
        (**self).set_text_size(size);
    }

    fn set_text_color(
        &mut self,
        color: Rgb565,
    ) {
        (**self).set_text_color(color);
    }

    fn print_text(
        &mut self,
        text: &str,
    ) -> Result<(), Self::Error> {
        (**self).print_text(text)
    }

    fn print_value(
        &mut self,
        value: f32,
        decimals: u8,
    ) -> Result<(), Self::Error> {
        (**self).print_value(value, decimals)
    }

    fn clear_screen(
        &mut self,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        (**self).clear_screen(color)
    }
}

/// Font used for a given text size.
pub fn font_for_size(size: u8) -> &'static MonoFont<'static> {
    match size {
        0 | 1 => &FONT_6X10,
        2 => &FONT_10X20,
        _ => &PROFONT_24_POINT,
    }
}

/// [`PanelSurface`] over an embedded-graphics draw target.
///
/// Fills are clipped to the target's bounding box, so oversize or negative
/// bars from the unclamped mapping never reach the driver as invalid windows.
pub struct EgSurface<D> {
    target: D,
    cursor: Point,
    text_size: u8,
    text_color: Rgb565,
}

impl<D> EgSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Wrap a draw target. Cursor starts at the origin, size 1, white text.
    pub fn new(target: D) -> Self {
        Self {
            target,
            cursor: Point::zero(),
            text_size: 1,
            text_color: WHITE,
        }
    }

    #[inline]
    pub const fn cursor(&self) -> Point { self.cursor }

    #[inline]
    pub const fn target(&self) -> &D { &self.target }

    pub fn into_inner(self) -> D { self.target }
}

impl<D> PanelSurface for EgSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        if width <= 0 || height <= 0 {
            return Ok(());
        }
        let area = Rectangle::new(Point::new(x, y), Size::new(width as u32, height as u32))
            .intersection(&self.target.bounding_box());
        if area.is_zero_sized() {
            return Ok(());
        }
        self.target.fill_solid(&area, color)
    }

    fn set_cursor(
        &mut self,
        x: i32,
        y: i32,
    ) {
        self.cursor = Point::new(x, y);
    }

    fn set_text_size(
        &mut self,
        size: u8,
    ) {
        self.text_size = size;
    }

    fn set_text_color(
        &mut self,
        color: Rgb565,
    ) {
        self.text_color = color;
    }

    fn print_text(
        &mut self,
        text: &str,
    ) -> Result<(), Self::Error> {
        let style = MonoTextStyle::new(font_for_size(self.text_size), self.text_color);
        let bounds = self.target.bounding_box();
        let mut clipped = self.target.clipped(&bounds);
        self.cursor = Text::with_baseline(text, self.cursor, style, Baseline::Top).draw(&mut clipped)?;
        Ok(())
    }

    fn clear_screen(
        &mut self,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        self.target.clear(color)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::colors::{BLACK, ORANGE};

    fn surface() -> EgSurface<MockDisplay<Rgb565>> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        EgSurface::new(display)
    }

    #[test]
    fn test_fill_rect_paints_area() {
        let mut s = surface();
        s.fill_rect(2, 3, 4, 5, ORANGE).unwrap();
        let display = s.into_inner();
        assert_eq!(display.get_pixel(Point::new(2, 3)), Some(ORANGE));
        assert_eq!(display.get_pixel(Point::new(5, 7)), Some(ORANGE));
        assert_eq!(display.get_pixel(Point::new(6, 3)), None);
        assert_eq!(display.get_pixel(Point::new(2, 8)), None);
    }

    #[test]
    fn test_negative_width_draws_nothing() {
        let mut s = surface();
        s.fill_rect(10, 10, -40, 20, ORANGE).unwrap();
        s.fill_rect(10, 10, 0, 20, ORANGE).unwrap();
        let display = s.into_inner();
        assert!(display.bounding_box().points().all(|p| display.get_pixel(p).is_none()));
    }

    #[test]
    fn test_oversize_fill_is_clipped() {
        // MockDisplay panics on out-of-bounds pixels, so reaching the
        // assertion proves the clip.
        let mut s = surface();
        s.fill_rect(60, 0, 500, 2, ORANGE).unwrap();
        let display = s.into_inner();
        assert_eq!(display.get_pixel(Point::new(63, 1)), Some(ORANGE));
        assert_eq!(display.get_pixel(Point::new(59, 0)), None);
        assert_eq!(display.get_pixel(Point::new(60, 2)), None);
    }

    #[test]
    fn test_clear_screen() {
        let mut s = surface();
        s.clear_screen(BLACK).unwrap();
        let display = s.into_inner();
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(BLACK));
        assert_eq!(display.get_pixel(Point::new(63, 63)), Some(BLACK));
    }

    #[test]
    fn test_print_advances_cursor() {
        let mut s = surface();
        s.set_cursor(0, 0);
        s.set_text_size(1);
        s.set_text_color(WHITE);
        s.print_text("AB").unwrap();
        assert_eq!(s.cursor(), Point::new(12, 0));
    }

    #[test]
    fn test_print_value_formats_one_decimal() {
        let mut s = surface();
        s.set_text_size(1);
        s.print_value(7.25, 1).unwrap();
        // "7.2" is three 6px glyphs
        assert_eq!(s.cursor(), Point::new(18, 0));
    }

    #[test]
    fn test_format_value_fits() {
        assert_eq!(format_value(-12.0, 1).as_str(), "-12.0");
        assert_eq!(format_value(3.0, 0).as_str(), "3");
    }

    #[test]
    fn test_format_value_overflow_shows_marker() {
        // f32::MAX is 39 integer digits
        assert_eq!(format_value(f32::MAX, 1).as_str(), OVERFLOW_READOUT);

        let mut s = surface();
        s.set_text_size(1);
        s.print_value(f32::MAX, 1).unwrap();
        assert_eq!(s.cursor(), Point::new(24, 0));
    }

    #[test]
    fn test_font_sizes() {
        assert_eq!(font_for_size(1).character_size, Size::new(6, 10));
        assert_eq!(font_for_size(2).character_size, Size::new(10, 20));
        assert_eq!(font_for_size(3).character_size, PROFONT_24_POINT.character_size);
    }
}
