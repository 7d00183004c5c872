//! Panel and touch bus setup for the Pico 2 board.
//!
//! Pin mapping:
//! - Display CS: GPIO17
//! - Display DC: GPIO16
//! - Display CLK: GPIO18 (SPI0 CLK)
//! - Display MOSI: GPIO19 (SPI0 TX)
//! - Backlight: GPIO20
//! - Display reset: tied to RUN pin
//! - Touch SDA: GPIO4 (I2C0)
//! - Touch SCL: GPIO5 (I2C0)

use embassy_rp::gpio::Output;
use embassy_rp::i2c::Config as I2cConfig;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::{Builder, NoResetPin};
use static_cell::StaticCell;

/// Size of the SPI transfer buffer used by mipidsi for pixel batches.
const SPI_BUFFER_LEN: usize = 512;

/// Display type alias for the ST7789 panel (no reset pin).
pub type PanelDisplay<'d> = mipidsi::Display<
    SpiInterface<'d, ExclusiveDevice<Spi<'d, SPI0, Blocking>, Output<'d>, NoDelay>, Output<'d>>,
    ST7789,
    NoResetPin,
>;

/// Initialize the ST7789 panel in landscape (320x240).
pub fn init_display(
    spi: Spi<'static, SPI0, Blocking>,
    cs: Output<'static>,
    dc: Output<'static>,
) -> PanelDisplay<'static> {
    static SPI_BUFFER: StaticCell<[u8; SPI_BUFFER_LEN]> = StaticCell::new();
    let buffer = SPI_BUFFER.init([0; SPI_BUFFER_LEN]);

    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).unwrap();
    let di = SpiInterface::new(spi_device, dc, buffer);

    // Native panel is 240x320 (portrait); rotate 90° for landscape
    Builder::new(ST7789, di)
        .display_size(240, 320)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .invert_colors(ColorInversion::Inverted)
        .init(&mut embassy_time::Delay)
        .unwrap()
}

/// SPI configuration for the ST7789 display.
///
/// The ST7789 supports up to 62.5MHz SPI clock; 40MHz is reliable on
/// ordinary jumper wiring.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 40_000_000;
    config
}

/// I2C configuration for the CST816 touch controller (fast mode).
pub fn touch_i2c_config() -> I2cConfig {
    let mut config = I2cConfig::default();
    config.frequency = 400_000;
    config
}
