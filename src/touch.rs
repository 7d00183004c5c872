//! Touch sensor abstraction and the CST816 capacitive controller driver.
//!
//! The cluster only needs to know whether the panel is touched right now.
//! Bus failures read as "not touched": a missed poll only delays the next
//! mode change by one tick.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::config::{
    TOUCH_ACTIVE_MASK,
    TOUCH_I2C_ADDRESS,
    TOUCH_SETTLE_MS,
    TOUCH_STATUS_REG,
    TOUCH_WAKE_REG,
    TOUCH_WAKE_VALUE,
};

/// Anything that can report a raw touch state.
pub trait TouchSensor {
    /// Instantaneous, undebounced touch state.
    fn is_touched(&mut self) -> bool;
}

impl<T: TouchSensor + ?Sized> TouchSensor for &mut T {
    #[inline]
    fn is_touched(&mut self) -> bool { (**self).is_touched() }
}

/// CST816 touch controller on an I2C bus.
pub struct Cst816<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Cst816<I2C> {
    /// Create a driver at the default address. Call [`wake`](Self::wake) before polling.
    pub const fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: TOUCH_I2C_ADDRESS,
        }
    }

    /// Create a driver at a non-default address.
    pub const fn with_address(
        i2c: I2C,
        address: u8,
    ) -> Self {
        Self { i2c, address }
    }

    /// Send the wake command and block until the controller has settled.
    pub fn wake<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), I2C::Error> {
        let result = self.i2c.write(self.address, &[TOUCH_WAKE_REG, TOUCH_WAKE_VALUE]);
        delay.delay_ms(TOUCH_SETTLE_MS);
        result
    }

    /// Read the raw status byte.
    pub fn read_status(&mut self) -> Result<u8, I2C::Error> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(self.address, &[TOUCH_STATUS_REG], &mut buf)?;
        Ok(buf[0])
    }

    /// Release the bus.
    pub fn release(self) -> I2C { self.i2c }
}

impl<I2C: I2c> TouchSensor for Cst816<I2C> {
    fn is_touched(&mut self) -> bool {
        match self.read_status() {
            Ok(status) => status & TOUCH_ACTIVE_MASK != 0,
            Err(_) => {
                log::debug!("touch status read failed, treating as released");
                false
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

    use super::*;

    /// I2C bus that answers status reads from a script and records writes.
    struct MockBus {
        status: Option<u8>,
        writes: std::vec::Vec<(u8, std::vec::Vec<u8>)>,
    }

    impl ErrorType for MockBus {
        type Error = ErrorKind;
    }

    impl I2c for MockBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                match op {
                    Operation::Write(bytes) => self.writes.push((address, bytes.to_vec())),
                    Operation::Read(buf) => {
                        let status = self.status.ok_or(ErrorKind::Other)?;
                        buf[0] = status;
                    }
                }
            }
            Ok(())
        }
    }

    struct CountingDelay {
        total_ns: u64,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(
            &mut self,
            ns: u32,
        ) {
            self.total_ns += u64::from(ns);
        }
    }

    fn bus(status: Option<u8>) -> MockBus {
        MockBus {
            status,
            writes: std::vec::Vec::new(),
        }
    }

    #[test]
    fn test_bit_zero_means_touched() {
        let mut touch = Cst816::new(bus(Some(0x01)));
        assert!(touch.is_touched());

        let mut touch = Cst816::new(bus(Some(0xFE)));
        assert!(!touch.is_touched());

        let mut touch = Cst816::new(bus(Some(0x81)));
        assert!(touch.is_touched());
    }

    #[test]
    fn test_status_read_addresses_register() {
        let mut touch = Cst816::new(bus(Some(0)));
        touch.is_touched();
        let bus = touch.release();
        assert_eq!(bus.writes, [(0x15, vec![0x02])]);
    }

    #[test]
    fn test_bus_error_reads_as_released() {
        let mut touch = Cst816::new(bus(None));
        assert!(!touch.is_touched());
        assert!(touch.read_status().is_err());
    }

    #[test]
    fn test_wake_writes_command_and_waits() {
        let mut touch = Cst816::with_address(bus(Some(0)), 0x15);
        let mut delay = CountingDelay { total_ns: 0 };
        assert!(touch.wake(&mut delay).is_ok());
        assert_eq!(delay.total_ns, 100_000_000);
        let bus = touch.release();
        assert_eq!(bus.writes, [(0x15, vec![0xD0, 0x01])]);
    }
}
