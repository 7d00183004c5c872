//! Sensor value sources.
//!
//! [`SignalSource`] is the seam where a real ADC/sensor driver would plug in.
//! [`Oscillator`] is the deterministic stand-in: coolant ramps by 0.5 per tick
//! between 0 and 120, and the oil channels are derived from it.

use crate::gauge::Readings;

/// Coolant change per tick.
pub const COOLANT_STEP: f32 = 0.5;

/// Upper turning point of the coolant ramp.
pub const COOLANT_MAX: f32 = 120.0;

/// Lower turning point of the coolant ramp.
pub const COOLANT_MIN: f32 = 0.0;

/// Oil temperature runs this far above coolant.
pub const OIL_TEMP_OFFSET: f32 = 10.0;

/// Coolant temperature at which oil pressure stops tracking and holds flat.
pub const PRESSURE_PLATEAU_TEMP: f32 = 90.0;

/// Oil pressure held once coolant reaches `PRESSURE_PLATEAU_TEMP`.
pub const PRESSURE_PLATEAU: f32 = 5.0;

/// Full-scale oil pressure for the linear part of the curve.
pub const PRESSURE_MAX: f32 = 10.0;

/// Produces one set of readings per control-loop tick.
pub trait SignalSource {
    fn sample(&mut self) -> Readings;
}

/// Deterministic triangle-wave generator.
pub struct Oscillator {
    coolant: f32,
    rising: bool,
}

impl Oscillator {
    /// Start at zero, rising.
    pub const fn new() -> Self {
        Self {
            coolant: COOLANT_MIN,
            rising: true,
        }
    }

    /// Current coolant value without advancing.
    #[inline]
    pub const fn coolant(&self) -> f32 { self.coolant }

    /// Whether the ramp is currently climbing.
    #[inline]
    pub const fn is_rising(&self) -> bool { self.rising }
}

impl Default for Oscillator {
    fn default() -> Self { Self::new() }
}

impl SignalSource for Oscillator {
    fn sample(&mut self) -> Readings {
        if self.rising {
            self.coolant += COOLANT_STEP;
        } else {
            self.coolant -= COOLANT_STEP;
        }
        if self.coolant >= COOLANT_MAX || self.coolant <= COOLANT_MIN {
            self.rising = !self.rising;
        }

        derive_readings(self.coolant)
    }
}

/// Compute the oil channels from a coolant temperature.
pub fn derive_readings(coolant: f32) -> Readings {
    let oil_pressure = if coolant >= PRESSURE_PLATEAU_TEMP {
        PRESSURE_PLATEAU
    } else {
        coolant * PRESSURE_MAX / COOLANT_MAX
    };

    Readings {
        coolant,
        oil_temp: coolant + OIL_TEMP_OFFSET,
        oil_pressure,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_steps_up() {
        let mut osc = Oscillator::new();
        let r = osc.sample();
        assert_eq!(r.coolant, 0.5);
        assert_eq!(r.oil_temp, 10.5);
        assert!(osc.is_rising());
    }

    #[test]
    fn test_turns_around_after_240_ticks() {
        let mut osc = Oscillator::new();
        let mut last = Readings::default();
        for _ in 0..240 {
            last = osc.sample();
        }
        assert_eq!(last.coolant, 120.0);
        assert!(!osc.is_rising());

        let next = osc.sample();
        assert_eq!(next.coolant, 119.5);
    }

    #[test]
    fn test_turns_around_at_zero() {
        let mut osc = Oscillator::new();
        for _ in 0..480 {
            osc.sample();
        }
        assert_eq!(osc.coolant(), 0.0);
        assert!(osc.is_rising());
        assert_eq!(osc.sample().coolant, 0.5);
    }

    #[test]
    fn test_oil_temp_tracks_coolant() {
        let mut osc = Oscillator::new();
        for _ in 0..600 {
            let r = osc.sample();
            assert_eq!(r.oil_temp, r.coolant + 10.0);
        }
    }

    #[test]
    fn test_pressure_curve() {
        assert_eq!(derive_readings(0.0).oil_pressure, 0.0);
        assert_eq!(derive_readings(60.0).oil_pressure, 5.0);
        assert_eq!(derive_readings(84.0).oil_pressure, 7.0);
        assert_eq!(derive_readings(89.5).oil_pressure, 89.5 * 10.0 / 120.0);
        assert_eq!(derive_readings(90.0).oil_pressure, 5.0);
        assert_eq!(derive_readings(120.0).oil_pressure, 5.0);
    }
}
