//! Gauge definitions and storage.
//!
//! A [`Gauge`] is one displayed metric. Its `last_rendered` field is the
//! renderer's memory of what is currently on the panel and is only written by
//! [`BarRenderer`](crate::renderer::BarRenderer) after a successful repaint.

#[cfg(feature = "defmt")]
use defmt::Format;

/// Number of gauges in the cluster.
pub const GAUGE_COUNT: usize = 3;

/// Identifies one of the three sensor channels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum GaugeId {
    /// Engine coolant temperature, degrees C.
    Coolant,
    /// Lubricant temperature, degrees C.
    OilTemp,
    /// Lubricant pressure, bar.
    OilPressure,
}

impl GaugeId {
    /// All gauge ids in storage order.
    pub const ALL: [Self; GAUGE_COUNT] = [Self::Coolant, Self::OilTemp, Self::OilPressure];

    /// Storage index inside [`GaugeSet`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Coolant => 0,
            Self::OilTemp => 1,
            Self::OilPressure => 2,
        }
    }

    /// Text printed above the bar.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Coolant => "Coolant Temp",
            Self::OilTemp => "Oil Temp",
            Self::OilPressure => "Oil Press (bar)",
        }
    }

    /// Value that maps to a full-length bar.
    pub const fn max_scale(self) -> f32 {
        match self {
            Self::Coolant => 120.0,
            Self::OilTemp => 130.0,
            Self::OilPressure => 10.0,
        }
    }
}

/// One displayed metric.
#[derive(Clone, Copy, Debug)]
pub struct Gauge {
    pub id: GaugeId,
    pub label: &'static str,
    /// Latest sampled value.
    pub current: f32,
    /// Value currently drawn on the panel; NaN until the first draw.
    pub(crate) last_rendered: f32,
    pub max_scale: f32,
    /// Row of the bar in the active layout. Updated by the renderer each time
    /// it lays the gauge out.
    pub screen_row: i32,
}

impl Gauge {
    /// Create a gauge that has never been drawn.
    pub const fn new(id: GaugeId) -> Self {
        Self {
            id,
            label: id.label(),
            current: 0.0,
            last_rendered: f32::NAN,
            max_scale: id.max_scale(),
            screen_row: 0,
        }
    }

    /// Value currently shown on the panel, or `None` before the first draw.
    #[inline]
    pub fn last_rendered(&self) -> Option<f32> {
        if self.last_rendered.is_nan() {
            None
        } else {
            Some(self.last_rendered)
        }
    }

    /// Whether the gauge has ever been painted.
    #[inline]
    pub fn has_been_drawn(&self) -> bool { !self.last_rendered.is_nan() }
}

/// Fixed storage for all gauges, indexed by [`GaugeId`].
pub struct GaugeSet {
    gauges: [Gauge; GAUGE_COUNT],
}

impl GaugeSet {
    /// Create the full set, nothing drawn yet.
    pub const fn new() -> Self {
        Self {
            gauges: [
                Gauge::new(GaugeId::Coolant),
                Gauge::new(GaugeId::OilTemp),
                Gauge::new(GaugeId::OilPressure),
            ],
        }
    }

    #[inline]
    pub fn get(
        &self,
        id: GaugeId,
    ) -> &Gauge {
        &self.gauges[id.index()]
    }

    #[inline]
    pub fn get_mut(
        &mut self,
        id: GaugeId,
    ) -> &mut Gauge {
        &mut self.gauges[id.index()]
    }

    /// Store a fresh set of samples. Does not touch render state.
    pub fn update(
        &mut self,
        readings: Readings,
    ) {
        self.get_mut(GaugeId::Coolant).current = readings.coolant;
        self.get_mut(GaugeId::OilTemp).current = readings.oil_temp;
        self.get_mut(GaugeId::OilPressure).current = readings.oil_pressure;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Gauge> { self.gauges.iter() }
}

impl Default for GaugeSet {
    fn default() -> Self { Self::new() }
}

/// One sample of all three channels.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Readings {
    pub coolant: f32,
    pub oil_temp: f32,
    pub oil_pressure: f32,
}

// =============================================================================
// Unit Tests
// =============================================================================
