//! Control loop orchestration.
//!
//! [`Cluster`] owns all mutable state (gauges, mode, debounce) and advances
//! it one tick at a time. The caller supplies the touch sensor, the drawing
//! surface and the clock, and sleeps `TICK_INTERVAL_MS` between ticks:
//!
//! ```ignore
//! let mut cluster = Cluster::new(Oscillator::new());
//! cluster.start(&mut surface)?;
//! loop {
//!     cluster.tick(&mut touch, &mut surface, now_ms())?;
//!     sleep(TICK_INTERVAL_MS);
//! }
//! ```

use crate::debounce::TouchDebouncer;
use crate::gauge::GaugeSet;
use crate::mode::{DisplayMode, ModeState};
use crate::renderer::{BarRenderer, RenderStats};
use crate::signal::SignalSource;
use crate::surface::PanelSurface;
use crate::touch::TouchSensor;

/// What happened during one tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TickReport {
    /// Mode active after the tick.
    pub mode: DisplayMode,
    /// Whether a touch advanced the mode this tick.
    pub mode_changed: bool,
    pub render: RenderStats,
}

/// The instrument cluster: signal source, gauges, mode and touch handling.
pub struct Cluster<Src> {
    source: Src,
    gauges: GaugeSet,
    mode: ModeState,
    debouncer: TouchDebouncer,
    renderer: BarRenderer,
}

impl<Src: SignalSource> Cluster<Src> {
    pub fn new(source: Src) -> Self { Self::with_debouncer(source, TouchDebouncer::new()) }

    pub fn with_debouncer(
        source: Src,
        debouncer: TouchDebouncer,
    ) -> Self {
        Self {
            source,
            gauges: GaugeSet::new(),
            mode: ModeState::new(),
            debouncer,
            renderer: BarRenderer::new(),
        }
    }

    /// Draw the initial mode once with a full redraw, before the first tick.
    pub fn start<S: PanelSurface>(
        &mut self,
        surface: &mut S,
    ) -> Result<RenderStats, S::Error> {
        self.mode.request_full_redraw();
        self.render(surface)
    }

    /// Run one control-loop iteration at time `now_ms`.
    pub fn tick<T, S>(
        &mut self,
        touch: &mut T,
        surface: &mut S,
        now_ms: u64,
    ) -> Result<TickReport, S::Error>
    where
        T: TouchSensor,
        S: PanelSurface,
    {
        let readings = self.source.sample();
        self.gauges.update(readings);

        let touched = touch.is_touched();
        let mode_changed = match self.debouncer.poll(touched, now_ms) {
            Some(event) => {
                let mode = self.mode.advance(event);
                log::info!("mode -> {} at {}ms", mode.name(), event.at_ms);
                true
            }
            None => false,
        };

        let render = self.render(surface)?;

        Ok(TickReport {
            mode: self.mode.mode(),
            mode_changed,
            render,
        })
    }

    /// Render pass with whatever redraw is pending.
    fn render<S: PanelSurface>(
        &mut self,
        surface: &mut S,
    ) -> Result<RenderStats, S::Error> {
        let forced = self.mode.take_full_redraw();
        let result = self.renderer.render(surface, &mut self.gauges, self.mode.mode(), forced);

        if result.is_err() {
            log::warn!("render pass failed (forced: {})", forced);
            if forced {
                // Screen state is unknown; clear again next tick.
                self.mode.request_full_redraw();
            }
        }
        result
    }

    #[inline]
    pub const fn mode(&self) -> DisplayMode { self.mode.mode() }

    #[inline]
    pub const fn gauges(&self) -> &GaugeSet { &self.gauges }
}

// =============================================================================
// Unit Tests
// =============================================================================
