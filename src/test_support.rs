//! Host-side fakes for the hardware traits.

use std::string::{String, ToString};
use std::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;

use crate::surface::PanelSurface;
use crate::touch::TouchSensor;

/// One recorded surface call.
#[derive(Clone, PartialEq, Debug)]
pub enum DrawOp {
    Fill(i32, i32, i32, i32, Rgb565),
    Cursor(i32, i32),
    TextSize(u8),
    TextColor(Rgb565),
    Text(String),
    Value(f32, u8),
    Clear(Rgb565),
}

/// Error returned once a [`RecordingSurface`] is told to fail.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct InjectedFailure;

/// Surface that records every call instead of drawing.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    fail_after: Option<usize>,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    /// Let `n` more fallible calls succeed, then fail every one after.
    pub fn fail_after(
        &mut self,
        n: usize,
    ) {
        self.fail_after = Some(n);
    }

    pub fn clear_count(&self) -> usize { self.ops.iter().filter(|op| matches!(op, DrawOp::Clear(_))).count() }

    pub fn labels(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn values(&self) -> Vec<f32> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Value(v, _) => Some(*v),
                _ => None,
            })
            .collect()
    }

    fn record(
        &mut self,
        op: DrawOp,
    ) -> Result<(), InjectedFailure> {
        if let Some(remaining) = self.fail_after.as_mut() {
            if *remaining == 0 {
                return Err(InjectedFailure);
            }
            *remaining -= 1;
        }
        self.ops.push(op);
        Ok(())
    }
}

impl PanelSurface for RecordingSurface {
    type Error = InjectedFailure;

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        self.record(DrawOp::Fill(x, y, width, height, color))
    }

    fn set_cursor(
        &mut self,
        x: i32,
        y: i32,
    ) {
        self.ops.push(DrawOp::Cursor(x, y));
    }

    fn set_text_size(
        &mut self,
        size: u8,
    ) {
        self.ops.push(DrawOp::TextSize(size));
    }

    fn set_text_color(
        &mut self,
        color: Rgb565,
    ) {
        self.ops.push(DrawOp::TextColor(color));
    }

    fn print_text(
        &mut self,
        text: &str,
    ) -> Result<(), Self::Error> {
        self.record(DrawOp::Text(text.to_string()))
    }

    fn print_value(
        &mut self,
        value: f32,
        decimals: u8,
    ) -> Result<(), Self::Error> {
        self.record(DrawOp::Value(value, decimals))
    }

    fn clear_screen(
        &mut self,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        self.record(DrawOp::Clear(color))
    }
}

/// Touch sensor that plays back a fixed per-poll script, then reads released.
pub struct ScriptedTouch {
    script: Vec<bool>,
    pos: usize,
}

impl ScriptedTouch {
    pub fn new(script: &[bool]) -> Self {
        Self {
            script: script.to_vec(),
            pos: 0,
        }
    }

    /// Script that holds for `held` polls then releases.
    pub fn press_for(held: usize) -> Self { Self::new(&std::vec![true; held]) }
}

impl TouchSensor for ScriptedTouch {
    fn is_touched(&mut self) -> bool {
        let touched = self.script.get(self.pos).copied().unwrap_or(false);
        self.pos += 1;
        touched
    }
}
