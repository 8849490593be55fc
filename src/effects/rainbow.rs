//! Color wheel effects.

use super::{Effect, EffectStatus};
use crate::color::{self, Color, RED};
use crate::strip::{AddressableStrip, FrameSink, Strip};
use crate::time::{Stopwatch, TimeInstant};

/// Fades the whole strip through the color wheel.
///
/// Every `delay_ms` the shared color moves one wheel step of `step_size` and
/// is shown on all pixels, scaled by a fixed `brightness`.
#[derive(Debug, Clone)]
pub struct Rainbow<I: TimeInstant> {
    color: Color,
    step_size: u8,
    delay_ms: u32,
    brightness: u8,
    timer: Stopwatch<I>,
}

impl<I: TimeInstant> Rainbow<I> {
    /// Creates a rainbow starting at red.
    pub fn new(step_size: u8, delay_ms: u32, brightness: u8, now: I) -> Self {
        Self {
            color: RED,
            step_size,
            delay_ms,
            brightness,
            timer: Stopwatch::new(now),
        }
    }

    /// Current wheel color, before brightness scaling.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Changes the brightness for subsequent steps.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Starts over at red, measuring the delay from `now`.
    pub fn restart(&mut self, now: I) {
        self.color = RED;
        self.timer.reset(now);
    }
}

impl<I: TimeInstant, S: Strip> Effect<I, S> for Rainbow<I> {
    fn poll(&mut self, strip: &mut S, now: I) -> EffectStatus {
        if self.timer.elapsed_ms(now) < self.delay_ms as u64 {
            return EffectStatus::Pending;
        }

        color::apply_fade(&mut self.color, self.step_size);
        strip.apply_all(color::with_brightness(self.color, self.brightness));
        self.timer.reset(now);

        EffectStatus::Stepped
    }
}

/// Rotates the color wheel along the strip.
///
/// Within a frame each pixel is one wheel step further than the previous
/// one, and the first pixel advances one step per frame, giving a travelling
/// rainbow. Speed is only adjustable per frame: there is no per-pixel delay,
/// since a frame has to stream without gaps.
#[derive(Debug, Clone)]
pub struct RotateRainbow<I: TimeInstant> {
    color: Color,
    step_size: u8,
    delay_ms: u32,
    timer: Stopwatch<I>,
}

impl<I: TimeInstant> RotateRainbow<I> {
    /// Creates the effect with red at the start of the strip.
    pub fn new(step_size: u8, delay_ms: u32, now: I) -> Self {
        Self {
            color: RED,
            step_size,
            delay_ms,
            timer: Stopwatch::new(now),
        }
    }

    /// Color of the first pixel.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Starts over with red at the start of the strip.
    pub fn restart(&mut self, now: I) {
        self.color = RED;
        self.timer.reset(now);
    }
}

impl<I: TimeInstant, F: FrameSink> Effect<I, AddressableStrip<F>> for RotateRainbow<I> {
    fn poll(&mut self, strip: &mut AddressableStrip<F>, now: I) -> EffectStatus {
        if self.timer.elapsed_ms(now) < self.delay_ms as u64 {
            return EffectStatus::Pending;
        }

        color::apply_fade(&mut self.color, self.step_size);

        let step_size = self.step_size;
        let mut wave = self.color;
        strip.apply_fn(|_| {
            let pixel = wave;
            color::apply_fade(&mut wave, step_size);
            pixel
        });
        self.timer.reset(now);

        EffectStatus::Stepped
    }
}

/// Shows the wheel color at `position` (see [`color::wheel`]) on the whole strip.
pub fn scroll<S: Strip>(strip: &mut S, position: u16, brightness: u8) {
    strip.apply_all(color::with_brightness(color::wheel(position), brightness));
}
