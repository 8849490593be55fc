//! Sweeps that paint a color over the strip one pixel at a time.

use super::{Effect, EffectStatus};
use crate::color::{self, Color, RED};
use crate::strip::{AddressableStrip, FrameSink};
use crate::time::{Stopwatch, TimeInstant};
use crate::types::BufferError;
use heapless::Vec;

/// Paints `color` over a growing prefix of the strip.
///
/// Every `delay_ms` the prefix grows by one pixel; pixels past the prefix keep
/// what they showed before, so the new color wipes over the old frame. Once
/// the whole strip is covered the very next poll reports `Complete` without
/// waiting for the delay, and the sweep starts again from the first pixel.
#[derive(Debug, Clone)]
pub struct Sweep<I: TimeInstant> {
    color: Color,
    delay_ms: u32,
    position: u16,
    timer: Stopwatch<I>,
}

impl<I: TimeInstant> Sweep<I> {
    /// Creates a sweep starting at the first pixel.
    pub fn new(color: Color, delay_ms: u32, now: I) -> Self {
        Self {
            color,
            delay_ms,
            position: 0,
            timer: Stopwatch::new(now),
        }
    }

    /// Color being swept.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Changes the color; takes effect with the next step.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Number of pixels covered so far.
    pub fn position(&self) -> u16 {
        self.position
    }

    /// Starts over from the first pixel, measuring the delay from `now`.
    pub fn restart(&mut self, now: I) {
        self.position = 0;
        self.timer.reset(now);
    }
}

impl<I: TimeInstant, F: FrameSink> Effect<I, AddressableStrip<F>> for Sweep<I> {
    fn poll(&mut self, strip: &mut AddressableStrip<F>, now: I) -> EffectStatus {
        if self.position >= strip.len() {
            self.position = 0;
            return EffectStatus::Complete;
        }

        if self.timer.elapsed_ms(now) < self.delay_ms as u64 {
            return EffectStatus::Pending;
        }

        self.position += 1;
        strip.apply_prefix(self.color, self.position);
        self.timer.reset(now);

        EffectStatus::Stepped
    }
}

/// Sweeps a list of colors over each other in turn.
///
/// # Type Parameters
/// * `N` - Maximum number of colors
#[derive(Debug, Clone)]
pub struct SweepArray<I: TimeInstant, const N: usize> {
    sweep: Sweep<I>,
    colors: Vec<Color, N>,
    index: usize,
}

impl<I: TimeInstant, const N: usize> SweepArray<I, N> {
    /// Creates the effect, starting with the first color.
    ///
    /// # Errors
    /// * `Empty` - `colors` is empty
    /// * `CapacityExceeded` - More than `N` colors were given
    pub fn new(colors: &[Color], delay_ms: u32, now: I) -> Result<Self, BufferError> {
        let colors: Vec<Color, N> =
            Vec::from_slice(colors).map_err(|_| BufferError::CapacityExceeded)?;
        let first = *colors.first().ok_or(BufferError::Empty)?;

        Ok(Self {
            sweep: Sweep::new(first, delay_ms, now),
            colors,
            index: 0,
        })
    }

    /// Index of the color currently swept.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Starts over with the first color.
    pub fn restart(&mut self, now: I) {
        self.index = 0;
        self.sweep.set_color(self.colors[0]);
        self.sweep.restart(now);
    }
}

impl<I: TimeInstant, F: FrameSink, const N: usize> Effect<I, AddressableStrip<F>>
    for SweepArray<I, N>
{
    fn poll(&mut self, strip: &mut AddressableStrip<F>, now: I) -> EffectStatus {
        let status = self.sweep.poll(strip, now);

        if status.is_complete() {
            self.index = (self.index + 1) % self.colors.len();
            self.sweep.set_color(self.colors[self.index]);
        }
        status
    }
}

/// Sweeps along the color wheel, one wheel step per completed sweep.
#[derive(Debug, Clone)]
pub struct SweepRainbow<I: TimeInstant> {
    sweep: Sweep<I>,
    step_size: u8,
}

impl<I: TimeInstant> SweepRainbow<I> {
    /// Creates the effect starting at red.
    pub fn new(delay_ms: u32, step_size: u8, now: I) -> Self {
        Self {
            sweep: Sweep::new(RED, delay_ms, now),
            step_size,
        }
    }

    /// Color of the current sweep.
    pub fn color(&self) -> Color {
        self.sweep.color()
    }

    /// Starts over at red.
    pub fn restart(&mut self, now: I) {
        self.sweep.set_color(RED);
        self.sweep.restart(now);
    }
}

impl<I: TimeInstant, F: FrameSink> Effect<I, AddressableStrip<F>> for SweepRainbow<I> {
    fn poll(&mut self, strip: &mut AddressableStrip<F>, now: I) -> EffectStatus {
        let status = self.sweep.poll(strip, now);

        if status.is_complete() {
            let mut next = self.sweep.color();
            color::apply_fade(&mut next, self.step_size);
            self.sweep.set_color(next);
        }
        status
    }
}
