//! Brightness ramps: fade and the breathe family.

use super::{Effect, EffectStatus};
use crate::color::{self, Color, WHITE};
use crate::strip::Strip;
use crate::time::{Stopwatch, TimeInstant};
use crate::types::BufferError;
use heapless::Vec;
use rand::RngCore;

/// Time a breathing strip stays dark between two breaths.
pub const BREATHE_PAUSE_MS: u64 = 2000;

/// Brightness ramp 0 → 255 → 0 applied to a single color.
///
/// Each due poll moves the brightness by `step_size`. A poll is due once
/// strictly more than `delay_ms` have passed since the previous step.
#[derive(Debug, Clone)]
pub struct Fade<I: TimeInstant> {
    color: Color,
    delay_ms: u32,
    step_size: u8,
    brightness: u8,
    rising: bool,
    timer: Stopwatch<I>,
}

impl<I: TimeInstant> Fade<I> {
    /// Creates a fade starting from off.
    pub fn new(color: Color, delay_ms: u32, step_size: u8, now: I) -> Self {
        Self {
            color,
            delay_ms,
            step_size,
            brightness: 0,
            rising: true,
            timer: Stopwatch::new(now),
        }
    }

    /// Color being faded.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Changes the color; takes effect with the next step.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Brightness applied in the last rendered step.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Starts a new ramp from off, measuring the delay from `now`.
    pub fn restart(&mut self, now: I) {
        self.brightness = 0;
        self.rising = true;
        self.timer.reset(now);
    }

    fn advance(&mut self) {
        if self.rising {
            self.brightness = self.brightness.saturating_add(self.step_size);
            self.rising = self.brightness < u8::MAX;
        } else {
            self.brightness = self.brightness.saturating_sub(self.step_size);
            self.rising = self.brightness == 0;
        }
    }
}

impl<I: TimeInstant, S: Strip> Effect<I, S> for Fade<I> {
    fn poll(&mut self, strip: &mut S, now: I) -> EffectStatus {
        if self.timer.elapsed_ms(now) <= self.delay_ms as u64 {
            return EffectStatus::Pending;
        }

        self.advance();
        strip.apply_all(color::with_brightness(self.color, self.brightness));
        self.timer.reset(now);

        if self.brightness == 0 {
            EffectStatus::Complete
        } else {
            EffectStatus::Stepped
        }
    }
}

/// Repeated [`Fade`] with a dark pause of [`BREATHE_PAUSE_MS`] after each breath.
///
/// Reports `Complete` at the end of every breath, so callers can switch to
/// another color in between.
#[derive(Debug, Clone)]
pub struct Breathe<I: TimeInstant> {
    fade: Fade<I>,
    resting: bool,
}

impl<I: TimeInstant> Breathe<I> {
    /// Creates a breathing effect.
    pub fn new(color: Color, delay_ms: u32, step_size: u8, now: I) -> Self {
        Self {
            fade: Fade::new(color, delay_ms, step_size, now),
            resting: false,
        }
    }

    /// Color being breathed.
    pub fn color(&self) -> Color {
        self.fade.color()
    }

    /// Changes the color; takes effect with the next step.
    pub fn set_color(&mut self, color: Color) {
        self.fade.set_color(color);
    }

    /// Returns true during the dark pause between breaths.
    pub fn is_resting(&self) -> bool {
        self.resting
    }

    /// Starts a new breath right away.
    pub fn restart(&mut self, now: I) {
        self.resting = false;
        self.fade.restart(now);
    }
}

impl<I: TimeInstant, S: Strip> Effect<I, S> for Breathe<I> {
    fn poll(&mut self, strip: &mut S, now: I) -> EffectStatus {
        if self.resting {
            // the fade's timer was reset by the final (dark) step
            if self.fade.timer.elapsed_ms(now) < BREATHE_PAUSE_MS {
                return EffectStatus::Pending;
            }
            self.resting = false;
        }

        let status = self.fade.poll(strip, now);
        if status.is_complete() {
            self.resting = true;
        }
        status
    }
}

/// Breathes through a list of colors, one breath each.
///
/// # Type Parameters
/// * `N` - Maximum number of colors
#[derive(Debug, Clone)]
pub struct BreatheArray<I: TimeInstant, const N: usize> {
    breathe: Breathe<I>,
    colors: Vec<Color, N>,
    index: usize,
}

impl<I: TimeInstant, const N: usize> BreatheArray<I, N> {
    /// Creates the effect, starting with the first color.
    ///
    /// # Errors
    /// * `Empty` - `colors` is empty
    /// * `CapacityExceeded` - More than `N` colors were given
    pub fn new(
        colors: &[Color],
        delay_ms: u32,
        step_size: u8,
        now: I,
    ) -> Result<Self, BufferError> {
        let colors: Vec<Color, N> =
            Vec::from_slice(colors).map_err(|_| BufferError::CapacityExceeded)?;
        let first = *colors.first().ok_or(BufferError::Empty)?;

        Ok(Self {
            breathe: Breathe::new(first, delay_ms, step_size, now),
            colors,
            index: 0,
        })
    }

    /// Index of the color currently breathed.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Starts over with the first color.
    pub fn restart(&mut self, now: I) {
        self.index = 0;
        self.breathe.set_color(self.colors[0]);
        self.breathe.restart(now);
    }
}

impl<I: TimeInstant, S: Strip, const N: usize> Effect<I, S> for BreatheArray<I, N> {
    fn poll(&mut self, strip: &mut S, now: I) -> EffectStatus {
        let status = self.breathe.poll(strip, now);

        if status.is_complete() {
            self.index = (self.index + 1) % self.colors.len();
            self.breathe.set_color(self.colors[self.index]);
        }
        status
    }
}

/// Breathes a new random color after every breath, starting with white.
#[derive(Debug, Clone)]
pub struct BreatheRandom<I: TimeInstant, R: RngCore> {
    breathe: Breathe<I>,
    rng: R,
}

impl<I: TimeInstant, R: RngCore> BreatheRandom<I, R> {
    /// Creates the effect with the given random source.
    pub fn new(rng: R, delay_ms: u32, step_size: u8, now: I) -> Self {
        Self {
            breathe: Breathe::new(WHITE, delay_ms, step_size, now),
            rng,
        }
    }

    /// Color of the current breath.
    pub fn color(&self) -> Color {
        self.breathe.color()
    }

    /// Starts over with white.
    pub fn restart(&mut self, now: I) {
        self.breathe.set_color(WHITE);
        self.breathe.restart(now);
    }
}

impl<I: TimeInstant, S: Strip, R: RngCore> Effect<I, S> for BreatheRandom<I, R> {
    fn poll(&mut self, strip: &mut S, now: I) -> EffectStatus {
        // an off color would breathe invisibly
        if color::is_off(self.breathe.color()) {
            self.breathe.set_color(WHITE);
        }

        let status = self.breathe.poll(strip, now);

        if status.is_complete() {
            let [red, green, blue, _] = self.rng.next_u32().to_le_bytes();
            self.breathe.set_color(Color::new(red, green, blue));
        }
        status
    }
}

/// Breathes along the color wheel, moving one wheel step per breath.
#[derive(Debug, Clone)]
pub struct BreatheRainbow<I: TimeInstant> {
    breathe: Breathe<I>,
    color_step: u8,
}

impl<I: TimeInstant> BreatheRainbow<I> {
    /// Creates the effect starting at red.
    ///
    /// # Arguments
    /// * `delay_ms` - Delay between brightness steps
    /// * `breath_step` - Brightness change per step
    /// * `color_step` - Wheel step taken after every breath
    /// * `now` - Current time
    pub fn new(delay_ms: u32, breath_step: u8, color_step: u8, now: I) -> Self {
        Self {
            breathe: Breathe::new(color::RED, delay_ms, breath_step, now),
            color_step,
        }
    }

    /// Color of the current breath.
    pub fn color(&self) -> Color {
        self.breathe.color()
    }

    /// Starts over at red.
    pub fn restart(&mut self, now: I) {
        self.breathe.set_color(color::RED);
        self.breathe.restart(now);
    }
}

impl<I: TimeInstant, S: Strip> Effect<I, S> for BreatheRainbow<I> {
    fn poll(&mut self, strip: &mut S, now: I) -> EffectStatus {
        let status = self.breathe.poll(strip, now);

        if status.is_complete() {
            let mut next = self.breathe.color();
            color::apply_fade(&mut next, self.color_step);
            self.breathe.set_color(next);
        }
        status
    }
}
