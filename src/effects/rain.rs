//! Rain: randomly spawned droplets that slowly fade out.

use super::{Effect, EffectStatus};
use crate::color::{self, Color};
use crate::pixels::PixelBuffer;
use crate::strip::{AddressableStrip, FrameSink};
use crate::time::{Stopwatch, TimeInstant};
use rand::{Rng, RngCore};

/// Rain timing and density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RainConfig {
    /// Maximum number of droplets visible at once.
    pub max_drops: u16,

    /// Shortest time between two droplets.
    pub min_gap_ms: u32,

    /// Longest time between two droplets.
    pub max_gap_ms: u32,

    /// Time between two decay steps of every droplet.
    pub decay_ms: u32,
}

/// Droplets of one color appearing at random positions and fading out.
///
/// Two independent timers drive the effect. Every `decay_ms` each droplet
/// loses one intensity level per channel and droplets that reached black are
/// removed. A new droplet is due after a random gap between `min_gap_ms` and
/// `max_gap_ms`; if the chosen position is already taken, that spawn is
/// skipped and retried on the next poll. The strip is rendered on every poll.
///
/// # Type Parameters
/// * `R` - Random number source
/// * `N` - Droplet storage capacity; `max_drops` is capped to it
#[derive(Debug, Clone)]
pub struct Rain<I: TimeInstant, R: RngCore, const N: usize> {
    color: Color,
    config: RainConfig,
    drops: PixelBuffer<N>,
    rng: R,
    decay_timer: Stopwatch<I>,
    spawn_timer: Stopwatch<I>,
    next_gap_ms: u32,
}

impl<I: TimeInstant, R: RngCore, const N: usize> Rain<I, R, N> {
    /// Creates a rain effect with no droplets.
    pub fn new(color: Color, config: RainConfig, mut rng: R, now: I) -> Self {
        let mut config = config;
        if config.min_gap_ms > config.max_gap_ms {
            core::mem::swap(&mut config.min_gap_ms, &mut config.max_gap_ms);
        }
        config.max_drops = config.max_drops.min(N.min(u16::MAX as usize) as u16);

        let next_gap_ms = rng.gen_range(config.min_gap_ms..=config.max_gap_ms);

        Self {
            color,
            config,
            drops: PixelBuffer::new(),
            rng,
            decay_timer: Stopwatch::new(now),
            spawn_timer: Stopwatch::new(now),
            next_gap_ms,
        }
    }

    /// Droplets currently on the strip.
    pub fn drops(&self) -> &PixelBuffer<N> {
        &self.drops
    }

    /// Effective configuration.
    pub fn config(&self) -> &RainConfig {
        &self.config
    }

    /// Changes the color of new droplets.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Removes every droplet and restarts both timers at `now`.
    pub fn restart(&mut self, now: I) {
        self.drops.clear();
        self.decay_timer.reset(now);
        self.spawn_timer.reset(now);
    }

    fn decay(&mut self) {
        let mut index = 0;

        while let Some(droplet) = self.drops.color_mut(index) {
            droplet.red = droplet.red.saturating_sub(1);
            droplet.green = droplet.green.saturating_sub(1);
            droplet.blue = droplet.blue.saturating_sub(1);

            if color::is_off(*droplet) {
                self.drops.remove(index);
            } else {
                index += 1;
            }
        }
    }

    fn try_spawn(&mut self, strip_len: u16) -> bool {
        if strip_len == 0 || self.drops.len() >= self.config.max_drops as usize {
            return false;
        }

        let position = self.rng.gen_range(0..strip_len);
        if self.drops.exists(position) {
            return false;
        }

        if self.drops.insert(position, self.color).is_err() {
            return false;
        }

        trace!("droplet at {=u16}", position);
        true
    }
}

impl<I: TimeInstant, R: RngCore, F: FrameSink, const N: usize> Effect<I, AddressableStrip<F>>
    for Rain<I, R, N>
{
    fn poll(&mut self, strip: &mut AddressableStrip<F>, now: I) -> EffectStatus {
        let mut status = EffectStatus::Pending;

        if self.decay_timer.elapsed_ms(now) >= self.config.decay_ms as u64 {
            self.decay();
            self.decay_timer.reset(now);
            status = EffectStatus::Stepped;
        }

        if self.spawn_timer.elapsed_ms(now) >= self.next_gap_ms as u64
            && self.try_spawn(strip.len())
        {
            self.spawn_timer.reset(now);
            self.next_gap_ms = self
                .rng
                .gen_range(self.config.min_gap_ms..=self.config.max_gap_ms);
            status = EffectStatus::Stepped;
        }

        strip.apply_pixels(&self.drops);
        status
    }
}
