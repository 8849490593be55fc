//! Non-blocking animation effects.
//!
//! Every effect is a plain state object owned by the caller and advanced by
//! calling [`Effect::poll`] from the main loop. A poll either finds the effect
//! not yet due (its state does not change), or performs exactly one step and
//! renders a complete frame. Every effect also has an inherent `restart(now)`
//! that returns it to its initial phase. Effects never block and never finish for good: after a
//! `Complete` they simply start their next cycle.
//!
//! Uniform effects work on any [`Strip`](crate::Strip); effects that color
//! individual pixels need an [`AddressableStrip`](crate::AddressableStrip).

use crate::time::TimeInstant;

pub mod fade;
pub mod rain;
pub mod rainbow;
pub mod sweep;

pub use fade::{Breathe, BreatheArray, BreatheRainbow, BreatheRandom, Fade};
pub use rain::{Rain, RainConfig};
pub use rainbow::{Rainbow, RotateRainbow, scroll};
pub use sweep::{Sweep, SweepArray, SweepRainbow};

/// Outcome of a single poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EffectStatus {
    /// Not due yet. The effect state did not change; effects that render on
    /// every poll (such as rain) may have re-sent the unchanged frame.
    Pending,

    /// One step was performed and rendered.
    Stepped,

    /// The step finished a cycle; the next poll starts a new one.
    Complete,
}

impl EffectStatus {
    /// Returns true if the poll finished a cycle.
    pub fn is_complete(self) -> bool {
        self == EffectStatus::Complete
    }
}

/// A time-driven animation rendered onto strips of type `S`.
///
/// # Type Parameters
/// * `I` - Time instant type
/// * `S` - Strip type the effect renders onto
pub trait Effect<I: TimeInstant, S> {
    /// Advances the effect if it is due at `now`.
    fn poll(&mut self, strip: &mut S, now: I) -> EffectStatus;
}
