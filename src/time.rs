//! Time abstraction traits for platform-agnostic timing.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Millisecond tick count, e.g. from a SysTick counter.
///
/// Differences are computed with wrapping subtraction, so a counter that
/// rolls over between two readings still yields the right distance as long
/// as the readings are less than ~49.7 days apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

/// Duration between two [`Millis`] instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisDuration(pub u32);

impl TimeDuration for MillisDuration {
    fn as_millis(&self) -> u64 {
        self.0 as u64
    }
}

impl TimeInstant for Millis {
    type Duration = MillisDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        MillisDuration(self.0.wrapping_sub(earlier.0))
    }
}

/// Resettable elapsed-time reference point.
///
/// Every effect owns one of these instead of sharing a global timer, so
/// several animations can run side by side without disturbing each other.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch<I: TimeInstant> {
    reference: I,
}

impl<I: TimeInstant> Stopwatch<I> {
    /// Creates a stopwatch whose reference point is `now`.
    pub fn new(now: I) -> Self {
        Self { reference: now }
    }

    /// Moves the reference point to `now`.
    pub fn reset(&mut self, now: I) {
        self.reference = now;
    }

    /// Milliseconds elapsed since the last reset.
    pub fn elapsed_ms(&self, now: I) -> u64 {
        now.duration_since(self.reference).as_millis()
    }
}
