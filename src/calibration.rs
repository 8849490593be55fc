//! Interactive strip length calibration.
//!
//! The strip shows a white bar ending in a green pixel. The potentiometer
//! moves the green endpoint coarsely, each button release moves it one pixel
//! further. Holding the button for [`COMMIT_HOLD_MS`] stores the length, so
//! the endpoint should sit on the last LED of the strip.

use crate::color::{GREEN, OFF, WHITE};
use crate::config::{PersistentStore, StripConfig};
use crate::strip::{AddressableStrip, FrameSink, Strip};
use crate::substrip::SubstripBuffer;
use crate::time::{Stopwatch, TimeInstant, TimeSource};
use crate::types::Segment;
use embedded_hal::delay::DelayNs;

/// How long the button has to be held to store the length.
pub const COMMIT_HOLD_MS: u64 = 1000;

/// Duration of each on/off phase of the confirmation blink.
pub const BLINK_MS: u32 = 200;

/// Number of confirmation blinks after storing the length.
pub const BLINK_COUNT: u8 = 3;

/// Length of the preview when the endpoint sits at position 0.
const PREVIEW_SPAN: u8 = 254;

const BAR: usize = 0;
const PADDING: usize = 2;

/// Trait for abstracting the calibration user inputs.
pub trait InputSource {
    /// Returns true while the push button is held down.
    fn button_pressed(&mut self) -> bool;

    /// Averaged potentiometer reading, 0-255.
    fn averaged_pot(&mut self) -> u8;
}

/// Outcome of a single calibration poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationStatus {
    /// The endpoint can be moved; the preview was rendered.
    Adjusting,

    /// The button is held but not long enough to commit.
    Holding,

    /// The button was held long enough; carries the strip length (endpoint + 1).
    Committed(u16),
}

/// Non-blocking calibration state machine.
///
/// Call [`poll`](CalibrationController::poll) repeatedly until it returns
/// `Committed`, or use [`calibrate`] for the complete blocking procedure.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
pub struct CalibrationController<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    preview: SubstripBuffer<3>,
    hold_timer: Stopwatch<I>,
    prev_pressed: bool,
    prev_pot: u8,
    debounce_ms: u16,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> CalibrationController<'t, I, T> {
    /// Creates a controller with the endpoint at the current potentiometer position.
    pub fn new<In: InputSource>(time_source: &'t T, input: &mut In, config: &StripConfig) -> Self {
        let pot = input.averaged_pot();

        let preview = SubstripBuffer::from_array([
            Segment::new(pot as u16, WHITE),
            Segment::new(1, GREEN),
            Segment::new(PREVIEW_SPAN.saturating_sub(pot) as u16, OFF),
        ]);

        Self {
            time_source,
            preview,
            hold_timer: Stopwatch::new(time_source.now()),
            prev_pressed: false,
            prev_pot: pot,
            debounce_ms: config.debounce_ms,
        }
    }

    /// Position of the green endpoint (0-based).
    pub fn candidate(&self) -> u16 {
        self.preview.segments()[BAR].length
    }

    /// Segments currently shown: white bar, green endpoint, off padding.
    pub fn preview(&self) -> &SubstripBuffer<3> {
        &self.preview
    }

    /// Renders the current preview.
    pub fn render<F: FrameSink>(&self, strip: &mut AddressableStrip<F>) {
        strip.preview_substrips(&self.preview);
    }

    /// Reads the inputs once and updates the preview.
    ///
    /// A press edge waits out the debounce delay and starts the hold timer.
    /// While the button stays down nothing is rendered until the hold time is
    /// reached. A release moves the endpoint one pixel; a changed
    /// potentiometer reading moves it to the reading.
    pub fn poll<F, In, D>(
        &mut self,
        strip: &mut AddressableStrip<F>,
        input: &mut In,
        delay: &mut D,
    ) -> CalibrationStatus
    where
        F: FrameSink,
        In: InputSource,
        D: DelayNs,
    {
        let pressed = input.button_pressed();

        if pressed && !self.prev_pressed {
            if self.debounce_ms > 0 {
                delay.delay_ms(self.debounce_ms as u32);
            }
            self.hold_timer.reset(self.time_source.now());
        } else if pressed {
            if self.hold_timer.elapsed_ms(self.time_source.now()) >= COMMIT_HOLD_MS {
                return CalibrationStatus::Committed(self.candidate().saturating_add(1));
            }
            return CalibrationStatus::Holding;
        } else if self.prev_pressed {
            self.nudge();
        }

        let pot = input.averaged_pot();
        if pot != self.prev_pot {
            self.set_endpoint(pot);
        }

        self.render(strip);
        self.prev_pressed = pressed;
        self.prev_pot = pot;

        if pressed {
            CalibrationStatus::Holding
        } else {
            CalibrationStatus::Adjusting
        }
    }

    fn set_endpoint(&mut self, pot: u8) {
        self.set_length(BAR, pot as u16);
        self.set_length(PADDING, PREVIEW_SPAN.saturating_sub(pot) as u16);
    }

    fn nudge(&mut self) {
        let bar = self.preview.segments()[BAR].length.saturating_add(1);
        let padding = self.preview.segments()[PADDING].length.saturating_sub(1);
        self.set_length(BAR, bar);
        self.set_length(PADDING, padding);
    }

    fn set_length(&mut self, index: usize, length: u16) {
        if let Some(segment) = self.preview.segment_mut(index) {
            segment.length = length;
        }
    }
}

/// Runs the complete, blocking calibration procedure.
///
/// Waits for the button to be released first, so the long press that may
/// have started calibration does not commit right away. Then polls until the
/// length is committed, stores it, applies it to `strip`, and confirms with
/// [`BLINK_COUNT`] blinks before leaving the strip off.
///
/// # Returns
/// * `Ok(length)` - The stored strip length
/// * `Err` - The length could not be stored; `strip` already uses it
pub fn calibrate<I, T, F, In, P, D>(
    time_source: &T,
    strip: &mut AddressableStrip<F>,
    input: &mut In,
    store: &mut P,
    delay: &mut D,
    config: &StripConfig,
) -> Result<u16, P::Error>
where
    I: TimeInstant,
    T: TimeSource<I>,
    F: FrameSink,
    In: InputSource,
    P: PersistentStore,
    D: DelayNs,
{
    let mut controller = CalibrationController::new(time_source, input, config);
    controller.render(strip);

    while input.button_pressed() {
        core::hint::spin_loop();
    }

    let length = loop {
        if let CalibrationStatus::Committed(length) = controller.poll(strip, input, delay) {
            break length;
        }
    };

    strip.set_len(length);
    store.write_length(length)?;
    info!("strip length calibrated to {=u16}", length);

    for _ in 0..BLINK_COUNT {
        strip.apply_all(OFF);
        delay.delay_ms(BLINK_MS);
        controller.render(strip);
        delay.delay_ms(BLINK_MS);
    }
    strip.apply_all(OFF);
    delay.delay_ms(BLINK_MS);

    Ok(length)
}
