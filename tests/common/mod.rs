//! Shared test infrastructure for rgb-strip integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use embedded_hal::delay::DelayNs;
use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use embedded_storage::{ReadStorage, Storage};
use rgb_strip::{
    AddressableStrip, Color, FrameSink, InputSource, Millis, PersistentStore, StripConfig,
    TimeSource, WiringOrder,
};

// ============================================================================
// Mock Frame Sink
// ============================================================================

/// Frame sink that records every transmitted frame
#[derive(Default)]
pub struct RecordingSink {
    frames: Vec<Vec<u8>>,
    open: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Raw bytes of the most recent frame, in wire order
    pub fn last_frame_bytes(&self) -> &[u8] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Most recent frame decoded as RGB colors (assumes `WiringOrder::Rgb`)
    pub fn last_colors(&self) -> Vec<Color> {
        decode(self.last_frame_bytes())
    }

    /// Frame `index` decoded as RGB colors (assumes `WiringOrder::Rgb`)
    pub fn colors(&self, index: usize) -> Vec<Color> {
        decode(&self.frames[index])
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

fn decode(bytes: &[u8]) -> Vec<Color> {
    assert_eq!(bytes.len() % 3, 0, "frame ended mid-pixel");
    bytes
        .chunks(3)
        .map(|c| Color::new(c[0], c[1], c[2]))
        .collect()
}

impl FrameSink for RecordingSink {
    fn begin_frame(&mut self) {
        assert!(!self.open, "frame started twice");
        self.open = true;
        self.frames.push(Vec::new());
    }

    fn transmit_channel(&mut self, byte: u8) {
        assert!(self.open, "byte sent outside a frame");
        self.frames.last_mut().unwrap().push(byte);
    }

    fn end_frame(&mut self) {
        assert!(self.open, "frame ended twice");
        self.open = false;
    }
}

/// Addressable strip with RGB wiring on a recording sink
pub fn rgb_strip(len: u16) -> AddressableStrip<RecordingSink> {
    AddressableStrip::new(RecordingSink::new(), &StripConfig::new(len, WiringOrder::Rgb))
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<u32>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(0),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u32) {
        self.current_time.set(self.current_time.get() + millis);
    }

    pub fn set_time(&self, millis: u32) {
        self.current_time.set(millis);
    }

    pub fn millis(&self) -> u32 {
        self.current_time.get()
    }
}

impl TimeSource<Millis> for MockTimeSource {
    fn now(&self) -> Millis {
        Millis(self.current_time.get())
    }
}

// ============================================================================
// Mock Inputs
// ============================================================================

/// Button and potentiometer driven by the mock clock.
///
/// Every button read takes one millisecond, so polling loops make progress.
/// The button is held while `press_at <= now < release_at` for any scripted press.
pub struct ScriptedInput<'a> {
    clock: &'a MockTimeSource,
    pub pot: u8,
    presses: Vec<(u32, u32)>,
}

impl<'a> ScriptedInput<'a> {
    pub fn new(clock: &'a MockTimeSource, pot: u8) -> Self {
        Self {
            clock,
            pot,
            presses: Vec::new(),
        }
    }

    /// Adds a press from `press_at` until `release_at`
    pub fn hold(mut self, press_at: u32, release_at: u32) -> Self {
        self.presses.push((press_at, release_at));
        self
    }
}

impl InputSource for ScriptedInput<'_> {
    fn button_pressed(&mut self) -> bool {
        self.clock.advance(1);
        let now = self.clock.millis();
        self.presses
            .iter()
            .any(|&(press_at, release_at)| now >= press_at && now < release_at)
    }

    fn averaged_pot(&mut self) -> u8 {
        self.pot
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay that advances the mock clock and records every requested wait
pub struct MockDelay<'a> {
    clock: &'a MockTimeSource,
    pub waits_ms: Vec<u32>,
}

impl<'a> MockDelay<'a> {
    pub fn new(clock: &'a MockTimeSource) -> Self {
        Self {
            clock,
            waits_ms: Vec::new(),
        }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
        self.clock.advance(ms);
    }
}

// ============================================================================
// Mock Storage
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreFailure;

/// In-memory length store
pub struct MockStore {
    pub length: u16,
    pub writes: Vec<u16>,
    pub failing: bool,
}

impl MockStore {
    pub fn new(length: u16) -> Self {
        Self {
            length,
            writes: Vec::new(),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new(0)
        }
    }
}

impl PersistentStore for MockStore {
    type Error = StoreFailure;

    fn read_length(&mut self) -> Result<u16, Self::Error> {
        if self.failing {
            return Err(StoreFailure);
        }
        Ok(self.length)
    }

    fn write_length(&mut self, length: u16) -> Result<(), Self::Error> {
        if self.failing {
            return Err(StoreFailure);
        }
        self.length = length;
        self.writes.push(length);
        Ok(())
    }
}

/// Byte-addressable storage backed by an array, erased to 0xFF
pub struct MockEeprom {
    pub bytes: [u8; 16],
}

impl MockEeprom {
    pub fn new() -> Self {
        Self { bytes: [0xFF; 16] }
    }
}

impl ReadStorage for MockEeprom {
    type Error = StoreFailure;

    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        let start = offset as usize;
        let source = self.bytes.get(start..start + bytes.len()).ok_or(StoreFailure)?;
        bytes.copy_from_slice(source);
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.bytes.len()
    }
}

impl Storage for MockEeprom {
    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        let start = offset as usize;
        let target = self
            .bytes
            .get_mut(start..start + bytes.len())
            .ok_or(StoreFailure)?;
        target.copy_from_slice(bytes);
        Ok(())
    }
}

// ============================================================================
// Mock PWM Channel
// ============================================================================

/// PWM channel remembering its last duty cycle
pub struct MockPwm {
    pub duty: u16,
    pub max_duty: u16,
}

impl MockPwm {
    pub fn new(max_duty: u16) -> Self {
        Self { duty: 0, max_duty }
    }
}

impl ErrorType for MockPwm {
    type Error = core::convert::Infallible;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        self.max_duty
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = duty;
        Ok(())
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use rgb_strip::{BLUE, GREEN, OFF, RED, WHITE};
