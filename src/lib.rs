#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Color`**: An 8-bit RGB value (`palette::Srgb<u8>`) with brightness and color wheel helpers
//! - **`PixelBuffer`**: Sparse, position-ordered pixels for strips where most LEDs are off
//! - **`SubstripBuffer`**: Runs of equally colored pixels rendered back to back
//! - **`FrameSink`**: Trait to implement for your LED transmitter
//! - **`Strip`**: Rendering capability, implemented by `AddressableStrip` and `PwmStrip`
//! - **`Effect`**: Non-blocking animation state machine polled from the main loop
//! - **`CalibrationController`**: Interactive measurement of the strip length
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`PersistentStore`**: Trait to implement for storing the calibrated length
//!
//! Colors are kept in nominal RGB order everywhere; the wiring order of your
//! LEDs is applied only when a frame is transmitted.

#[macro_use]
mod fmt;

pub mod calibration;
pub mod color;
pub mod config;
pub mod effects;
pub mod pixels;
pub mod strip;
pub mod substrip;
pub mod time;
pub mod types;

pub use calibration::{CalibrationController, CalibrationStatus, InputSource, calibrate};
pub use color::{BLUE, Color, GREEN, OFF, RED, WHITE};
pub use config::{ConfigError, EepromStore, PersistentStore, StripConfig};
pub use effects::{Effect, EffectStatus};
pub use pixels::PixelBuffer;
pub use strip::{AddressableStrip, FrameSink, PwmStrip, Strip};
pub use substrip::SubstripBuffer;
pub use time::{Millis, MillisDuration, Stopwatch, TimeDuration, TimeInstant, TimeSource};
pub use types::{BufferError, Pixel, Segment, WiringOrder};
