//! Strip configuration and persistence of the calibrated length.

use crate::types::WiringOrder;
use embedded_storage::Storage;

/// Stored length of a strip that has never been calibrated (erased EEPROM/flash).
pub const ERASED_LENGTH: u16 = 0xFFFF;

/// Non-volatile storage for the calibrated strip length.
pub trait PersistentStore {
    /// Error type of the underlying storage.
    type Error;

    /// Reads the stored length.
    fn read_length(&mut self) -> Result<u16, Self::Error>;

    /// Stores a new length.
    fn write_length(&mut self, length: u16) -> Result<(), Self::Error>;
}

impl<P: PersistentStore + ?Sized> PersistentStore for &mut P {
    type Error = P::Error;

    fn read_length(&mut self) -> Result<u16, Self::Error> {
        (**self).read_length()
    }

    fn write_length(&mut self, length: u16) -> Result<(), Self::Error> {
        (**self).write_length(length)
    }
}

/// [`PersistentStore`] on top of any byte-addressable [`Storage`].
///
/// The length is kept as a little-endian 16-bit word at `offset`.
pub struct EepromStore<S: Storage> {
    storage: S,
    offset: u32,
}

impl<S: Storage> EepromStore<S> {
    /// Wraps `storage`, keeping the length at `offset`.
    pub fn new(storage: S, offset: u32) -> Self {
        Self { storage, offset }
    }

    /// Returns the wrapped storage.
    pub fn release(self) -> S {
        self.storage
    }
}

impl<S: Storage> PersistentStore for EepromStore<S> {
    type Error = S::Error;

    fn read_length(&mut self) -> Result<u16, Self::Error> {
        let mut word = [0u8; 2];
        self.storage.read(self.offset, &mut word)?;
        Ok(u16::from_le_bytes(word))
    }

    fn write_length(&mut self, length: u16) -> Result<(), Self::Error> {
        self.storage.write(self.offset, &length.to_le_bytes())
    }
}

/// Errors that can occur while loading the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError<E> {
    /// No length has been stored yet; the strip needs calibrating.
    Uncalibrated,

    /// The store could not be read.
    Storage(E),
}

impl<E: core::fmt::Debug> core::fmt::Display for ConfigError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::Uncalibrated => {
                write!(f, "strip length has not been calibrated")
            }
            ConfigError::Storage(err) => {
                write!(f, "failed to read strip length: {:?}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for ConfigError<E> {}

/// Process-wide strip settings.
///
/// Built once at startup, either from a compile-time length with [`new`] or
/// from the calibrated length with [`load`], and then handed to the renderer
/// and the calibration controller.
///
/// [`new`]: StripConfig::new
/// [`load`]: StripConfig::load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StripConfig {
    /// Number of addressable pixels.
    pub strip_size: u16,

    /// Byte order expected by the LEDs.
    pub wiring: WiringOrder,

    /// Extra wait after a button press edge, 0 to disable.
    pub debounce_ms: u16,
}

impl StripConfig {
    /// Creates a configuration for a strip of known length.
    pub const fn new(strip_size: u16, wiring: WiringOrder) -> Self {
        Self {
            strip_size,
            wiring,
            debounce_ms: 0,
        }
    }

    /// Sets the button debounce delay.
    pub const fn with_debounce_ms(mut self, debounce_ms: u16) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Creates a configuration using the length stored in `store`.
    ///
    /// # Errors
    /// * `Uncalibrated` - The stored length is 0 or erased
    /// * `Storage` - The store could not be read
    pub fn load<P: PersistentStore>(
        store: &mut P,
        wiring: WiringOrder,
    ) -> Result<Self, ConfigError<P::Error>> {
        let strip_size = store.read_length().map_err(ConfigError::Storage)?;

        if strip_size == 0 || strip_size == ERASED_LENGTH {
            warn!("no calibrated strip length stored");
            return Err(ConfigError::Uncalibrated);
        }

        debug!("loaded strip length {=u16}", strip_size);
        Ok(Self::new(strip_size, wiring))
    }
}
