//! Integration tests for strip configuration and length persistence

mod common;

use common::*;
use rgb_strip::config::ERASED_LENGTH;
use rgb_strip::{ConfigError, EepromStore, PersistentStore, StripConfig, WiringOrder};

#[test]
fn load_uses_stored_length() {
    let mut store = MockStore::new(60);

    let config = StripConfig::load(&mut store, WiringOrder::Grb).unwrap();

    assert_eq!(config, StripConfig::new(60, WiringOrder::Grb));
    assert_eq!(config.debounce_ms, 0);
}

#[test]
fn load_rejects_erased_and_zero_lengths() {
    for stored in [0, ERASED_LENGTH] {
        let mut store = MockStore::new(stored);
        assert_eq!(
            StripConfig::load(&mut store, WiringOrder::Grb),
            Err(ConfigError::Uncalibrated),
            "stored {stored:#06x}"
        );
    }
}

#[test]
fn load_reports_storage_errors() {
    let mut store = MockStore::failing();

    assert_eq!(
        StripConfig::load(&mut store, WiringOrder::Rgb),
        Err(ConfigError::Storage(StoreFailure))
    );
}

#[test]
fn error_messages_are_readable() {
    let uncalibrated: ConfigError<StoreFailure> = ConfigError::Uncalibrated;
    assert_eq!(
        uncalibrated.to_string(),
        "strip length has not been calibrated"
    );
    assert_eq!(
        ConfigError::Storage(StoreFailure).to_string(),
        "failed to read strip length: StoreFailure"
    );
}

#[test]
fn eeprom_store_keeps_little_endian_word() {
    let mut store = EepromStore::new(MockEeprom::new(), 4);

    store.write_length(0x1234).unwrap();
    assert_eq!(store.read_length(), Ok(0x1234));

    let eeprom = store.release();
    assert_eq!(eeprom.bytes[4..6], [0x34, 0x12]);
    assert_eq!(eeprom.bytes[3], 0xFF);
    assert_eq!(eeprom.bytes[6], 0xFF);
}

#[test]
fn fresh_eeprom_reads_as_uncalibrated() {
    let mut store = EepromStore::new(MockEeprom::new(), 0);

    assert_eq!(
        StripConfig::load(&mut store, WiringOrder::Grb),
        Err(ConfigError::Uncalibrated)
    );
}

#[test]
fn eeprom_store_propagates_out_of_range() {
    let mut store = EepromStore::new(MockEeprom::new(), 15);

    assert_eq!(store.write_length(1), Err(StoreFailure));
    assert_eq!(store.read_length(), Err(StoreFailure));
}

#[test]
fn debounce_is_configurable() {
    let config = StripConfig::new(10, WiringOrder::Bgr).with_debounce_ms(25);

    assert_eq!(config.debounce_ms, 25);
    assert_eq!(config.strip_size, 10);
}
