//! Application-wide constants and compile-time configuration.
//!
//! Terminal control characters, the fixed-point scale, geographic
//! bounds and the beacon identity live here so they can be tuned in
//! one place.

// Terminal input

/// Line terminator sent by the terminal on Enter.
pub const CHARACTER_CARRIAGE_RETURN: u8 = b'\r';

/// Backspace as sent by most terminal emulators (DEL).
pub const CHARACTER_BACKSPACE: u8 = 0x7F;

/// Separates latitude from longitude on an input line.
pub const FIELD_DELIMITER: u8 = b';';

/// Line buffer capacity in bytes. Reaching it without a terminator is
/// an overflow, so the longest accepted line is 41 bytes plus CR.
pub const INPUT_BUFFER_LENGTH: usize = 42;

// Fixed-point coordinates

/// Number of fractional decimal digits carried by a coordinate.
pub const COORDINATE_FRACTION_DIGITS: u32 = 15;

/// One degree in fixed-point units (10^15).
pub const COORDINATE_MULTIPLIER: i64 = 1_000_000_000_000_000;

/// Whole-degree bounds, used for both validation and operator messages.
pub const LATITUDE_MAX_DEGREES: i64 = 90;
pub const LATITUDE_MIN_DEGREES: i64 = -90;
pub const LONGITUDE_MAX_DEGREES: i64 = 180;
pub const LONGITUDE_MIN_DEGREES: i64 = -180;

pub const LATITUDE_MAX: i64 = LATITUDE_MAX_DEGREES * COORDINATE_MULTIPLIER;
pub const LATITUDE_MIN: i64 = LATITUDE_MIN_DEGREES * COORDINATE_MULTIPLIER;
pub const LONGITUDE_MAX: i64 = LONGITUDE_MAX_DEGREES * COORDINATE_MULTIPLIER;
pub const LONGITUDE_MIN: i64 = LONGITUDE_MIN_DEGREES * COORDINATE_MULTIPLIER;

// Beacon

/// Shortened local name placed in the advertising data.
pub const DEVICE_LOCAL_NAME: &str = "GPS";

/// Manufacturer company identifier. 0xFFFF is reserved for testing
/// and must not ship in production devices.
pub const APP_COMPANY_IDENTIFIER: u16 = 0xFFFF;

/// Device type byte at the start of the manufacturer payload (0x02 = beacon).
pub const APP_DEVICE_TYPE: u8 = 0x02;

/// Maximum application payload carried in the manufacturer data.
pub const BEACON_DATA_MAX_LENGTH: usize = 29;

/// Legacy advertising data limit (bytes).
pub const BLE_ADV_DATA_MAX_LENGTH: usize = 31;

/// Non-connectable advertising interval (in 0.625 ms units). 160 = 100 ms.
pub const BLE_ADV_INTERVAL: u32 = 160;

/// Back-off before restarting advertising after a SoftDevice error (ms).
pub const BLE_ADV_RETRY_MS: u64 = 1000;

// UART terminal
//
// nRF52840-DK routes UARTE0 to the J-Link virtual COM port (115200 8N1):
//
//   UART RX  → P0.08
//   UART TX  → P0.06
//   LED1     → P0.13 (active low, lit while advertising)
//
// Pins are bound in `main.rs`.

/// Largest operator message written in one go.
pub const REPORT_BUFFER_LENGTH: usize = 192;

/// UARTE receive ring buffer. Keeps filling while a report is written.
pub const UART_RX_BUFFER_LENGTH: usize = 256;

/// UARTE transmit ring buffer; holds a whole report plus its echo.
pub const UART_TX_BUFFER_LENGTH: usize = 256;

/// Bytes taken from the receive ring buffer per terminal step.
pub const UART_RX_CHUNK_LENGTH: usize = 32;
