//! Unified error type for the beacon firmware.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

use defmt::Format;
use gps_beacon::beacon::PayloadError;

/// Top-level error type used by the firmware tasks.
#[derive(Debug, Format)]
pub enum Error {
    // BLE
    /// The SoftDevice rejected an advertising request.
    Ble(BleError),

    // Terminal
    /// Buffered UARTE read or write failed.
    Uart,

    // Beacon data
    /// The coordinate payload could not be encoded.
    Payload(PayloadError),

    // Generic
    /// An operator message did not fit its buffer.
    BufferOverflow,
}

/// Subset of BLE errors we propagate (keeps the enum `Copy`-friendly).
#[derive(Debug, Clone, Copy, Format)]
pub enum BleError {
    /// Advertising stopped after its configured timeout.
    AdvertiseTimeout,
    /// The SoftDevice had no free advertising set.
    NoFreeConn,
    /// Any other SoftDevice error.
    AdvertiseFailed,
}

// Convenience conversions

impl From<BleError> for Error {
    fn from(e: BleError) -> Self {
        Error::Ble(e)
    }
}

impl From<nrf_softdevice::ble::peripheral::AdvertiseError> for Error {
    fn from(e: nrf_softdevice::ble::peripheral::AdvertiseError) -> Self {
        use nrf_softdevice::ble::peripheral::AdvertiseError;
        let tag = match e {
            AdvertiseError::Timeout => BleError::AdvertiseTimeout,
            AdvertiseError::NoFreeConn => BleError::NoFreeConn,
            AdvertiseError::Raw(_) => BleError::AdvertiseFailed,
        };
        Error::Ble(tag)
    }
}

impl From<PayloadError> for Error {
    fn from(e: PayloadError) -> Self {
        Error::Payload(e)
    }
}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Error::BufferOverflow
    }
}
