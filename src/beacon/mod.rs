//! Beacon advertising payload.
//!
//! The beacon is a non-connectable advertiser. Its advertising data
//! holds three AD structures:
//!
//! ```text
//! [0x02][0x01][flags]                     Flags (BR/EDR not supported)
//! [0x04][0x08]['G' 'P' 'S']               Shortened Local Name
//! [len ][0xFF][company LE][type][n][data] Manufacturer Specific Data
//! ```
//!
//! `data` is the application payload (up to 29 bytes); for location
//! updates it is the coordinate pair, latitude then longitude, each an
//! `i64` little-endian in degrees × 10^15.

pub mod adv_data;

pub use adv_data::{encode_adv_data, extract_coordinates, BeaconData, PayloadError};
