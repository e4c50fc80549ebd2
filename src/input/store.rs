//! Last accepted coordinate pair.

use core::fmt;

use super::fixed_point::Degrees;

/// A latitude/longitude pair in fixed-point degrees (× 10^15).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Coordinates {
    pub latitude: i64,
    pub longitude: i64,
}

/// Serialized size of a pair in the beacon payload.
pub const COORDINATES_SIZE: usize = 16;

impl Coordinates {
    /// Serialise as latitude then longitude, little-endian.
    pub fn to_bytes(&self) -> [u8; COORDINATES_SIZE] {
        let mut buf = [0u8; COORDINATES_SIZE];
        buf[..8].copy_from_slice(&self.latitude.to_le_bytes());
        buf[8..].copy_from_slice(&self.longitude.to_le_bytes());
        buf
    }

    /// Parse the layout written by [`Coordinates::to_bytes`].
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < COORDINATES_SIZE {
            return None;
        }
        let mut lat = [0u8; 8];
        let mut lon = [0u8; 8];
        lat.copy_from_slice(&data[..8]);
        lon.copy_from_slice(&data[8..COORDINATES_SIZE]);
        Some(Self {
            latitude: i64::from_le_bytes(lat),
            longitude: i64::from_le_bytes(lon),
        })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", Degrees(self.latitude), Degrees(self.longitude))
    }
}

/// Holds the most recent pair that passed parsing and validation.
///
/// Only the pipeline commits, and only after a full success, so a
/// reader never sees a pair that failed validation.
#[derive(Clone, Debug, Default)]
pub struct CoordinateStore {
    current: Coordinates,
}

impl CoordinateStore {
    /// Start at `(0, 0)`.
    pub const fn new() -> Self {
        Self {
            current: Coordinates {
                latitude: 0,
                longitude: 0,
            },
        }
    }

    /// Replace the stored pair.
    pub fn commit(&mut self, pair: Coordinates) {
        self.current = pair;
    }

    pub fn read(&self) -> Coordinates {
        self.current
    }
}
