use super::{Coordinates, InputError};
use crate::config::{LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_MAX, LONGITUDE_MIN};

/// Check a candidate pair against the geographic bounds (inclusive).
pub fn check_limits(c: &Coordinates) -> Result<(), InputError> {
    let latitude_ok = (LATITUDE_MIN..=LATITUDE_MAX).contains(&c.latitude);
    let longitude_ok = (LONGITUDE_MIN..=LONGITUDE_MAX).contains(&c.longitude);

    if latitude_ok && longitude_ok {
        Ok(())
    } else {
        Err(InputError::OutOfRange)
    }
}
