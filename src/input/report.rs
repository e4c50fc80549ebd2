//! Human-readable terminal messages for pipeline outcomes.

use core::fmt::{self, Write};

use super::fixed_point::Degrees;
use super::{Coordinates, InputResult};
use crate::config::{
    INPUT_BUFFER_LENGTH, LATITUDE_MAX_DEGREES, LATITUDE_MIN_DEGREES, LONGITUDE_MAX_DEGREES,
    LONGITUDE_MIN_DEGREES,
};

/// Usage banner printed once at startup.
pub fn write_prompt<W: Write>(w: &mut W) -> fmt::Result {
    write!(
        w,
        "\r\nGPS beacon. Enter <latitude>;<longitude> in decimal degrees, e.g. 45.5;-73.6\r\n"
    )
}

/// Write the operator message for `result`. `InProgress` writes nothing.
///
/// `current` is printed on success and should be the freshly committed pair.
pub fn write_report<W: Write>(w: &mut W, result: InputResult, current: &Coordinates) -> fmt::Result {
    match result {
        InputResult::Accepted => write!(
            w,
            "\r\nInput OK...\r\nLatitude: {}\r\nLongitude: {}\r\n",
            Degrees(current.latitude),
            Degrees(current.longitude)
        ),
        InputResult::Malformed => write!(w, "\r\nInvalid format. Try again.\r\n"),
        InputResult::OutOfRange => write!(
            w,
            "\r\nEntered coordinates are outside the valid range. \
             Latitude {}...{} Longitude {}...{}. Try again.\r\n",
            LATITUDE_MIN_DEGREES, LATITUDE_MAX_DEGREES, LONGITUDE_MIN_DEGREES, LONGITUDE_MAX_DEGREES
        ),
        InputResult::TooLong => write!(
            w,
            "\r\nMaximum input length exceeded: {}. Try again.\r\n",
            INPUT_BUFFER_LENGTH
        ),
        InputResult::InProgress => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::REPORT_BUFFER_LENGTH;
    use heapless::String;

    fn report(result: InputResult, current: Coordinates) -> String<REPORT_BUFFER_LENGTH> {
        let mut s = String::new();
        write_report(&mut s, result, &current).unwrap();
        s
    }

    #[test]
    fn accepted_prints_pair() {
        let s = report(
            InputResult::Accepted,
            Coordinates {
                latitude: 45_500_000_000_000_000,
                longitude: -73_600_000_000_000_000,
            },
        );
        assert_eq!(
            s.as_str(),
            "\r\nInput OK...\r\nLatitude: 45.500000000000000\r\nLongitude: -73.600000000000000\r\n"
        );
    }

    #[test]
    fn out_of_range_lists_bounds() {
        let s = report(InputResult::OutOfRange, Coordinates::default());
        assert!(s.contains("Latitude -90...90 Longitude -180...180"));
    }

    #[test]
    fn too_long_names_capacity() {
        let s = report(InputResult::TooLong, Coordinates::default());
        assert_eq!(
            s.as_str(),
            "\r\nMaximum input length exceeded: 42. Try again.\r\n"
        );
    }

    #[test]
    fn malformed_message() {
        let s = report(InputResult::Malformed, Coordinates::default());
        assert_eq!(s.as_str(), "\r\nInvalid format. Try again.\r\n");
    }

    #[test]
    fn in_progress_is_silent() {
        assert!(report(InputResult::InProgress, Coordinates::default()).is_empty());
    }

    #[test]
    fn longest_reports_fit_buffer() {
        let extreme = Coordinates {
            latitude: -90_000_000_000_000_000,
            longitude: -180_000_000_000_000_000,
        };
        let mut s: String<REPORT_BUFFER_LENGTH> = String::new();
        assert!(write_report(&mut s, InputResult::Accepted, &extreme).is_ok());
        s.clear();
        assert!(write_report(&mut s, InputResult::OutOfRange, &extreme).is_ok());
        s.clear();
        assert!(write_prompt(&mut s).is_ok());
    }
}
