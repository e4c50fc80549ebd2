use super::InputError;
use crate::config::{CHARACTER_CARRIAGE_RETURN, FIELD_DELIMITER};

/// Split a CR-terminated line into its latitude and longitude fields.
///
/// The line must end with CR and hold exactly one delimiter with a
/// non-empty field on each side.
pub fn split_fields(line: &[u8]) -> Result<(&[u8], &[u8]), InputError> {
    let body = match line.split_last() {
        Some((&CHARACTER_CARRIAGE_RETURN, body)) => body,
        _ => return Err(InputError::Malformed),
    };

    let mut fields = body.split(|&b| b == FIELD_DELIMITER);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(first), Some(second), None) if !first.is_empty() && !second.is_empty() => {
            Ok((first, second))
        }
        _ => Err(InputError::Malformed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_two_fields() {
        let (lat, lon) = split_fields(b"45.5;-73.6\r").unwrap();
        assert_eq!(lat, b"45.5");
        assert_eq!(lon, b"-73.6");
    }

    #[test]
    fn missing_terminator_is_malformed() {
        assert_eq!(split_fields(b"45.5;-73.6"), Err(InputError::Malformed));
        assert_eq!(split_fields(b""), Err(InputError::Malformed));
    }

    #[test]
    fn missing_delimiter_is_malformed() {
        assert_eq!(split_fields(b"45.5\r"), Err(InputError::Malformed));
        assert_eq!(split_fields(b"\r"), Err(InputError::Malformed));
    }

    #[test]
    fn extra_delimiter_is_malformed() {
        assert_eq!(split_fields(b"1.0;2.0;3.0\r"), Err(InputError::Malformed));
        assert_eq!(split_fields(b"1.0;;2.0\r"), Err(InputError::Malformed));
    }

    #[test]
    fn empty_field_is_malformed() {
        assert_eq!(split_fields(b";2.0\r"), Err(InputError::Malformed));
        assert_eq!(split_fields(b"1.0;\r"), Err(InputError::Malformed));
        assert_eq!(split_fields(b";\r"), Err(InputError::Malformed));
    }

    #[test]
    fn fields_are_not_trimmed() {
        // Whitespace is left for the number parser to reject.
        let (lat, lon) = split_fields(b" 1.0;2.0 \r").unwrap();
        assert_eq!(lat, b" 1.0");
        assert_eq!(lon, b"2.0 ");
    }
}
