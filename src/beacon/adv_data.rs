use crate::config::{
    APP_COMPANY_IDENTIFIER, APP_DEVICE_TYPE, BEACON_DATA_MAX_LENGTH, BLE_ADV_DATA_MAX_LENGTH,
    DEVICE_LOCAL_NAME,
};
use crate::input::store::COORDINATES_SIZE;
use crate::input::Coordinates;

const AD_TYPE_FLAGS: u8 = 0x01;
const AD_TYPE_SHORTENED_LOCAL_NAME: u8 = 0x08;
const AD_TYPE_MANUFACTURER_SPECIFIC: u8 = 0xFF;

/// BR/EDR not supported; limited/general discoverable bits stay clear
/// since the beacon is non-connectable.
const ADV_FLAGS: u8 = 0x04;

/// Why a payload could not be turned into advertising data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PayloadError {
    /// Zero-length payload.
    Empty,
    /// Payload longer than `BEACON_DATA_MAX_LENGTH`.
    TooLong,
    /// Encoded advertising data would exceed the 31-byte legacy limit.
    AdvertisementTooLong,
    /// Caller's output buffer is smaller than the encoded data.
    BufferTooSmall,
}

/// Manufacturer-specific payload: device type, length, data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeaconData {
    device_type: u8,
    data_length: u8,
    data: [u8; BEACON_DATA_MAX_LENGTH],
}

impl BeaconData {
    /// Wrap 1..=29 bytes of application data.
    pub fn new(payload: &[u8]) -> Result<Self, PayloadError> {
        if payload.is_empty() {
            return Err(PayloadError::Empty);
        }
        if payload.len() > BEACON_DATA_MAX_LENGTH {
            return Err(PayloadError::TooLong);
        }

        let mut data = [0u8; BEACON_DATA_MAX_LENGTH];
        data[..payload.len()].copy_from_slice(payload);
        Ok(Self {
            device_type: APP_DEVICE_TYPE,
            data_length: payload.len() as u8,
            data,
        })
    }

    /// Payload carrying a coordinate pair.
    pub fn from_coordinates(c: &Coordinates) -> Self {
        let mut data = [0u8; BEACON_DATA_MAX_LENGTH];
        data[..COORDINATES_SIZE].copy_from_slice(&c.to_bytes());
        Self {
            device_type: APP_DEVICE_TYPE,
            data_length: COORDINATES_SIZE as u8,
            data,
        }
    }

    pub fn device_type(&self) -> u8 {
        self.device_type
    }

    /// The application bytes only.
    pub fn payload(&self) -> &[u8] {
        &self.data[..self.data_length as usize]
    }

    /// Size of `[type][len][data]`.
    fn encoded_len(&self) -> usize {
        2 + self.data_length as usize
    }
}

/// Encode the full advertising data for `beacon` into `buf`.
///
/// Returns the number of bytes written.
pub fn encode_adv_data(beacon: &BeaconData, buf: &mut [u8]) -> Result<usize, PayloadError> {
    let name = DEVICE_LOCAL_NAME.as_bytes();
    // company id + [type][len][data]
    let manuf_len = 2 + beacon.encoded_len();
    let total = 3 + (2 + name.len()) + (2 + manuf_len);

    if total > BLE_ADV_DATA_MAX_LENGTH {
        return Err(PayloadError::AdvertisementTooLong);
    }
    if buf.len() < total {
        return Err(PayloadError::BufferTooSmall);
    }

    let mut w = 0;

    buf[w..w + 3].copy_from_slice(&[0x02, AD_TYPE_FLAGS, ADV_FLAGS]);
    w += 3;

    buf[w] = (1 + name.len()) as u8;
    buf[w + 1] = AD_TYPE_SHORTENED_LOCAL_NAME;
    buf[w + 2..w + 2 + name.len()].copy_from_slice(name);
    w += 2 + name.len();

    buf[w] = (1 + manuf_len) as u8;
    buf[w + 1] = AD_TYPE_MANUFACTURER_SPECIFIC;
    buf[w + 2..w + 4].copy_from_slice(&APP_COMPANY_IDENTIFIER.to_le_bytes());
    buf[w + 4] = beacon.device_type;
    buf[w + 5] = beacon.data_length;
    let payload = beacon.payload();
    buf[w + 6..w + 6 + payload.len()].copy_from_slice(payload);
    w += 2 + manuf_len;

    Ok(w)
}

/// Find our manufacturer data in raw advertising data and decode the
/// coordinate pair from it.
pub fn extract_coordinates(data: &[u8]) -> Option<Coordinates> {
    let company = APP_COMPANY_IDENTIFIER.to_le_bytes();

    let mut i = 0;
    while i < data.len() {
        let len = data[i] as usize;
        if len == 0 || i + len >= data.len() {
            break;
        }
        let ad_type = data[i + 1];
        if ad_type == AD_TYPE_MANUFACTURER_SPECIFIC {
            let body = &data[i + 2..i + 1 + len];
            // [company 2][type][len][data...]
            if body.len() >= 4 && body[..2] == company && body[2] == APP_DEVICE_TYPE {
                let data_len = body[3] as usize;
                let payload = &body[4..];
                if data_len >= COORDINATES_SIZE && payload.len() >= data_len {
                    return Coordinates::from_bytes(payload);
                }
            }
        }
        i += len + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> Coordinates {
        Coordinates {
            latitude: 45_500_000_000_000_000,
            longitude: -73_600_000_000_000_000,
        }
    }

    #[test]
    fn payload_length_limits() {
        assert_eq!(BeaconData::new(&[]), Err(PayloadError::Empty));
        assert!(BeaconData::new(&[0xAA; BEACON_DATA_MAX_LENGTH]).is_ok());
        assert_eq!(
            BeaconData::new(&[0xAA; BEACON_DATA_MAX_LENGTH + 1]),
            Err(PayloadError::TooLong)
        );
    }

    #[test]
    fn payload_keeps_only_given_bytes() {
        let beacon = BeaconData::new(&[1, 2, 3]).unwrap();
        assert_eq!(beacon.payload(), &[1, 2, 3]);
        assert_eq!(beacon.device_type(), APP_DEVICE_TYPE);
    }

    #[test]
    fn coordinate_payload_is_sixteen_bytes() {
        let beacon = BeaconData::from_coordinates(&pair());
        assert_eq!(beacon.payload().len(), COORDINATES_SIZE);
        assert_eq!(beacon.payload(), &pair().to_bytes());
    }

    #[test]
    fn encodes_flags_name_and_manufacturer_data() {
        let beacon = BeaconData::new(&[0x11, 0x22]).unwrap();
        let mut buf = [0u8; BLE_ADV_DATA_MAX_LENGTH];
        let len = encode_adv_data(&beacon, &mut buf).unwrap();
        assert_eq!(
            &buf[..len],
            &[
                0x02, 0x01, 0x04, // Flags
                0x04, 0x08, b'G', b'P', b'S', // Shortened Local Name
                0x07, 0xFF, 0xFF, 0xFF, 0x02, 0x02, 0x11, 0x22, // Manufacturer data
            ]
        );
    }

    #[test]
    fn coordinate_advertisement_fits_legacy_limit() {
        let beacon = BeaconData::from_coordinates(&pair());
        let mut buf = [0u8; BLE_ADV_DATA_MAX_LENGTH];
        let len = encode_adv_data(&beacon, &mut buf).unwrap();
        assert_eq!(len, 30);
        assert_eq!(extract_coordinates(&buf[..len]), Some(pair()));
    }

    #[test]
    fn oversized_payload_does_not_fit_advertisement() {
        let beacon = BeaconData::new(&[0u8; BEACON_DATA_MAX_LENGTH]).unwrap();
        let mut buf = [0u8; 64];
        assert_eq!(
            encode_adv_data(&beacon, &mut buf),
            Err(PayloadError::AdvertisementTooLong)
        );
    }

    #[test]
    fn small_output_buffer_is_rejected() {
        let beacon = BeaconData::from_coordinates(&pair());
        let mut buf = [0u8; 16];
        assert_eq!(
            encode_adv_data(&beacon, &mut buf),
            Err(PayloadError::BufferTooSmall)
        );
    }

    #[test]
    fn extract_ignores_other_manufacturers() {
        let mut ad = [0u8; 22];
        ad[0] = 21;
        ad[1] = 0xFF;
        ad[2] = 0x59; // Nordic Semiconductor
        ad[3] = 0x00;
        ad[4] = APP_DEVICE_TYPE;
        ad[5] = 16;
        assert_eq!(extract_coordinates(&ad), None);
    }

    #[test]
    fn extract_handles_malformed_lengths() {
        assert_eq!(extract_coordinates(&[]), None);
        assert_eq!(extract_coordinates(&[0x00]), None);
        assert_eq!(extract_coordinates(&[0x15, 0xFF, 0xFF, 0xFF]), None);
    }

    #[test]
    fn extract_rejects_short_payload() {
        let beacon = BeaconData::new(&[0u8; 8]).unwrap();
        let mut buf = [0u8; BLE_ADV_DATA_MAX_LENGTH];
        let len = encode_adv_data(&beacon, &mut buf).unwrap();
        assert_eq!(extract_coordinates(&buf[..len]), None);
    }
}
