//! Bluetooth Low Energy subsystem.
//!
//! This module drives the Nordic SoftDevice S140 in **Broadcaster**
//! role:
//!
//! 1. **SoftDevice bring-up** - one advertising set, no connections,
//!    `GPS` as the GAP device name.
//! 2. **Advertiser** - non-connectable advertising of the encoded
//!    beacon data, restarted whenever a new coordinate pair is
//!    committed on the terminal.
//!
//! Coordinate updates reach the advertiser through a `Signal` owned by
//! the crate root.

pub mod advertiser;

use defmt::info;
use gps_beacon::config::DEVICE_LOCAL_NAME;
use nrf_softdevice::{raw, Softdevice};

/// Enable the SoftDevice. Must be called exactly once, before any
/// other SoftDevice call.
pub fn enable_softdevice() -> &'static mut Softdevice {
    let config = nrf_softdevice::Config {
        clock: Some(raw::nrf_clock_lf_cfg_t {
            source: raw::NRF_CLOCK_LF_SRC_RC as u8,
            rc_ctiv: 16,
            rc_temp_ctiv: 2,
            accuracy: raw::NRF_CLOCK_LF_ACCURACY_500_PPM as u8,
        }),
        gap_role_count: Some(raw::ble_gap_cfg_role_count_t {
            adv_set_count: 1,
            periph_role_count: 0,
            central_role_count: 0,
            central_sec_count: 0,
            _bitfield_1: raw::ble_gap_cfg_role_count_t::new_bitfield_1(0),
        }),
        gap_device_name: Some(raw::ble_gap_cfg_device_name_t {
            p_value: DEVICE_LOCAL_NAME.as_ptr() as _,
            current_len: DEVICE_LOCAL_NAME.len() as u16,
            max_len: DEVICE_LOCAL_NAME.len() as u16,
            write_perm: unsafe { core::mem::zeroed() },
            _bitfield_1: raw::ble_gap_cfg_device_name_t::new_bitfield_1(
                raw::BLE_GATTS_VLOC_STACK as u8,
            ),
        }),
        ..Default::default()
    };

    info!("SoftDevice: enabling (broadcaster, name {})", DEVICE_LOCAL_NAME);
    Softdevice::enable(&config)
}

/// Run the SoftDevice event loop forever.
#[embassy_executor::task]
pub async fn softdevice_task(sd: &'static Softdevice) -> ! {
    sd.run().await
}
