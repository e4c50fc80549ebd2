//! Non-connectable beacon advertiser.
//!
//! Advertises the encoded beacon data until a new coordinate pair
//! arrives, then re-encodes and restarts. Advertising never times out.
//! LED1 is lit while advertising is running.

use crate::error::Error;
use defmt::{error, info, warn};
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::Output;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer};
use gps_beacon::beacon::{encode_adv_data, BeaconData};
use gps_beacon::config::{BLE_ADV_DATA_MAX_LENGTH, BLE_ADV_INTERVAL, BLE_ADV_RETRY_MS};
use gps_beacon::Coordinates;
use nrf_softdevice::ble::peripheral;
use nrf_softdevice::Softdevice;

/// Committed coordinate pairs, published by the terminal task.
pub type CoordinateSignal = Signal<CriticalSectionRawMutex, Coordinates>;

/// Advertise `initial` and keep the advertisement in step with `updates`.
#[embassy_executor::task]
pub async fn beacon_task(
    sd: &'static Softdevice,
    mut led: Output<'static>,
    initial: Coordinates,
    updates: &'static CoordinateSignal,
) -> ! {
    let mut beacon = BeaconData::from_coordinates(&initial);

    loop {
        led.set_low();
        let outcome = advertise_until_update(sd, &beacon, updates).await;
        led.set_high();

        match outcome {
            Ok(coords) => {
                info!("Beacon: republishing {}", coords);
                beacon = BeaconData::from_coordinates(&coords);
            }
            Err(e) => {
                warn!("Beacon: advertising stopped: {}", e);
                Timer::after(Duration::from_millis(BLE_ADV_RETRY_MS)).await;
            }
        }
    }
}

/// Advertise `beacon` until the next committed pair arrives.
async fn advertise_until_update(
    sd: &Softdevice,
    beacon: &BeaconData,
    updates: &CoordinateSignal,
) -> Result<Coordinates, Error> {
    let mut adv_data = [0u8; BLE_ADV_DATA_MAX_LENGTH];
    let len = encode_adv_data(beacon, &mut adv_data).map_err(|e| {
        error!("Beacon: cannot encode payload: {}", e);
        Error::from(e)
    })?;

    let adv = peripheral::NonconnectableAdvertisement::NonscannableUndirected {
        adv_data: &adv_data[..len],
    };
    let config = peripheral::Config {
        interval: BLE_ADV_INTERVAL,
        timeout: None,
        ..Default::default()
    };

    info!("Beacon: advertising {} bytes", len);
    match select(peripheral::advertise(sd, adv, &config), updates.wait()).await {
        Either::First(Ok(())) => Err(Error::Ble(crate::error::BleError::AdvertiseTimeout)),
        Either::First(Err(e)) => Err(e.into()),
        Either::Second(coords) => Ok(coords),
    }
}
