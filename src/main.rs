//! GPS beacon firmware for nRF52840.
//!
//! Tasks:
//! - SoftDevice event loop
//! - Beacon advertiser (manufacturer data = current coordinates)
//! - UART terminal for operator coordinate entry

#![no_std]
#![no_main]

mod ble;
mod error;
mod terminal;

use ble::advertiser::{beacon_task, CoordinateSignal};
use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Level, Output, OutputDrive};
use embassy_nrf::interrupt::{InterruptExt, Priority};
use embassy_nrf::buffered_uarte::{self, BufferedUarte};
use embassy_nrf::{bind_interrupts, interrupt, peripherals, uarte};
use embassy_sync::signal::Signal;
use gps_beacon::config::{UART_RX_BUFFER_LENGTH, UART_TX_BUFFER_LENGTH};
use gps_beacon::Coordinates;
use nrf_softdevice::Softdevice;
use static_cell::StaticCell;

use defmt_rtt as _;
use panic_probe as _;

bind_interrupts!(struct Irqs {
    UARTE0_UART0 => buffered_uarte::InterruptHandler<peripherals::UARTE0>;
});

static UART_RX_BUFFER: StaticCell<[u8; UART_RX_BUFFER_LENGTH]> = StaticCell::new();
static UART_TX_BUFFER: StaticCell<[u8; UART_TX_BUFFER_LENGTH]> = StaticCell::new();

/// Pairs committed on the terminal, consumed by the beacon task.
static COORDINATE_UPDATES: CoordinateSignal = Signal::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("gps-beacon starting");

    // Priorities 0, 1 and 4 are reserved by the SoftDevice.
    let mut config = embassy_nrf::config::Config::default();
    config.gpiote_interrupt_priority = Priority::P2;
    config.time_interrupt_priority = Priority::P2;
    let p = embassy_nrf::init(config);

    interrupt::UARTE0_UART0.set_priority(Priority::P3);
    let mut uart_config = uarte::Config::default();
    uart_config.parity = uarte::Parity::EXCLUDED;
    uart_config.baudrate = uarte::Baudrate::BAUD115200;
    // TIMER0, PPI channels 17-31 and groups 4-5 belong to the SoftDevice.
    let uart = BufferedUarte::new(
        p.UARTE0,
        p.TIMER1,
        p.PPI_CH0,
        p.PPI_CH1,
        p.PPI_GROUP0,
        Irqs,
        p.P0_08,
        p.P0_06,
        uart_config,
        UART_RX_BUFFER.init([0; UART_RX_BUFFER_LENGTH]),
        UART_TX_BUFFER.init([0; UART_TX_BUFFER_LENGTH]),
    );

    // LED1 on the DK, active low.
    let led = Output::new(p.P0_13, Level::High, OutputDrive::Standard);

    let sd: &'static Softdevice = ble::enable_softdevice();
    unwrap!(spawner.spawn(ble::softdevice_task(sd)));

    unwrap!(spawner.spawn(beacon_task(
        sd,
        led,
        Coordinates::default(),
        &COORDINATE_UPDATES
    )));
    unwrap!(spawner.spawn(terminal::terminal_task(uart, &COORDINATE_UPDATES)));

    info!("gps-beacon running");
}
