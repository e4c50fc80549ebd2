//! UART terminal task - operator coordinate entry.
//!
//! UARTE0 runs buffered: the RX ring keeps receiving while echo and
//! reports are written out. Each step takes whatever has arrived and
//! runs it through the input pipeline byte by byte. Every finished line
//! gets a message back on the terminal; accepted pairs are also
//! signalled to the beacon task.

use crate::ble::advertiser::CoordinateSignal;
use crate::error::Error;
use defmt::{info, warn};
use embassy_nrf::buffered_uarte::BufferedUarte;
use embassy_nrf::peripherals::{TIMER1, UARTE0};
use gps_beacon::config::{REPORT_BUFFER_LENGTH, UART_RX_CHUNK_LENGTH};
use gps_beacon::input::chunk::ChunkTerminal;
use gps_beacon::input::report::{write_prompt, write_report};
use gps_beacon::{InputPipeline, InputResult};
use heapless::String;

type Uart = BufferedUarte<'static, UARTE0, TIMER1>;

#[embassy_executor::task]
pub async fn terminal_task(mut uart: Uart, updates: &'static CoordinateSignal) -> ! {
    let mut pipeline = InputPipeline::new();

    if let Err(e) = send_prompt(&mut uart).await {
        warn!("Terminal: prompt failed: {}", e);
    }

    loop {
        if let Err(e) = step(&mut uart, &mut pipeline, updates).await {
            warn!("Terminal: {}", e);
        }
    }
}

/// Take the bytes received so far, process them and answer on the terminal.
async fn step(
    uart: &mut Uart,
    pipeline: &mut InputPipeline,
    updates: &CoordinateSignal,
) -> Result<(), Error> {
    let mut block = [0u8; UART_RX_CHUNK_LENGTH];
    let n = uart.read(&mut block).await.map_err(|_| Error::Uart)?;

    let mut terminal: ChunkTerminal<UART_RX_CHUNK_LENGTH> = ChunkTerminal::new(&block[..n]);
    while terminal.remaining() > 0 {
        let result = pipeline.poll(&mut terminal);
        match result {
            InputResult::InProgress => continue,
            InputResult::Accepted => {
                let coords = pipeline.coordinates();
                info!("Terminal: accepted {}", coords);
                updates.signal(coords);
            }
            other => info!("Terminal: line rejected ({})", other),
        }

        write_all(uart, terminal.echo()).await?;
        terminal.clear_echo();

        let mut msg: String<REPORT_BUFFER_LENGTH> = String::new();
        write_report(&mut msg, result, &pipeline.coordinates())?;
        write_all(uart, msg.as_bytes()).await?;
    }

    write_all(uart, terminal.echo()).await
}

async fn send_prompt(uart: &mut Uart) -> Result<(), Error> {
    let mut msg: String<REPORT_BUFFER_LENGTH> = String::new();
    write_prompt(&mut msg)?;
    write_all(uart, msg.as_bytes()).await
}

/// Queue `bytes` on the TX ring, waiting for room as needed.
async fn write_all(uart: &mut Uart, mut bytes: &[u8]) -> Result<(), Error> {
    while !bytes.is_empty() {
        let n = uart.write(bytes).await.map_err(|_| Error::Uart)?;
        bytes = &bytes[n..];
    }
    Ok(())
}
