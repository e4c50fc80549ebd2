//! Terminal over a block of bytes already received by the UART driver.
//!
//! The firmware reads whatever the RX ring buffer holds in one go and
//! then runs the pipeline over it byte by byte. Echo is collected here
//! so it can be flushed before each operator message.

use super::Terminal;
use heapless::Vec;

/// Serves bytes from a received block and collects their echo.
#[derive(Debug)]
pub struct ChunkTerminal<'a, const N: usize> {
    rx: &'a [u8],
    echo: Vec<u8, N>,
}

impl<'a, const N: usize> ChunkTerminal<'a, N> {
    pub fn new(rx: &'a [u8]) -> Self {
        Self {
            rx,
            echo: Vec::new(),
        }
    }

    /// Bytes not yet handed to the pipeline.
    pub fn remaining(&self) -> usize {
        self.rx.len()
    }

    /// Echo collected since the last [`clear_echo`](Self::clear_echo).
    pub fn echo(&self) -> &[u8] {
        &self.echo
    }

    pub fn clear_echo(&mut self) {
        self.echo.clear();
    }
}

impl<const N: usize> Terminal for ChunkTerminal<'_, N> {
    fn read_byte(&mut self) -> Option<u8> {
        let (&byte, rest) = self.rx.split_first()?;
        self.rx = rest;
        Some(byte)
    }

    fn write_byte(&mut self, byte: u8) {
        // Sized to the receive block, so a full block always fits.
        let _ = self.echo.push(byte);
    }
}
