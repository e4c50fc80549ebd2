//! Operator coordinate input over a character terminal.
//!
//! The pipeline is driven one byte at a time:
//!
//! 1. **Line accumulator** - collects bytes until CR, handles DEL and
//!    overflow.
//! 2. **Field splitter** - `<latitude>;<longitude>\r`.
//! 3. **Fixed-point parser** - each field to degrees × 10^15.
//! 4. **Range validator** - ±90 / ±180 degrees.
//! 5. **Coordinate store** - committed only when every step succeeds.
//!
//! Each call returns exactly one [`InputResult`]; an earlier failure
//! short-circuits the later steps and leaves the store untouched.

pub mod chunk;
pub mod fields;
pub mod fixed_point;
pub mod line;
pub mod range;
pub mod report;
pub mod store;


use fields::split_fields;
use fixed_point::parse_coordinate;
use line::{LineAccumulator, LineEvent};
use range::check_limits;
use store::CoordinateStore;

pub use store::Coordinates;

/// Outcome of one pipeline step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputResult {
    /// A line parsed and validated; the store holds the new pair.
    Accepted,
    /// The line did not split into two well-formed numbers.
    Malformed,
    /// Both numbers parsed but at least one is outside its bounds.
    OutOfRange,
    /// Waiting for more bytes.
    InProgress,
    /// The line hit buffer capacity and was discarded.
    TooLong,
}

/// Why a completed line was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// A field held a disallowed byte, or the line did not split.
    Malformed,
    /// A value overflowed or fell outside its geographic bounds.
    OutOfRange,
}

impl From<InputError> for InputResult {
    fn from(e: InputError) -> Self {
        match e {
            InputError::Malformed => InputResult::Malformed,
            InputError::OutOfRange => InputResult::OutOfRange,
        }
    }
}

/// Byte-oriented terminal the pipeline pulls from.
pub trait Terminal {
    /// Next received byte, or `None` if nothing is waiting. Must not block.
    fn read_byte(&mut self) -> Option<u8>;

    /// Send a byte back for local echo.
    fn write_byte(&mut self, byte: u8);
}

/// Line buffer plus the last accepted pair.
#[derive(Clone, Debug, Default)]
pub struct InputPipeline {
    line: LineAccumulator,
    store: CoordinateStore,
}

impl InputPipeline {
    pub const fn new() -> Self {
        Self {
            line: LineAccumulator::new(),
            store: CoordinateStore::new(),
        }
    }

    /// Pull at most one byte from `terminal`, echo it, and process it.
    pub fn poll<T: Terminal>(&mut self, terminal: &mut T) -> InputResult {
        let byte = terminal.read_byte();
        if let Some(b) = byte {
            terminal.write_byte(b);
        }
        self.feed(byte)
    }

    /// Process one byte (`None` = nothing received).
    pub fn feed(&mut self, byte: Option<u8>) -> InputResult {
        let result = match self.line.push(byte) {
            LineEvent::InProgress => return InputResult::InProgress,
            LineEvent::Overflow => InputResult::TooLong,
            LineEvent::Ready => match parse_line(self.line.line()) {
                Ok(pair) => {
                    self.store.commit(pair);
                    #[cfg(feature = "defmt")]
                    defmt::info!("Input: committed {}", pair);
                    InputResult::Accepted
                }
                Err(e) => e.into(),
            },
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("Input: line finished with {}", result);

        result
    }

    /// The last accepted pair (`(0, 0)` until the first success).
    pub fn coordinates(&self) -> Coordinates {
        self.store.read()
    }
}

/// Split, parse and validate a complete line.
///
/// Both fields are always scanned, so a disallowed byte in either one
/// reports `Malformed` even when the other field overflowed.
pub fn parse_line(line: &[u8]) -> Result<Coordinates, InputError> {
    let (latitude, longitude) = split_fields(line)?;
    let pair = match (parse_coordinate(latitude), parse_coordinate(longitude)) {
        (Ok(latitude), Ok(longitude)) => Coordinates {
            latitude,
            longitude,
        },
        (Err(InputError::Malformed), _) | (_, Err(InputError::Malformed)) => {
            return Err(InputError::Malformed)
        }
        (Err(e), _) | (_, Err(e)) => return Err(e),
    };
    check_limits(&pair)?;
    Ok(pair)
}
