//! Line accumulator for terminal input.
//!
//! Bytes arrive one at a time. A carriage return completes the line
//! (the CR is kept so the splitter can check it), DEL removes the last
//! byte, and anything else is appended. Filling the buffer without a
//! terminator discards the whole partial line.

use crate::config::{CHARACTER_BACKSPACE, CHARACTER_CARRIAGE_RETURN, INPUT_BUFFER_LENGTH};
use heapless::Vec;

/// What a single pushed byte did to the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineEvent {
    /// Still collecting bytes.
    InProgress,
    /// A CR completed the line; read it with [`LineAccumulator::line`].
    Ready,
    /// Capacity reached before a CR; the partial line was dropped.
    Overflow,
}

/// Bounded, editable line buffer.
#[derive(Clone, Debug, Default)]
pub struct LineAccumulator {
    buf: Vec<u8, INPUT_BUFFER_LENGTH>,
    /// Set once a CR lands; the next push starts a fresh line.
    complete: bool,
}

impl LineAccumulator {
    /// Create an empty accumulator.
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            complete: false,
        }
    }

    /// Feed one byte, or `None` when the terminal had nothing.
    pub fn push(&mut self, byte: Option<u8>) -> LineEvent {
        let Some(byte) = byte else {
            return LineEvent::InProgress;
        };

        if self.complete {
            self.reset();
        }

        match byte {
            CHARACTER_CARRIAGE_RETURN => {
                // A 41-byte line plus CR is exactly capacity, so this cannot fail.
                let _ = self.buf.push(byte);
                self.complete = true;
                LineEvent::Ready
            }
            CHARACTER_BACKSPACE => {
                self.buf.pop();
                LineEvent::InProgress
            }
            _ => {
                if self.buf.push(byte).is_err() || self.buf.is_full() {
                    self.reset();
                    return LineEvent::Overflow;
                }
                LineEvent::InProgress
            }
        }
    }

    /// The completed line including its trailing CR, or the partial
    /// line while input is still in progress.
    pub fn line(&self) -> &[u8] {
        &self.buf
    }

    /// Number of bytes currently held.
    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Drop everything and start a new line.
    fn reset(&mut self) {
        self.buf.clear();
        self.complete = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_all(acc: &mut LineAccumulator, bytes: &[u8]) -> LineEvent {
        let mut last = LineEvent::InProgress;
        for &b in bytes {
            last = acc.push(Some(b));
        }
        last
    }

    #[test]
    fn carriage_return_completes_line() {
        let mut acc = LineAccumulator::new();
        assert_eq!(push_all(&mut acc, b"1.0;2.0"), LineEvent::InProgress);
        assert_eq!(acc.push(Some(b'\r')), LineEvent::Ready);
        assert_eq!(acc.line(), b"1.0;2.0\r");
    }

    #[test]
    fn next_byte_after_ready_starts_fresh_line() {
        let mut acc = LineAccumulator::new();
        push_all(&mut acc, b"12\r");
        assert_eq!(acc.push(Some(b'3')), LineEvent::InProgress);
        assert_eq!(acc.line(), b"3");
    }

    #[test]
    fn no_input_changes_nothing() {
        let mut acc = LineAccumulator::new();
        push_all(&mut acc, b"45");
        assert_eq!(acc.push(None), LineEvent::InProgress);
        assert_eq!(acc.push(None), LineEvent::InProgress);
        assert_eq!(acc.line(), b"45");
    }

    #[test]
    fn backspace_removes_last_byte() {
        let mut acc = LineAccumulator::new();
        push_all(&mut acc, b"45x");
        assert_eq!(acc.push(Some(CHARACTER_BACKSPACE)), LineEvent::InProgress);
        assert_eq!(acc.line(), b"45");
    }

    #[test]
    fn backspace_on_empty_buffer_is_noop() {
        let mut acc = LineAccumulator::new();
        assert_eq!(acc.push(Some(CHARACTER_BACKSPACE)), LineEvent::InProgress);
        assert!(acc.is_empty());
        assert_eq!(acc.push(Some(b'1')), LineEvent::InProgress);
        assert_eq!(acc.line(), b"1");
    }

    #[test]
    fn one_below_capacity_stays_in_progress() {
        let mut acc = LineAccumulator::new();
        for _ in 0..INPUT_BUFFER_LENGTH - 1 {
            assert_eq!(acc.push(Some(b'1')), LineEvent::InProgress);
        }
        assert_eq!(acc.len(), INPUT_BUFFER_LENGTH - 1);
        // A terminator still fits.
        assert_eq!(acc.push(Some(b'\r')), LineEvent::Ready);
        assert_eq!(acc.len(), INPUT_BUFFER_LENGTH);
    }

    #[test]
    fn reaching_capacity_overflows_and_resets() {
        let mut acc = LineAccumulator::new();
        for _ in 0..INPUT_BUFFER_LENGTH - 1 {
            acc.push(Some(b'9'));
        }
        assert_eq!(acc.push(Some(b'9')), LineEvent::Overflow);
        assert!(acc.is_empty());

        // The triggering byte is not carried into the next line.
        assert_eq!(acc.push(Some(b'1')), LineEvent::InProgress);
        assert_eq!(acc.line(), b"1");
    }

    #[test]
    fn backspace_keeps_line_below_capacity() {
        let mut acc = LineAccumulator::new();
        for _ in 0..INPUT_BUFFER_LENGTH - 1 {
            acc.push(Some(b'1'));
        }
        acc.push(Some(CHARACTER_BACKSPACE));
        assert_eq!(acc.push(Some(b'2')), LineEvent::InProgress);
        assert_eq!(acc.len(), INPUT_BUFFER_LENGTH - 1);
    }
}
