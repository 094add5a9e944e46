//! Line framing for caller input
//!
//! Framing rules:
//! - `\n` ends a line
//! - `\r` ends a line; a `\n` arriving right after it is swallowed so a
//!   terminal sending CR LF on Enter produces one line, not two
//! - every other byte is kept, mapped to the Latin-1 character with the
//!   same value, so nothing the caller sends is ever rejected
//! - bytes past [`LINE_CAPACITY`] are dropped until the terminator

use heapless::String;

/// Maximum stored line length in bytes
///
/// Latin-1 characters above 0x7F take two bytes in UTF-8, so a line of
/// such characters holds half as many.
pub const LINE_CAPACITY: usize = 128;

/// One line of caller input, terminator stripped
pub type Line = String<LINE_CAPACITY>;

/// Whitespace stripped from captures: the C `isspace` set
const CAPTURE_WHITESPACE: [char; 6] = [' ', '\t', '\n', '\x0B', '\x0C', '\r'];

/// Strip surrounding whitespace from a captured value
///
/// Idempotent: trimming an already trimmed value returns it unchanged.
pub fn trim_capture(text: &str) -> &str {
    text.trim_matches(&CAPTURE_WHITESPACE[..])
}

/// Incremental line reader
///
/// Bytes are fed one at a time; the reader appends them to a caller-owned
/// [`Line`] and reports when a terminator completes it.
#[derive(Debug, Clone, Default)]
pub struct LineReader {
    /// Last byte was `\r`; swallow a following `\n`
    skip_lf: bool,
    /// Bytes dropped from the current line for lack of space
    dropped: usize,
}

impl LineReader {
    /// Create a new line reader
    pub const fn new() -> Self {
        Self {
            skip_lf: false,
            dropped: 0,
        }
    }

    /// Reset the reader state
    pub fn reset(&mut self) {
        self.skip_lf = false;
        self.dropped = 0;
    }

    /// Feed a single byte
    ///
    /// Returns `true` when the byte completed `line`. The caller is expected
    /// to clear `line` before starting the next one.
    pub fn feed(&mut self, byte: u8, line: &mut Line) -> bool {
        if core::mem::take(&mut self.skip_lf) && byte == b'\n' {
            return false;
        }

        match byte {
            b'\r' => {
                self.skip_lf = true;
                self.dropped = 0;
                true
            }
            b'\n' => {
                self.dropped = 0;
                true
            }
            _ => {
                if line.push(char::from(byte)).is_err() {
                    self.dropped = self.dropped.saturating_add(1);
                }
                false
            }
        }
    }

    /// Feed bytes until a line completes
    ///
    /// Returns the number of bytes consumed and whether a line completed.
    /// Bytes after the terminator are left for the next call.
    pub fn feed_bytes(&mut self, bytes: &[u8], line: &mut Line) -> (usize, bool) {
        for (i, &byte) in bytes.iter().enumerate() {
            if self.feed(byte, line) {
                return (i + 1, true);
            }
        }
        (bytes.len(), false)
    }

    /// True when the last byte was `\r` and a `\n` would be swallowed
    pub fn awaiting_lf(&self) -> bool {
        self.skip_lf
    }

    /// Stop waiting for the `\n` half of a CR LF pair
    pub fn cancel_lf(&mut self) {
        self.skip_lf = false;
    }

    /// Bytes dropped so far from the line being assembled
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}
