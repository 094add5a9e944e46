//! Display status model
//!
//! The LCD always shows one of a handful of two-row screens. Each screen is
//! built whole and rendered whole; rows are never patched in place.

use core::fmt::Write;

use heapless::String;
use honeyline_protocol::LINE_CAPACITY;

use crate::traits::{CharDisplay, CharDisplayExt, DisplayError};

/// Number of status rows
pub const STATUS_ROWS: usize = 2;

/// Bytes per status row: a short label plus a full captured line
pub const ROW_CAPACITY: usize = LINE_CAPACITY + 16;

/// Boot splash, row 0
pub const BOOT_TITLE: &str = "IoT Honeypot";
/// Boot splash, row 1
pub const BOOT_SUBTITLE: &str = "h4k3rz incoming";
/// Caught notice shown when an attempt starts
pub const CAUGHT_NOTICE: &str = "hacker caught";
/// Label in front of the attempt counter
pub const ATTEMPTS_LABEL: &str = "Attempts:";
/// Label in front of the captured login
pub const LOGIN_LABEL: &str = "U:";
/// Label in front of the captured password
pub const PASSWORD_LABEL: &str = "P:";

/// Two rows of status text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayStatus {
    rows: [String<ROW_CAPACITY>; STATUS_ROWS],
}

impl Default for DisplayStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayStatus {
    /// Create a blank status
    pub fn new() -> Self {
        Self {
            rows: core::array::from_fn(|_| String::new()),
        }
    }

    /// Power-on splash
    pub fn boot() -> Self {
        Self::with_rows(BOOT_TITLE, "", BOOT_SUBTITLE, "")
    }

    /// Attempt started
    pub fn caught(attempts: u32) -> Self {
        let mut status = Self::with_rows(CAUGHT_NOTICE, "", ATTEMPTS_LABEL, "");
        // A u32 is at most 10 digits, always fits
        let _ = write!(status.rows[1], "{}", attempts);
        status
    }

    /// Login captured
    pub fn login(login: &str) -> Self {
        Self::with_rows(LOGIN_LABEL, login, "", "")
    }

    /// Password captured; the login stays on row 0
    pub fn password(login: &str, password: &str) -> Self {
        Self::with_rows(LOGIN_LABEL, login, PASSWORD_LABEL, password)
    }

    fn with_rows(label0: &str, text0: &str, label1: &str, text1: &str) -> Self {
        let mut status = Self::new();
        for (row, (label, text)) in status
            .rows
            .iter_mut()
            .zip([(label0, text0), (label1, text1)])
        {
            push_truncated(row, label);
            push_truncated(row, text);
        }
        status
    }

    /// Get the content of a row
    pub fn row(&self, row: usize) -> Option<&str> {
        self.rows.get(row).map(|s| s.as_str())
    }

    /// Get all rows as an iterator
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|s| s.as_str())
    }

    /// Check if both rows are empty
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|r| r.is_empty())
    }

    /// Replace the whole display content with this status
    ///
    /// Clears first, so a shorter row never leaves stale characters behind.
    pub fn render<D: CharDisplay>(&self, display: &mut D) -> Result<(), DisplayError> {
        display.clear()?;
        for (row, text) in self.rows.iter().enumerate() {
            if !text.is_empty() {
                display.print_row(row as u8, text)?;
            }
        }
        Ok(())
    }
}

/// Append as much of `text` as fits, on a char boundary
fn push_truncated(row: &mut String<ROW_CAPACITY>, text: &str) {
    for ch in text.chars() {
        if row.push(ch).is_err() {
            break;
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayStatus {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Status[{}, {}]", self.rows[0].as_str(), self.rows[1].as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Geometry;

    /// Records the calls made by `render`
    struct RecordingDisplay {
        clears: usize,
        prints: heapless::Vec<(u8, String<ROW_CAPACITY>), 4>,
        row: u8,
    }

    impl RecordingDisplay {
        fn new() -> Self {
            Self {
                clears: 0,
                prints: heapless::Vec::new(),
                row: 0,
            }
        }
    }

    impl CharDisplay for RecordingDisplay {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.clears += 1;
            self.row = 0;
            Ok(())
        }

        fn set_cursor(&mut self, _col: u8, row: u8) -> Result<(), DisplayError> {
            self.row = row;
            Ok(())
        }

        fn print(&mut self, text: &str) -> Result<(), DisplayError> {
            let mut s = String::new();
            s.push_str(text).unwrap();
            self.prints.push((self.row, s)).unwrap();
            Ok(())
        }

        fn geometry(&self) -> Geometry {
            Geometry::LCD_16X2
        }
    }

    #[test]
    fn test_boot_screen() {
        let status = DisplayStatus::boot();
        assert_eq!(status.row(0), Some("IoT Honeypot"));
        assert_eq!(status.row(1), Some("h4k3rz incoming"));
    }

    #[test]
    fn test_caught_screen() {
        let status = DisplayStatus::caught(42);
        assert_eq!(status.row(0), Some("hacker caught"));
        assert_eq!(status.row(1), Some("Attempts:42"));

        let status = DisplayStatus::caught(u32::MAX);
        assert_eq!(status.row(1), Some("Attempts:4294967295"));
    }

    #[test]
    fn test_login_screen_blanks_row_1() {
        let status = DisplayStatus::login("alice");
        assert_eq!(status.row(0), Some("U:alice"));
        assert_eq!(status.row(1), Some(""));
    }

    #[test]
    fn test_password_screen_keeps_login() {
        let status = DisplayStatus::password("alice", "hunter2");
        assert_eq!(status.row(0), Some("U:alice"));
        assert_eq!(status.row(1), Some("P:hunter2"));
    }

    #[test]
    fn test_empty_captures_show_labels() {
        let status = DisplayStatus::password("", "");
        assert_eq!(status.row(0), Some("U:"));
        assert_eq!(status.row(1), Some("P:"));
    }

    #[test]
    fn test_long_capture_is_not_cut_to_screen_width() {
        let status = DisplayStatus::login("a-very-long-login-name");
        assert_eq!(status.row(0), Some("U:a-very-long-login-name"));
    }

    #[test]
    fn test_out_of_range_row() {
        assert_eq!(DisplayStatus::new().row(2), None);
        assert!(DisplayStatus::new().is_blank());
    }

    #[test]
    fn test_render_clears_then_writes_rows() {
        let mut display = RecordingDisplay::new();
        DisplayStatus::password("root", "toor")
            .render(&mut display)
            .unwrap();

        assert_eq!(display.clears, 1);
        assert_eq!(display.prints.len(), 2);
        assert_eq!(display.prints[0].0, 0);
        assert_eq!(display.prints[0].1.as_str(), "U:root");
        assert_eq!(display.prints[1].0, 1);
        assert_eq!(display.prints[1].1.as_str(), "P:toor");
    }

    #[test]
    fn test_render_skips_blank_rows() {
        let mut display = RecordingDisplay::new();
        DisplayStatus::login("root").render(&mut display).unwrap();
        assert_eq!(display.clears, 1);
        assert_eq!(display.prints.len(), 1);
    }
}
