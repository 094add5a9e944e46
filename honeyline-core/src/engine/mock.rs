//! Scripted collaborators for engine tests
//!
//! All three mocks append to one shared journal so tests can check the
//! relative order of transport, display and delay activity.

extern crate std;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::string::{String, ToString};
use std::vec::Vec;

use embedded_hal_async::delay::DelayNs;
use honeyline_protocol::Line;

use crate::traits::{CharDisplay, DisplayError, Geometry, Transport};

/// Reads without input before the transport gives up
const POLL_BUDGET: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trace {
    Write(String),
    Flush,
    ReadLine(String),
    Delay(u32),
    Clear,
    Print(u8, String),
}

pub type Journal = Rc<RefCell<Vec<Trace>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    /// Test script ran out of input
    Exhausted,
    /// Injected write failure
    WriteFailed,
}

pub struct MockTransport {
    journal: Journal,
    lines: VecDeque<String>,
    /// `available` reports nothing this many times first
    pub idle_polls: usize,
    /// Fail the write with this index (0-based, counted over all writes)
    pub fail_write: Option<usize>,
    writes: usize,
    empty_polls: usize,
    pub output: String,
}

impl MockTransport {
    pub fn new(journal: &Journal, lines: &[&str]) -> Self {
        Self {
            journal: journal.clone(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
            idle_polls: 0,
            fail_write: None,
            writes: 0,
            empty_polls: 0,
            output: String::new(),
        }
    }

    pub fn push_line(&mut self, line: &str) {
        self.lines.push_back(line.to_string());
    }

    pub fn pending_lines(&self) -> usize {
        self.lines.len()
    }
}

impl Transport for MockTransport {
    type Error = MockError;

    fn available(&mut self) -> Result<usize, MockError> {
        if self.idle_polls > 0 {
            self.idle_polls -= 1;
            return Ok(0);
        }
        let pending: usize = self.lines.iter().map(|l| l.len() + 1).sum();
        if pending == 0 {
            self.empty_polls += 1;
            if self.empty_polls > POLL_BUDGET {
                return Err(MockError::Exhausted);
            }
        }
        Ok(pending)
    }

    async fn read_line(&mut self, line: &mut Line) -> Result<(), MockError> {
        line.clear();
        let next = self.lines.pop_front().ok_or(MockError::Exhausted)?;
        for ch in next.chars() {
            if line.push(ch).is_err() {
                break;
            }
        }
        self.journal.borrow_mut().push(Trace::ReadLine(next));
        Ok(())
    }

    async fn write(&mut self, text: &str) -> Result<(), MockError> {
        let index = self.writes;
        self.writes += 1;
        if self.fail_write == Some(index) {
            return Err(MockError::WriteFailed);
        }
        self.output.push_str(text);
        self.journal.borrow_mut().push(Trace::Write(text.to_string()));
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), MockError> {
        self.journal.borrow_mut().push(Trace::Flush);
        Ok(())
    }
}

/// A 16x2 screen that keeps what was printed on it
pub struct MockDisplay {
    journal: Journal,
    screen: [String; 2],
    cursor: (u8, u8),
    pub broken: bool,
}

impl MockDisplay {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            screen: [String::new(), String::new()],
            cursor: (0, 0),
            broken: false,
        }
    }

    pub fn screen_row(&self, row: usize) -> &str {
        &self.screen[row]
    }
}

impl CharDisplay for MockDisplay {
    fn clear(&mut self) -> Result<(), DisplayError> {
        if self.broken {
            return Err(DisplayError::Bus);
        }
        self.screen = [String::new(), String::new()];
        self.cursor = (0, 0);
        self.journal.borrow_mut().push(Trace::Clear);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        if !self.geometry().contains(col, row) {
            return Err(DisplayError::OutOfBounds);
        }
        self.cursor = (col, row);
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        let (col, row) = self.cursor;
        let columns = self.geometry().columns as usize;
        let visible: String = text.chars().take(columns - col as usize).collect();
        let cells = &mut self.screen[row as usize];
        while cells.chars().count() < col as usize {
            cells.push(' ');
        }
        cells.push_str(&visible);
        self.cursor.0 = col + visible.chars().count() as u8;
        self.journal
            .borrow_mut()
            .push(Trace::Print(row, text.to_string()));
        Ok(())
    }

    fn geometry(&self) -> Geometry {
        Geometry::LCD_16X2
    }
}

pub struct MockDelay {
    journal: Journal,
}

impl MockDelay {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, _ns: u32) {}

    async fn delay_ms(&mut self, ms: u32) {
        self.journal.borrow_mut().push(Trace::Delay(ms));
    }
}
