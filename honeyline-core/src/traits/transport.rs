//! Line-oriented transport trait
//!
//! The engine talks to the caller through this trait only. How bytes reach
//! the device (UART, USB CDC, a test script) is the implementor's business,
//! as is buffering and line framing.

use honeyline_protocol::{Line, LINE_TERMINATOR};

/// Line-oriented character transport
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Error type for transport operations
    type Error: core::fmt::Debug;

    /// Number of input bytes received and not yet consumed
    ///
    /// Never blocks.
    fn available(&mut self) -> Result<usize, Self::Error>;

    /// Read one line into `line`, terminator stripped
    ///
    /// Waits for as long as it takes the caller to send a terminator.
    /// `line` is cleared first. An empty line is a valid result.
    async fn read_line(&mut self, line: &mut Line) -> Result<(), Self::Error>;

    /// Write text as-is
    async fn write(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Write text followed by the line terminator
    async fn write_line(&mut self, text: &str) -> Result<(), Self::Error> {
        self.write(text).await?;
        self.write(LINE_TERMINATOR).await
    }

    /// Wait until written text has left the device
    async fn flush(&mut self) -> Result<(), Self::Error>;
}
