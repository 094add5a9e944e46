//! Line transport over a UART
//!
//! Adapts a byte-level [`UartRx`]/[`UartTx`] pair to the engine's
//! line-oriented [`Transport`]. Framing is done by
//! [`LineReader`](honeyline_protocol::LineReader).
//!
//! A terminal that sends CR LF on Enter leaves the LF behind after the CR
//! completed a line. If that stray LF sat in the receive buffer the engine
//! would take it as fresh input and start a new attempt, so `available`
//! discards it before reporting.

use honeyline_core::traits::Transport;
use honeyline_hal::{UartRx, UartTx};
use honeyline_protocol::{Line, LineReader};

/// Serial transport errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialError<R, W> {
    /// Receive side failed
    Read(R),
    /// Transmit side failed
    Write(W),
}

/// Line-oriented transport over a UART
pub struct LineTransport<R, W> {
    rx: R,
    tx: W,
    reader: LineReader,
    /// Byte taken out of the receiver while looking for a stray LF
    held: Option<u8>,
    /// Bytes dropped from the last complete line
    truncated: usize,
}

impl<R: UartRx, W: UartTx> LineTransport<R, W> {
    /// Create a new transport
    pub fn new(rx: R, tx: W) -> Self {
        Self {
            rx,
            tx,
            reader: LineReader::new(),
            held: None,
            truncated: 0,
        }
    }

    /// Release the UART halves
    pub fn release(self) -> (R, W) {
        (self.rx, self.tx)
    }

    /// Bytes dropped from the last line read for lack of space
    pub fn truncated(&self) -> usize {
        self.truncated
    }

    /// Discard the LF of a CR LF pair if it has arrived
    fn swallow_lf(&mut self) -> Result<(), R::Error> {
        if !self.reader.awaiting_lf() || self.held.is_some() {
            return Ok(());
        }

        let mut byte = [0u8; 1];
        if self.rx.try_read(&mut byte)? == 1 {
            self.reader.cancel_lf();
            if byte[0] != b'\n' {
                self.held = Some(byte[0]);
            }
        }
        Ok(())
    }
}

impl<R, W> Transport for LineTransport<R, W>
where
    R: UartRx,
    W: UartTx,
    R::Error: core::fmt::Debug,
    W::Error: core::fmt::Debug,
{
    type Error = SerialError<R::Error, W::Error>;

    fn available(&mut self) -> Result<usize, Self::Error> {
        self.swallow_lf().map_err(SerialError::Read)?;
        Ok(self.rx.available() + usize::from(self.held.is_some()))
    }

    async fn read_line(&mut self, line: &mut Line) -> Result<(), Self::Error> {
        line.clear();
        loop {
            let byte = match self.held.take() {
                Some(byte) => byte,
                None => self.rx.read_byte().await.map_err(SerialError::Read)?,
            };
            // The terminator resets the reader's count
            let dropped = self.reader.dropped();
            if self.reader.feed(byte, line) {
                self.truncated = dropped;
                return Ok(());
            }
        }
    }

    async fn write(&mut self, text: &str) -> Result<(), Self::Error> {
        self.tx
            .write_all(text.as_bytes())
            .await
            .map_err(SerialError::Write)
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.flush().await.map_err(SerialError::Write)
    }
}
