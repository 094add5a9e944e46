//! UART implementations for RP2040
//!
//! Transmit goes straight to the buffered UART. Receive is split in two:
//! a task drains the UART into a static [`Pipe`] as bytes arrive, and the
//! engine reads from the pipe through [`PipeRx`]. The pipe knows how many
//! bytes it holds, which the UART driver does not expose.

use core::convert::Infallible;

use embassy_rp::uart::{self, BufferedUartTx};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::pipe::{Pipe, TryReadError};
use embedded_io_async::Write;
use honeyline_hal::uart::{DataBits, Parity, StopBits};
use honeyline_hal::{UartConfig, UartRx, UartTx};

/// Byte pipe between the RX task and the engine
pub type RxPipe<const N: usize> = Pipe<CriticalSectionRawMutex, N>;

/// Receive half backed by a static byte pipe
pub struct PipeRx<const N: usize> {
    pipe: &'static RxPipe<N>,
}

impl<const N: usize> PipeRx<N> {
    /// Create a receiver reading from `pipe`
    pub fn new(pipe: &'static RxPipe<N>) -> Self {
        Self { pipe }
    }
}

impl<const N: usize> UartRx for PipeRx<N> {
    type Error = Infallible;

    fn available(&self) -> usize {
        self.pipe.len()
    }

    fn try_read(&mut self, buf: &mut [u8]) -> Result<usize, Infallible> {
        match self.pipe.try_read(buf) {
            Ok(n) => Ok(n),
            Err(TryReadError::Empty) => Ok(0),
        }
    }

    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Infallible> {
        Ok(self.pipe.read(buf).await)
    }
}

/// Transmit half over the interrupt-driven buffered UART
pub struct SerialTx {
    tx: BufferedUartTx,
}

impl SerialTx {
    /// Wrap a buffered UART transmitter
    pub fn new(tx: BufferedUartTx) -> Self {
        Self { tx }
    }
}

impl UartTx for SerialTx {
    type Error = uart::Error;

    async fn write_all(&mut self, data: &[u8]) -> Result<(), uart::Error> {
        self.tx.write_all(data).await
    }

    async fn flush(&mut self) -> Result<(), uart::Error> {
        self.tx.flush().await
    }
}

/// Build the embassy-rp UART config for a line setting
///
/// Returns `None` for framings the RP2040 UART cannot produce.
pub fn rp_config(config: &UartConfig) -> Option<uart::Config> {
    let mut rp = uart::Config::default();
    rp.baudrate = config.baudrate;
    rp.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
        DataBits::Nine => return None,
    };
    rp.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    rp.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    Some(rp)
}
