//! UART serial communication abstractions
//!
//! Provides traits for asynchronous serial communication that can be
//! implemented by chip-specific HALs.

/// UART transmitter
#[allow(async_fn_in_trait)]
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write all of `data` to the UART
    ///
    /// Completes once every byte has been queued for transmission.
    async fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Wait until queued bytes have left the transmitter
    async fn flush(&mut self) -> Result<(), Self::Error>;
}

/// UART receiver
#[allow(async_fn_in_trait)]
pub trait UartRx {
    /// Error type for receive operations
    type Error;

    /// Number of received bytes waiting to be read
    ///
    /// Never blocks.
    fn available(&self) -> usize;

    /// Read whatever is already buffered, without waiting
    ///
    /// Returns `Ok(0)` when nothing is pending.
    fn try_read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Read at least one byte
    ///
    /// Waits until data arrives, then returns the number of bytes copied.
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Read a single byte, waiting for it if necessary
    async fn read_byte(&mut self) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        loop {
            if self.read(&mut buf).await? == 1 {
                return Ok(buf[0]);
            }
        }
    }
}

/// Combined UART interface
///
/// For UARTs that provide both TX and RX on a single peripheral.
pub trait Uart: UartTx + UartRx {}

// Blanket implementation
impl<T: UartTx + UartRx> Uart for T {}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    /// 1200 baud 8N1, the rate the lure answers on
    fn default() -> Self {
        Self {
            baudrate: 1200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

impl UartConfig {
    /// 8N1 at the given baud rate
    pub const fn with_baudrate(baudrate: u32) -> Self {
        Self {
            baudrate,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }

    /// Time on the wire for one character, in microseconds
    ///
    /// Counts the start bit, data bits, parity bit and stop bits.
    pub fn char_time_us(&self) -> u32 {
        let data = match self.data_bits {
            DataBits::Seven => 7,
            DataBits::Eight => 8,
            DataBits::Nine => 9,
        };
        let parity = if self.parity == Parity::None { 0 } else { 1 };
        let stop = match self.stop_bits {
            StopBits::One => 1,
            StopBits::Two => 2,
        };
        let bits: u32 = 1 + data + parity + stop;
        (bits * 1_000_000) / self.baudrate.max(1)
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}
