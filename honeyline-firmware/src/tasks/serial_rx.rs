//! Serial UART receive task
//!
//! Moves bytes from the buffered UART into the RX pipe as they arrive.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use crate::channels::SERIAL_RX;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

/// Serial RX task - forwards received bytes to the engine
///
/// When the engine falls behind, the pipe fills and this task waits, so
/// back-pressure ends up in the UART driver's ring buffer.
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx) {
    info!("Serial RX task started");

    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);
                SERIAL_RX.write_all(&buf[..n]).await;
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                // Line noise at the wrong baud rate shows up as framing errors
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
