//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.

use embassy_sync::pipe::Pipe;
use honeyline_hal_rp2040::uart::RxPipe;

/// Pipe capacity for received serial bytes
pub const SERIAL_RX_SIZE: usize = 256;

/// Bytes received on the serial line, in arrival order
///
/// Filled by the serial RX task, drained by the engine.
pub static SERIAL_RX: RxPipe<SERIAL_RX_SIZE> = Pipe::new();
