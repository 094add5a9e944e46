//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod engine;
pub mod serial_rx;

pub use engine::engine_task;
pub use serial_rx::serial_rx_task;
