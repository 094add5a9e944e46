//! Serial line drivers

pub mod line_transport;

pub use line_transport::{LineTransport, SerialError};
