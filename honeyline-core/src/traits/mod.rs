//! Hardware abstraction traits
//!
//! These traits define the interface between the interaction engine
//! and hardware-specific implementations.

pub mod display;
pub mod transport;

pub use display::{CharDisplay, CharDisplayExt, DisplayError, Geometry};
pub use transport::Transport;
