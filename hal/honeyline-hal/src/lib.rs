//! Honeyline Hardware Abstraction Layer
//!
//! This crate defines the serial-port traits that chip-specific HALs
//! implement. The line transport in `honeyline-drivers` is written against
//! these traits only, so the same honeypot logic runs on any chip that can
//! move bytes over a UART.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (honeyline-firmware)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  honeyline-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ honeyline-hal-│
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial communication

#![no_std]
#![deny(unsafe_code)]

pub mod uart;

// Re-export key traits at crate root for convenience
pub use uart::{Uart, UartConfig, UartRx, UartTx};
