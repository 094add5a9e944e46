//! RP2040-specific HAL for the honeypot firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `honeyline-hal` traits:
//!
//! - UART transmit over the buffered UART driver
//! - UART receive from a byte pipe filled by the RX task
//! - Conversion of `honeyline_hal::UartConfig` to the embassy-rp config

#![no_std]

pub mod uart;

// Re-export shared traits from honeyline-hal for convenience
pub use honeyline_hal::{UartConfig, UartRx, UartTx};
