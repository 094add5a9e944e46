//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in honeyline-core:
//!
//! - Character LCD (HD44780 in 4-bit mode)
//! - Line transport over any `honeyline-hal` UART

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod serial;
