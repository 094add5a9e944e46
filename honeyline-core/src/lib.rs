//! Board-agnostic core logic for the Honeyline serial honeypot
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits (line transport, character display)
//! - State machine for one login attempt
//! - The interaction engine that drives the state machine
//! - Display status model (what the 2-row LCD shows)
//! - Configuration type definitions and parsing

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod state;
pub mod status;
pub mod traits;

pub use engine::{Engine, EngineError};
