//! Configuration types
//!
//! Board-agnostic device configuration and the TOML subset it is written in.

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ParseError};
pub use types::*;
