//! State machine for one login attempt
//!
//! Defines the authoritative sequencing of the lure.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
