//! Honeyline serial line protocol
//!
//! This crate defines everything that crosses the serial line between the
//! lure and whoever dialed into it:
//!
//! - [`script`]: the exact text the fake terminal emits (banner, prompts,
//!   rejection)
//! - [`line`]: how incoming bytes are framed into lines
//!
//! # Session Overview
//!
//! ```text
//!   caller                         lure
//!     │  any byte                   │
//!     │ ──────────────────────────► │
//!     │        banner (title, legal)│
//!     │ ◄────────────────────────── │
//!     │  one line (drained)         │
//!     │ ──────────────────────────► │
//!     │                  "\nLOGIN: "│
//!     │ ◄────────────────────────── │
//!     │  login line                 │
//!     │ ──────────────────────────► │
//!     │               "PASSWORD: "  │
//!     │ ◄────────────────────────── │
//!     │  password line              │
//!     │ ──────────────────────────► │
//!     │          rejection message  │
//!     │ ◄────────────────────────── │
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod line;
pub mod script;

pub use line::{trim_capture, Line, LineReader, LINE_CAPACITY};
pub use script::{
    BANNER_TITLE, BANNER_WARNING, LINE_TERMINATOR, LOGIN_PROMPT, PASSWORD_PROMPT, REJECTION,
};
