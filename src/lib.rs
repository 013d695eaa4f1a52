//! # Greeter
//!
//! Prints a fixed greeting block: a banner line followed by numbered lines,
//! each tagged as an even or odd index.
//!
//! ```text
//! Hello, World!
//! This is line 0
//! Even number
//! This is line 1
//! Odd number
//! ...
//! ```
//!
//! ## Usage Example
//!
//! ```
//! use greeter::Greeter;
//!
//! let text = Greeter::default().render_greeting();
//! assert!(text.starts_with("Hello, World!\nThis is line 0\nEven number\n"));
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod greeter; // Banner and numbered lines

pub use greeter::{emit_greeting, Greeter, Parity};

use thiserror::Error;

/// Errors that can occur while emitting a greeting
#[derive(Error, Debug)]
pub enum GreeterError {
    /// Writing to the output stream failed
    #[error("failed to write greeting: {0}")]
    Io(#[from] std::io::Error),
}
