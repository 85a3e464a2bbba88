//! Greeting Library
//!
//! This library formats greeting strings for display. The transformation is
//! pure: for a non-empty name it produces `"Hello, <name>!"`, and for an
//! empty name it greets a fallback name instead (`"world"` by default).
//!
//! Names are used exactly as given. Nothing is trimmed, escaped, or
//! normalized, so a whitespace-only name is greeted like any other name.
//!
//! # Example
//!
//! ```rust
//! use greeter::{hello, Greeter};
//!
//! assert_eq!(hello("Codex"), "Hello, Codex!");
//! assert_eq!(hello(""), "Hello, world!");
//!
//! let greeter = Greeter::new("friend");
//! assert_eq!(greeter.hello(""), "Hello, friend!");
//! ```

pub mod greet;

// Re-export main types for convenience
pub use greet::{Greeter, DEFAULT_FALLBACK};

/// Formats a greeting for `name` using the default fallback.
///
/// Equivalent to `Greeter::default().hello(name)`.
#[must_use]
pub fn hello(name: &str) -> String {
    Greeter::default().hello(name)
}
