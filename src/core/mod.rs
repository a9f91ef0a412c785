//! Core text handling for caps-locker.
//!
//! The uppercase transform and the newline rules shared by the CLI and
//! GUI adapters. Pure functions with no I/O dependencies.

pub mod newline;
pub mod transform;

pub use newline::{ensure_trailing_newline, strip_trailing_newlines, trim_trailing_newline};
pub use transform::{to_caps, uppercase};
