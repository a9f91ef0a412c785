//! CLI layer for caps-locker.
//!
//! Converts positional arguments, or all of standard input when no
//! arguments are given, and prints the result.

pub mod commands;
pub mod parser;

pub use commands::execute;
pub use parser::Cli;
