//! # caps-locker
//!
//! Uppercase converter with two front ends.
//!
//! Run with arguments, or with standard input redirected, and it behaves
//! as a filter: the text is converted and printed with a trailing newline.
//! Run bare from an interactive terminal or a desktop launcher and it opens
//! a small window that converts as you type.
//!
//! ## Layout
//!
//! - [`core`]: the uppercase transform and newline rules
//! - [`cli`]: argument parsing and the filter command
//! - [`gui`]: the eframe window and its toolkit-free state
//! - [`dispatch`]: choosing between the two at startup

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod gui;
pub mod io;
pub mod logging;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

pub use crate::core::{to_caps, uppercase};

pub use cli::{Cli, execute};

pub use dispatch::{Environment, Mode, select_mode};

pub use gui::{CapsApp, Clipboard, ConverterState, SystemClipboard};
