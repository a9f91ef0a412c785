//! Startup mode selection.
//!
//! The process runs as a filter whenever it was given arguments or its
//! standard input is redirected; only a bare launch from an interactive
//! terminal (or a desktop double-click) opens the window.

use std::io::IsTerminal;

/// Facts about the execution environment that decide the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment {
    /// Arguments beyond the program name were supplied.
    pub has_args: bool,
    /// Standard input is attached to an interactive terminal.
    pub stdin_is_terminal: bool,
}

impl Environment {
    /// Captures the current process environment.
    #[must_use]
    pub fn capture() -> Self {
        Self {
            has_args: std::env::args_os().len() > 1,
            stdin_is_terminal: std::io::stdin().is_terminal(),
        }
    }
}

/// How the process should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Convert arguments or piped input and exit.
    Cli,
    /// Open the converter window.
    Gui,
}

/// Picks the run mode for an environment.
///
/// # Examples
///
/// ```
/// use caps_locker::dispatch::{Environment, Mode, select_mode};
///
/// let env = Environment { has_args: false, stdin_is_terminal: true };
/// assert_eq!(select_mode(&env), Mode::Gui);
/// ```
#[must_use]
pub const fn select_mode(env: &Environment) -> Mode {
    if env.has_args || !env.stdin_is_terminal {
        Mode::Cli
    } else {
        Mode::Gui
    }
}
