//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{ArgAction, Parser};

/// Help text shown above the usage line.
pub const ABOUT: &str = "Convert text to UPPERCASE. \
    Example: ST010_FG01_BG1_Container_Present -> ST010_FG01_BG1_CONTAINER_PRESENT";

/// Command-line arguments.
#[derive(Parser, Debug, Default)]
#[command(name = "caps-locker")]
#[command(version, about = ABOUT, long_about = None)]
pub struct Cli {
    /// Text to convert. If omitted, reads from STDIN.
    ///
    /// Multiple arguments are joined with single spaces. Pass `--` first
    /// to convert text that starts with a hyphen.
    pub text: Vec<String>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Returns the positional arguments joined with spaces, or `None`
    /// when input should come from standard input instead.
    #[must_use]
    pub fn joined_text(&self) -> Option<String> {
        if self.text.is_empty() {
            None
        } else {
            Some(self.text.join(" "))
        }
    }
}
