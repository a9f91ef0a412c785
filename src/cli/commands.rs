//! CLI command implementation.

use crate::cli::parser::Cli;
use crate::core::{ensure_trailing_newline, uppercase};
use crate::error::Result;
use crate::io::read_input;
use std::io::Read;
use tracing::{debug, info};

/// Executes the conversion described by the parsed arguments.
///
/// Positional text takes precedence; `stdin` is only read when no text
/// arguments were given, even if it is a pipe with data waiting.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
/// * `stdin` - Stream to read when no text arguments are present.
///
/// # Returns
///
/// The converted text, always ending with a newline.
///
/// # Errors
///
/// Returns an error if reading `stdin` fails.
pub fn execute<R: Read>(cli: &Cli, stdin: R) -> Result<String> {
    let input = if let Some(text) = cli.joined_text() {
        debug!(args = cli.text.len(), "converting positional arguments");
        text
    } else {
        debug!("no text arguments, reading stdin");
        read_input(stdin)?
    };

    let output = ensure_trailing_newline(uppercase(&input));
    info!(
        input_bytes = input.len(),
        output_bytes = output.len(),
        "converted to uppercase"
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn cli_with(text: &[&str]) -> Cli {
        Cli {
            text: text.iter().map(ToString::to_string).collect(),
            verbose: 0,
        }
    }

    #[test]
    fn test_execute_args() {
        let out = execute(&cli_with(&["hello", "world"]), io::empty()).unwrap();
        assert_eq!(out, "HELLO WORLD\n");
    }

    #[test]
    fn test_execute_stdin_with_newline() {
        let out = execute(&cli_with(&[]), &b"abc\n"[..]).unwrap();
        assert_eq!(out, "ABC\n");
    }

    #[test]
    fn test_execute_stdin_without_newline() {
        let out = execute(&cli_with(&[]), &b"abc"[..]).unwrap();
        assert_eq!(out, "ABC\n");
    }

    #[test]
    fn test_execute_empty_stdin() {
        let out = execute(&cli_with(&[]), io::empty()).unwrap();
        assert_eq!(out, "\n");
    }

    #[test]
    fn test_execute_args_win_over_stdin() {
        let out = execute(&cli_with(&["from", "args"]), &b"from stdin\n"[..]).unwrap();
        assert_eq!(out, "FROM ARGS\n");
    }

    #[test]
    fn test_execute_multiline_stdin() {
        let out = execute(&cli_with(&[]), &b"one\ntwo\n\n"[..]).unwrap();
        assert_eq!(out, "ONE\nTWO\n\n");
    }
}
