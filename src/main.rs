//! Binary entry point for caps-locker.
//!
//! Runs as a filter when given arguments or piped input, otherwise opens
//! the converter window.

#![allow(clippy::print_stderr)]

use caps_locker::cli::{Cli, execute};
use caps_locker::dispatch::{Environment, Mode, select_mode};
use caps_locker::io::write_output;
use caps_locker::{gui, logging};
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let env = Environment::capture();
    let mode = select_mode(&env);

    match mode {
        Mode::Cli => run_cli(),
        Mode::Gui => run_gui(),
    }
}

fn run_cli() -> ExitCode {
    // Usage errors exit here with clap's message and status.
    let cli = Cli::parse();
    logging::init(cli.verbose);
    debug!(mode = ?Mode::Cli, "selected mode");

    let result = execute(&cli, io::stdin().lock())
        .and_then(|output| write_output(io::stdout().lock(), &output));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_gui() -> ExitCode {
    logging::init(0);
    debug!(mode = ?Mode::Gui, "selected mode");

    match gui::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error starting GUI: {e}");
            ExitCode::FAILURE
        }
    }
}
