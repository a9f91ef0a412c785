//! Desktop GUI for caps-locker.
//!
//! One window: an editable input area, a read-only output area, an
//! auto-convert toggle, Convert / Copy Output / Clear buttons and a status
//! bar. Built on eframe; the behavior lives in [`state`] so it can be
//! tested without a display.

pub mod app;
pub mod clipboard;
pub mod state;

pub use app::CapsApp;
pub use clipboard::{Clipboard, SystemClipboard};
pub use state::ConverterState;

use crate::error::Result;
use eframe::egui;
use tracing::info;

/// Window title.
pub const APP_TITLE: &str = "Caps Locker – Uppercase Converter";

/// Smallest window size in logical points.
pub const MIN_WINDOW_SIZE: [f32; 2] = [540.0, 360.0];

/// Window size at startup in logical points.
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [640.0, 420.0];

/// Padding around the window contents in logical points.
pub const PANEL_MARGIN: f32 = 16.0;

/// Label above the input area.
pub const INPUT_LABEL: &str = "Input";
/// Label above the output area.
pub const OUTPUT_LABEL: &str = "Output (UPPERCASE)";
/// Auto-convert checkbox text.
pub const AUTO_CONVERT_LABEL: &str = "Auto-convert";
/// Convert button text.
pub const CONVERT_LABEL: &str = "Convert";
/// Copy button text.
pub const COPY_LABEL: &str = "Copy Output";
/// Clear button text.
pub const CLEAR_LABEL: &str = "Clear";
/// Title of the error dialog.
pub const ERROR_TITLE: &str = "Error";

/// Window configuration for the converter.
#[must_use]
pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size(DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    }
}

/// Opens the converter window and blocks until it is closed.
///
/// # Errors
///
/// Returns [`Error::Gui`](crate::Error::Gui) if the window cannot be created,
/// e.g. when no display is available.
pub fn run() -> Result<()> {
    info!("starting GUI");
    eframe::run_native(
        APP_TITLE,
        native_options(),
        Box::new(|_cc| Ok(Box::new(CapsApp::new()))),
    )?;
    Ok(())
}
