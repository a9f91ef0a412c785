//! Converter window state.
//!
//! Holds everything the window shows and implements its event handling
//! without touching the toolkit, so the behavior can be driven directly
//! from tests.

use crate::core::{strip_trailing_newlines, trim_trailing_newline, uppercase};
use crate::gui::clipboard::Clipboard;
use tracing::{debug, warn};

/// Status shown when the window first opens.
pub const STATUS_READY: &str = "Ready";
/// Status after the output has been recomputed.
pub const STATUS_CONVERTED: &str = "Converted to UPPERCASE";
/// Status after the output has been copied.
pub const STATUS_COPIED: &str = "Output copied to clipboard";
/// Status after both fields have been emptied.
pub const STATUS_CLEARED: &str = "Cleared";

/// State behind the converter window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterState {
    input: String,
    output: String,
    auto_convert: bool,
    status: &'static str,
    input_modified: bool,
    error: Option<String>,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterState {
    /// Creates empty state with auto-convert enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            auto_convert: true,
            status: STATUS_READY,
            input_modified: false,
            error: None,
        }
    }

    /// Current input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Mutable access for the input widget.
    ///
    /// Callers editing through this must report the edit with
    /// [`mark_input_modified`](Self::mark_input_modified).
    pub const fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    /// Replaces the input text as if the user had typed it, then handles
    /// the resulting modification.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.mark_input_modified();
        self.on_input_modified();
    }

    /// Current output text. Only the event handlers write it.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Whether edits recompute the output immediately.
    #[must_use]
    pub const fn auto_convert(&self) -> bool {
        self.auto_convert
    }

    /// Toggles auto-convert. Does not recompute by itself.
    pub const fn set_auto_convert(&mut self, enabled: bool) {
        self.auto_convert = enabled;
    }

    /// Most recent status message.
    #[must_use]
    pub const fn status(&self) -> &'static str {
        self.status
    }

    /// Status message as rendered in the status bar.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!(" {}", self.status)
    }

    /// Message for the pending error dialog, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Closes the error dialog.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Records that the input widget changed.
    pub const fn mark_input_modified(&mut self) {
        self.input_modified = true;
    }

    /// Whether an input change is waiting to be handled.
    #[must_use]
    pub const fn is_input_modified(&self) -> bool {
        self.input_modified
    }

    /// Handles a pending input modification.
    ///
    /// The flag is acknowledged before converting, so a change reported
    /// while converting is handled on the next call instead of recursing.
    pub fn on_input_modified(&mut self) {
        if !self.input_modified {
            return;
        }
        self.input_modified = false;
        if self.auto_convert {
            self.convert_now();
        }
    }

    /// Recomputes the output from the input regardless of auto-convert.
    pub fn convert_now(&mut self) {
        let source = strip_trailing_newlines(&self.input);
        self.output = uppercase(source);
        self.status = STATUS_CONVERTED;
        debug!(chars = self.output.chars().count(), "converted input");
    }

    /// Copies the output to `clipboard`.
    ///
    /// On failure the error dialog is raised and the status is left as it
    /// was.
    pub fn copy_output(&mut self, clipboard: &mut dyn Clipboard) {
        let text = trim_trailing_newline(&self.output);
        match clipboard.set_text(text) {
            Ok(()) => self.status = STATUS_COPIED,
            Err(e) => {
                warn!(error = %e, "copy to clipboard failed");
                self.error = Some(format!("Failed to copy: {e}"));
            }
        }
    }

    /// Empties both input and output.
    pub fn clear_all(&mut self) {
        self.input.clear();
        self.output.clear();
        self.input_modified = false;
        self.status = STATUS_CLEARED;
    }
}
