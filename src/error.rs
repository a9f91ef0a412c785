//! Error types for caps-locker operations.
//!
//! The conversion itself cannot fail; errors only come from the edges:
//! reading standard input, writing standard output and starting the GUI.
//! Clipboard failures never leave the window; they are reported in its
//! error dialog as a [`ClipboardError`].

use thiserror::Error;

/// Result type alias for caps-locker operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors on the standard streams.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// The GUI could not be constructed or its event loop failed.
    #[error("{message}")]
    Gui {
        /// Description reported by the windowing backend.
        message: String,
    },
}

/// Errors on the standard streams.
#[derive(Error, Debug)]
pub enum IoError {
    /// Reading standard input failed.
    #[error("failed to read stdin: {reason}")]
    ReadFailed {
        /// Reason for failure.
        reason: String,
    },

    /// Writing standard output failed.
    #[error("failed to write stdout: {reason}")]
    WriteFailed {
        /// Reason for failure.
        reason: String,
    },
}

/// Errors raised while talking to the system clipboard.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// No clipboard is reachable (no display server, sandboxing, ...).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard was reachable but refused the text.
    #[error("{0}")]
    SetFailed(String),
}

impl From<eframe::Error> for Error {
    fn from(err: eframe::Error) -> Self {
        Self::Gui {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = IoError::ReadFailed {
            reason: "stream did not contain valid data".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read stdin: stream did not contain valid data"
        );

        let err = IoError::WriteFailed {
            reason: "disk full".to_string(),
        };
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_clipboard_error_display() {
        let err = ClipboardError::Unavailable("no display".to_string());
        assert_eq!(err.to_string(), "clipboard unavailable: no display");

        let err = ClipboardError::SetFailed("owner gone".to_string());
        assert_eq!(err.to_string(), "owner gone");
    }

    #[test]
    fn test_gui_error_display_is_bare_message() {
        let err = Error::Gui {
            message: "no display available".to_string(),
        };
        assert_eq!(err.to_string(), "no display available");
    }

    #[test]
    fn test_error_from_io_error() {
        let err: Error = IoError::WriteFailed {
            reason: "broken".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Io(IoError::WriteFailed { .. })));
        assert_eq!(err.to_string(), "I/O error: failed to write stdout: broken");
    }
}
