//! Input reading.

use crate::error::{IoError, Result};
use std::io::Read;
use tracing::{debug, warn};

/// Reads a stream to end-of-file and decodes it as UTF-8.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected,
/// so the conversion that follows always has text to work with.
///
/// # Examples
///
/// ```
/// use caps_locker::io::read_input;
///
/// let text = read_input(&b"abc\n"[..]).unwrap();
/// assert_eq!(text, "abc\n");
/// ```
///
/// # Errors
///
/// Returns an error if the underlying read fails.
pub fn read_input<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| IoError::ReadFailed {
            reason: e.to_string(),
        })?;
    debug!(bytes = bytes.len(), "read input stream");

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(
                offset = e.utf8_error().valid_up_to(),
                "input is not valid UTF-8, replacing invalid sequences"
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
