//! Output writing.

use crate::error::{IoError, Result};
use std::io::{ErrorKind, Write};
use tracing::debug;

/// Writes text to a stream and flushes it.
///
/// A broken pipe (e.g. output piped into `head`) ends the write quietly.
///
/// # Errors
///
/// Returns an error for any write failure other than a broken pipe.
pub fn write_output<W: Write>(mut writer: W, text: &str) -> Result<()> {
    match writer.write_all(text.as_bytes()).and_then(|()| writer.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("stdout closed before output was fully written");
            Ok(())
        }
        Err(e) => Err(IoError::WriteFailed {
            reason: e.to_string(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FailingWriter(ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(self.0, "write refused"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_output() {
        let mut out = Vec::new();
        write_output(&mut out, "ABC\n").unwrap();
        assert_eq!(out, b"ABC\n");
    }

    #[test]
    fn test_write_output_broken_pipe_is_ok() {
        assert!(write_output(FailingWriter(ErrorKind::BrokenPipe), "ABC\n").is_ok());
    }

    #[test]
    fn test_write_output_other_failure() {
        let err = write_output(FailingWriter(ErrorKind::StorageFull), "ABC\n").unwrap_err();
        assert!(err.to_string().contains("failed to write stdout"));
    }
}
