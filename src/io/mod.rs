//! Standard-stream I/O for caps-locker.
//!
//! Reads the whole of an input stream as text and writes converted text,
//! treating a closed downstream pipe as a normal end of output.

pub mod reader;
pub mod writer;

pub use reader::read_input;
pub use writer::write_output;
