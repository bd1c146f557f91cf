//! Line-oriented I/O for the session loop
//!
//! The session only needs to read a line and write a line. [`Console`] is
//! that seam; [`StreamConsole`] backs it with any reader/writer pair, which
//! covers piped stdin as well as in-memory buffers in tests.

use rustyline::error::ReadlineError;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
}

pub trait Console {
    /// Show `prompt` and read one line without its line terminator.
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError>;

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;
}

/// Console over a buffered reader and a writer
pub struct StreamConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        StreamConsole { reader, writer }
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        // Bytes that are not UTF-8 become U+FFFD and fail validation later
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}
