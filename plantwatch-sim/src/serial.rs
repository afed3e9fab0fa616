//! Serial link stand-in
//!
//! Writes each telemetry line to an `io::Write` and flushes it, so a reader
//! on the other end of a pipe sees whole lines as soon as they are emitted.

use std::io::{self, Write};

use plantwatch_core::TelemetrySink;

/// Telemetry sink over any writer
pub struct WriterSink<W: Write> {
    writer: W,
    lines_written: u64,
}

impl<W: Write> WriterSink<W> {
    /// Wraps `writer`
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }

    /// Lines fully written so far
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Underlying writer
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwraps the sink, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TelemetrySink for WriterSink<W> {
    type Error = io::Error;

    fn write_line(&mut self, line: &str) -> nb::Result<(), Self::Error> {
        let written = self
            .writer
            .write_all(line.as_bytes())
            .and_then(|()| self.writer.flush());

        match written {
            Ok(()) => {
                self.lines_written += 1;
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::WouldBlock => Err(nb::Error::WouldBlock),
            Err(err) => Err(nb::Error::Other(err)),
        }
    }
}
