//! Sink over any `io::Write`

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::io::Write;

/// Writes one line per record to the wrapped writer.
///
/// ```
/// use redlog::{Sink, WriterSink};
///
/// let sink = WriterSink::new(Vec::new());
/// sink.write("hello").expect("in-memory write");
/// assert_eq!(sink.into_inner(), b"hello\n");
/// ```
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Run `f` with the writer locked.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.writer.lock())
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&self, formatted: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(formatted.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "writer"
    }
}
