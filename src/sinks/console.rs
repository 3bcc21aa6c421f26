//! Console sink writing to stderr

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::io::{self, Write};

/// Writes each record as one line on stderr.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    // Keeps lines from different threads whole.
    lock: Mutex<()>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sink for ConsoleSink {
    fn write(&self, formatted: &str) -> Result<()> {
        let _guard = self.lock.lock();
        let mut stderr = io::stderr().lock();
        stderr.write_all(formatted.as_bytes())?;
        stderr.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
