//! Sink trait for log output destinations

use super::error::Result;

/// Destination for formatted lines.
///
/// Sinks are shared between loggers and threads, so `write` takes `&self`
/// and implementations serialize internally. One call writes one record;
/// the sink adds the line terminator.
pub trait Sink: Send + Sync {
    fn write(&self, formatted: &str) -> Result<()>;
    fn flush(&self) -> Result<()>;

    /// Short name used in diagnostics.
    fn name(&self) -> &str {
        "sink"
    }
}
