//! # redlog
//!
//! A lightweight structured logger with a printf-style formatter.
//!
//! ## Features
//!
//! - **Nine levels**: `critical` through `annoying`, gated by a runtime
//!   threshold and a compile-time ceiling (`max_level_*` features)
//! - **Immutable loggers**: `with_name`, `with_field` and `with_fields`
//!   return new loggers sharing the same formatter and sink
//! - **printf formatting**: `%d %u %x %o %f %e %g %c %s` with flags, width
//!   and precision; anything unrecognized passes through unchanged
//! - **Never fails**: formatting and output errors are reported on stderr
//!   and never reach the caller
//!
//! ```
//! use redlog::prelude::*;
//!
//! let log = redlog::get_logger("app").with_field("version", "1.0");
//! log.info("started");
//! log.with_name("db").wrn_f("slow query: %.1f ms", &[Arg::Float(12.34)]);
//!
//! assert_eq!(redlog::fmt("%05.1f", &[Arg::Float(3.14159)]), "003.1");
//! ```

pub mod core;
pub mod macros;
pub mod printf;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        DefaultFormatter, Field, FieldSet, Formatter, JsonFormatter, Level, LogRecord, Logger,
        LoggerBuilder, LoggerError, Result, Sink, Theme, TimestampFormat,
    };
    pub use crate::printf::{Arg, ToArg};
    pub use crate::sinks::{ConsoleSink, FileSink, WriterSink};
}

pub use crate::core::{
    colorize, enabled, should_use_color, Color, DefaultFormatter, Field, FieldSet, Formatter,
    GlobalConfig, JsonFormatter, Level, LogRecord, Logger, LoggerBuilder, LoggerError, Result,
    Sink, Theme, TimestampFormat, STATIC_MAX_LEVEL,
};
pub use crate::printf::{stringify, Arg, ToArg};
pub use crate::sinks::{ConsoleSink, FileSink, WriterSink};

/// Set the process-wide level threshold.
pub fn set_level(level: Level) {
    GlobalConfig::instance().set_level(level);
}

/// Current process-wide level threshold.
pub fn level() -> Level {
    GlobalConfig::instance().level()
}

/// Replace the process-wide theme used by [`DefaultFormatter`].
pub fn set_theme(theme: Theme) {
    GlobalConfig::instance().set_theme(theme);
}

/// A copy of the process-wide theme.
pub fn theme() -> Theme {
    GlobalConfig::instance().theme()
}

/// A logger named `name` writing aligned text to stderr.
pub fn get_logger(name: &str) -> Logger {
    Logger::new(name)
}

/// Render a printf-style format string. Never panics; a failure inside a
/// user `Display` impl yields `[format_error]`.
pub fn fmt(format: &str, args: &[Arg<'_>]) -> String {
    printf::render_guarded(format, args)
}
