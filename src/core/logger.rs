//! Main logger implementation
//!
//! A [`Logger`] is an immutable value: a name, a set of fields, and shared
//! handles to a [`Formatter`] and a [`Sink`]. Deriving methods return new
//! loggers that share the same formatter and sink.

use super::{
    config,
    error::Result,
    field::{Field, FieldSet},
    formatter::{DefaultFormatter, Formatter},
    level::Level,
    record::LogRecord,
    sink::Sink,
};
use crate::printf::{self, Arg, ToArg};
use crate::sinks::ConsoleSink;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

#[derive(Clone)]
pub struct Logger {
    name: String,
    fields: FieldSet,
    formatter: Arc<dyn Formatter>,
    sink: Arc<dyn Sink>,
}

macro_rules! level_methods {
    ($($level:ident: $plain:ident, $with:ident, $f:ident / $short:ident, $short_with:ident, $short_f:ident;)*) => {
        $(
            #[doc = concat!("Log `message` at [`Level::", stringify!($level), "`].")]
            #[inline]
            pub fn $plain(&self, message: impl AsRef<str>) {
                self.log(Level::$level, message)
            }

            #[doc = concat!("Log at [`Level::", stringify!($level), "`] with extra fields.")]
            #[inline]
            pub fn $with(&self, message: impl AsRef<str>, fields: impl Into<FieldSet>) {
                self.log_with(Level::$level, message, fields)
            }

            #[doc = concat!("Render a printf format and log it at [`Level::", stringify!($level), "`].")]
            #[inline]
            pub fn $f(&self, format: &str, args: &[Arg<'_>]) {
                self.log_f(Level::$level, format, args)
            }

            #[doc = concat!("Alias for [`Logger::", stringify!($plain), "`].")]
            #[inline]
            pub fn $short(&self, message: impl AsRef<str>) {
                self.log(Level::$level, message)
            }

            #[doc = concat!("Alias for [`Logger::", stringify!($with), "`].")]
            #[inline]
            pub fn $short_with(&self, message: impl AsRef<str>, fields: impl Into<FieldSet>) {
                self.log_with(Level::$level, message, fields)
            }

            #[doc = concat!("Alias for [`Logger::", stringify!($f), "`].")]
            #[inline]
            pub fn $short_f(&self, format: &str, args: &[Arg<'_>]) {
                self.log_f(Level::$level, format, args)
            }
        )*
    };
}

impl Logger {
    /// Logger writing aligned text to stderr.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_parts(name, Arc::new(DefaultFormatter::new()), Arc::new(ConsoleSink::new()))
    }

    pub fn with_parts(
        name: impl Into<String>,
        formatter: Arc<dyn Formatter>,
        sink: Arc<dyn Sink>,
    ) -> Self {
        Self {
            name: name.into(),
            fields: FieldSet::new(),
            formatter,
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn formatter(&self) -> &Arc<dyn Formatter> {
        &self.formatter
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    /// A child logger named `parent.name`, or `name` when this logger is unnamed.
    #[must_use]
    pub fn with_name(&self, name: &str) -> Logger {
        let name = if self.name.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.name, name)
        };
        Logger {
            name,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_field<K: Into<String>, V: ToArg>(&self, key: K, value: V) -> Logger {
        Logger {
            fields: self.fields.with_field(Field::new(key, value)),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_fields(&self, fields: impl Into<FieldSet>) -> Logger {
        Logger {
            fields: self.fields.with_fields(&fields.into()),
            ..self.clone()
        }
    }

    /// Whether a call at `level` would produce output right now.
    #[inline]
    pub fn is_enabled(&self, level: Level) -> bool {
        config::enabled(level)
    }

    #[inline]
    pub fn log(&self, level: Level, message: impl AsRef<str>) {
        if !self.is_enabled(level) {
            return;
        }
        self.dispatch(level, message.as_ref(), None);
    }

    #[inline]
    pub fn log_with(&self, level: Level, message: impl AsRef<str>, fields: impl Into<FieldSet>) {
        if !self.is_enabled(level) {
            return;
        }
        let fields = fields.into();
        self.dispatch(level, message.as_ref(), Some(&fields));
    }

    #[inline]
    pub fn log_f(&self, level: Level, format: &str, args: &[Arg<'_>]) {
        if !self.is_enabled(level) {
            return;
        }
        let message = printf::render_guarded(format, args);
        self.dispatch(level, &message, None);
    }

    level_methods! {
        Critical: critical, critical_with, critical_f / crt, crt_with, crt_f;
        Error: error, error_with, error_f / err, err_with, err_f;
        Warn: warn, warn_with, warn_f / wrn, wrn_with, wrn_f;
        Info: info, info_with, info_f / inf, inf_with, inf_f;
        Verbose: verbose, verbose_with, verbose_f / vrb, vrb_with, vrb_f;
        Trace: trace, trace_with, trace_f / trc, trc_with, trc_f;
        Debug: debug, debug_with, debug_f / dbg, dbg_with, dbg_f;
        Pedantic: pedantic, pedantic_with, pedantic_f / ped, ped_with, ped_f;
        Annoying: annoying, annoying_with, annoying_f / ayg, ayg_with, ayg_f;
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }

    /// Format and write one record. Errors and panics from the formatter or
    /// sink are reported on stderr and never reach the caller.
    fn dispatch(&self, level: Level, message: &str, extra: Option<&FieldSet>) {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| -> Result<()> {
            let fields = LogRecord::merge_fields(&self.fields, extra);
            let record = LogRecord::new(level, message, &self.name, fields);
            let line = self.formatter.format(&record)?;
            self.sink.write(&line)
        }));

        let reason = match outcome {
            Ok(Ok(())) => return,
            Ok(Err(e)) => e.to_string(),
            Err(panic_info) => format!("panic: {}", panic_message(&*panic_info)),
        };
        eprintln!("[redlog-error] failed to log ({}): {}", reason, message);
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("sink", &self.sink.name())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Logger`]
///
/// # Example
/// ```
/// use redlog::prelude::*;
///
/// let logger = Logger::builder()
///     .name("server")
///     .formatter(JsonFormatter::new())
///     .sink(WriterSink::new(Vec::new()))
///     .field("version", "1.2.0")
///     .build();
/// assert_eq!(logger.name(), "server");
/// ```
pub struct LoggerBuilder {
    name: String,
    fields: FieldSet,
    formatter: Option<Arc<dyn Formatter>>,
    sink: Option<Arc<dyn Sink>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            fields: FieldSet::new(),
            formatter: None,
            sink: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Use a formatter that is already shared with other loggers.
    #[must_use = "builder methods return a new value"]
    pub fn shared_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Use a sink that is already shared with other loggers.
    #[must_use = "builder methods return a new value"]
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn field<K: Into<String>, V: ToArg>(mut self, key: K, value: V) -> Self {
        self.fields.add(Field::new(key, value));
        self
    }

    /// Build the Logger. Unset parts default to [`DefaultFormatter`] and
    /// [`ConsoleSink`].
    pub fn build(self) -> Logger {
        let formatter = self
            .formatter
            .unwrap_or_else(|| Arc::new(DefaultFormatter::new()));
        let sink = self.sink.unwrap_or_else(|| Arc::new(ConsoleSink::new()));
        Logger {
            name: self.name,
            fields: self.fields,
            formatter,
            sink,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
