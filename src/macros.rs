//! Argument-capturing and logging macros.
//!
//! The logging macros check the level gate before any argument is
//! converted, so a disabled call costs one atomic load.
//!
//! # Examples
//!
//! ```
//! use redlog::prelude::*;
//! use redlog::{fmt, info};
//!
//! let logger = Logger::new("server");
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Listening on port %d", port);
//!
//! assert_eq!(fmt!("%s:%05d", "host", 42), "host:00042");
//! ```

/// Convert any value into an [`Arg`](crate::printf::Arg).
///
/// Values with a built-in representation (strings, numbers, `bool`, `char`,
/// `Option`) keep it; anything else that implements `Display` renders
/// through it; everything else becomes `[unprintable]`.
///
/// ```
/// use redlog::{arg, printf::Arg};
///
/// struct Secret;
/// assert!(matches!(arg!(7u8), Arg::UInt(7)));
/// assert_eq!(arg!(Secret).stringify(), "[unprintable]");
/// ```
#[macro_export]
macro_rules! arg {
    ($value:expr) => {{
        #[allow(unused_imports)]
        use $crate::printf::dispatch::{ViaDisplay as _, ViaOpaque as _, ViaToArg as _};
        (&&&$crate::printf::dispatch::Wrap(&$value)).redlog_arg()
    }};
}

/// Build an array of [`Arg`](crate::printf::Arg)s for the `_f` logger methods.
///
/// Each `Arg` borrows its value, so use the array inline in the call. Only
/// places and constants may be bound with `let`; name a computed value first.
///
/// ```
/// use redlog::{args, Logger};
///
/// let logger = Logger::new("app");
/// let attempt = 2;
/// logger.info_f("%s=%d", &args!("retries", attempt + 1));
///
/// let next = attempt + 1;
/// let bound = args!("retries", next);
/// logger.info_f("%s=%d", &bound);
/// ```
///
/// ```compile_fail
/// use redlog::args;
///
/// let attempt = 2;
/// let bound = args!(attempt + 1);
/// drop(bound);
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        [$($crate::arg!($value)),*]
    };
}

/// Render a printf-style format string.
///
/// ```
/// use redlog::fmt;
///
/// assert_eq!(fmt!("%d%%", 50), "50%");
/// assert_eq!(fmt!("%-5s|", "ab"), "ab   |");
/// ```
#[macro_export]
macro_rules! fmt {
    ($format:expr $(, $value:expr)* $(,)?) => {
        $crate::printf::render_guarded($format, &[$($crate::arg!($value)),*])
    };
}

/// Build a [`Field`](crate::Field), choosing the value's representation
/// like [`arg!`].
#[macro_export]
macro_rules! field {
    ($key:expr, $value:expr) => {
        $crate::Field::from_arg($key, $crate::arg!($value))
    };
}

/// Build a [`FieldSet`](crate::FieldSet) from `key => value` pairs.
///
/// ```
/// use redlog::fields;
///
/// let set = fields!("user" => "alice", "attempt" => 2);
/// assert_eq!(set.to_string(), "user=alice attempt=2");
/// ```
#[macro_export]
macro_rules! fields {
    ($($key:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut set = $crate::FieldSet::new();
        $(set.add($crate::field!($key, $value));)*
        set
    }};
}

/// Log a printf-style message at a given level.
///
/// Arguments are not evaluated when the level is disabled.
///
/// ```
/// # use redlog::prelude::*;
/// # let logger = Logger::new("app");
/// use redlog::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: %d", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $format:expr $(, $value:expr)* $(,)?) => {{
        let logger = &$logger;
        let level: $crate::Level = $level;
        if logger.is_enabled(level) {
            logger.log_f(level, $format, &[$($crate::arg!($value)),*]);
        }
    }};
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Critical, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use redlog::prelude::*;
/// # let logger = Logger::new("db");
/// use redlog::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: %d, message: %s", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a verbose-level message.
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Verbose, $($arg)+)
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log a pedantic-level message.
#[macro_export]
macro_rules! pedantic {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Pedantic, $($arg)+)
    };
}

/// Log an annoying-level message.
#[macro_export]
macro_rules! annoying {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Annoying, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{DefaultFormatter, GlobalConfig, Level, Logger, Theme};
    use crate::printf::Arg;
    use crate::sinks::WriterSink;
    use serial_test::serial;
    use std::cell::Cell;
    use std::fmt;
    use std::sync::Arc;

    struct Celsius(f64);

    impl fmt::Display for Celsius {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:.1}C", self.0)
        }
    }

    #[test]
    fn test_arg_macro_dispatch() {
        struct Opaque;
        let name = String::from("bob");

        assert!(matches!(arg!(42), Arg::Int(42)));
        assert!(matches!(arg!(name), Arg::Str("bob")));
        assert!(matches!(arg!(&name), Arg::Str("bob")));
        assert!(matches!(arg!(Some(1.5)), Arg::Float(_)));
        assert_eq!(arg!(Celsius(21.55)).stringify(), "21.6C");
        assert_eq!(arg!(Opaque).stringify(), "[unprintable]");
    }

    #[test]
    fn test_fmt_macro() {
        assert_eq!(fmt!("plain"), "plain");
        assert_eq!(fmt!("%s is %d", "answer", 42), "answer is 42");
        assert_eq!(fmt!("temp=%s", Celsius(-3.0)), "temp=-3.0C");
        assert_eq!(fmt!("%s", format!("owned {}", 1)), "owned 1");
        assert_eq!(fmt!("%d %d,", 1, 2,), "1 2,");
    }

    #[test]
    fn test_field_macros() {
        let field = field!("temp", Celsius(10.0));
        assert_eq!(field.value(), "10.0C");

        let set = fields!("a" => 1, "b" => true, "a" => "again");
        assert_eq!(set.len(), 3);
        assert_eq!(set.to_string(), "a=1 b=true a=again");
        assert!(fields!().is_empty());
    }

    #[test]
    #[serial]
    fn test_log_macros_skip_arguments_when_disabled() {
        let config = GlobalConfig::instance();
        let original = config.level();
        config.set_level(Level::Info);

        let sink = Arc::new(WriterSink::new(Vec::new()));
        let logger = Logger::builder()
            .name("macros")
            .formatter(DefaultFormatter::with_theme(Theme::plain()))
            .shared_sink(sink.clone())
            .build();

        let evaluated = Cell::new(0);
        let count = || {
            evaluated.set(evaluated.get() + 1);
            evaluated.get()
        };

        debug!(logger, "debug %d", count());
        annoying!(logger, "annoying %d", count());
        info!(logger, "info %d", count());
        warn!(logger, "warn %s", "text");
        critical!(logger, "critical");
        log!(logger, Level::Error, "error %x", 255);

        config.set_level(original);

        assert_eq!(evaluated.get(), 1);
        let out = sink.with_writer(|buf| String::from_utf8_lossy(buf).into_owned());
        assert!(!out.contains("debug"));
        assert!(!out.contains("annoying"));
        assert!(out.contains("[inf] info 1"));
        assert!(out.contains("[wrn] warn text"));
        assert!(out.contains("[crt] critical"));
        assert!(out.contains("[err] error ff"));
    }

    #[test]
    #[serial]
    fn test_all_level_macros_compile() {
        let config = GlobalConfig::instance();
        let original = config.level();
        config.set_level(Level::Annoying);

        let sink = Arc::new(WriterSink::new(Vec::new()));
        let logger = Logger::builder().shared_sink(sink.clone()).build();
        verbose!(logger, "v");
        trace!(logger, "t");
        debug!(logger, "d");
        pedantic!(logger, "p");
        annoying!(logger, "a %d", 1);
        error!(logger, "e");

        config.set_level(original);
        let lines = sink.with_writer(|buf| buf.iter().filter(|&&b| b == b'\n').count());
        assert_eq!(lines, 6);
    }
}
