//! Core logger types and traits

pub mod config;
pub mod error;
pub mod field;
pub mod formatter;
pub mod level;
pub mod logger;
pub mod record;
pub mod sink;
pub mod theme;
pub mod timestamp;

pub use config::{enabled, GlobalConfig};
pub use error::{LoggerError, Result};
pub use field::{Field, FieldSet};
pub use formatter::{DefaultFormatter, Formatter, JsonFormatter};
pub use level::{Level, STATIC_MAX_LEVEL};
pub use logger::{Logger, LoggerBuilder};
pub use record::LogRecord;
pub use sink::Sink;
pub use theme::{colorize, should_use_color, Color, Theme};
pub use timestamp::TimestampFormat;
