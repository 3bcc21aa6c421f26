//! Error types for the formatter/sink boundary
//!
//! Logging calls never return these; they surface from [`Formatter`] and
//! [`Sink`] implementations and from [`Logger::flush`].
//!
//! [`Formatter`]: crate::core::Formatter
//! [`Sink`]: crate::core::Sink
//! [`Logger::flush`]: crate::core::Logger::flush

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A formatter could not render a record
    #[error("Formatter error ({formatter}): {message}")]
    Formatter { formatter: String, message: String },

    /// A sink could not accept output
    #[error("Sink error ({sink}): {message}")]
    Sink { sink: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn formatter(formatter: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Formatter {
            formatter: formatter.into(),
            message: message.into(),
        }
    }

    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Sink {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
