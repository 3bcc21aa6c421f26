//! Per-call log record handed to a formatter

use super::field::FieldSet;
use super::level::Level;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::borrow::Cow;

/// One log event. Built on the calling thread, formatted once, then dropped.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord<'a> {
    pub level: Level,
    pub message: &'a str,
    /// Logger name; empty for an unnamed logger
    pub source: &'a str,
    pub fields: Cow<'a, FieldSet>,
    pub timestamp: DateTime<Utc>,
}

impl<'a> LogRecord<'a> {
    /// Record stamped with the current wall-clock time.
    pub fn new(level: Level, message: &'a str, source: &'a str, fields: Cow<'a, FieldSet>) -> Self {
        Self {
            level,
            message,
            source,
            fields,
            timestamp: Utc::now(),
        }
    }

    /// Logger fields followed by call-site fields. Borrows when there is
    /// nothing to append.
    pub fn merge_fields(logger: &'a FieldSet, call: Option<&FieldSet>) -> Cow<'a, FieldSet> {
        match call {
            Some(extra) if !extra.is_empty() => Cow::Owned(logger.with_fields(extra)),
            _ => Cow::Borrowed(logger),
        }
    }
}
