//! Record formatters
//!
//! A [`Formatter`] turns a [`LogRecord`] into one line of text. It must not
//! touch shared mutable state, since one instance is shared by every logger
//! derived from the same root.

use super::config::GlobalConfig;
use super::error::Result;
use super::record::LogRecord;
use super::theme::{colorize, Color, Theme};
use super::timestamp::TimestampFormat;
use serde_json::{Map, Value};

/// Width of the widest `[lvl]` tag.
const LEVEL_TAG_WIDTH: usize = 5;

pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord<'_>) -> Result<String>;
}

/// Aligned, optionally colored text:
///
/// ```text
/// [server]    [inf] request handled                              path=/ status=200
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultFormatter {
    theme: Option<Theme>,
}

impl DefaultFormatter {
    /// Formatter that follows the global theme.
    pub fn new() -> Self {
        Self { theme: None }
    }

    /// Formatter pinned to `theme`, ignoring later global theme changes.
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme: Some(theme) }
    }

    pub fn theme(&self) -> Theme {
        self.theme
            .unwrap_or_else(|| GlobalConfig::instance().theme())
    }

    fn render(&self, record: &LogRecord<'_>, theme: &Theme) -> String {
        let mut out = String::with_capacity(
            theme.source_width + theme.message_fixed_width + record.message.len() + 32,
        );

        if !record.source.is_empty() {
            let source = format!("[{}]", record.source);
            let padding = theme
                .source_width
                .saturating_sub(source.chars().count())
                .max(1);
            out.push_str(&colorize(&source, theme.source_color, theme.source_bg_color));
            push_spaces(&mut out, padding);
        }

        let mut tag = format!("[{}]", record.level.short_name());
        if theme.pad_level_text {
            let padding = LEVEL_TAG_WIDTH.saturating_sub(tag.len());
            push_spaces(&mut tag, padding);
        }
        out.push_str(&colorize(
            &tag,
            theme.level_color(record.level),
            theme.level_bg_color(record.level),
        ));
        out.push(' ');

        out.push_str(&colorize(record.message, theme.message_color, Color::None));

        if !record.fields.is_empty() {
            let padding = theme
                .message_fixed_width
                .saturating_sub(record.message.chars().count());
            push_spaces(&mut out, padding);
            out.push(' ');

            for (i, field) in record.fields.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(&colorize(field.key(), theme.field_key_color, Color::None));
                out.push('=');
                out.push_str(&colorize(field.value(), theme.field_value_color, Color::None));
            }
        }

        out
    }
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}

impl Formatter for DefaultFormatter {
    fn format(&self, record: &LogRecord<'_>) -> Result<String> {
        let theme = self.theme();
        Ok(self.render(record, &theme))
    }
}

/// One JSON object per record.
///
/// Fields are an array of single-key objects so duplicate keys and their
/// order survive.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    timestamp_format: TimestampFormat,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn to_value(&self, record: &LogRecord<'_>) -> Value {
        let mut obj = Map::new();
        obj.insert(
            "timestamp".to_string(),
            self.timestamp_format.to_json_value(&record.timestamp),
        );
        obj.insert("level".to_string(), record.level.name().into());
        obj.insert("source".to_string(), record.source.into());
        obj.insert("message".to_string(), record.message.into());

        let fields = record
            .fields
            .iter()
            .map(|field| {
                let mut entry = Map::with_capacity(1);
                entry.insert(field.key().to_string(), field.value().into());
                Value::Object(entry)
            })
            .collect();
        obj.insert("fields".to_string(), Value::Array(fields));

        Value::Object(obj)
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, record: &LogRecord<'_>) -> Result<String> {
        Ok(serde_json::to_string(&self.to_value(record))?)
    }
}
