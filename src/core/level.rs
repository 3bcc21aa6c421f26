//! Log level definitions
//!
//! Levels are ordered by priority: a lower numeric value is more important.
//! A message at level `L` passes a threshold `T` when `L <= T`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    /// System-breaking errors
    Critical = 0,
    /// Recoverable errors
    Error = 1,
    /// Warnings and potential issues
    Warn = 2,
    /// General informational messages
    #[default]
    Info = 3,
    /// Detailed operational information
    Verbose = 4,
    /// Detailed execution tracing
    Trace = 5,
    /// Debugging information
    Debug = 6,
    /// Extremely detailed debugging
    Pedantic = 7,
    /// Maximum verbosity
    Annoying = 8,
}

/// Build-time level ceiling.
///
/// Selected with the `max_level_*` cargo features. Messages more verbose than
/// this are discarded no matter what the runtime threshold says, which lets
/// production builds strip the noisiest levels entirely.
pub const STATIC_MAX_LEVEL: Level = if cfg!(feature = "max_level_critical") {
    Level::Critical
} else if cfg!(feature = "max_level_error") {
    Level::Error
} else if cfg!(feature = "max_level_warn") {
    Level::Warn
} else if cfg!(feature = "max_level_info") {
    Level::Info
} else if cfg!(feature = "max_level_verbose") {
    Level::Verbose
} else if cfg!(feature = "max_level_trace") {
    Level::Trace
} else if cfg!(feature = "max_level_debug") {
    Level::Debug
} else if cfg!(feature = "max_level_pedantic") {
    Level::Pedantic
} else {
    Level::Annoying
};

impl Level {
    /// Every level, most important first.
    pub const ALL: [Level; 9] = [
        Level::Critical,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Verbose,
        Level::Trace,
        Level::Debug,
        Level::Pedantic,
        Level::Annoying,
    ];

    /// Full lowercase name, e.g. `"critical"`.
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Critical => "critical",
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Verbose => "verbose",
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Pedantic => "pedantic",
            Level::Annoying => "annoying",
        }
    }

    /// Three-letter tag used by the default text layout, e.g. `"crt"`.
    pub const fn short_name(&self) -> &'static str {
        match self {
            Level::Critical => "crt",
            Level::Error => "err",
            Level::Warn => "wrn",
            Level::Info => "inf",
            Level::Verbose => "vrb",
            Level::Trace => "trc",
            Level::Debug => "dbg",
            Level::Pedantic => "ped",
            Level::Annoying => "ayg",
        }
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Level::as_u8`]. Values above 8 yield `None`.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Level::Critical),
            1 => Some(Level::Error),
            2 => Some(Level::Warn),
            3 => Some(Level::Info),
            4 => Some(Level::Verbose),
            5 => Some(Level::Trace),
            6 => Some(Level::Debug),
            7 => Some(Level::Pedantic),
            8 => Some(Level::Annoying),
            _ => None,
        }
    }

    /// True when a message at this level passes `threshold` and the build-time ceiling.
    #[inline]
    pub const fn passes(self, threshold: Level) -> bool {
        self.passes_with(STATIC_MAX_LEVEL, threshold)
    }

    /// Gate against an explicit `ceiling`. Both limits must admit the level.
    #[inline]
    pub const fn passes_with(self, ceiling: Level, threshold: Level) -> bool {
        self.as_u8() <= ceiling.as_u8() && self.as_u8() <= threshold.as_u8()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" | "crt" => Ok(Level::Critical),
            "error" | "err" => Ok(Level::Error),
            "warn" | "warning" | "wrn" => Ok(Level::Warn),
            "info" | "inf" => Ok(Level::Info),
            "verbose" | "vrb" => Ok(Level::Verbose),
            "trace" | "trc" => Ok(Level::Trace),
            "debug" | "dbg" => Ok(Level::Debug),
            "pedantic" | "ped" => Ok(Level::Pedantic),
            "annoying" | "ayg" => Ok(Level::Annoying),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
