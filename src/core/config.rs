//! Process-wide logger configuration
//!
//! Holds the runtime level threshold and the active [`Theme`]. The instance is
//! created on first access and lives until the process exits. Loggers consult
//! it on every call, so changes apply to loggers that already exist.

use super::level::Level;
use super::theme::Theme;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

static CONFIG: OnceLock<GlobalConfig> = OnceLock::new();

#[derive(Debug)]
pub struct GlobalConfig {
    level: AtomicU8,
    theme: RwLock<Theme>,
}

impl GlobalConfig {
    fn new() -> Self {
        Self {
            level: AtomicU8::new(Level::default().as_u8()),
            theme: RwLock::new(Theme::default()),
        }
    }

    /// The process-wide configuration.
    pub fn instance() -> &'static GlobalConfig {
        CONFIG.get_or_init(GlobalConfig::new)
    }

    /// Current runtime threshold.
    #[inline]
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    #[inline]
    pub fn set_level(&self, level: Level) {
        self.level.store(level.as_u8(), Ordering::Relaxed);
    }

    /// A copy of the active theme.
    pub fn theme(&self) -> Theme {
        *self.theme.read()
    }

    pub fn set_theme(&self, theme: Theme) {
        *self.theme.write() = theme;
    }
}

/// Whether a message at `level` would be emitted right now.
#[inline]
pub fn enabled(level: Level) -> bool {
    level.passes(GlobalConfig::instance().level())
}
