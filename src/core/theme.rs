//! Colors and layout for the default text formatter

use super::level::Level;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// ANSI colors understood by [`Theme`].
///
/// `On*` variants are background colors. `None` disables coloring for the
/// slot it is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    None,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    OnRed,
    OnGreen,
    OnYellow,
    OnBlue,
    OnMagenta,
    OnCyan,
    OnWhite,
    OnGray,
    OnBrightRed,
    OnBrightGreen,
    OnBrightYellow,
    OnBrightBlue,
    OnBrightMagenta,
    OnBrightCyan,
    OnBrightWhite,
}

impl Color {
    /// SGR parameter for this color, `None` for [`Color::None`].
    pub const fn ansi_code(&self) -> Option<u8> {
        let code = match self {
            Color::None => return None,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::BrightBlack => 90,
            Color::BrightRed => 91,
            Color::BrightGreen => 92,
            Color::BrightYellow => 93,
            Color::BrightBlue => 94,
            Color::BrightMagenta => 95,
            Color::BrightCyan => 96,
            Color::BrightWhite => 97,
            Color::OnRed => 41,
            Color::OnGreen => 42,
            Color::OnYellow => 43,
            Color::OnBlue => 44,
            Color::OnMagenta => 45,
            Color::OnCyan => 46,
            Color::OnWhite => 47,
            Color::OnGray => 100,
            Color::OnBrightRed => 101,
            Color::OnBrightGreen => 102,
            Color::OnBrightYellow => 103,
            Color::OnBrightBlue => 104,
            Color::OnBrightMagenta => 105,
            Color::OnBrightCyan => 106,
            Color::OnBrightWhite => 107,
        };
        Some(code)
    }

    /// The hue without its foreground/background role, as `colored` models it.
    #[cfg(feature = "console")]
    fn to_colored(self) -> Option<colored::Color> {
        use colored::Color as C;
        let color = match self {
            Color::None => return None,
            Color::Red | Color::OnRed => C::Red,
            Color::Green | Color::OnGreen => C::Green,
            Color::Yellow | Color::OnYellow => C::Yellow,
            Color::Blue | Color::OnBlue => C::Blue,
            Color::Magenta | Color::OnMagenta => C::Magenta,
            Color::Cyan | Color::OnCyan => C::Cyan,
            Color::White | Color::OnWhite => C::White,
            Color::BrightBlack | Color::OnGray => C::BrightBlack,
            Color::BrightRed | Color::OnBrightRed => C::BrightRed,
            Color::BrightGreen | Color::OnBrightGreen => C::BrightGreen,
            Color::BrightYellow | Color::OnBrightYellow => C::BrightYellow,
            Color::BrightBlue | Color::OnBrightBlue => C::BrightBlue,
            Color::BrightMagenta | Color::OnBrightMagenta => C::BrightMagenta,
            Color::BrightCyan | Color::OnBrightCyan => C::BrightCyan,
            Color::BrightWhite | Color::OnBrightWhite => C::BrightWhite,
        };
        Some(color)
    }
}

/// Visual configuration for [`DefaultFormatter`](crate::core::DefaultFormatter).
///
/// A theme is plain data. The global copy lives in
/// [`GlobalConfig`](crate::core::GlobalConfig) and readers always receive a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub critical_color: Color,
    pub error_color: Color,
    pub warn_color: Color,
    pub info_color: Color,
    pub verbose_color: Color,
    pub trace_color: Color,
    pub debug_color: Color,
    pub pedantic_color: Color,
    pub annoying_color: Color,

    pub critical_bg_color: Color,
    pub error_bg_color: Color,
    pub warn_bg_color: Color,
    pub info_bg_color: Color,
    pub verbose_bg_color: Color,
    pub trace_bg_color: Color,
    pub debug_bg_color: Color,
    pub pedantic_bg_color: Color,
    pub annoying_bg_color: Color,

    pub source_color: Color,
    pub source_bg_color: Color,
    pub message_color: Color,
    pub field_key_color: Color,
    pub field_value_color: Color,

    /// Column width reserved for `[source]`
    pub source_width: usize,
    /// Column width of the message when fields follow it
    pub message_fixed_width: usize,
    /// Pad `[lvl]` so every level tag has the same width
    pub pad_level_text: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            critical_color: Color::BrightMagenta,
            error_color: Color::Red,
            warn_color: Color::Yellow,
            info_color: Color::Green,
            verbose_color: Color::Blue,
            trace_color: Color::White,
            debug_color: Color::BrightCyan,
            pedantic_color: Color::BrightCyan,
            annoying_color: Color::BrightCyan,

            critical_bg_color: Color::None,
            error_bg_color: Color::None,
            warn_bg_color: Color::None,
            info_bg_color: Color::None,
            verbose_bg_color: Color::None,
            trace_bg_color: Color::None,
            debug_bg_color: Color::None,
            pedantic_bg_color: Color::None,
            annoying_bg_color: Color::None,

            source_color: Color::Cyan,
            source_bg_color: Color::None,
            message_color: Color::White,
            field_key_color: Color::BrightCyan,
            field_value_color: Color::White,

            source_width: 12,
            message_fixed_width: 44,
            pad_level_text: true,
        }
    }
}

impl Theme {
    /// No colors at all, default layout.
    pub fn plain() -> Self {
        Self {
            critical_color: Color::None,
            error_color: Color::None,
            warn_color: Color::None,
            info_color: Color::None,
            verbose_color: Color::None,
            trace_color: Color::None,
            debug_color: Color::None,
            pedantic_color: Color::None,
            annoying_color: Color::None,
            source_color: Color::None,
            message_color: Color::None,
            field_key_color: Color::None,
            field_value_color: Color::None,
            ..Self::default()
        }
    }

    /// Gray level badges with dimmed debug levels.
    pub fn minlog() -> Self {
        Self {
            debug_color: Color::BrightBlack,
            pedantic_color: Color::BrightBlack,
            annoying_color: Color::BrightBlack,
            critical_bg_color: Color::OnGray,
            error_bg_color: Color::OnGray,
            warn_bg_color: Color::OnGray,
            info_bg_color: Color::OnGray,
            verbose_bg_color: Color::OnGray,
            trace_bg_color: Color::OnGray,
            source_color: Color::BrightBlack,
            source_bg_color: Color::OnGray,
            ..Self::default()
        }
    }

    pub fn level_color(&self, level: Level) -> Color {
        match level {
            Level::Critical => self.critical_color,
            Level::Error => self.error_color,
            Level::Warn => self.warn_color,
            Level::Info => self.info_color,
            Level::Verbose => self.verbose_color,
            Level::Trace => self.trace_color,
            Level::Debug => self.debug_color,
            Level::Pedantic => self.pedantic_color,
            Level::Annoying => self.annoying_color,
        }
    }

    pub fn level_bg_color(&self, level: Level) -> Color {
        match level {
            Level::Critical => self.critical_bg_color,
            Level::Error => self.error_bg_color,
            Level::Warn => self.warn_bg_color,
            Level::Info => self.info_bg_color,
            Level::Verbose => self.verbose_bg_color,
            Level::Trace => self.trace_bg_color,
            Level::Debug => self.debug_bg_color,
            Level::Pedantic => self.pedantic_bg_color,
            Level::Annoying => self.annoying_bg_color,
        }
    }
}

/// Whether terminal colors should be emitted.
///
/// Decided once per process: `NO_COLOR`/`REDLOG_NO_COLOR` disable colors,
/// `FORCE_COLOR`/`REDLOG_FORCE_COLOR` force them, otherwise colors follow
/// whether stderr is a terminal. The decision is also handed to `colored`,
/// which would otherwise probe stdout on its own.
pub fn should_use_color() -> bool {
    static USE_COLOR: OnceLock<bool> = OnceLock::new();
    *USE_COLOR.get_or_init(|| {
        let decision =
            color_from_env(|name| std::env::var_os(name).is_some()).unwrap_or_else(|| {
                use std::io::IsTerminal;
                std::io::stderr().is_terminal()
            });
        #[cfg(feature = "console")]
        colored::control::set_override(decision);
        decision
    })
}

fn color_from_env(is_set: impl Fn(&str) -> bool) -> Option<bool> {
    if is_set("NO_COLOR") || is_set("REDLOG_NO_COLOR") {
        Some(false)
    } else if is_set("FORCE_COLOR") || is_set("REDLOG_FORCE_COLOR") {
        Some(true)
    } else {
        None
    }
}

/// Wrap `text` in the given foreground/background colors.
///
/// Returns the text untouched when colors are disabled for this process or
/// both colors are [`Color::None`].
pub fn colorize(text: &str, fg: Color, bg: Color) -> String {
    if !should_use_color() {
        return text.to_string();
    }
    paint(text, fg, bg)
}

#[cfg(feature = "console")]
fn paint(text: &str, fg: Color, bg: Color) -> String {
    use colored::Colorize;

    match (fg.to_colored(), bg.to_colored()) {
        (None, None) => text.to_string(),
        (Some(fg), None) => text.color(fg).to_string(),
        (None, Some(bg)) => text.on_color(bg).to_string(),
        (Some(fg), Some(bg)) => text.color(fg).on_color(bg).to_string(),
    }
}

#[cfg(not(feature = "console"))]
fn paint(text: &str, fg: Color, bg: Color) -> String {
    let codes: Vec<String> = [fg, bg]
        .iter()
        .filter_map(|color| color.ansi_code())
        .map(|code| code.to_string())
        .collect();
    if codes.is_empty() {
        return text.to_string();
    }
    format!("\x1b[{}m{}\x1b[0m", codes.join(";"), text)
}
