//! Configuration file support for vcr
//!
//! Config file location: `~/.config/vcr/config.toml` (XDG_CONFIG_HOME)
//!
//! Example config:
//! ```toml
//! [ui]
//! col_width = 80
//!
//! [ui.theme]
//! text = "#D8DEE9"
//! added = "#A3BE8C"
//! warning = "#EBCB8B"
//!
//! [playback]
//! speed = 1000
//! ```

use ratatui::style::Color;
use serde::Deserialize;
use std::path::PathBuf;

/// Theme colors as written in the config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Normal content text
    pub text: Option<String>,
    /// Lines added by the commit being shown
    pub added: Option<String>,
    /// Status line while a history boundary alert is live
    pub warning: Option<String>,
}

/// Resolved theme — all ratatui Colors ready to use
#[derive(Debug, Clone)]
pub struct ResolvedTheme {
    pub text: Color,
    pub added: Color,
    pub warning: Color,
}

impl Default for ResolvedTheme {
    fn default() -> Self {
        Self {
            text: Color::Reset,
            added: Color::Green,
            warning: Color::Yellow,
        }
    }
}

impl ThemeConfig {
    pub fn resolve(&self) -> ResolvedTheme {
        let defaults = ResolvedTheme::default();
        ResolvedTheme {
            text: resolve_color(self.text.as_deref(), defaults.text),
            added: resolve_color(self.added.as_deref(), defaults.added),
            warning: resolve_color(self.warning.as_deref(), defaults.warning),
        }
    }
}

fn resolve_color(value: Option<&str>, fallback: Color) -> Color {
    value.and_then(parse_color).unwrap_or(fallback)
}

/// Parse `#RRGGBB` hex or a basic color name
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    match value.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        _ => None,
    }
}

/// UI configuration
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Fixed width of each rendered text column
    pub col_width: u16,
    /// Theme configuration
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            col_width: 80,
            theme: ThemeConfig::default(),
        }
    }
}

/// Playback configuration
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Delay in milliseconds between auto-advance steps that added lines
    pub speed: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { speed: 1000 }
    }
}

/// Root configuration
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub playback: PlaybackConfig,
}

impl Config {
    /// Locate `vcr/config.toml` under the user's config root.
    ///
    /// vcr reads a single optional file: `$XDG_CONFIG_HOME` when set,
    /// `~/.config` otherwise, on every platform.
    pub fn config_path() -> Option<PathBuf> {
        let root = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;
        let path = root.join("vcr").join("config.toml");
        path.exists().then_some(path)
    }

    /// Load the config file, falling back to defaults when it is
    /// missing, unreadable, or unparsable
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                eprintln!("Warning: failed to read {}: {}", path.display(), err);
                return Self::default();
            }
        };

        toml::from_str(&content).unwrap_or_else(|err| {
            eprintln!("Warning: failed to parse {}: {}", path.display(), err);
            Self::default()
        })
    }
}
