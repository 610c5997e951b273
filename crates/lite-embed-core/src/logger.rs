//! Leveled log formatting
//!
//! The filtering and prefix-styling model for the console logger. This module
//! is deliberately DOM-free: it decides *whether* a message prints and *what*
//! its styled prefix looks like, while the actual `console` emission lives in
//! the wasm crate. Prefix styling follows the `%c` convention: the first
//! console argument carries a `%c`-tagged prefix, the second the CSS applied
//! to it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Log severity, ordered from least to most severe
///
/// A message prints only when the configured minimum level is at or below the
/// message's level. `Group` sits above `Error` so group headers survive even
/// the strictest useful filter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Log,
    Warn,
    Error,
    Group,
}

impl LogLevel {
    /// Parse a level from its lowercase name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "log" => Some(LogLevel::Log),
            "warn" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "group" => Some(LogLevel::Group),
            _ => None,
        }
    }

    /// Default icon tag for this level
    pub const fn default_tag(self) -> &'static str {
        match self {
            LogLevel::Debug => "🐞",
            LogLevel::Info => "ℹ️",
            LogLevel::Log => "💬",
            LogLevel::Warn => "⚠️",
            LogLevel::Error => "☠️",
            LogLevel::Group => "📦",
        }
    }

    /// Fixed background color the styled prefix uses for this level
    pub const fn color(self) -> &'static str {
        match self {
            LogLevel::Debug => "#5b5b66",
            LogLevel::Info => "#2980b9",
            LogLevel::Log => "#27ae60",
            LogLevel::Warn => "#f39c12",
            LogLevel::Error => "#c0392b",
            LogLevel::Group => "#8e44ad",
        }
    }
}

/// How log prefixes are produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Prefix {
    /// The per-level default icon set
    #[default]
    Default,
    /// One fixed tag applied to every level
    Fixed(String),
    /// A partial per-level mapping; missing levels fall back to the defaults
    PerLevel(HashMap<LogLevel, String>),
}

/// Level filter plus prefix styling for one logger instance
#[derive(Debug, Clone, Default)]
pub struct LogFormat {
    min_level: Option<LogLevel>,
    prefix: Prefix,
}

impl LogFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the filter threshold for all subsequent messages
    pub fn set_log_level(&mut self, level: LogLevel) {
        self.min_level = Some(level);
    }

    /// Replace the prefix strategy
    pub fn set_prefix(&mut self, prefix: Prefix) {
        self.prefix = prefix;
    }

    /// Whether a message at `level` should print
    pub fn enabled(&self, level: LogLevel) -> bool {
        match self.min_level {
            Some(min) => min <= level,
            // Unconfigured loggers print everything
            None => true,
        }
    }

    /// The prefix tag for `level`, after fallback resolution
    pub fn tag(&self, level: LogLevel) -> &str {
        match &self.prefix {
            Prefix::Default => level.default_tag(),
            Prefix::Fixed(tag) => tag,
            Prefix::PerLevel(map) => map
                .get(&level)
                .map(String::as_str)
                .unwrap_or_else(|| level.default_tag()),
        }
    }

    /// The `%c`-tagged prefix and its CSS for `level`
    pub fn styled_prefix(&self, level: LogLevel) -> (String, String) {
        let fmt = format!("%c{}", self.tag(level));
        let css = format!(
            "background-color: {}; color: #fff; padding: 2px 4px; border-radius: 2px",
            level.color()
        );
        (fmt, css)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Log);
        assert!(LogLevel::Log < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Group);
    }

    #[test]
    fn test_info_filter_suppresses_debug() {
        let mut fmt = LogFormat::new();
        fmt.set_log_level(LogLevel::Info);

        assert!(!fmt.enabled(LogLevel::Debug));
        assert!(fmt.enabled(LogLevel::Info));
        assert!(fmt.enabled(LogLevel::Log));
        assert!(fmt.enabled(LogLevel::Warn));
        assert!(fmt.enabled(LogLevel::Error));
    }

    #[test]
    fn test_unconfigured_prints_everything() {
        let fmt = LogFormat::new();
        assert!(fmt.enabled(LogLevel::Debug));
        assert!(fmt.enabled(LogLevel::Group));
    }

    #[test]
    fn test_fixed_prefix_applies_to_all_levels() {
        let mut fmt = LogFormat::new();
        fmt.set_prefix(Prefix::Fixed("lite-embed/vimeo".to_string()));

        assert_eq!(fmt.tag(LogLevel::Debug), "lite-embed/vimeo");
        assert_eq!(fmt.tag(LogLevel::Error), "lite-embed/vimeo");
    }

    #[test]
    fn test_partial_mapping_falls_back_to_defaults() {
        let mut map = HashMap::new();
        map.insert(LogLevel::Warn, "careful".to_string());
        let mut fmt = LogFormat::new();
        fmt.set_prefix(Prefix::PerLevel(map));

        assert_eq!(fmt.tag(LogLevel::Warn), "careful");
        assert_eq!(fmt.tag(LogLevel::Error), LogLevel::Error.default_tag());
    }

    #[test]
    fn test_styled_prefix_uses_level_color() {
        let fmt = LogFormat::new();
        let (text, css) = fmt.styled_prefix(LogLevel::Error);
        assert!(text.starts_with("%c"));
        assert!(css.contains("background-color: #c0392b"));
    }

    #[test]
    fn test_per_level_map_deserializes_from_json() {
        // The wasm layer feeds partial JS objects through serde
        let map: HashMap<LogLevel, String> =
            serde_json::from_str(r#"{"warn": "careful", "error": "boom"}"#).unwrap();
        assert_eq!(map[&LogLevel::Warn], "careful");
        assert_eq!(map[&LogLevel::Error], "boom");
    }
}
