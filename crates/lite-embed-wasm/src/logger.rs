//! Console logger with level filtering and styled prefixes
//!
//! The filtering and prefix model lives in `lite_embed_core::logger`; this
//! type is the `console` sink. There is no hidden global instance: each
//! component constructs and holds the logger it reports through, and pages
//! that want one shared logger construct it explicitly.

use std::collections::HashMap;

use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::console;

use lite_embed_core::{LogFormat, LogLevel, Prefix};

/// Leveled, prefixed console output
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct Logger {
    fmt: LogFormat,
}

#[wasm_bindgen]
impl Logger {
    /// Logger with the default icon prefixes, printing all levels
    #[wasm_bindgen(constructor)]
    pub fn new() -> Logger {
        Logger {
            fmt: LogFormat::new(),
        }
    }

    /// Logger with one fixed prefix tag across all levels
    pub fn with_prefix(prefix: &str) -> Logger {
        let mut fmt = LogFormat::new();
        fmt.set_prefix(Prefix::Fixed(prefix.to_string()));
        Logger { fmt }
    }

    /// Change the filter threshold for all subsequent calls
    ///
    /// Accepts the lowercase level name (`debug`, `info`, `log`, `warn`,
    /// `error`, `group`). Unknown names leave the threshold unchanged.
    pub fn set_log_level(&mut self, level: &str) {
        if let Some(level) = LogLevel::from_name(level) {
            self.fmt.set_log_level(level);
        }
    }

    /// Whether a message at `level` would currently print
    ///
    /// Unknown level names report `false`.
    pub fn enabled(&self, level: &str) -> bool {
        LogLevel::from_name(level)
            .map(|level| self.fmt.enabled(level))
            .unwrap_or(false)
    }

    /// Replace the prefix strategy
    ///
    /// Accepts `undefined`/`null` (restore the default icon set), a string
    /// (one fixed tag for every level), or a partial object mapping level
    /// names to tags, e.g. `{warn: "careful", error: "boom"}`; missing levels
    /// fall back to the defaults.
    pub fn set_prefix(&mut self, value: JsValue) -> Result<(), JsValue> {
        if value.is_undefined() || value.is_null() {
            self.fmt.set_prefix(Prefix::Default);
        } else if let Some(fixed) = value.as_string() {
            self.fmt.set_prefix(Prefix::Fixed(fixed));
        } else {
            let map: HashMap<LogLevel, String> = serde_wasm_bindgen::from_value(value)
                .map_err(|err| JsValue::from_str(&err.to_string()))?;
            self.fmt.set_prefix(Prefix::PerLevel(map));
        }
        Ok(())
    }

    #[wasm_bindgen(variadic)]
    pub fn debug(&self, args: Vec<JsValue>) {
        self.emit(LogLevel::Debug, &args);
    }

    #[wasm_bindgen(variadic)]
    pub fn info(&self, args: Vec<JsValue>) {
        self.emit(LogLevel::Info, &args);
    }

    #[wasm_bindgen(variadic)]
    pub fn log(&self, args: Vec<JsValue>) {
        self.emit(LogLevel::Log, &args);
    }

    #[wasm_bindgen(variadic)]
    pub fn warn(&self, args: Vec<JsValue>) {
        self.emit(LogLevel::Warn, &args);
    }

    #[wasm_bindgen(variadic)]
    pub fn error(&self, args: Vec<JsValue>) {
        self.emit(LogLevel::Error, &args);
    }

    /// Open a styled console group
    #[wasm_bindgen(variadic)]
    pub fn group(&self, args: Vec<JsValue>) {
        self.emit(LogLevel::Group, &args);
    }

    pub fn group_end(&self) {
        console::group_end();
    }
}

impl Logger {
    pub(crate) fn warn_with(&self, msg: &str, value: &JsValue) {
        self.emit(LogLevel::Warn, &[JsValue::from_str(msg), value.clone()]);
    }

    pub(crate) fn error_with(&self, msg: &str, value: &JsValue) {
        self.emit(LogLevel::Error, &[JsValue::from_str(msg), value.clone()]);
    }

    fn emit(&self, level: LogLevel, args: &[JsValue]) {
        if !self.fmt.enabled(level) {
            return;
        }

        let (text, css) = self.fmt.styled_prefix(level);
        let out = Array::new();
        out.push(&JsValue::from_str(&text));
        out.push(&JsValue::from_str(&css));
        for arg in args {
            out.push(arg);
        }

        match level {
            LogLevel::Debug => console::debug(&out),
            LogLevel::Info => console::info(&out),
            LogLevel::Log => console::log(&out),
            LogLevel::Warn => console::warn(&out),
            LogLevel::Error => console::error(&out),
            LogLevel::Group => console::group(&out),
        }
    }
}
