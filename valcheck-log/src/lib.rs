//! Valcheck Logging
//!
//! Provides structured logging for valcheck with support for the
//! `VALCHECK_DEBUG` environment variable. The validators use it to report
//! rejected values; nothing is written for accepted ones.
//!
//! # Features
//!
//! - **Environment-controlled**: `VALCHECK_DEBUG=1` enables debug logging
//! - **Structured logging**: Records carry key-value fields
//! - **Multiple backends**: Writes to stderr, hands records to `log`, and
//!   optionally forwards them to `tracing`
//!
//! # Usage
//!
//! ```rust
//! use valcheck_log::{Level, event};
//!
//! event(
//!     Level::Debug,
//!     "valcheck::email",
//!     "email has to be a valid email address; 'jane' given",
//!     &[("field", "email"), ("kind", "format_error")],
//! );
//! ```
//!
//! # Environment Variables
//!
//! - `VALCHECK_DEBUG=1` - Enable debug logging
//! - `VALCHECK_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level
//! - `VALCHECK_LOG_FORMAT=compact|json|log` - Set output format
//! - `VALCHECK_LOG_TIMESTAMPS=1|0` - Include timestamps

use once_cell::sync::Lazy;
use std::env;
use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

// ============================================================================
// Log Levels
// ============================================================================

/// Log level for valcheck logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    /// Trace level (most verbose)
    Trace = 0,
    /// Debug level
    Debug = 1,
    /// Info level
    Info = 2,
    /// Warning level
    Warn = 3,
    /// Error level (least verbose)
    Error = 4,
    /// Off (no logging)
    Off = 5,
}

impl Level {
    /// Get level from its name, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Some(Level::Trace),
            "debug" => Some(Level::Debug),
            "info" => Some(Level::Info),
            "warn" | "warning" => Some(Level::Warn),
            "error" => Some(Level::Error),
            "off" | "none" => Some(Level::Off),
            _ => None,
        }
    }

    /// Whether a record at `level` passes this threshold.
    pub fn enables(self, level: Level) -> bool {
        level != Level::Off && level >= self
    }

    /// Get level name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Off => "OFF",
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            _ => Level::Off,
        }
    }

    /// Matching `log` crate level; `None` for `Off`.
    pub fn to_log(self) -> Option<log::Level> {
        match self {
            Level::Trace => Some(log::Level::Trace),
            Level::Debug => Some(log::Level::Debug),
            Level::Info => Some(log::Level::Info),
            Level::Warn => Some(log::Level::Warn),
            Level::Error => Some(log::Level::Error),
            Level::Off => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Log Format
// ============================================================================

/// Output format for log messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Compact single-line format
    Compact,
    /// JSON lines for structured logging
    Json,
    /// Hand records to the `log` crate instead of writing them
    Log,
}

impl Format {
    /// Get format from its name, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Some(Format::Compact),
            "json" => Some(Format::Json),
            "log" => Some(Format::Log),
            _ => None,
        }
    }
}

// ============================================================================
// Global Configuration
// ============================================================================

/// Global debug flag.
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Global log level.
static LOG_LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

/// Global configuration (lazy initialized).
static CONFIG: Lazy<LogConfig> = Lazy::new(|| {
    let config = LogConfig::from_env();
    DEBUG_ENABLED.store(config.debug, Ordering::SeqCst);
    LOG_LEVEL.store(config.level as u8, Ordering::SeqCst);
    config
});

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Whether debug mode is enabled
    pub debug: bool,
    /// Minimum log level
    pub level: Level,
    /// Output format
    pub format: Format,
    /// Whether to include timestamps
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Compact,
            timestamps: true,
        }
    }
}

fn flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl LogConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create config from any key lookup; unknown values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug = lookup("VALCHECK_DEBUG").is_some_and(|v| flag(&v));

        let level = lookup("VALCHECK_LOG_LEVEL")
            .and_then(|s| Level::parse(&s))
            .unwrap_or(if debug { Level::Debug } else { Level::Info });

        let format = lookup("VALCHECK_LOG_FORMAT")
            .and_then(|s| Format::parse(&s))
            .unwrap_or(Format::Compact);

        let timestamps = lookup("VALCHECK_LOG_TIMESTAMPS")
            .map(|v| flag(&v))
            .unwrap_or(true);

        Self {
            debug,
            level,
            format,
            timestamps,
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Initialize the logging system.
///
/// This is called automatically when the first record is emitted,
/// but can be called explicitly for eager initialization.
pub fn init() {
    Lazy::force(&CONFIG);
}

/// Check if debug logging is enabled.
#[inline]
pub fn is_debug_enabled() -> bool {
    init();
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Check if a log level is enabled.
#[inline]
pub fn is_level_enabled(level: Level) -> bool {
    init();
    current_level().enables(level)
}

/// Get current log level.
pub fn current_level() -> Level {
    init();
    Level::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Set log level at runtime.
pub fn set_level(level: Level) {
    init();
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Enable or disable debug mode at runtime.
pub fn set_debug(enabled: bool) {
    init();
    DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    if enabled && current_level() > Level::Debug {
        set_level(Level::Debug);
    }
}

/// Get the global configuration.
pub fn config() -> &'static LogConfig {
    &CONFIG
}

// ============================================================================
// Log Output
// ============================================================================

/// Log a message with key-value fields.
///
/// Records below the current level are dropped before anything is
/// formatted. The debug flag only picks the default level; an explicit
/// `VALCHECK_LOG_LEVEL` wins.
pub fn event(level: Level, target: &str, message: &str, fields: &[(&str, &str)]) {
    if !is_level_enabled(level) {
        return;
    }

    #[cfg(feature = "tracing")]
    tracing_compat::forward(level, target, message, fields);

    let config = config();
    match config.format {
        Format::Log => forward_to_log(level, target, message, fields),
        format => {
            let line = format_record(format, config.timestamps, level, target, message, fields);
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
        }
    }
}

fn forward_to_log(level: Level, target: &str, message: &str, fields: &[(&str, &str)]) {
    if let Some(level) = level.to_log() {
        log::log!(target: target, level, "{}{}", message, render_fields(fields));
    }
}

fn render_fields(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!(" {}={:?}", key, value))
        .collect()
}

/// Render one record as a single line in the given format.
///
/// `Format::Log` renders like `Format::Compact`.
pub fn format_record(
    format: Format,
    timestamps: bool,
    level: Level,
    target: &str,
    message: &str,
    fields: &[(&str, &str)],
) -> String {
    match format {
        Format::Json => format_json(timestamps, level, target, message, fields),
        Format::Compact | Format::Log => {
            let mut line = String::new();
            if timestamps {
                line.push_str(&chrono::Local::now().format("%H:%M:%S%.3f ").to_string());
            }
            line.push_str(&format!("{:5} ", level.as_str()));
            if !target.is_empty() {
                line.push_str(target);
                line.push_str(": ");
            }
            line.push_str(message);
            line.push_str(&render_fields(fields));
            line
        }
    }
}

#[cfg(feature = "json")]
fn format_json(
    timestamps: bool,
    level: Level,
    target: &str,
    message: &str,
    fields: &[(&str, &str)],
) -> String {
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct LogEntry<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        timestamp: Option<String>,
        level: &'a str,
        target: &'a str,
        message: &'a str,
        #[serde(skip_serializing_if = "BTreeMap::is_empty")]
        fields: BTreeMap<&'a str, &'a str>,
    }

    let entry = LogEntry {
        timestamp: timestamps.then(|| chrono::Utc::now().to_rfc3339()),
        level: level.as_str(),
        target,
        message,
        fields: fields.iter().copied().collect(),
    };

    serde_json::to_string(&entry).unwrap_or_default()
}

#[cfg(not(feature = "json"))]
fn format_json(
    timestamps: bool,
    level: Level,
    target: &str,
    message: &str,
    fields: &[(&str, &str)],
) -> String {
    // Fallback without serde - manually escape JSON strings
    let mut line = String::from("{");
    if timestamps {
        line.push_str(&format!(r#""timestamp":"{}","#, chrono::Utc::now().to_rfc3339()));
    }
    line.push_str(&format!(
        r#""level":"{}","target":"{}","message":"{}""#,
        level.as_str(),
        escape_json(target),
        escape_json(message)
    ));
    if !fields.is_empty() {
        let rendered = fields
            .iter()
            .map(|(k, v)| format!(r#""{}":"{}""#, escape_json(k), escape_json(v)))
            .collect::<Vec<_>>()
            .join(",");
        line.push_str(&format!(r#","fields":{{{}}}"#, rendered));
    }
    line.push('}');
    line
}

#[cfg(not(feature = "json"))]
fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result
}

// ============================================================================
// Tracing Integration
// ============================================================================

#[cfg(feature = "tracing")]
mod tracing_compat {
    //! Tracing compatibility layer.
    //!
    //! When the `tracing` feature is enabled, every record that passes the
    //! level check is also emitted as a `tracing` event with target
    //! `valcheck`; the original target travels in `log_target`.

    use super::*;

    pub(crate) fn forward(level: Level, target: &str, message: &str, fields: &[(&str, &str)]) {
        let fields = render_fields(fields);
        let fields = fields.trim_start();
        match level {
            Level::Trace => tracing::trace!(target: "valcheck", log_target = target, fields, "{}", message),
            Level::Debug => tracing::debug!(target: "valcheck", log_target = target, fields, "{}", message),
            Level::Info => tracing::info!(target: "valcheck", log_target = target, fields, "{}", message),
            Level::Warn => tracing::warn!(target: "valcheck", log_target = target, fields, "{}", message),
            Level::Error => tracing::error!(target: "valcheck", log_target = target, fields, "{}", message),
            Level::Off => {}
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
