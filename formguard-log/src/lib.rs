//! Formguard Logging
//!
//! Leveled progress logging for form validation, controlled through
//! `FORMGUARD_*` environment variables.
//!
//! # Features
//!
//! - **Environment-controlled**: `FORMGUARD_DEBUG=1` enables debug logging
//! - **Multiple formats**: pretty, compact and JSON lines on stderr
//! - **`log` facade bridge**: records can be forwarded to whatever `log` backend the host installs
//! - **Per-thread capture**: tests can collect records without touching stderr
//!
//! # Usage
//!
//! ```rust
//! use formguard_log::{debug, info, warn};
//!
//! info!("initializing form validation");
//! debug!("validating form");
//! let failures = 2;
//! warn!(target: "formguard::form", "validation errors found ({})", failures);
//! ```
//!
//! # Environment Variables
//!
//! - `FORMGUARD_DEBUG=1` - Enable debug logging
//! - `FORMGUARD_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level
//! - `FORMGUARD_LOG_FORMAT=pretty|json|compact` - Set output format
//! - `FORMGUARD_LOG_SINK=stderr|log` - Write to stderr or forward to the `log` facade
//! - `FORMGUARD_LOG_TIMESTAMPS=1|0` - Include timestamps
//! - `FORMGUARD_LOG_MODULE=1|0` - Include the target module

use once_cell::sync::Lazy;
use std::cell::RefCell;
use std::env;
use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

// ============================================================================
// Log Levels
// ============================================================================

/// Severity of a log record.
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
    /// Parse a level name, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(Level::Trace),
            "debug" => Some(Level::Debug),
            "info" => Some(Level::Info),
            "warn" | "warning" => Some(Level::Warn),
            "error" => Some(Level::Error),
            "off" | "none" => Some(Level::Off),
            _ => None,
        }
    }

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

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            _ => Level::Off,
        }
    }

    /// Matching `log` crate level; `Off` has none.
    pub fn to_log_level(self) -> Option<log::Level> {
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
// Format and Sink
// ============================================================================

/// Output format for stderr records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Timestamp, padded level, bracketed target
    Pretty,
    /// Short time and single-letter level
    Compact,
    /// One JSON object per line
    Json,
}

impl Format {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Some(Format::Pretty),
            "compact" => Some(Format::Compact),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// Where records go when the current thread is not capturing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    /// Formatted lines on stderr
    Stderr,
    /// Forwarded to the `log` facade
    Log,
}

impl Sink {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "stderr" => Some(Sink::Stderr),
            "log" => Some(Sink::Log),
            _ => None,
        }
    }
}

// ============================================================================
// Global Configuration
// ============================================================================

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

static LOG_LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

static CONFIG: Lazy<LogConfig> = Lazy::new(LogConfig::from_env);

thread_local! {
    static CAPTURED: RefCell<Option<Vec<Record>>> = const { RefCell::new(None) };
}

/// Logging configuration, read once from the environment.
#[derive(Debug)]
pub struct LogConfig {
    pub debug: bool,
    pub level: Level,
    pub format: Format,
    pub sink: Sink,
    pub timestamps: bool,
    pub module_path: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Json,
            sink: Sink::Stderr,
            timestamps: true,
            module_path: true,
        }
    }
}

fn env_flag(key: &str) -> Option<bool> {
    env::var(key)
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

impl LogConfig {
    /// Build config from `FORMGUARD_*` variables and publish the level globally.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let debug = env_flag("FORMGUARD_DEBUG").unwrap_or(defaults.debug);

        let level = env::var("FORMGUARD_LOG_LEVEL")
            .ok()
            .and_then(|s| Level::parse(&s))
            .unwrap_or(if debug { Level::Debug } else { defaults.level });

        let format = env::var("FORMGUARD_LOG_FORMAT")
            .ok()
            .and_then(|s| Format::parse(&s))
            .unwrap_or(defaults.format);

        let sink = env::var("FORMGUARD_LOG_SINK")
            .ok()
            .and_then(|s| Sink::parse(&s))
            .unwrap_or(defaults.sink);

        DEBUG_ENABLED.store(debug, Ordering::SeqCst);
        LOG_LEVEL.store(level as u8, Ordering::SeqCst);

        Self {
            debug,
            level,
            format,
            sink,
            timestamps: env_flag("FORMGUARD_LOG_TIMESTAMPS").unwrap_or(defaults.timestamps),
            module_path: env_flag("FORMGUARD_LOG_MODULE").unwrap_or(defaults.module_path),
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Read the environment eagerly. Otherwise done on first use.
pub fn init() {
    Lazy::force(&CONFIG);
}

pub fn config() -> &'static LogConfig {
    &CONFIG
}

#[inline]
pub fn is_debug_enabled() -> bool {
    init();
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

#[inline]
pub fn is_level_enabled(level: Level) -> bool {
    init();
    level != Level::Off && level as u8 >= LOG_LEVEL.load(Ordering::Relaxed)
}

/// Whether a record at `level` would be kept by the current thread.
///
/// Capturing threads keep every level so tests do not depend on the
/// process-wide threshold.
#[inline]
pub fn enabled(level: Level) -> bool {
    is_capturing() || is_level_enabled(level) || (level == Level::Debug && is_debug_enabled())
}

pub fn current_level() -> Level {
    init();
    Level::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

pub fn set_level(level: Level) {
    init();
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Toggle debug mode at runtime. Enabling lowers the level to `Debug` if needed.
pub fn set_debug(enabled: bool) {
    init();
    DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    if enabled && current_level() > Level::Debug {
        set_level(Level::Debug);
    }
}

// ============================================================================
// Capture
// ============================================================================

/// A log record kept by a capturing thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Start collecting records emitted on the current thread instead of writing them out.
pub fn capture() {
    CAPTURED.with(|c| {
        let mut slot = c.borrow_mut();
        if slot.is_none() {
            *slot = Some(Vec::new());
        }
    });
}

/// Drain records collected on the current thread. Capturing stays on.
pub fn take_captured() -> Vec<Record> {
    CAPTURED.with(|c| {
        c.borrow_mut()
            .as_mut()
            .map(std::mem::take)
            .unwrap_or_default()
    })
}

/// Stop capturing on the current thread, returning anything not yet drained.
pub fn stop_capture() -> Vec<Record> {
    CAPTURED.with(|c| c.borrow_mut().take().unwrap_or_default())
}

pub fn is_capturing() -> bool {
    CAPTURED.with(|c| c.borrow().is_some())
}

// ============================================================================
// Log Output
// ============================================================================

#[doc(hidden)]
pub fn log(level: Level, target: &str, message: &str) {
    if level == Level::Off {
        return;
    }

    let captured = CAPTURED.with(|c| match c.borrow_mut().as_mut() {
        Some(records) => {
            records.push(Record {
                level,
                target: target.to_string(),
                message: message.to_string(),
            });
            true
        }
        None => false,
    });
    if captured {
        return;
    }

    let config = config();
    match config.sink {
        Sink::Log => forward(level, target, message),
        Sink::Stderr => match config.format {
            Format::Pretty => log_pretty(level, target, message, config),
            Format::Compact => log_compact(level, target, message, config),
            Format::Json => log_json(level, target, message),
        },
    }
}

fn forward(level: Level, target: &str, message: &str) {
    if let Some(level) = level.to_log_level() {
        ::log::log!(target: target, level, "{}", message);
    }
}

fn log_pretty(level: Level, target: &str, message: &str, config: &LogConfig) {
    let mut stderr = std::io::stderr().lock();

    if config.timestamps {
        let now = chrono::Local::now();
        let _ = write!(stderr, "{} ", now.format("%Y-%m-%d %H:%M:%S%.3f"));
    }

    let _ = write!(stderr, "{:5} ", level.as_str());

    if config.module_path && !target.is_empty() {
        let _ = write!(stderr, "[{}] ", target);
    }

    let _ = writeln!(stderr, "{}", message);
}

fn log_compact(level: Level, target: &str, message: &str, config: &LogConfig) {
    let mut stderr = std::io::stderr().lock();

    if config.timestamps {
        let now = chrono::Local::now();
        let _ = write!(stderr, "{} ", now.format("%H:%M:%S"));
    }

    let _ = write!(stderr, "{} ", level.as_str().chars().next().unwrap_or('?'));

    if config.module_path && !target.is_empty() {
        let _ = write!(stderr, "{}: ", target);
    }

    let _ = writeln!(stderr, "{}", message);
}

#[cfg(feature = "json")]
fn log_json(level: Level, target: &str, message: &str) {
    use serde::Serialize;

    #[derive(Serialize)]
    struct LogEntry<'a> {
        timestamp: String,
        level: &'a str,
        target: &'a str,
        message: &'a str,
    }

    let entry = LogEntry {
        timestamp: chrono::Utc::now().to_rfc3339(),
        level: level.as_str(),
        target,
        message,
    };

    if let Ok(json) = serde_json::to_string(&entry) {
        eprintln!("{}", json);
    }
}

#[cfg(not(feature = "json"))]
fn log_json(level: Level, target: &str, message: &str) {
    eprintln!(
        r#"{{"timestamp":"{}","level":"{}","target":"{}","message":"{}"}}"#,
        chrono::Utc::now().to_rfc3339(),
        level.as_str(),
        escape_json(target),
        escape_json(message)
    );
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
            c if c.is_control() => result.push_str(&format!("\\u{:04x}", c as u32)),
            c => result.push(c),
        }
    }
    result
}

// ============================================================================
// Macros
// ============================================================================

/// Log a trace message.
#[macro_export]
macro_rules! trace {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::enabled($crate::Level::Trace) {
            $crate::log($crate::Level::Trace, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::enabled($crate::Level::Trace) {
            $crate::log($crate::Level::Trace, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log a debug message.
///
/// Emitted when `FORMGUARD_DEBUG=1` or `FORMGUARD_LOG_LEVEL` is `debug` or lower.
///
/// # Example
///
/// ```rust
/// use formguard_log::debug;
///
/// let field = "email";
/// debug!("clearing annotation on {}", field);
/// debug!(target: "formguard::form", "validating form");
/// ```
#[macro_export]
macro_rules! debug {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::enabled($crate::Level::Debug) {
            $crate::log($crate::Level::Debug, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::enabled($crate::Level::Debug) {
            $crate::log($crate::Level::Debug, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log an info message.
#[macro_export]
macro_rules! info {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::enabled($crate::Level::Info) {
            $crate::log($crate::Level::Info, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::enabled($crate::Level::Info) {
            $crate::log($crate::Level::Info, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log a warning message.
#[macro_export]
macro_rules! warn {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::enabled($crate::Level::Warn) {
            $crate::log($crate::Level::Warn, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::enabled($crate::Level::Warn) {
            $crate::log($crate::Level::Warn, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log an error message.
#[macro_export]
macro_rules! error {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::enabled($crate::Level::Error) {
            $crate::log($crate::Level::Error, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::enabled($crate::Level::Error) {
            $crate::log($crate::Level::Error, module_path!(), &format!($($arg)+));
        }
    };
}

// ============================================================================
// Tests
// ============================================================================
