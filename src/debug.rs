//! Logging bridge for the richtext binary.
//!
//! Routes `log::info!()` and friends to stderr (or any writer) with a
//! timestamp, level and module target on every line.
//!
//! Level precedence: `--log-level` CLI flag, then `RUST_LOG`, then off.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Log verbosity selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogLevel {
    /// No logging
    #[default]
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    /// Parse a `RUST_LOG`-style level name. Module filters are not supported;
    /// only a bare level is recognised.
    pub fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "off" => Some(LogLevel::Off),
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Pick the effective level from the CLI flag and the environment.
pub fn resolve_level(cli_level: Option<LogLevel>, rust_log: Option<&str>) -> LogLevel {
    cli_level
        .or_else(|| rust_log.and_then(LogLevel::from_env_value))
        .unwrap_or_default()
}

struct BridgeLogger {
    level: LevelFilter,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Log for BridgeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        let mut sink = self.sink.lock();
        // A failed log write has nowhere to be reported.
        let _ = sink.write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = self.sink.lock().flush();
    }
}

static LOGGER: OnceLock<BridgeLogger> = OnceLock::new();

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

fn format_line(level: log::Level, target: &str, msg: &str) -> String {
    format!("[{}] [{:<5}] [{}] {}\n", timestamp(), level, target, msg)
}

/// Install the bridge writing to stderr. Later calls are ignored.
pub fn init_log_bridge(cli_level: Option<LogLevel>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let level = resolve_level(cli_level, rust_log.as_deref());
    init_with_writer(level, Box::new(std::io::stderr()));
}

/// Install the bridge writing to `writer`. Later calls are ignored.
pub fn init_with_writer(level: LogLevel, writer: Box<dyn Write + Send>) {
    let filter = level.to_level_filter();
    let logger = LOGGER.get_or_init(|| BridgeLogger {
        level: filter,
        sink: Mutex::new(writer),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_level_wins() {
        assert_eq!(
            resolve_level(Some(LogLevel::Warn), Some("trace")),
            LogLevel::Warn
        );
    }

    #[test]
    fn test_rust_log_fallback() {
        assert_eq!(resolve_level(None, Some("DEBUG")), LogLevel::Debug);
        assert_eq!(resolve_level(None, Some("my_crate=debug")), LogLevel::Off);
        assert_eq!(resolve_level(None, None), LogLevel::Off);
    }

    #[test]
    fn test_format_line() {
        let line = format_line(log::Level::Info, "richtext::cli", "hello");
        assert!(line.contains("[INFO ] [richtext::cli] hello"));
        assert!(line.ends_with('\n'));
    }
}
