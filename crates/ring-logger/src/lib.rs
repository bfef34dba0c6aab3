//! Ring Logger
//!
//! A `log` backend that keeps the most recent records in a circular buffer
//! and mirrors each record to the platform console (browser devtools on
//! wasm32, stderr everywhere else).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in memory
pub const DEFAULT_CAPACITY: usize = 500;

static GLOBAL: OnceLock<&'static RingLogger> = OnceLock::new();

/// One captured log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} [{}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Circular-buffer logger
pub struct RingLogger {
    capacity: usize,
    level: LevelFilter,
    echo: bool,
    buffer: Mutex<VecDeque<LogEntry>>,
}

impl RingLogger {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            level: LevelFilter::Info,
            echo: true,
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Keep records in memory only, without writing to the console
    pub fn without_echo(mut self) -> Self {
        self.echo = false;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Install as the global `log` backend.
    ///
    /// The logger is leaked so it lives for the rest of the process, which is
    /// what `log::set_logger` requires.
    pub fn init(self) -> Result<&'static RingLogger, SetLoggerError> {
        let level = self.level;
        let logger: &'static RingLogger = Box::leak(Box::new(self));
        log::set_logger(logger)?;
        log::set_max_level(level);
        let _ = GLOBAL.set(logger);
        Ok(logger)
    }

    /// Copy of the buffered records, oldest first
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.lock().iter().cloned().collect()
    }

    /// The last `count` records, oldest first
    pub fn tail(&self, count: usize) -> Vec<LogEntry> {
        let buffer = self.lock();
        let skip = buffer.len().saturating_sub(count);
        buffer.iter().skip(skip).cloned().collect()
    }

    fn push(&self, entry: LogEntry) {
        let mut buffer = self.lock();
        while buffer.len() >= self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(entry);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<LogEntry>> {
        self.buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for RingLogger {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Log for RingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        if self.echo {
            emit(&entry);
        }
        self.push(entry);
    }

    fn flush(&self) {}
}

/// Last `count` records of the installed global logger (empty if none installed)
pub fn recent(count: usize) -> Vec<LogEntry> {
    GLOBAL.get().map(|logger| logger.tail(count)).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn emit(entry: &LogEntry) {
    use wasm_bindgen::JsValue;
    let line = JsValue::from_str(&entry.to_string());
    match entry.level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(entry: &LogEntry) {
    eprintln!("{}", entry);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_line(logger: &RingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_keeps_records_in_order() {
        let logger = RingLogger::new(10).without_echo();
        log_line(&logger, Level::Info, "first");
        log_line(&logger, Level::Warn, "second");

        let entries = logger.snapshot();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].level, Level::Warn);
    }

    #[test]
    fn test_evicts_oldest_when_full() {
        let logger = RingLogger::new(3).without_echo();
        for i in 0..5 {
            log_line(&logger, Level::Info, &format!("line {}", i));
        }

        let messages: Vec<String> = logger.snapshot().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_filters_below_level() {
        let logger = RingLogger::new(10)
            .with_level(LevelFilter::Warn)
            .without_echo();
        log_line(&logger, Level::Debug, "noise");
        log_line(&logger, Level::Error, "boom");

        let entries = logger.snapshot();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "boom");
    }

    #[test]
    fn test_tail_returns_newest_in_order() {
        let logger = RingLogger::new(10).without_echo();
        for i in 0..4 {
            log_line(&logger, Level::Info, &format!("line {}", i));
        }

        let messages: Vec<String> = logger.tail(2).into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["line 2", "line 3"]);
        assert_eq!(logger.tail(50).len(), 4);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let logger = RingLogger::new(0).without_echo();
        assert_eq!(logger.capacity(), 1);
        log_line(&logger, Level::Info, "a");
        log_line(&logger, Level::Info, "b");
        assert_eq!(logger.snapshot().len(), 1);
    }

    #[test]
    fn test_display_contains_target_and_message() {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: Level::Info,
            target: "zuzzbee".to_string(),
            message: "hello".to_string(),
        };
        let line = entry.to_string();
        assert!(line.contains("[zuzzbee]"));
        assert!(line.ends_with("hello"));
    }
}
