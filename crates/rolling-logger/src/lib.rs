//! Rolling Logger
//!
//! A `log::Log` implementation that keeps the most recent lines in a
//! circular buffer and mirrors each line to the browser console when built
//! for wasm (stderr otherwise).
//!
//! ```ignore
//! rolling_logger::init_logger("UrbanEase", log::LevelFilter::Info, 500)?;
//! log::info!("mounted");
//! let lines = rolling_logger::recent_lines();
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Lines kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggerError {
    AlreadyInitialized,
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::AlreadyInitialized => write!(f, "logger already initialized"),
        }
    }
}

impl std::error::Error for LoggerError {}

/// Fixed-size line buffer; the oldest line is dropped when full
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { lines: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

pub struct RollingLogger {
    app_name: String,
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
}

impl RollingLogger {
    pub fn new(app_name: &str, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            buffer: Mutex::new(RingBuffer::new(capacity)),
        }
    }

    /// `[HH:MM:SS.mmm] LEVEL app target: message`
    pub fn format_line(&self, level: Level, target: &str, message: &str) -> String {
        format!(
            "[{}] {:<5} {} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            level,
            self.app_name,
            target,
            message
        )
    }

    pub fn write(&self, level: Level, target: &str, message: &str) {
        let line = self.format_line(level, target, message);
        emit(level, &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    pub fn recent_lines(&self) -> Vec<String> {
        self.buffer.lock().map(|b| b.lines()).unwrap_or_default()
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.write(record.level(), record.target(), &record.args().to_string());
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger. Call once at startup.
pub fn init_logger(app_name: &str, level: LevelFilter, capacity: usize) -> Result<(), LoggerError> {
    let mut created = false;
    let logger = LOGGER.get_or_init(|| {
        created = true;
        RollingLogger::new(app_name, level, capacity)
    });
    if !created {
        return Err(LoggerError::AlreadyInitialized);
    }
    log::set_logger(logger).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::set_max_level(level);
    Ok(())
}

/// Parse a level name from config, falling back to `Info`
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Buffered lines, oldest first; empty before `init_logger`
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(|l| l.recent_lines()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut buffer = RingBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.lines(), vec!["line 2", "line 3", "line 4"]);
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut buffer = RingBuffer::new(0);
        buffer.push("a".into());
        buffer.push("b".into());
        assert_eq!(buffer.lines(), vec!["b"]);
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = RollingLogger::new("Test", LevelFilter::Warn, 10);
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("ui")
                .args(format_args!("hidden"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Error)
                .target("ui")
                .args(format_args!("shown"))
                .build(),
        );
        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].ends_with("Test ui: shown"));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }

    #[test]
    fn test_init_once() {
        assert!(init_logger("Test", LevelFilter::Info, 5).is_ok());
        assert_eq!(init_logger("Test", LevelFilter::Info, 5), Err(LoggerError::AlreadyInitialized));
        log::warn!("through the facade");
        assert!(recent_lines().iter().any(|l| l.ends_with("through the facade")));
    }
}
