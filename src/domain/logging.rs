//! Structured logging shared by every layer.
//!
//! The sink is installed once per page (`init_logger`). Until then, and in
//! native tests that never install one, entries are dropped.

use std::fmt;
use std::sync::OnceLock;

use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum LogLevel {
    #[display(fmt = "DEBUG")]
    Debug,
    #[display(fmt = " INFO")]
    Info,
    #[display(fmt = " WARN")]
    Warn,
    #[display(fmt = "ERROR")]
    Error,
}

/// Layer and unit that produced an entry
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    /// Context that does not belong in the message, such as the endpoint
    pub metadata: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: &str) -> Self {
        Self {
            timestamp: get_time_provider().current_timestamp(),
            level,
            component,
            message: message.to_string(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: &str) -> Self {
        self.metadata = Some(metadata.to_string());
        self
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = get_time_provider().format_timestamp(self.timestamp);
        write!(f, "[{}] {} {} | {}", clock, self.level, self.component, self.message)?;
        if let Some(metadata) = &self.metadata {
            write!(f, " | {}", metadata)?;
        }
        Ok(())
    }
}

pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    /// Levels for which this is `false` are skipped before the entry is built.
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }

    fn debug(&self, component: LogComponent, message: &str) {
        self.log_at(LogLevel::Debug, component, message);
    }

    fn info(&self, component: LogComponent, message: &str) {
        self.log_at(LogLevel::Info, component, message);
    }

    fn warn(&self, component: LogComponent, message: &str) {
        self.log_at(LogLevel::Warn, component, message);
    }

    fn log_at(&self, level: LogLevel, component: LogComponent, message: &str) {
        if self.enabled(level) {
            self.log(LogEntry::new(level, component, message));
        }
    }

    fn log_with_metadata(&self, level: LogLevel, component: LogComponent, message: &str, metadata: &str) {
        if self.enabled(level) {
            self.log(LogEntry::new(level, component, message).with_metadata(metadata));
        }
    }
}

static LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static CLOCK: OnceLock<Box<dyn TimeProvider>> = OnceLock::new();

/// Install the page logger. The first call wins.
pub fn init_logger(logger: Box<dyn Logger>) {
    let _ = LOGGER.set(logger);
}

/// Install the page clock. The first call wins.
pub fn init_time_provider(time_provider: Box<dyn TimeProvider>) {
    let _ = CLOCK.set(time_provider);
}

pub fn get_logger() -> &'static dyn Logger {
    LOGGER.get().map(|logger| logger.as_ref()).unwrap_or(&Discard)
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    CLOCK.get().map(|clock| clock.as_ref()).unwrap_or(&Unclocked)
}

/// Backing call of the `log_*!` macros: the message is only formatted
/// when the installed logger wants the level.
pub fn emit(level: LogLevel, component: LogComponent, args: fmt::Arguments<'_>) {
    let logger = get_logger();
    if logger.enabled(level) {
        logger.log(LogEntry::new(level, component, &args.to_string()));
    }
}

struct Discard;

impl Logger for Discard {
    fn log(&self, _entry: LogEntry) {}

    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }
}

struct Unclocked;

impl TimeProvider for Unclocked {
    fn current_timestamp(&self) -> u64 {
        0
    }

    fn format_timestamp(&self, _timestamp: u64) -> String {
        "--:--:--.---".to_string()
    }
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::emit(
                $crate::domain::logging::LogLevel::Debug,
                $component,
                format_args!($($arg)*),
            );
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit(
            $crate::domain::logging::LogLevel::Info,
            $component,
            format_args!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit(
            $crate::domain::logging::LogLevel::Warn,
            $component,
            format_args!($($arg)*),
        )
    };
}
