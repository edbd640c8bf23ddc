use derive_more::Display;
use std::sync::OnceLock;

/// Diagnostic severity, ordered so sinks can filter on a threshold.
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

/// Which part of the pipeline a diagnostic came from. Closed set, so the
/// log output stays greppable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "app::controller")]
    Controller,
    #[display(fmt = "app::fetcher")]
    Fetcher,
    #[display(fmt = "infra::provider")]
    Provider,
    #[display(fmt = "infra::renderer")]
    Renderer,
    #[display(fmt = "ui")]
    Ui,
}

/// One structured diagnostic, stamped at construction time.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
}

impl LogEntry {
    pub fn record(level: LogLevel, component: LogComponent, message: String) -> Self {
        Self { timestamp: clock().current_timestamp(), level, component, message }
    }

    /// Canonical single-line rendering, shared by every sink.
    pub fn format_line(&self) -> String {
        format!(
            "[{}] {} {}: {}",
            clock().format_timestamp(self.timestamp),
            self.level,
            self.component,
            self.message
        )
    }
}

/// Sink for structured diagnostics.
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);
}

/// Wall clock the entries are stamped with; the app registers a browser
/// clock, host tests fall back to a fixed one.
pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

static LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static CLOCK: OnceLock<Box<dyn TimeProvider>> = OnceLock::new();

/// Register the process-wide sink. First registration wins; later calls
/// are ignored.
pub fn init_logger(logger: Box<dyn Logger>) {
    let _ = LOGGER.set(logger);
}

pub fn init_time_provider(provider: Box<dyn TimeProvider>) {
    let _ = CLOCK.set(provider);
}

pub fn get_logger() -> &'static dyn Logger {
    match LOGGER.get() {
        Some(logger) => logger.as_ref(),
        None => &SilentLogger,
    }
}

fn clock() -> &'static dyn TimeProvider {
    match CLOCK.get() {
        Some(provider) => provider.as_ref(),
        None => &FixedClock,
    }
}

/// Discards everything; host-side tests run against this.
struct SilentLogger;
impl Logger for SilentLogger {
    fn log(&self, _entry: LogEntry) {}
}

/// Placeholder clock used until a real one is registered.
struct FixedClock;
impl TimeProvider for FixedClock {
    fn current_timestamp(&self) -> u64 {
        0
    }

    fn format_timestamp(&self, _timestamp: u64) -> String {
        "--:--:--".to_string()
    }
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::get_logger().log($crate::domain::logging::LogEntry::record(
                $crate::domain::logging::LogLevel::Debug,
                $component,
                format!($($arg)*),
            ));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().log($crate::domain::logging::LogEntry::record(
            $crate::domain::logging::LogLevel::Info,
            $component,
            format!($($arg)*),
        ));
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().log($crate::domain::logging::LogEntry::record(
            $crate::domain::logging::LogLevel::Warn,
            $component,
            format!($($arg)*),
        ));
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().log($crate::domain::logging::LogEntry::record(
            $crate::domain::logging::LogLevel::Error,
            $component,
            format!($($arg)*),
        ));
    };
}
