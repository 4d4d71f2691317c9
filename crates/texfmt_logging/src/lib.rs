//! Category based logging used by the texfmt crates.
//!
//! Nothing is logged until a logger is installed with [`set_logger`], which makes the `log_*` macros free to call from library code.

use core::{
    fmt::{self, Display, Arguments, Write as _},
    sync::atomic::{AtomicU8, self},
    time::Duration,
};
use std::{io::{self, Write}, time::Instant};
use once_cell::sync::Lazy;
use parking_lot::{RwLock, Mutex};

static LOGGER : RwLock<Option<&'static Logger>> = parking_lot::const_rwlock(None);
static START : Lazy<Instant> = Lazy::new(Instant::now);

/// Install the global logger
pub fn set_logger(logger: &'static Logger) {
    Lazy::force(&START);
    *LOGGER.write() = Some(logger);
}

/// Remove the global logger, returning the previously installed one
pub fn clear_logger() -> Option<&'static Logger> {
    LOGGER.write().take()
}

/// Get the global logger, if one is installed
pub fn get_logger() -> Option<&'static Logger> {
    *LOGGER.read()
}

/// Time elapsed since the logging state was first touched
pub fn timestamp() -> TimeStamp {
    TimeStamp(START.elapsed())
}

/// Time since the start of logging
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct TimeStamp(pub Duration);

impl Display for TimeStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.as_secs();
        let millis = self.0.subsec_millis();
        f.write_fmt(format_args!("[{:>6}.{millis:03}]", secs))
    }
}

/// Logging level
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum LogLevel {
    /// Severe error: will probably result in a crash
    Severe,
    /// Error: may not result in a crash
    Error,
    /// Warning: not as bad as an error, but something was likely misused
    Warning,
    /// General info
    Info,
    /// Verbose info
    Verbose,
    /// Debug info (includes verbose info)
    Debug,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Severe  => f.write_str("[SEVERE ]"),
            LogLevel::Error   => f.write_str("[ERROR  ]"),
            LogLevel::Warning => f.write_str("[WARNING]"),
            LogLevel::Info    => f.write_str("[INFO   ]"),
            LogLevel::Verbose => f.write_str("[VERBOSE]"),
            LogLevel::Debug   => f.write_str("[DEBUG  ]"),
        }
    }
}

/// Log category
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LogCategory {
    category     : &'static str,
    sub_category : Option<&'static str>
}

impl LogCategory {
    pub const fn new(name: &'static str) -> Self {
        Self { category: name, sub_category: None }
    }

    pub const fn new_with_sub(name: &'static str, sub_name: &'static str) -> Self {
        Self { category: name, sub_category: Some(sub_name) }
    }
}

impl Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub_category {
            Some(sub) => f.write_fmt(format_args!("{}({sub})", self.category)),
            None => f.write_str(self.category),
        }
    }
}

/// Additional info about where the log occured
pub struct LogLocation {
    file : &'static str,
    line : u32,
    func : &'static str,
    time : TimeStamp,
}

impl LogLocation {
    /// Creates a new log location
    pub const fn new(file: &'static str, line: u32, func: &'static str, time: TimeStamp) -> Self {
        Self { file, line, func, time }
    }

    /// Get the file name where the log occured
    pub const fn file(&self) -> &str {
        self.file
    }

    /// Get the line where the log occurred
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Get the function where the log occurred
    pub const fn function(&self) -> &str {
        self.func
    }

    /// Get the timestamp when the log occurred
    pub const fn timestamp(&self) -> TimeStamp {
        self.time
    }
}

struct LogLocationFormatter<'a> {
    loc   : &'a LogLocation,
    level : LogLevel
}

impl<'a> Display for LogLocationFormatter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            LogLevel::Severe |
            LogLevel::Error |
            LogLevel::Debug => f.write_fmt(format_args!("({}:{}: {})", self.loc.file(), self.loc.line(), self.loc.function())),
            LogLevel::Warning |
            LogLevel::Info |
            LogLevel::Verbose => Ok(()),
        }
    }
}

pub fn get_func_name<F>(_: F) -> &'static str {
    core::any::type_name::<F>()
}

#[macro_export]
macro_rules! log_location {
    () => {
        $crate::LogLocation::new(file!(), line!(), "", $crate::timestamp())
    };
    ($func: expr) => {
        $crate::LogLocation::new(file!(), line!(), $crate::get_func_name($func), $crate::timestamp())
    };
}

type BoxedWriter = Box<dyn Write + Send>;

struct LoggerState {
    writers:        [Option<BoxedWriter>; Self::MAX_WRITERS],
    cache:          String,
    always_flush:   bool,
    log_to_console: bool,
}

impl LoggerState {
    const MAX_WRITERS: usize = 8;
    const CACHE_FLUSH_LIMIT: usize = 4 * 1024;

    const fn new() -> Self {
        const NONE: Option<BoxedWriter> = None;
        Self {
            writers: [NONE; Self::MAX_WRITERS],
            cache: String::new(),
            always_flush: false,
            log_to_console: true,
        }
    }

    fn write_message(&mut self, message: &str) {
        self.cache.push_str(message);
        self.flush_when_needed();
    }

    fn format_message(&mut self, fmt_args: Arguments) {
        _ = self.cache.write_fmt(fmt_args);
        self.flush_when_needed();
    }

    fn flush_when_needed(&mut self) {
        if self.always_flush || self.cache.len() > Self::CACHE_FLUSH_LIMIT {
            self.flush();
        }
    }

    fn flush(&mut self) {
        if self.cache.is_empty() {
            return;
        }

        if self.log_to_console {
            _ = io::stderr().lock().write_all(self.cache.as_bytes());
        }

        for writer in self.writers.iter_mut().flatten() {
            _ = writer.write_all(self.cache.as_bytes());
            _ = writer.flush();
        }
        self.cache.clear();
    }
}

/// Logger
///
/// Supports up to 8 writers, e.g. a file, an in-game console, an external tool, etc
pub struct Logger {
    state: Mutex<LoggerState>,
    max_log_level: AtomicU8,
}

impl Logger {
    pub const fn new() -> Self {
        Self {
            state: parking_lot::const_mutex(LoggerState::new()),
            max_log_level: AtomicU8::new(LogLevel::Debug as u8),
        }
    }

    /// Set the maximum log level (severe == lowest, debug == highest)
    pub fn set_max_level(&self, level: LogLevel) {
        self.max_log_level.store(level as u8, atomic::Ordering::Relaxed)
    }

    /// Check if a message at the given level would be logged
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level as u8 <= self.max_log_level.load(atomic::Ordering::Relaxed)
    }

    /// Set whether the logger should flush after each write
    pub fn set_always_flush(&self, always_flush: bool) {
        self.state.lock().always_flush = always_flush;
    }

    /// Set whether the logger should log it's output to stderr
    pub fn set_log_to_console(&self, log_to_console: bool) {
        let mut state = self.state.lock();

        // Messages logged before the switch still go to wherever they were meant to go
        state.flush();
        state.log_to_console = log_to_console;
    }

    /// Add a writer.
    ///
    /// Returns `Ok(index)` if space was available. This index can be used to remove the writer later on.
    ///
    /// Otherwise returns an `Err` with the provided writer
    pub fn add_writer(&self, writer: BoxedWriter) -> Result<usize, BoxedWriter> {
        let mut state = self.state.lock();

        let empty = state.writers.iter_mut().enumerate().find(|val| val.1.is_none());
        match empty {
            Some((id, slot)) => {
                *slot = Some(writer);
                Ok(id)
            },
            None => Err(writer),
        }
    }

    /// Remove a writer from the logger
    pub fn remove_writer(&self, index: usize) -> Option<BoxedWriter> {
        let mut state = self.state.lock();
        state.flush();
        state.writers.get_mut(index).and_then(Option::take)
    }

    /// Log a message
    pub fn log(&self, category: LogCategory, level: LogLevel, loc: LogLocation, text: &str) {
        self.log_fmt(category, level, loc, format_args!("{text}"))
    }

    /// Log a formatted message
    pub fn log_fmt(&self, category: LogCategory, level: LogLevel, loc: LogLocation, format: Arguments) {
        if self.is_enabled(level) {
            let loc_formatter = LogLocationFormatter { loc: &loc, level };
            let timestamp = loc.timestamp();
            let mut state = self.state.lock();
            state.format_message(format_args!("{timestamp} {level} [{category}] {loc_formatter}: "));
            state.format_message(format);
            state.write_message("\n");
        }
    }

    pub fn flush(&self) {
        self.state.lock().flush()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.state.get_mut().flush();
    }
}

#[macro_export]
macro_rules! log {
    ($category:expr, $level:expr, $func:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        if let Some(logger) = $crate::get_logger() {
            logger.log_fmt($category, $level, $crate::log_location!($func), format_args!($format $(, $arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_severe {
    ($category:expr, $func:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        if let Some(logger) = $crate::get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Severe, $crate::log_location!($func), format_args!($format $(, $arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($category:expr, $func:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        if let Some(logger) = $crate::get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Error, $crate::log_location!($func), format_args!($format $(, $arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_warning {
    ($category:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        if let Some(logger) = $crate::get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Warning, $crate::log_location!(), format_args!($format $(, $arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($category:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        if let Some(logger) = $crate::get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Info, $crate::log_location!(), format_args!($format $(, $arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_verbose {
    ($category:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        if let Some(logger) = $crate::get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Verbose, $crate::log_location!(), format_args!($format $(, $arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($category:expr, $func:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        if let Some(logger) = $crate::get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Debug, $crate::log_location!($func), format_args!($format $(, $arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    const CATEGORY: LogCategory = LogCategory::new_with_sub("Test", "Logger");

    fn quiet_logger(buffer: &SharedBuffer) -> Logger {
        let logger = Logger::new();
        logger.set_log_to_console(false);
        logger.set_always_flush(true);
        assert!(logger.add_writer(Box::new(buffer.clone())).is_ok());
        logger
    }

    #[test]
    fn writes_category_and_level() {
        let buffer = SharedBuffer::default();
        let logger = quiet_logger(&buffer);

        logger.log_fmt(CATEGORY, LogLevel::Warning, log_location!(), format_args!("value {}", 42));
        let out = buffer.contents();
        assert!(out.contains("[WARNING]"));
        assert!(out.contains("[Test(Logger)]"));
        assert!(out.ends_with("value 42\n"));
    }

    #[test]
    fn max_level_filters_messages() {
        let buffer = SharedBuffer::default();
        let logger = quiet_logger(&buffer);
        logger.set_max_level(LogLevel::Warning);

        logger.log(CATEGORY, LogLevel::Verbose, log_location!(), "hidden");
        logger.log(CATEGORY, LogLevel::Error, log_location!(writes_category_and_level), "shown");
        let out = buffer.contents();
        assert!(!out.contains("hidden"));
        assert!(out.contains("shown"));
        assert!(out.contains("writes_category_and_level"));
    }

    #[test]
    fn writer_slots_are_limited() {
        let logger = Logger::new();
        for i in 0..LoggerState::MAX_WRITERS {
            assert_eq!(logger.add_writer(Box::new(io::sink())).ok(), Some(i));
        }
        assert!(logger.add_writer(Box::new(io::sink())).is_err());
        assert!(logger.remove_writer(3).is_some());
        assert!(logger.remove_writer(3).is_none());
        assert_eq!(logger.add_writer(Box::new(io::sink())).ok(), Some(3));
    }

    #[test]
    fn global_logger_macros() {
        static GLOBAL: Logger = Logger::new();
        let buffer = SharedBuffer::default();
        GLOBAL.set_log_to_console(false);
        GLOBAL.set_always_flush(true);
        assert!(GLOBAL.add_writer(Box::new(buffer.clone())).is_ok());

        set_logger(&GLOBAL);
        log_info!(CATEGORY, "installed {}", "logger");
        assert!(clear_logger().is_some());
        log_info!(CATEGORY, "not logged");

        let out = buffer.contents();
        assert!(out.contains("installed logger"));
        assert!(!out.contains("not logged"));
    }
}
