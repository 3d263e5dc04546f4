//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, but adds file output capabilities.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level echoed to the console
    console_level: Level,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new<P: AsRef<Path>>(log_file: P) -> io::Result<Self> {
        let file = File::create(log_file.as_ref())?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            console_level: Level::Info,
        })
    }

    /// Logger that records nothing, for library use without a log file
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
            console_level: Level::Info,
        }
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Static method to initialize the global logger
    ///
    /// Every record down to Debug is written to `log_file`; records at or
    /// above `console_level` are also printed.
    pub fn init_global_logger<P: AsRef<Path>>(log_file: P, console_level: Level) -> io::Result<()> {
        let mut global_logger = Logger::new(log_file)?;
        global_logger.console_level = console_level;

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(LevelFilter::Debug);
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            // stdout is reserved for command output
            if record.level() <= self.console_level {
                eprintln!("{}", message);
            }
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_log_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");

        let logger = Logger::new(&path).unwrap();
        logger.log("first line").unwrap();
        logger.log("second line").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }

    #[test]
    fn test_global_logger_writes_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("global.log");

        Logger::init_global_logger(&path, Level::Error).unwrap();
        log::debug!("global record reached the file");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[DEBUG] global record reached the file"));
    }

    #[test]
    fn test_disabled_logger_accepts_messages() {
        let logger = Logger::disabled();
        assert!(logger.log("ignored").is_ok());
    }
}
