//! Internal logging system for OpenGL Kit
//!
//! This module provides a small logging system with:
//! - Customizable logger via Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default, diagnostics on stderr
//! - File and line information for detailed ERROR logs

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to redirect compile/link diagnostics and resource
/// events somewhere else than the console.
///
/// # Example
///
/// ```no_run
/// use opengl_kit::glkit::log::{Logger, LogEntry};
///
/// struct FileLogger {
///     file: std::fs::File,
/// }
///
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source component (e.g., "glkit::ShaderCompiler", "glkit::glow")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose information (per-frame device traffic)
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (degraded but usable resources)
    Warn,

    /// Error messages (compile/link/load diagnostics)
    Error,
}

impl LogSeverity {
    pub(crate) fn as_u8(self) -> u8 {
        match self {
            LogSeverity::Trace => 0,
            LogSeverity::Debug => 1,
            LogSeverity::Info => 2,
            LogSeverity::Warn => 3,
            LogSeverity::Error => 4,
        }
    }
}

/// Default logger implementation using colored console output
///
/// Colors:
/// - Trace: bright_black
/// - Debug: cyan
/// - Info: green
/// - Warn: yellow
/// - Error: red + bold
///
/// WARN and ERROR entries are written to stderr, everything else to stdout.
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl DefaultLogger {
    fn format_entry(entry: &LogEntry) -> String {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            format!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            )
        } else {
            format!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            )
        }
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let line = Self::format_entry(entry);
        if entry.severity >= LogSeverity::Warn {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (very verbose, filtered out by default)
///
/// # Example
///
/// ```no_run
/// # use opengl_kit::kit_trace;
/// kit_trace!("glkit::RenderLoop", "Frame {} presented", 42);
/// ```
#[macro_export]
macro_rules! kit_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::glkit::Kit::log(
            $crate::glkit::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message (development information)
///
/// # Example
///
/// ```no_run
/// # use opengl_kit::kit_debug;
/// kit_debug!("glkit::ProgramLinker", "Linked program {}", 3);
/// ```
#[macro_export]
macro_rules! kit_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::glkit::Kit::log(
            $crate::glkit::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message (important events)
///
/// # Example
///
/// ```no_run
/// # use opengl_kit::kit_info;
/// kit_info!("glkit::RenderLoop", "Render loop started");
/// ```
#[macro_export]
macro_rules! kit_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::glkit::Kit::log(
            $crate::glkit::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message (potential issues)
///
/// # Example
///
/// ```no_run
/// # use opengl_kit::kit_warn;
/// kit_warn!("glkit::Scene", "Texture '{}' missing, drawing without it", "container.jpg");
/// ```
#[macro_export]
macro_rules! kit_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::glkit::Kit::log(
            $crate::glkit::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// # Example
///
/// ```no_run
/// # use opengl_kit::kit_error;
/// kit_error!("glkit::ShaderCompiler", "Fragment shader failed: {}", "syntax error");
/// ```
#[macro_export]
macro_rules! kit_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::glkit::Kit::log_detailed(
            $crate::glkit::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
