//! Logging macros with `format!`-style arguments.
//!
//! Templates are passed to the logger as [`std::fmt::Arguments`], so a
//! message is only rendered when its severity passes the threshold.
//!
//! # Examples
//!
//! ```
//! use log_pipeline::prelude::*;
//! use log_pipeline::{entry, info, warning};
//!
//! let context = TestContext::new("macros");
//! let logger = Logger::from_config(
//!     Config::new()
//!         .with_level(Severity::Info)
//!         .with_format(Format::Text)
//!         .with_test_context(context.clone()),
//! )
//! .unwrap();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! warning!(logger, entry!("E_SLOW_START", "startup took {}ms", 1200));
//!
//! assert_eq!(context.lines().len(), 2);
//! ```

/// Build an [`Entry`](crate::core::Entry) with a formatted explanation.
///
/// ```
/// use log_pipeline::entry;
///
/// let entry = entry!("E_DISK_FULL", "volume {} is full", "/var");
/// assert_eq!(entry.code(), "E_DISK_FULL");
/// assert_eq!(entry.explanation(), "volume /var is full");
/// ```
#[macro_export]
macro_rules! entry {
    ($code:expr, $($arg:tt)+) => {
        $crate::core::Entry::new($code, format!($($arg)+))
    };
}

/// Log at an explicit severity.
///
/// A string literal is always treated as a format template, so inline
/// captures (`{name}`) and escaped braces work with or without further
/// arguments. Any other single expression (an entry, an error, an owned
/// string) is passed through unchanged.
///
/// # Examples
///
/// ```
/// use log_pipeline::{log, Logger, Severity};
///
/// let (logger, context) = Logger::for_test("macros");
/// let user = "alice";
/// log!(logger, Severity::Notice, "{user} logged in");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// assert_eq!(context.lines()[0], "[notice]\t[macros]\talice logged in");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $fmt:literal) => {
        $logger.emit($severity, format_args!($fmt))
    };
    ($logger:expr, $severity:expr, $fmt:literal, $($arg:tt)+) => {
        $logger.emit($severity, format_args!($fmt, $($arg)+))
    };
    ($logger:expr, $severity:expr, $payload:expr) => {
        $logger.emit($severity, $payload)
    };
}

/// Log an emergency-level message.
///
/// # Examples
///
/// ```
/// use log_pipeline::{emergency, Logger};
///
/// let (logger, context) = Logger::for_test("macros");
/// emergency!(logger, "Disk {} is gone", "/dev/sda");
/// assert_eq!(context.lines()[0], "[emerg]\t[macros]\tDisk /dev/sda is gone");
/// ```
#[macro_export]
macro_rules! emergency {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Severity::Emergency, $($arg)+)
    };
}

/// Log an alert-level message.
///
/// # Examples
///
/// ```
/// use log_pipeline::{alert, Logger};
///
/// let (logger, context) = Logger::for_test("macros");
/// alert!(logger, "Replica lag {}s", 90);
/// assert_eq!(context.lines()[0], "[alert]\t[macros]\tReplica lag 90s");
/// ```
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Severity::Alert, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// # Examples
///
/// ```
/// use log_pipeline::{critical, Logger};
///
/// let (logger, context) = Logger::for_test("macros");
/// critical!(logger, "Cannot open {}", "db.sqlite");
/// assert_eq!(context.lines()[0], "[crit]\t[macros]\tCannot open db.sqlite");
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Severity::Critical, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// use log_pipeline::{error, Logger};
///
/// let (logger, context) = Logger::for_test("macros");
/// error!(logger, "Request failed with status {}", 500);
/// assert_eq!(context.lines()[0], "[error]\t[macros]\tRequest failed with status 500");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Severity::Error, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// use log_pipeline::{warning, Logger};
///
/// let (logger, context) = Logger::for_test("macros");
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// assert_eq!(context.lines()[0], "[warning]\t[macros]\tRetry attempt 3 of 5");
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Severity::Warning, $($arg)+)
    };
}

/// Log a notice-level message.
///
/// # Examples
///
/// ```
/// use log_pipeline::{notice, Logger};
///
/// let (logger, context) = Logger::for_test("macros");
/// notice!(logger, "Configuration reloaded");
/// assert_eq!(context.lines()[0], "[notice]\t[macros]\tConfiguration reloaded");
/// ```
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Severity::Notice, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// use log_pipeline::{info, Logger};
///
/// let (logger, context) = Logger::for_test("macros");
/// let port = 8080;
/// info!(logger, "Server listening on port {port}");
/// assert_eq!(context.lines()[0], "[info]\t[macros]\tServer listening on port 8080");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Severity::Info, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// use log_pipeline::{debug, Logger};
///
/// let (logger, context) = Logger::for_test("macros");
/// debug!(logger, "Cache size: {}", 10);
/// assert_eq!(context.lines()[0], "[debug]\t[macros]\tCache size: 10");
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::Severity::Debug, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::config::Config;
    use crate::core::{Format, Logger, LoggerFactory, Severity};
    use crate::writers::TestContext;

    fn capture() -> (Logger, TestContext) {
        let context = TestContext::new("macros").without_colors();
        let logger = LoggerFactory::make(
            Config::new()
                .with_level(Severity::Debug)
                .with_format(Format::Text)
                .with_test_context(context.clone()),
        )
        .unwrap();
        (logger, context)
    }

    #[test]
    fn test_log_macro() {
        let (logger, context) = capture();
        log!(logger, Severity::Notice, "Test message");
        log!(logger, Severity::Notice, "Formatted: {}", 42);
        assert_eq!(
            context.lines(),
            vec![
                "[notice]\t[]\tTest message".to_string(),
                "[notice]\t[]\tFormatted: 42".to_string(),
            ]
        );
    }

    #[test]
    fn test_lone_literal_captures_inline_arguments() {
        let (logger, context) = capture();
        let port = 8080;
        info!(logger, "listening on {port}");
        log!(logger, Severity::Warning, "retry {port} after {}s", 5);
        assert_eq!(
            context.lines(),
            vec![
                "[info]\t[]\tlistening on 8080".to_string(),
                "[warning]\t[]\tretry 8080 after 5s".to_string(),
            ]
        );
    }

    #[test]
    fn test_lone_literal_unescapes_braces() {
        let (logger, context) = capture();
        notice!(logger, "literal braces {{}}");
        log!(logger, Severity::Debug, "map {{a: {}}}", 1);
        assert_eq!(
            context.lines(),
            vec![
                "[notice]\t[]\tliteral braces {}".to_string(),
                "[debug]\t[]\tmap {a: 1}".to_string(),
            ]
        );
    }

    #[test]
    fn test_owned_string_passes_through() {
        let (logger, context) = capture();
        let raw = String::from("kept {verbatim}");
        warning!(logger, raw);
        assert_eq!(context.lines(), vec!["[warning]\t[]\tkept {verbatim}".to_string()]);
    }

    #[test]
    fn test_level_macros() {
        let (logger, context) = capture();
        emergency!(logger, "a {}", 1);
        alert!(logger, "b");
        critical!(logger, "c");
        error!(logger, "d {}", "x");
        warning!(logger, "e");
        notice!(logger, "f");
        info!(logger, "g");
        debug!(logger, "h {}", 2);

        let lines = context.lines();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "[emerg]\t[]\ta 1");
        assert_eq!(lines[3], "[error]\t[]\td x");
        assert_eq!(lines[7], "[debug]\t[]\th 2");
    }

    #[test]
    fn test_entry_macro_keeps_code() {
        let (logger, context) = capture();
        let user = "carol";
        let entry = entry!("E_AUTH_FAILED", "bad password for {}", user).with_label("attempt", 3);
        error!(logger, entry);
        assert_eq!(context.lines()[0], "[error]\t[]\tbad password for carol (attempt=3)");
    }

    #[test]
    fn test_macros_with_test_logger() {
        let (logger, context) = Logger::for_test("macro_logger");
        let attempt = 2;
        debug!(logger, "attempt {attempt}");
        assert_eq!(context.lines(), vec!["[debug]\t[macro_logger]\tattempt 2".to_string()]);
    }
}
