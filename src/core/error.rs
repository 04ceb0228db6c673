//! Error types for the logging pipeline

use super::entry::codes;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The sink rejected a write
    #[error("Write to {writer} failed: {message}")]
    WriteFailed {
        writer: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The resource could not be reopened or swapped
    #[error("Rotation of '{target}' failed: {message}")]
    RotateFailed {
        target: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The log file could not be opened
    #[error("Failed to open log file '{path}'")]
    FileOpenFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writer used after close
    #[error("Writer '{writer}' is closed")]
    WriterClosed { writer: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create a write failure for the named writer
    pub fn write_failed(
        writer: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::WriteFailed {
            writer: writer.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a rotation failure for the given file or socket
    pub fn rotate_failed(
        target: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::RotateFailed {
            target: target.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a file open failure
    pub fn file_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileOpenFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a closed-writer error
    pub fn closed(writer: impl Into<String>) -> Self {
        LoggerError::WriterClosed {
            writer: writer.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            LoggerError::WriteFailed { .. } | LoggerError::WriterClosed { .. } => {
                codes::E_LOG_WRITE_FAILED
            }
            LoggerError::RotateFailed { .. } => codes::E_LOG_ROTATE_FAILED,
            LoggerError::FileOpenFailed { .. } => codes::E_LOG_FILE_OPEN_FAILED,
            LoggerError::InvalidConfiguration { .. } => codes::E_LOG_CONFIG_INVALID,
            LoggerError::IoError(_) | LoggerError::JsonError(_) => codes::E_UNKNOWN_ERROR,
        }
    }

    /// True for errors raised while validating configuration
    pub fn is_config(&self) -> bool {
        matches!(self, LoggerError::InvalidConfiguration { .. })
    }
}
