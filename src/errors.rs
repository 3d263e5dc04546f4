//! Custom error types for the toolkit

use std::fmt;
use std::io;

/// Toolkit error types
#[derive(Debug)]
pub enum ToolkitError {
    /// I/O error
    IoError(io::Error),
    /// PDF parsing or writing error
    PdfError(lopdf::Error),
    /// User supplied input that cannot be used
    InvalidInput(String),
    /// The input contained nothing the operation could work on
    NothingToProcess(String),
    /// Invalid configuration file
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ToolkitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolkitError::IoError(e) => write!(f, "I/O error: {}", e),
            ToolkitError::PdfError(e) => write!(f, "PDF error: {}", e),
            ToolkitError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ToolkitError::NothingToProcess(msg) => write!(f, "Nothing to process: {}", msg),
            ToolkitError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ToolkitError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ToolkitError {}

impl From<io::Error> for ToolkitError {
    fn from(error: io::Error) -> Self {
        ToolkitError::IoError(error)
    }
}

impl From<lopdf::Error> for ToolkitError {
    fn from(error: lopdf::Error) -> Self {
        ToolkitError::PdfError(error)
    }
}

impl From<toml::de::Error> for ToolkitError {
    fn from(error: toml::de::Error) -> Self {
        ToolkitError::ConfigError(error.to_string())
    }
}

/// Result type for toolkit operations
pub type ToolkitResult<T> = Result<T, ToolkitError>;

impl From<String> for ToolkitError {
    fn from(msg: String) -> Self {
        ToolkitError::GenericError(msg)
    }
}
