//! Global error handling for vcfilters
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use thiserror::Error;

/// Global error type for vcfilters operations
#[derive(Error, Debug)]
pub enum VcFiltersError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// XML processing errors
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Project file errors
    #[error("Project error: {0}")]
    Project(String),

    /// Writer errors
    #[error("Writer error: {0}")]
    Writer(String),
}

/// Specialized Result type for vcfilters operations
pub type Result<T> = std::result::Result<T, VcFiltersError>;

/// Creates a VcFiltersError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::VcFiltersError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
