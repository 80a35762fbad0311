//! Error types and utilities for PriceGraph

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for PriceGraph operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Main error type for PriceGraph operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// The input file does not exist at the given path. Fatal; aborts the run.
    #[error("input file not found: {}", path.display())]
    InputNotFound {
        /// Path that failed to resolve
        path: PathBuf,
    },

    /// The input table is structurally unusable (missing required column,
    /// unparseable cell, empty vendor). Fatal; aborts the run.
    #[error("malformed input: {message}")]
    MalformedInput {
        /// What was wrong with the input
        message: String,
        /// 1-based data row the problem was found on, when known
        row: Option<usize>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing errors from the underlying reader
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialization/deserialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration related errors
    #[error("configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
        #[source]
        /// Underlying cause, when one exists
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Chart rendering errors
    #[error("render error: {message}")]
    Render {
        /// What failed while drawing
        message: String,
        #[source]
        /// Underlying cause, when one exists
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ReportError {
    /// Create an input-not-found error for a path
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create a malformed-input error with no row context
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: msg.into(),
            row: None,
        }
    }

    /// Create a malformed-input error pinned to a 1-based data row
    pub fn malformed_at(msg: impl Into<String>, row: usize) -> Self {
        Self::MalformedInput {
            message: msg.into(),
            row: Some(row),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a render error
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a render error with source
    pub fn render_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Render {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(feature = "plotters")]
/// Convert plotters drawing errors to ReportError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for ReportError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::render_with_source("chart drawing failed", err)
    }
}
