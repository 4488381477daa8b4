//! # Error Types
//!
//! Structured error types for novel_core. Every fallible operation on the
//! novel model or its data files returns a [`NovelResult`].
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use novel_core::errors::{NovelError, NovelResult};
//!
//! fn arc_title<'a>(titles: &'a HashMap<String, String>, id: &str) -> NovelResult<&'a str> {
//!     titles
//!         .get(id)
//!         .map(String::as_str)
//!         .ok_or_else(|| NovelError::not_found("Arc", id))
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for novel_core operations
pub type NovelResult<T> = Result<T, NovelError>;

/// Structured error type for model and file operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum NovelError {
    /// An element id does not exist in the novel
    #[error("{kind} not found: '{id}'")]
    ElementNotFound { kind: String, id: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// The data file is not well-formed or misses required parts
    #[error("Parse error in '{path}': {reason}")]
    ParseError { path: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// File format version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl NovelError {
    /// Create an ElementNotFound error
    pub fn not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        NovelError::ElementNotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        NovelError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a ParseError
    pub fn parse_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        NovelError::ParseError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            NovelError::ElementNotFound { .. } => "ELEMENT_NOT_FOUND",
            NovelError::FileError { .. } => "FILE_ERROR",
            NovelError::ParseError { .. } => "PARSE_ERROR",
            NovelError::SerializationError { .. } => "SERIALIZATION_ERROR",
            NovelError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
