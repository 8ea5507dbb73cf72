//! Error types for Page Bar
//!
//! This module provides unified error handling across the page bar crates,
//! covering index errors from stale UI events, drag payload errors,
//! configuration errors, and IO/serialization errors.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Page Bar
#[derive(Debug, Error)]
pub enum PageBarError {
    // ========================================================================
    // Index Errors
    // ========================================================================
    /// An index-based operation referenced a page that does not exist
    #[error("{operation}: index {index} is out of range for {len} page(s)")]
    IndexOutOfRange {
        operation: &'static str,
        index: usize,
        len: usize,
    },

    /// Page not found by id
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Two pages share the same id
    #[error("Duplicate page id: '{0}' already exists")]
    DuplicatePageId(String),

    // ========================================================================
    // Drag Payload Errors
    // ========================================================================
    /// Drag payload was missing or could not be decoded
    #[error("Malformed drag payload: {0}")]
    MalformedPayload(String),

    /// Drag payload does not describe a page button
    #[error("Unsupported drag payload type: '{0}'")]
    UnsupportedPayload(String),

    /// Drag payload refers to a page that moved or disappeared mid-gesture
    #[error("Stale drag payload: page '{id}' is no longer at index {index}")]
    StalePayload { id: String, index: usize },

    /// A drag gesture is already running
    #[error("A drag gesture is already in progress")]
    DragInProgress,

    /// No drag gesture is running
    #[error("No drag gesture is in progress")]
    NoActiveDrag,

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration '{path}': {message}")]
    ConfigParse { path: PathBuf, message: String },

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl PageBarError {
    /// Create an out-of-range error for the named operation
    pub fn out_of_range(operation: &'static str, index: usize, len: usize) -> Self {
        PageBarError::IndexOutOfRange {
            operation,
            index,
            len,
        }
    }

    /// Create a malformed payload error
    pub fn malformed(msg: impl Into<String>) -> Self {
        PageBarError::MalformedPayload(msg.into())
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        PageBarError::InvalidConfig(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        PageBarError::Internal(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        PageBarError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error came from a stale or invalid index
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            PageBarError::IndexOutOfRange { .. } | PageBarError::PageNotFound(_)
        )
    }

    /// Check if this error came from a rejected drag payload
    pub fn is_payload_error(&self) -> bool {
        matches!(
            self,
            PageBarError::MalformedPayload(_)
                | PageBarError::UnsupportedPayload(_)
                | PageBarError::StalePayload { .. }
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, PageBarError::Io(_) | PageBarError::FileRead { .. })
    }
}

/// Result type alias using PageBarError
pub type PageBarResult<T> = Result<T, PageBarError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> PageBarResult<T>;
}

impl<T, E: Into<PageBarError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> PageBarResult<T> {
        self.map_err(|e| {
            let err: PageBarError = e.into();
            PageBarError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
