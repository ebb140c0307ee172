//! Error types for the extraction controller.
//!
//! - [`ValidationError`] - missing selections, caught before any network call
//! - [`TransportError`] - upload or progress-channel failures
//! - [`ServerError`] - non-2xx replies from the extraction endpoint
//! - [`ExtractionError`] - top-level error for a submission run
//!
//! Conversion is automatic via `From`, so `?` works across the boundaries.
//! The wrapped variants display transparently: the failure line shown to the
//! user is `operation failed: <detail>` and must not grow extra prefixes.

use thiserror::Error;

// =============================================================================
// Validation Errors
// =============================================================================

/// Preconditions checked before a run starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No PDF file was selected.
    #[error("select PDF files")]
    NoPdfFiles,

    /// Skip mode is off and no spreadsheet was selected.
    #[error("select Excel file or enable skip mode")]
    MissingSpreadsheet,
}

// =============================================================================
// Transport Errors
// =============================================================================

/// Network or channel failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The upload request could not be built or sent.
    #[error("request failed: {0}")]
    Request(String),

    /// The progress channel could not be opened or broke down.
    #[error("progress channel error: {0}")]
    Channel(String),

    /// A 2xx reply whose body is not the expected JSON object.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Server Errors
// =============================================================================

/// A non-2xx reply from the extraction endpoint.
///
/// Displays as the bare message so the server's wording reaches the log as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ServerError {
    pub status: u16,
    pub message: String,
}

impl ServerError {
    /// Uses the payload message when there is one, else `server error <status>`.
    pub fn from_reply(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("server error {}", status));
        Self { status, message }
    }
}

// =============================================================================
// Top-level
// =============================================================================

/// Everything that can end a submission run early.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Server(#[from] ServerError),
}

/// Result type for controller operations.
pub type ExtractionResult<T> = Result<T, ExtractionError>;
