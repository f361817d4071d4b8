//! Error types for chess lookups and tool execution.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur during tool execution.
///
/// Upstream API failures never show up here: the chess tools turn those into
/// a readable sentence in a successful [`ToolOutput`](crate::ToolOutput).
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool not found in registry.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Missing required parameter.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Tool arguments were not a JSON object.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Why a fetch from the chess API produced no data.
///
/// Callers collapse every variant into the same "unable to fetch" outcome;
/// the cause is kept for logging only.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, timeout, body read, or non-JSON body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("Unexpected status {status} from {url}")]
    Status { status: StatusCode, url: String },

    /// Body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Body was `null` or an empty object.
    #[error("Empty response from {0}")]
    Empty(String),
}
