//! Error type shared by every API call-site.

use thiserror::Error;

/// Message shown when the backend gives no usable error text.
pub const GENERIC_ERROR_MESSAGE: &str = "网络错误";

/// A failed API call.
///
/// Every variant collapses to a single user-facing string via
/// [`ApiError::display_message`]; the variants only exist so callers and logs
/// can tell where the failure happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be built (e.g. body encoding failed).
    #[error("request build failed: {0}")]
    Request(String),

    /// The request never produced a response (offline, aborted, timed out).
    #[error("network failure: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("status {status}: {}", .message.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE))]
    Status { status: u16, message: Option<String> },

    /// A success response whose payload did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// The text shown to the user for this failure.
    pub fn display_message(&self) -> &str {
        match self {
            Self::Status { message: Some(message), .. } => message,
            _ => GENERIC_ERROR_MESSAGE,
        }
    }

    /// HTTP status, when the backend responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
