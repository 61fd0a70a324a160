//! # API Error Type
//!
//! Unified error type for session commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tipsplit                               │
//! │                                                                         │
//! │  stdin line                                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Parse JSON? ──── serde_json::Error ──────────► INVALID_REQUEST         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Roster mutation? ─── CoreError::ItemNotFound ─► NOT_FOUND              │
//! │       │               CoreError::Validation ──► VALIDATION_ERROR        │
//! │       │               CoreError::LastParticipant► BUSINESS_LOGIC        │
//! │       ▼                                                                 │
//! │  Success ──────────────────────────────────────► {"ok": true, ...}      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors go to stdout as data, not to stderr; the session keeps running.

use serde::Serialize;
use tipsplit_core::CoreError;

/// API error returned from a command.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Item not found: 5b1e..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Participant or item does not exist
    NotFound,

    /// A field failed validation
    ValidationError,

    /// The roster refused the change (limits, last participant, assignments)
    BusinessLogic,

    /// The command line could not be parsed
    InvalidRequest,

    /// Unexpected failure
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidRequest, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::ParticipantNotFound { .. } | CoreError::ItemNotFound(_) => {
                ErrorCode::NotFound
            }
            CoreError::ParticipantLimit { .. }
            | CoreError::LastParticipant
            | CoreError::ParticipantAssigned { .. } => ErrorCode::BusinessLogic,
            CoreError::Validation(e) => return ApiError::validation(e.to_string()),
        };
        ApiError::new(code, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::invalid_request(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
