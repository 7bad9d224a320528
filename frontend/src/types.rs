//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Conversion Types** - converted-file descriptors from the backend
//! - **Upload State** - the panel's state machine
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Conversion Types
// =============================================================================

/// One successfully converted document.
///
/// `original_name` is the user-facing label; `name` is the backend-assigned
/// stored identifier used to fetch the converted artifact. Immutable once
/// received; lives only in in-memory UI state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedFile {
    pub original_name: String,
    pub name: String,
}

// =============================================================================
// Upload State
// =============================================================================

/// Upload panel state machine.
///
/// A single value holds all three states, so the UI can never show the
/// spinner and the error banner at the same time. Transitions are driven
/// solely by the outcome of the conversion request.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadState {
    /// Nothing in flight, no error. Shows the drop prompt.
    Idle,
    /// One conversion request in flight. Shows the spinner.
    Uploading,
    /// The last conversion failed. Persists until dismissed or a new
    /// submission replaces it.
    Error(String),
}

impl UploadState {
    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadState::Uploading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UploadState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Clear an error back to idle. A no-op in any other state.
    pub fn dismiss(&mut self) {
        if matches!(self, UploadState::Error(_)) {
            *self = UploadState::Idle;
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// The conversion request failed.
    Upload(String),
    /// The download request failed.
    Download(String),
    /// Network/HTTP transport error.
    Network(String),
}

impl AppError {
    /// The bare message, without the category prefix. This is what the
    /// banner shows to the user.
    pub fn message(&self) -> &str {
        match self {
            AppError::Upload(msg) | AppError::Download(msg) | AppError::Network(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
            AppError::Download(msg) => write!(f, "Download error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_clears_error() {
        let mut state = UploadState::Error("boom".to_string());
        state.dismiss();
        assert_eq!(state, UploadState::Idle);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut state = UploadState::Idle;
        state.dismiss();
        assert_eq!(state, UploadState::Idle);

        let mut state = UploadState::Uploading;
        state.dismiss();
        assert_eq!(state, UploadState::Uploading);
    }

    #[test]
    fn error_message_is_readable_only_in_error_state() {
        assert_eq!(UploadState::Error("oops".into()).error(), Some("oops"));
        assert_eq!(UploadState::Idle.error(), None);
        assert_eq!(UploadState::Uploading.error(), None);
    }

    #[test]
    fn converted_file_uses_backend_field_names() {
        let json = r#"{"originalName":"contract.docx","name":"f_9182"}"#;
        let file: ConvertedFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.original_name, "contract.docx");
        assert_eq!(file.name, "f_9182");
    }

    #[test]
    fn app_error_exposes_bare_message() {
        let err = AppError::Upload("unsupported format".to_string());
        assert_eq!(err.message(), "unsupported format");
        assert_eq!(err.to_string(), "Upload error: unsupported format");
    }
}
