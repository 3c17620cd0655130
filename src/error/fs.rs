//! File system errors

use super::MarkerError;

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> MarkerError {
    MarkerError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
