//! Interpreter resolver errors

use super::MarkerError;

/// Creates an interpreter not found error
pub fn interpreter_not_found(
    name: impl Into<String>,
    program: impl Into<String>,
    reason: impl Into<String>,
) -> MarkerError {
    MarkerError::InterpreterNotFound {
        name: name.into(),
        program: program.into(),
        reason: reason.into(),
    }
}

/// Creates a resolver failed error
pub fn failed(
    name: impl Into<String>,
    program: impl Into<String>,
    reason: impl Into<String>,
) -> MarkerError {
    MarkerError::ResolverFailed {
        name: name.into(),
        program: program.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid resolver output error
pub fn invalid_output(reason: impl Into<String>) -> MarkerError {
    MarkerError::ResolverOutputInvalid {
        reason: reason.into(),
    }
}
