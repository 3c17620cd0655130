//! Error types and handling for py-typed-marker
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`package`]: Package lookup errors
//! - [`resolver`]: Interpreter resolver errors
//! - [`fs`]: File system errors

pub mod fs;
pub mod package;
pub mod resolver;


use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for py-typed-marker operations
#[derive(Error, Diagnostic, Debug)]
pub enum MarkerError {
    // Package errors
    #[error("Could not find installed location of package {name}.")]
    #[diagnostic(
        code(py_typed_marker::package::not_found),
        help("Check that the package is installed in the environment being queried")
    )]
    PackageNotFound { name: String },

    #[error(
        "Found more than one location for package {name}: {paths}. \
         It's not currently clear how to handle this, so please file an issue \
         explaining what you were trying to do and what you think should happen.",
        paths = format_locations(.locations)
    )]
    #[diagnostic(
        code(py_typed_marker::package::ambiguous_location),
        help("Namespace packages split across several roots must be marked by hand")
    )]
    AmbiguousPackageLocation {
        name: String,
        locations: Vec<PathBuf>,
    },

    #[error("Invalid package name: '{name}'")]
    #[diagnostic(
        code(py_typed_marker::package::invalid_name),
        help("Pass the importable name of the package, e.g. 'requests' or 'google.protobuf'")
    )]
    InvalidPackageName { name: String },

    // Resolver errors
    #[error("Failed to run Python interpreter '{program}' to locate package {name}: {reason}")]
    #[diagnostic(
        code(py_typed_marker::resolver::interpreter_not_found),
        help("Use --python or PY_TYPED_PYTHON to point at the interpreter that owns the package")
    )]
    InterpreterNotFound {
        name: String,
        program: String,
        reason: String,
    },

    #[error("Failed to resolve package {name} with '{program}': {reason}")]
    #[diagnostic(code(py_typed_marker::resolver::failed))]
    ResolverFailed {
        name: String,
        program: String,
        reason: String,
    },

    #[error("Unexpected output from package resolution: {reason}")]
    #[diagnostic(code(py_typed_marker::resolver::invalid_output))]
    ResolverOutputInvalid { reason: String },

    // File system errors
    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(py_typed_marker::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },
}

fn format_locations(locations: &[PathBuf]) -> String {
    locations
        .iter()
        .map(|location| location.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<serde_json::Error> for MarkerError {
    fn from(err: serde_json::Error) -> Self {
        MarkerError::ResolverOutputInvalid {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MarkerError>;
