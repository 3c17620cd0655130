//! Package lookup errors

use std::path::PathBuf;

use super::MarkerError;

/// Creates a package not found error
pub fn not_found(name: impl Into<String>) -> MarkerError {
    MarkerError::PackageNotFound { name: name.into() }
}

/// Creates an ambiguous package location error
pub fn ambiguous_location(name: impl Into<String>, locations: Vec<PathBuf>) -> MarkerError {
    MarkerError::AmbiguousPackageLocation {
        name: name.into(),
        locations,
    }
}

/// Creates an invalid package name error
pub fn invalid_name(name: impl Into<String>) -> MarkerError {
    MarkerError::InvalidPackageName { name: name.into() }
}
