//! py-typed-marker - mark installed Python packages as typed
//!
//! Resolves where a package is installed and writes an empty `py.typed`
//! marker into its directory so type checkers trust the inline annotations.
//!
//! Resolution is pluggable through [`resolver::LocationResolver`]; the
//! [`marker::MarkerInstaller`] refuses packages found in zero or several
//! locations.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod marker;
pub mod resolver;

pub use error::{MarkerError, Result};
pub use marker::{MARKER_FILE_NAME, MarkerInstaller, MarkerOptions, MarkerOutcome};
pub use resolver::{LocationResolver, PythonResolver, ResolvedLocations, SitePackagesResolver};
