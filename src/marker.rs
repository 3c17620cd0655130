//! Marker installation
//!
//! Resolves a package to exactly one directory and drops an empty `py.typed`
//! file into it.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::error::{Result, fs, package};
use crate::resolver::{LocationResolver, ResolvedLocations};

/// Name of the marker file consumed by type checkers
pub const MARKER_FILE_NAME: &str = "py.typed";

/// Options controlling marker installation
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerOptions {
    /// Resolve and validate, but do not write
    pub dry_run: bool,
}

/// Result of a successful installation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerOutcome {
    pub package_dir: PathBuf,
    pub marker_path: PathBuf,
    pub already_present: bool,
    pub dry_run: bool,
}

impl MarkerOutcome {
    /// Confirmation line printed to stdout
    pub fn message(&self) -> String {
        if self.dry_run {
            format!(
                "Would add {} to {}.",
                MARKER_FILE_NAME,
                self.package_dir.display()
            )
        } else {
            format!(
                "Added {} to {}.",
                MARKER_FILE_NAME,
                self.package_dir.display()
            )
        }
    }
}

/// Installs `py.typed` markers using an injected resolver
pub struct MarkerInstaller<'a> {
    resolver: &'a dyn LocationResolver,
    options: MarkerOptions,
}

impl<'a> MarkerInstaller<'a> {
    pub fn new(resolver: &'a dyn LocationResolver) -> Self {
        Self::with_options(resolver, MarkerOptions::default())
    }

    pub fn with_options(resolver: &'a dyn LocationResolver, options: MarkerOptions) -> Self {
        Self { resolver, options }
    }

    /// Mark `package_name` as typed
    ///
    /// Nothing is written unless the package resolves to exactly one
    /// directory. An existing marker is left untouched.
    pub fn install(&self, package_name: &str) -> Result<MarkerOutcome> {
        let package_name = package_name.trim();
        if package_name.is_empty() {
            return Err(package::invalid_name(package_name));
        }

        let package_dir =
            ResolvedLocations::resolve_with(self.resolver, package_name)?.into_single()?;
        let marker_path = package_dir.join(MARKER_FILE_NAME);
        let already_present = marker_path.is_file();

        if self.options.dry_run {
            log::debug!("Dry run, not writing {}", marker_path.display());
        } else if already_present {
            log::debug!("{} already exists, leaving it as-is", marker_path.display());
        } else {
            touch(&marker_path)?;
            log::debug!("Created {}", marker_path.display());
        }

        Ok(MarkerOutcome {
            package_dir,
            marker_path,
            already_present,
            dry_run: self.options.dry_run,
        })
    }
}

/// Create `path` if missing without truncating an existing file
fn touch(path: &Path) -> Result<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(drop)
        .map_err(|e| fs::write_failed(path.display().to_string(), e.to_string()))
}
