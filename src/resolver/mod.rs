//! Package location resolution
//!
//! This module handles:
//! - The [`LocationResolver`] seam used by the marker installer
//! - Asking a Python interpreter where a package lives ([`PythonResolver`])
//! - Scanning explicit installation roots on disk ([`SitePackagesResolver`])
//! - Collapsing duplicate answers into [`ResolvedLocations`]

use std::collections::HashSet;
use std::path::PathBuf;

use normpath::PathExt;

use crate::error::{Result, package};

pub mod python;
pub mod site_packages;

pub use python::PythonResolver;
pub use site_packages::SitePackagesResolver;

/// Answers where an installed package keeps its modules
///
/// Implementations return every directory the package's submodules are
/// searched in. An empty list means the package could not be located.
/// Any `Fn(&str) -> Result<Vec<PathBuf>>` is a resolver, which keeps tests
/// free of real interpreters.
pub trait LocationResolver {
    fn resolve(&self, package: &str) -> Result<Vec<PathBuf>>;
}

impl<F> LocationResolver for F
where
    F: Fn(&str) -> Result<Vec<PathBuf>>,
{
    fn resolve(&self, package: &str) -> Result<Vec<PathBuf>> {
        self(package)
    }
}

/// Directories reported for one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocations {
    pub package: String,
    pub dirs: Vec<PathBuf>,
}

impl ResolvedLocations {
    /// Build from raw resolver output, dropping repeated directories
    ///
    /// Two entries are the same directory when they normalize to the same
    /// path. The first spelling reported is kept.
    pub fn new(package: impl Into<String>, dirs: Vec<PathBuf>) -> Self {
        let mut seen = HashSet::new();
        let dirs = dirs
            .into_iter()
            .filter(|dir| {
                let key = dir
                    .normalize()
                    .map_or_else(|_| dir.clone(), |norm| norm.into_path_buf());
                seen.insert(key)
            })
            .collect();

        Self {
            package: package.into(),
            dirs,
        }
    }

    /// Ask `resolver` for the locations of `package`
    pub fn resolve_with(resolver: &dyn LocationResolver, package: &str) -> Result<Self> {
        let dirs = resolver.resolve(package)?;
        log::debug!(
            "Resolver reported {} location(s) for {}: {:?}",
            dirs.len(),
            package,
            dirs
        );
        Ok(Self::new(package, dirs))
    }

    /// The one directory the package lives in
    ///
    /// Fails when the package was not found or is spread over several roots.
    pub fn into_single(self) -> Result<PathBuf> {
        let mut dirs = self.dirs;
        match dirs.len() {
            0 => Err(package::not_found(self.package)),
            1 => Ok(dirs.remove(0)),
            _ => Err(package::ambiguous_location(self.package, dirs)),
        }
    }
}
