//! Package resolution by scanning installation roots
//!
//! Mirrors how the path-based import finder walks `sys.path`. Within one
//! root a regular package wins, then a plain module file, and only then a
//! namespace portion. A regular package or module in any root ends the
//! search; namespace portions are collected across roots.

use std::path::{Path, PathBuf};

use super::LocationResolver;
use crate::error::Result;

const PACKAGE_INIT: &str = "__init__";

/// Suffixes of source and bytecode modules
const SOURCE_SUFFIXES: &[&str] = &["py", "pyc"];

/// Trailing suffixes of extension modules; any ABI tag may precede them
const EXTENSION_SUFFIXES: &[&str] = &["so", "pyd"];

/// Resolves packages against a fixed list of installation roots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitePackagesResolver {
    roots: Vec<PathBuf>,
}

impl SitePackagesResolver {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }
}

impl LocationResolver for SitePackagesResolver {
    fn resolve(&self, package: &str) -> Result<Vec<PathBuf>> {
        let Some(relative) = package_relative_path(package) else {
            log::debug!("'{}' is not an importable package name", package);
            return Ok(Vec::new());
        };
        let Some(tail) = relative.file_name().and_then(|name| name.to_str()) else {
            return Ok(Vec::new());
        };

        let mut portions = Vec::new();
        for root in &self.roots {
            if !root.is_dir() {
                log::debug!("Skipping missing installation root {}", root.display());
                continue;
            }

            let candidate = root.join(&relative);
            let is_dir = candidate.is_dir();

            if is_dir && is_regular_package(&candidate) {
                log::debug!("Found regular package at {}", candidate.display());
                return Ok(vec![candidate]);
            }

            let parent = candidate.parent().unwrap_or(root);
            if let Some(module) = find_module_file(parent, tail) {
                log::debug!(
                    "{} imports as the plain module {}",
                    package,
                    module.display()
                );
                return Ok(Vec::new());
            }

            if is_dir {
                log::debug!("Found namespace portion at {}", candidate.display());
                portions.push(candidate);
            }
        }

        Ok(portions)
    }
}

/// Map `a.b.c` to `a/b/c`
///
/// Returns `None` for names that cannot be imported, such as ones with empty
/// components or embedded path separators.
fn package_relative_path(package: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();
    for part in package.split('.') {
        if part.is_empty() || part.contains(['/', '\\']) {
            return None;
        }
        relative.push(part);
    }
    Some(relative)
}

fn is_regular_package(dir: &Path) -> bool {
    find_module_file(dir, PACKAGE_INIT).is_some()
}

/// Find an importable file for module `stem` directly inside `dir`
///
/// Matches `stem.py`, `stem.pyc` and extension modules such as
/// `stem.so`, `stem.pyd` or `stem.cpython-312-x86_64-linux-gnu.so`.
fn find_module_file(dir: &Path, stem: &str) -> Option<PathBuf> {
    let entries = dir.read_dir().ok()?;
    entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .find(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| is_module_file_name(name, stem))
        })
}

fn is_module_file_name(file_name: &str, stem: &str) -> bool {
    let Some(rest) = file_name
        .strip_prefix(stem)
        .and_then(|rest| rest.strip_prefix('.'))
    else {
        return false;
    };

    if SOURCE_SUFFIXES.contains(&rest) {
        return true;
    }

    rest.rsplit('.')
        .next()
        .is_some_and(|last| EXTENSION_SUFFIXES.contains(&last))
}
