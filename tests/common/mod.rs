//! Common test utilities for py-typed-marker integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway installation root for integration tests
pub struct TestSitePackages {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the installation root
    pub path: PathBuf,
}

impl TestSitePackages {
    /// Create a new empty installation root
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a regular package (directory with `__init__.py`)
    pub fn create_package(&self, name: &str) -> PathBuf {
        let package_path = self.create_namespace_portion(name);
        std::fs::write(package_path.join("__init__.py"), "")
            .expect("Failed to write __init__.py");
        package_path
    }

    /// Create a namespace package portion (directory without `__init__.py`)
    pub fn create_namespace_portion(&self, name: &str) -> PathBuf {
        let package_path = self.path.join(name.replace('.', "/"));
        std::fs::create_dir_all(&package_path).expect("Failed to create package directory");
        package_path
    }

    /// Write a file relative to the root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Check if a file exists relative to the root
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Number of entries directly inside `dir`
    pub fn entry_count(dir: &Path) -> usize {
        std::fs::read_dir(dir)
            .expect("Failed to read directory")
            .count()
    }
}

impl Default for TestSitePackages {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the real binary with developer overrides stripped
#[allow(deprecated)]
pub fn marker_cmd() -> Command {
    let mut cmd = Command::cargo_bin("py-typed-marker").expect("binary is built");
    cmd.env_remove("PY_TYPED_PYTHON");
    cmd.env_remove("PY_TYPED_LOG");
    cmd
}

/// Whether a real `python3` can be spawned
pub fn python3_available() -> bool {
    std::process::Command::new("python3")
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}

/// Write an executable script standing in for a Python interpreter
///
/// The script prints `stdout` and exits with `exit_code`, ignoring its
/// arguments.
#[cfg(unix)]
pub fn fake_interpreter(dir: &Path, stdout: &str, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-python");
    let body = format!("#!/bin/sh\ncat <<'JSON'\n{stdout}\nJSON\nexit {exit_code}\n");
    std::fs::write(&script, body).expect("Failed to write fake interpreter");
    let mut perms = std::fs::metadata(&script)
        .expect("Failed to stat fake interpreter")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&script, perms).expect("Failed to chmod fake interpreter");
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_packages_creation() {
        let site = TestSitePackages::new();
        assert!(site.path.exists());
    }

    #[test]
    fn test_create_package() {
        let site = TestSitePackages::new();
        site.create_package("examplepkg");
        assert!(site.file_exists("examplepkg/__init__.py"));
    }

    #[test]
    fn test_create_dotted_package() {
        let site = TestSitePackages::new();
        site.create_package("google.protobuf");
        assert!(site.file_exists("google/protobuf/__init__.py"));
    }
}
