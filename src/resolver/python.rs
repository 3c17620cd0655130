//! Package resolution through a Python interpreter
//!
//! The interpreter's own import machinery is the authority on where a
//! package is installed, so we ask it instead of re-implementing the lookup.

use std::path::PathBuf;
use std::process::Command;

use serde::Deserialize;

use super::LocationResolver;
use crate::error::{Result, resolver};

/// Prints `{"locations": [...]}` for the package named by `sys.argv[1]`.
///
/// Missing packages, missing parents of dotted names and plain modules all
/// report no locations.
const FIND_SPEC_SCRIPT: &str = r#"
import importlib.util
import json
import sys

name = sys.argv[1]
try:
    spec = importlib.util.find_spec(name)
except ModuleNotFoundError:
    spec = None

locations = []
if spec is not None and spec.submodule_search_locations is not None:
    locations = [str(location) for location in spec.submodule_search_locations]

print(json.dumps({"locations": locations}))
"#;

#[derive(Debug, Deserialize)]
struct FindSpecOutput {
    locations: Vec<PathBuf>,
}

/// Resolves packages by running a Python interpreter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonResolver {
    program: String,
}

impl PythonResolver {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Interpreter used when none is configured
    pub fn default_program() -> &'static str {
        if cfg!(windows) { "python" } else { "python3" }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for PythonResolver {
    fn default() -> Self {
        Self::new(Self::default_program())
    }
}

impl LocationResolver for PythonResolver {
    fn resolve(&self, package: &str) -> Result<Vec<PathBuf>> {
        log::debug!("Asking {} for the location of {}", self.program, package);

        let output = Command::new(&self.program)
            .args(["-c", FIND_SPEC_SCRIPT, package])
            .output()
            .map_err(|e| {
                resolver::interpreter_not_found(package, &self.program, e.to_string())
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => format!("interpreter exited with {}", output.status),
                trimmed => trimmed.to_string(),
            };
            return Err(resolver::failed(package, &self.program, reason));
        }

        parse_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parse the interpreter's answer
///
/// Only the last non-empty line is considered, so output printed by site
/// hooks before the script runs is ignored.
fn parse_output(stdout: &str) -> Result<Vec<PathBuf>> {
    let line = stdout
        .lines()
        .map(str::trim)
        .rfind(|line| !line.is_empty())
        .ok_or_else(|| resolver::invalid_output("interpreter printed nothing"))?;

    let parsed: FindSpecOutput = serde_json::from_str(line)?;
    Ok(parsed.locations)
}
