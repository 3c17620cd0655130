//! Runtime settings assembled from command-line flags and environment

use std::path::PathBuf;

use crate::cli::Cli;
use crate::marker::MarkerOptions;
use crate::resolver::{LocationResolver, PythonResolver, SitePackagesResolver};

/// Environment variable naming the Python interpreter to query
pub const PYTHON_ENV: &str = "PY_TYPED_PYTHON";

/// Where package locations come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverChoice {
    /// Ask this interpreter
    Interpreter(String),
    /// Scan these installation roots
    SitePackages(Vec<PathBuf>),
}

impl ResolverChoice {
    pub fn build(&self) -> Box<dyn LocationResolver> {
        match self {
            ResolverChoice::Interpreter(program) => Box::new(PythonResolver::new(program.clone())),
            ResolverChoice::SitePackages(roots) => {
                Box::new(SitePackagesResolver::new(roots.clone()))
            }
        }
    }
}

/// Settings for one marker installation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub package: String,
    pub resolver: ResolverChoice,
    pub dry_run: bool,
}

impl Settings {
    /// Build settings from parsed arguments
    ///
    /// Explicit `--site-packages` roots take precedence over any interpreter.
    pub fn from_cli(cli: &Cli) -> Self {
        let resolver = if cli.site_packages.is_empty() {
            ResolverChoice::Interpreter(
                cli.python
                    .clone()
                    .unwrap_or_else(|| PythonResolver::default_program().to_string()),
            )
        } else {
            if let Some(python) = &cli.python {
                log::debug!("Ignoring interpreter {python}, scanning --site-packages roots");
            }
            ResolverChoice::SitePackages(cli.site_packages.clone())
        };

        Self {
            package: cli.package.clone().unwrap_or_default(),
            resolver,
            dry_run: cli.dry_run,
        }
    }

    pub fn marker_options(&self) -> MarkerOptions {
        MarkerOptions {
            dry_run: self.dry_run,
        }
    }
}
