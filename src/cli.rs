//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use clap_complete::Shell;
use std::path::PathBuf;

/// py-typed-marker - mark installed Python packages as typed
///
/// Finds where a package is installed and adds an empty `py.typed` marker to it.
#[derive(Parser, Debug)]
#[command(
    name = "py-typed-marker",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Add a py.typed marker to an installed Python package",
    long_about = "Resolves where a Python package is installed and creates an empty py.typed \
                  file inside it, so type checkers trust the package's inline annotations. \
                  Packages installed in more than one location are refused.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  py-typed-marker requests                            \x1b[90m# Ask python3 where requests lives\x1b[0m\n   \
                  py-typed-marker --python .venv/bin/python mypkg     \x1b[90m# Use a virtualenv interpreter\x1b[0m\n   \
                  py-typed-marker --site-packages ./site mypkg        \x1b[90m# Scan a directory instead\x1b[0m\n   \
                  py-typed-marker --dry-run mypkg                     \x1b[90m# Show what would be marked\x1b[0m\n"
)]
pub struct Cli {
    /// Importable name of the package to mark (e.g. requests, google.protobuf)
    #[arg(value_name = "PACKAGE", required_unless_present = "completions")]
    pub package: Option<String>,

    /// Python interpreter used to locate the package
    #[arg(long, value_name = "PROGRAM", env = "PY_TYPED_PYTHON")]
    pub python: Option<String>,

    /// Installation root to scan instead of asking an interpreter (repeatable)
    #[arg(long = "site-packages", value_name = "DIR")]
    pub site_packages: Vec<PathBuf>,

    /// Resolve the package but do not write the marker
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL", conflicts_with = "package")]
    pub completions: Option<Shell>,
}
