//! py-typed-marker - add a py.typed marker to an installed Python package

use clap::Parser;
use console::style;
use miette::Diagnostic;

use py_typed_marker::MarkerError;
use py_typed_marker::cli::Cli;
use py_typed_marker::{commands, logging};

fn report(err: &MarkerError) {
    eprintln!("{} {}", style("Error:").red().bold().for_stderr(), err);
    if let Some(help) = err.help() {
        eprintln!("  {} {}", style("help:").cyan().for_stderr(), help);
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::run(cli) {
        report(&e);
        std::process::exit(1);
    }
}
