//! Mark command implementation
//!
//! Resolves the requested package and installs the `py.typed` marker.

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::Result;
use crate::marker::MarkerInstaller;

/// Run the mark command
pub fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::from_cli(cli);
    log::debug!("Resolving {} with {:?}", settings.package, settings.resolver);

    let resolver = settings.resolver.build();
    let installer = MarkerInstaller::with_options(resolver.as_ref(), settings.marker_options());
    let outcome = installer.install(&settings.package)?;

    println!("{}", outcome.message());
    Ok(())
}
