// src/install.rs

use std::io;

use tracing::info;

use crate::config::Config;
use crate::environment::Environment;
use crate::privileges::require_root;
use crate::systemd;
use crate::units;

/// Renders the unit files for `environment` and activates its timers. The
/// first failed step aborts the run; files and units touched before the
/// failure are left as they are.
pub fn run_install(environment: Environment) -> io::Result<()> {
    require_root()?;

    let config = Config::load()
        .map_err(|e| io::Error::other(format!("Failed to load config: {}", e)))?;

    println!("🔧 Installing mirrorbot units for {environment}...");

    let timers = units::install_unit_files(environment, &config.template_dir(), &config.unit_dir())
        .map_err(io::Error::other)?;

    info!("Activating timers: {}", timers.join(", "));
    systemd::activate(&timers)?;

    println!("✅ Install complete. Timers active for {environment}.");
    Ok(())
}
