// src/uninstall.rs

use std::fs;
use std::io;
use std::path::Path;

use crate::config::Config;
use crate::environment::Environment;
use crate::privileges::require_root;
use crate::systemd;
use crate::units;

/// Best-effort removal: every step runs even if an earlier one failed, and
/// the accumulated failures surface as a single error at the end.
pub fn run_uninstall(environment: Environment) -> io::Result<()> {
    require_root()?;

    let config = Config::load()
        .map_err(|e| io::Error::other(format!("Failed to load config: {}", e)))?;

    println!("🧹 Removing mirrorbot units for {environment}...");

    let mut had_errors = false;

    if let Err(err) = systemd::deactivate(&units::timer_units(environment)) {
        had_errors = true;
        eprintln!("⚠️ {}", err);
    }

    if remove_unit_files(environment, &config.unit_dir()) {
        had_errors = true;
    }

    if let Err(err) = systemd::daemon_reload() {
        had_errors = true;
        eprintln!("⚠️ {}", err);
    }

    if had_errors {
        return Err(io::Error::other("Uninstall completed with errors."));
    }

    println!("✅ Uninstall complete.");
    Ok(())
}

fn remove_unit_files(environment: Environment, unit_dir: &Path) -> bool {
    let mut had_errors = false;

    for unit in units::unit_names(environment) {
        let path = unit_dir.join(&unit);
        match fs::remove_file(&path) {
            Ok(()) => println!("Removed unit: {}", path.display()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                println!("ℹ️  Unit not installed: {}", unit);
            }
            Err(err) => {
                had_errors = true;
                eprintln!("⚠️ Failed to remove {}: {}", path.display(), err);
            }
        }
    }

    had_errors
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn remove_unit_files_deletes_installed_units() {
        let root = TempDir::new().unwrap();

        for name in units::unit_names(Environment::Dev) {
            fs::write(root.path().join(&name), "[Unit]\n").unwrap();
        }
        // A prod install in the same directory must survive a dev uninstall.
        fs::write(root.path().join("mirrorbot-sync-prod.timer"), "[Unit]\n").unwrap();

        let had_errors = remove_unit_files(Environment::Dev, root.path());

        assert!(!had_errors);
        for name in units::unit_names(Environment::Dev) {
            assert!(!root.path().join(&name).exists(), "{name} still present");
        }
        assert!(root.path().join("mirrorbot-sync-prod.timer").exists());
    }

    #[test]
    fn remove_unit_files_tolerates_missing_units() {
        let root = TempDir::new().unwrap();

        let had_errors = remove_unit_files(Environment::Prod, root.path());

        assert!(!had_errors);
    }
}
