// src/systemd.rs

use std::io;
use std::process::Command;

use tracing::debug;

use crate::environment::Environment;
use crate::privileges::require_root;
use crate::units;

fn systemctl_bin() -> String {
    std::env::var("MIRRORBOT_SYSTEMCTL").unwrap_or_else(|_| "systemctl".to_string())
}

fn journalctl_bin() -> String {
    std::env::var("MIRRORBOT_JOURNALCTL").unwrap_or_else(|_| "journalctl".to_string())
}

fn run_systemctl(systemctl: &str, args: &[&str]) -> io::Result<()> {
    debug!("Running {} {}", systemctl, args.join(" "));
    let status = Command::new(systemctl).args(args).status()?;

    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!(
            "{} {} exited with {}",
            systemctl,
            args.join(" "),
            status
        )))
    }
}

/// Reloads the manager configuration, then enables and restarts each unit in
/// list order. The first non-zero exit aborts; later units are not touched
/// and nothing already activated is rolled back.
fn activate_units(systemctl: &str, units: &[String]) -> io::Result<()> {
    run_systemctl(systemctl, &["daemon-reload"])?;

    for unit in units {
        println!("Enabling and restarting: {}", unit);
        run_systemctl(systemctl, &["enable", unit.as_str()])?;
        run_systemctl(systemctl, &["restart", unit.as_str()])?;
    }

    Ok(())
}

fn deactivate_units(systemctl: &str, units: &[String]) -> io::Result<()> {
    let mut failures = Vec::new();

    for unit in units {
        println!("Disabling and stopping: {}", unit);
        let status = Command::new(systemctl)
            .args(["disable", "--now", unit.as_str()])
            .status()?;

        if !status.success() {
            failures.push(unit.clone());
            eprintln!("⚠️ {} disable --now {} exited with {}", systemctl, unit, status);
        }
    }

    if !failures.is_empty() {
        return Err(io::Error::other(format!(
            "Failed to disable/stop: {}",
            failures.join(", ")
        )));
    }

    Ok(())
}

pub fn activate(units: &[String]) -> io::Result<()> {
    activate_units(&systemctl_bin(), units)
}

pub fn deactivate(units: &[String]) -> io::Result<()> {
    deactivate_units(&systemctl_bin(), units)
}

pub fn daemon_reload() -> io::Result<()> {
    run_systemctl(&systemctl_bin(), &["daemon-reload"])
}

pub fn enable_timers(environment: Environment) -> io::Result<()> {
    require_root()?;

    activate(&units::timer_units(environment))?;
    println!("✅ Timers enabled and restarted for {environment}.");
    Ok(())
}

pub fn disable_timers(environment: Environment) -> io::Result<()> {
    require_root()?;

    deactivate(&units::timer_units(environment))?;
    println!("✅ Timers disabled and stopped for {environment}.");
    Ok(())
}

pub fn print_status(environment: Environment) -> io::Result<()> {
    let systemctl = systemctl_bin();

    for unit in units::unit_names(environment) {
        println!("\n🔍 Status for: {}", unit);
        let _status = Command::new(&systemctl)
            .args(["status", "--no-pager", unit.as_str()])
            .status()?;
    }

    Ok(())
}

pub fn tail_logs(environment: Environment) -> io::Result<()> {
    let journalctl = journalctl_bin();

    for unit in units::service_units(environment) {
        println!("\n📜 Recent logs for {}:", unit);
        let output = Command::new(&journalctl)
            .args(["-u", unit.as_str(), "--no-pager", "--since=1h"])
            .output();

        match output {
            Ok(out) => {
                let log = String::from_utf8_lossy(&out.stdout);
                println!("{}", log);
            }
            Err(e) => eprintln!("❌ Failed to read logs for {}: {}", unit, e),
        }
    }

    Ok(())
}
