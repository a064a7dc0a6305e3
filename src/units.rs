// src/units.rs

use std::path::Path;

use tracing::info;

use crate::environment::Environment;
use crate::template::{self, TemplateError};

const UNIT_PREFIX: &str = "mirrorbot";

/// Scheduled jobs deployed for the bot, in install order.
const JOBS: &[&str] = &["managrams", "sync"];

fn unit_base_name(job: &str, environment: Environment) -> String {
    format!("{UNIT_PREFIX}-{job}-{environment}")
}

pub fn service_unit(job: &str, environment: Environment) -> String {
    format!("{}.service", unit_base_name(job, environment))
}

pub fn timer_unit(job: &str, environment: Environment) -> String {
    format!("{}.timer", unit_base_name(job, environment))
}

/// The timer units that drive an environment's jobs. Only these are ever
/// enabled; the service units are started by their timers.
pub fn timer_units(environment: Environment) -> Vec<String> {
    JOBS.iter().map(|job| timer_unit(job, environment)).collect()
}

/// The service units of an environment, in install order.
pub fn service_units(environment: Environment) -> Vec<String> {
    JOBS.iter().map(|job| service_unit(job, environment)).collect()
}

/// Every unit file installed for an environment, in install order.
pub fn unit_names(environment: Environment) -> Vec<String> {
    JOBS.iter()
        .flat_map(|job| [service_unit(job, environment), timer_unit(job, environment)])
        .collect()
}

/// Renders the four unit files for `environment` into `unit_dir` and returns
/// the timer units to activate.
///
/// The sync service is told which managram service to order itself after via
/// the MANAGRAMS_SERVICE substitution; the timer templates take none.
pub fn install_unit_files(
    environment: Environment,
    template_dir: &Path,
    unit_dir: &Path,
) -> Result<Vec<String>, TemplateError> {
    let managrams_service = service_unit("managrams", environment);

    template::install_template(
        &template_dir.join("managrams.service.tmpl"),
        &unit_dir.join(&managrams_service),
        &[("ENVIRONMENT", environment.to_string())],
    )?;
    template::install_template(
        &template_dir.join("managrams.timer.tmpl"),
        &unit_dir.join(timer_unit("managrams", environment)),
        &[],
    )?;

    template::install_template(
        &template_dir.join("sync.service.tmpl"),
        &unit_dir.join(service_unit("sync", environment)),
        &[
            ("ENVIRONMENT", environment.to_string()),
            ("MANAGRAMS_SERVICE", managrams_service),
        ],
    )?;
    template::install_template(
        &template_dir.join("sync.timer.tmpl"),
        &unit_dir.join(timer_unit("sync", environment)),
        &[],
    )?;

    info!(
        "Installed {} unit files into {}",
        unit_names(environment).len(),
        unit_dir.display()
    );

    Ok(timer_units(environment))
}
