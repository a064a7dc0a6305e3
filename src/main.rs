mod config;
mod environment;
mod install;
mod logger;
mod privileges;
mod systemd;
mod template;
mod uninstall;
mod units;

use std::env;
use std::io;
use std::process::ExitCode;

use crate::environment::Environment;

fn main() -> ExitCode {
    let config = config::Config::load().unwrap_or_default();
    if let Err(err) = logger::init_logger(&config) {
        eprintln!("⚠️ {}", err);
    }

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str());

    match command {
        None | Some("help") | Some("-h") | Some("--help") => {
            print_help();
            ExitCode::SUCCESS
        }
        // Bare environment keeps the original surface: `mirrorbot-deploy dev`.
        Some("dev") | Some("prod") if args.len() == 2 => {
            run_with_environment(&args, 1, install::run_install)
        }
        Some("install") => run_with_environment(&args, 2, install::run_install),
        Some("enable") => run_with_environment(&args, 2, systemd::enable_timers),
        Some("disable") => run_with_environment(&args, 2, systemd::disable_timers),
        Some("status") => run_with_environment(&args, 2, systemd::print_status),
        Some("logs") => run_with_environment(&args, 2, systemd::tail_logs),
        Some("uninstall") => run_with_environment(&args, 2, uninstall::run_uninstall),
        Some(other) => {
            eprintln!("❌ Unknown command: {}", other);
            print_help();
            ExitCode::from(2)
        }
    }
}

fn run_with_environment(
    args: &[String],
    position: usize,
    run: fn(Environment) -> io::Result<()>,
) -> ExitCode {
    if args.len() != position + 1 {
        eprintln!("❌ Expected exactly one environment argument (dev | prod).");
        print_help();
        return ExitCode::from(2);
    }

    match args[position].parse::<Environment>() {
        Ok(environment) => run_and_report(run, environment),
        Err(err) => {
            eprintln!("❌ {}", err);
            ExitCode::from(2)
        }
    }
}

fn run_and_report(run: fn(Environment) -> io::Result<()>, environment: Environment) -> ExitCode {
    match run(environment) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ {}", err);
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("Usage: mirrorbot-deploy <command> <dev|prod>");
    println!("Commands:");
    println!("  install    - Render unit templates and activate timers");
    println!("  enable     - Enable and restart the timers");
    println!("  disable    - Disable and stop the timers");
    println!("  status     - Show systemd status of mirrorbot units");
    println!("  logs       - Show recent service logs");
    println!("  uninstall  - Disable timers and remove unit files");
    println!("  help       - Show this help message");
    println!();
    println!("`mirrorbot-deploy <dev|prod>` is shorthand for `install`.");
}
