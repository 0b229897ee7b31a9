use clap::Parser;
use eyre::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

mod cli;
mod commands;
mod config;
mod notify;

use cli::{Cli, Commands};
use config::{Config, LogLevel};

/// Send diagnostics to `<data_local_dir>/notifier/logs/notifier.log`.
///
/// Stdout belongs to the console listeners, so nothing is logged there.
fn setup_logging(log_level: LogLevel) -> Result<PathBuf> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("notifier")
        .join("logs");
    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("notifier.log");
    let target = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .context("Failed to open log file")?;

    // RUST_LOG env var takes precedence, otherwise use config log_level
    let rust_log = std::env::var("RUST_LOG").ok();
    let mut builder = env_logger::Builder::new();
    if rust_log.is_some() {
        builder.parse_default_env();
    } else {
        builder.filter_level(log_level.into());
    }
    builder.target(env_logger::Target::Pipe(Box::new(target))).init();

    match rust_log {
        Some(spec) => info!("Log level: {} (from RUST_LOG env)", spec),
        None => info!("Log level: {} (from config)", log_level.as_filter()),
    }
    Ok(log_file)
}

fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Demo => commands::demo::run(&config),
        Commands::Emit { severity, message } => commands::emit::run(severity, &message, &config),
        Commands::Config { action } => commands::config::run(action, &config),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments first
    let cli = Cli::parse();

    // Load configuration (before logging, which takes its level from it)
    let (config, skipped) = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Diagnostics are optional: without a log file the listeners still run
    match setup_logging(config.log_level) {
        Ok(log_file) => {
            info!(
                "Starting notifier (config: {:?}, diagnostics: {})",
                cli.config,
                log_file.display()
            );
            for reason in &skipped {
                warn!("{}", reason);
            }
        }
        Err(e) => {
            eprintln!("notifier: diagnostics disabled: {:#}", e);
            for reason in &skipped {
                eprintln!("notifier: {}", reason);
            }
        }
    }

    run(cli, config).context("Command failed")?;

    Ok(())
}
