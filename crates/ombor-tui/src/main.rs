//! `ombor-tui`: terminal dashboard for a small shop's stock and staff.
//!
//! Built on [ratatui](https://ratatui.rs) over the in-memory stores from
//! `ombor-core`. Screens are navigable via number keys (1-3): Dashboard,
//! Products, and Employees.
//!
//! Logs are written to a file (default `/tmp/ombor-tui.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, config loading, tracing setup, panic
//! hooks, and app launch.

mod action;
mod app;
mod component;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use ombor_config::Config;
use ombor_core::{DataStore, ViewController};

use crate::app::{App, Rates};

const DEFAULT_LOG_FILE: &str = "/tmp/ombor-tui.log";

/// Terminal dashboard for managing products and employees.
#[derive(Parser, Debug)]
#[command(name = "ombor-tui", version, about)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long, env = "OMBOR_CONFIG")]
    config: Option<PathBuf>,

    /// Currency label appended to prices; empty for plain numbers
    #[arg(long)]
    currency: Option<String>,

    /// Start with empty stores instead of the demo data
    #[arg(long)]
    no_seed: bool,

    /// Log file path (defaults to /tmp/ombor-tui.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write the resolved settings to the config file and exit
    #[arg(long)]
    write_config: bool,
}

/// Config file first, then CLI flags on top.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut cfg = match &cli.config {
        Some(path) => ombor_config::load_config_from(path)?,
        None => ombor_config::load_config()?,
    };

    if let Some(currency) = &cli.currency {
        cfg.currency.clone_from(currency);
    }
    if cli.no_seed {
        cfg.seed_demo_data = false;
    }
    if let Some(file) = &cli.log_file {
        cfg.log.file = Some(file.clone());
    }
    match cli.verbose {
        0 => {}
        1 => cfg.log.level = "info".into(),
        2 => cfg.log.level = "debug".into(),
        _ => cfg.log.level = "trace".into(),
    }

    cfg.validate()?;
    Ok(cfg)
}

/// Save `cfg` where it was loaded from (`--config`, else the platform path).
fn write_config(cli: &Cli, cfg: &Config) -> Result<PathBuf> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(ombor_config::config_path);
    ombor_config::save_config_to(cfg, &path)?;
    Ok(path)
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr, that would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(cfg: &Config) -> WorkerGuard {
    let level = &cfg.log.level;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ombor_tui={level},ombor_core={level}")));

    let log_file = cfg
        .log
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    let log_dir = log_file.parent().unwrap_or(Path::new("/tmp"));
    let log_filename = log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("ombor-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    let cfg = resolve_config(&cli)?;

    if cli.write_config {
        let path = write_config(&cli, &cfg)?;
        println!("Config written to {}", path.display());
        return Ok(());
    }

    // Tracing to file; hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cfg);

    info!(
        currency = %cfg.currency,
        seed = cfg.seed_demo_data,
        "starting ombor-tui"
    );

    let store = if cfg.seed_demo_data {
        DataStore::with_demo_data()
    } else {
        DataStore::new()
    };
    let rates = Rates {
        tick: Duration::from_millis(cfg.tui.tick_rate_ms),
        render: Duration::from_millis(cfg.tui.render_rate_ms),
    };

    let mut app = App::new(store, ViewController::new(cfg.currency), rates);
    app.run().await?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "currency = \"USD\"\n[log]\nlevel = \"error\"\n").unwrap();

        let cli = Cli::parse_from([
            "ombor-tui",
            "--config",
            path.to_str().unwrap(),
            "--no-seed",
            "-vv",
        ]);
        let cfg = resolve_config(&cli).unwrap();

        assert_eq!(cfg.currency, "USD");
        assert!(!cfg.seed_demo_data);
        assert_eq!(cfg.log.level, "debug");
    }

    #[test]
    fn write_config_persists_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ombor").join("config.toml");

        let cli = Cli::parse_from([
            "ombor-tui",
            "--config",
            path.to_str().unwrap(),
            "--currency",
            "UZS",
            "--no-seed",
            "--write-config",
        ]);
        let cfg = resolve_config(&cli).unwrap();
        assert_eq!(write_config(&cli, &cfg).unwrap(), path);

        let reread = Cli::parse_from(["ombor-tui", "--config", path.to_str().unwrap()]);
        let saved = resolve_config(&reread).unwrap();
        assert_eq!(saved.currency, "UZS");
        assert!(!saved.seed_demo_data);
    }

    #[test]
    fn empty_currency_flag_is_allowed() {
        let cli = Cli::parse_from(["ombor-tui", "--currency", ""]);
        assert_eq!(cli.currency.as_deref(), Some(""));
    }
}
