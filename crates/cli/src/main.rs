//! Measure - send measurement protocol hits from the command line
//!
//! # Usage
//!
//! ```bash
//! # Page view, tracking id from the config file
//! measure --config measure.toml pageview --location http://example.com/ --title Home
//!
//! # Event with an explicit tracking id, printed instead of sent
//! measure --tracking-id UA-1234-1 --dry-run event --category video --action play
//!
//! # Lenient validation sends incomplete hits as they are
//! measure --tracking-id UA-1234-1 --lenient social --network facebook
//! ```

mod cmd;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use measure_config::{Config, LogFormat};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Measure - send measurement protocol hits
#[derive(Parser, Debug)]
#[command(name = "measure")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to configuration file (error if specified but not found)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config file.
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    #[command(flatten)]
    session: cmd::SessionArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send a page view
    #[command(name = "pageview")]
    PageView(cmd::page_view::PageViewArgs),

    /// Send a screen view
    #[command(name = "screenview")]
    ScreenView(cmd::screen_view::ScreenViewArgs),

    /// Send an event, optionally tied to an app or a web document
    Event(cmd::event::EventArgs),

    /// Send an exception
    Exception(cmd::exception::ExceptionArgs),

    /// Send a social interaction
    Social(cmd::social::SocialArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let log_level = resolve_log_level(cli.log_level.as_deref(), &config);
    init_logging(&log_level, config.log.format)?;

    let hit = match &cli.command {
        Command::PageView(args) => cmd::HitArgs::PageView(args),
        Command::ScreenView(args) => cmd::HitArgs::ScreenView(args),
        Command::Event(args) => cmd::HitArgs::Event(args),
        Command::Exception(args) => cmd::HitArgs::Exception(args),
        Command::Social(args) => cmd::HitArgs::Social(args),
    };

    cmd::run(hit, &cli.session, config)
}

/// Load the config file if one was given, defaults otherwise
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

/// Resolve log level: CLI flag > config file > default "info"
fn resolve_log_level(cli_level: Option<&str>, config: &Config) -> String {
    match cli_level {
        Some(level) => level.to_string(),
        None => config.log.level.as_str().to_string(),
    }
}

/// Initialize the tracing subscriber for logging
fn init_logging(level: &str, format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr, stdout carries --dry-run output
    match format {
        LogFormat::Console => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }

    Ok(())
}
