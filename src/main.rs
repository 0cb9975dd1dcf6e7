//! Main entry point for the elo-lobby host program
//!
//! Builds players from a roster, queues them into a matchmaking pool, prints
//! every entry's eligible opponents and applies any recorded match results.

use anyhow::Result;
use clap::Parser;
use elo_lobby::config::{validate_config, AppConfig};
use elo_lobby::roster::Roster;
use elo_lobby::session::run_session;
use std::path::PathBuf;
use tracing::{error, info};

/// Elo Lobby - skill ratings and level-band matchmaking
#[derive(Parser)]
#[command(
    name = "elo-lobby",
    version,
    about = "Rate players with Elo and find opponents in a matchmaking pool",
    long_about = "Elo Lobby queues a roster of standard and blitz players into a matchmaking \
                 pool, lists each player's eligible opponents by rating level, and applies \
                 finished match results with per-format K-factors."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Roster file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to roster file (TOML format); the demo roster is used when omitted"
    )]
    roster: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Default search range override
    #[arg(
        long,
        value_name = "POINTS",
        allow_negative_numbers = true,
        help = "Override the default search range (rating points) for players without one"
    )]
    range: Option<i64>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and roster, then exit)
    #[arg(long, help = "Validate configuration and roster and exit")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration and apply CLI overrides
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(range) = args.range {
        config.matchmaking.default_range = range;
    }

    // Overrides bypass the loaders' validation
    validate_config(&config)?;
    Ok(config)
}

fn load_roster(args: &Args) -> Result<Roster> {
    match &args.roster {
        Some(path) => {
            info!("Loading roster from: {}", path.display());
            Roster::from_file(path)
        }
        None => {
            info!("No roster given, using the demo roster");
            Ok(Roster::demo())
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        service = %config.service.name,
        default_range = config.matchmaking.default_range,
        "Starting {}",
        elo_lobby::VERSION
    );

    let roster = match load_roster(&args) {
        Ok(roster) => roster,
        Err(e) => {
            error!("Failed to load roster: {:#}", e);
            std::process::exit(1);
        }
    };

    if args.dry_run {
        info!(
            players = roster.players.len(),
            matches = roster.matches.len(),
            "Configuration and roster are valid"
        );
        return Ok(());
    }

    let report = match run_session(&roster, &config) {
        Ok(report) => report,
        Err(e) => {
            error!("Session failed: {:#}", e);
            std::process::exit(1);
        }
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
