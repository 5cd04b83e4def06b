//! taskdiary library root.
//! Exposes the CLI parser, the high-level run() function and the
//! record → classification → document pipeline modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ingest;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::User { .. } => cli::commands::user::handle(&cli.command, cfg),
        Commands::Load { .. } => cli::commands::load::handle(&cli.command, cfg),
        Commands::Fetch { .. } => cli::commands::fetch::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Preview { .. } => cli::commands::preview::handle(&cli.command, cfg),
        Commands::Build { .. } => cli::commands::build::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    // Load config once, then apply command-line overrides
    let mut cfg = Config::load();
    if let Some(custom_state) = &cli.state {
        cfg.state_file = custom_state.clone();
    }

    dispatch(&cli, &cfg)
}
