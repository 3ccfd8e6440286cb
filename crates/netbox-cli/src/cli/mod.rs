//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;
pub mod legacy;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse_from(legacy::expand(std::env::args_os()));

    setup_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };

    // Create context for commands
    let ctx = commands::Context {
        config_path,
        env: cli.env,
        token: cli.token,
        output_format: cli.output.unwrap_or_default(),
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::List(args) => commands::list::execute(ctx, args).await,
        Commands::Get(args) => commands::get::execute(ctx, args).await,
        Commands::Create(args) => commands::create::execute(ctx, args).await,
        Commands::Update(args) => commands::update::execute(ctx, args).await,
        Commands::Delete(args) => commands::delete::execute(ctx, args).await,
        Commands::Resources => commands::resources::execute(ctx),
        Commands::Config(args) => commands::config::execute(ctx, args),
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .without_time(),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
