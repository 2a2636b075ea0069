//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

use crate::config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Profile first, flags on top
    let draft = cli.layout.apply(config::load_draft(cli.profile.as_deref())?);

    let ctx = commands::Context {
        draft,
        output_format: cli.output.unwrap_or(OutputFormat::Pretty),
    };

    match cli.command {
        Commands::Check => commands::check::execute(&ctx),
        Commands::Sign(args) => commands::sign::execute(&ctx, args),
        Commands::Profile(args) => commands::profile::execute(&ctx, args),
    }
}
