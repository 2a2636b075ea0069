//! `fabwallet profile` - profile inspection.

use anyhow::Result;
use colored::Colorize;

use fabric_wallet::ConfigField;

use super::Context;
use crate::cli::args::{ProfileArgs, ProfileCommands};
use crate::config;
use crate::output::{print_json, OutputFormat};

/// Execute the profile command.
pub fn execute(ctx: &Context, args: ProfileArgs) -> Result<()> {
    match args.command {
        ProfileCommands::Show => show(ctx),
        ProfileCommands::Path => {
            println!("{}", config::default_path()?.display());
            Ok(())
        }
    }
}

fn show(ctx: &Context) -> Result<()> {
    match ctx.output_format {
        OutputFormat::Json => print_json(&ctx.draft),
        OutputFormat::Pretty => {
            print!("{}", toml::to_string_pretty(&ctx.draft)?);

            let missing: Vec<_> = ConfigField::ALL
                .into_iter()
                .filter(|f| ctx.draft.is_unset(*f))
                .map(ConfigField::as_str)
                .collect();
            if !missing.is_empty() {
                println!();
                println!("{} {}", "Not set:".yellow().bold(), missing.join(", "));
            }
            Ok(())
        }
    }
}
