//! `fabwallet sign` - sign a message with the wallet's key.

use anyhow::{Context as _, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use colored::Colorize;
use serde::Serialize;
use std::io::Read;

use fabric_wallet::{KeyAlgorithm, Wallet};

use super::Context;
use crate::cli::args::SignArgs;
use crate::output::{print_json, OutputFormat};

#[derive(Debug, Serialize)]
struct SignOutput {
    algorithm: KeyAlgorithm,
    /// Hex
    public_key: String,
    /// Base64
    signature: String,
}

/// Execute the sign command.
pub fn execute(ctx: &Context, args: SignArgs) -> Result<()> {
    let message = read_message(args)?;
    let signer = ctx.wallet()?.signer()?;
    let signature = signer.sign(&message)?;

    let output = SignOutput {
        algorithm: signer.algorithm(),
        public_key: hex::encode(signer.public_key()),
        signature: STANDARD.encode(signature),
    };

    match ctx.output_format {
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Pretty => {
            println!("  {} {}", "algorithm:".bold(), output.algorithm);
            println!("  {} {}", "public key:".bold(), output.public_key);
            println!("  {} {}", "signature:".bold(), output.signature.cyan());
        }
    }

    Ok(())
}

fn read_message(args: SignArgs) -> Result<Vec<u8>> {
    if let Some(message) = args.message {
        return Ok(message.into_bytes());
    }

    if let Some(path) = args.file {
        return std::fs::read(&path).with_context(|| format!("read {}", path.display()));
    }

    let mut buf = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buf)
        .context("read message from stdin")?;
    Ok(buf)
}
