//! `fabwallet check` - derive every credential and report the outcome.

use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use fabric_wallet::{KeyAlgorithm, LocalWallet, Wallet};

use super::Context;
use crate::output::{print_json, short_hex, OutputFormat};

/// Result of one derivation.
#[derive(Debug, Serialize)]
struct Outcome<T> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> From<fabric_wallet::Result<T>> for Outcome<T> {
    fn from(result: fabric_wallet::Result<T>) -> Self {
        match result {
            Ok(details) => Self {
                ok: true,
                details: Some(details),
                error: None,
            },
            Err(e) => Self {
                ok: false,
                details: None,
                error: Some(e.to_string()),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct TransportSummary {
    server_name: String,
    roots: usize,
    root_subject: String,
    root_fingerprint: String,
    root_not_after: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct IdentitySummary {
    msp_id: String,
    subject: String,
    issuer: String,
    serial: String,
    fingerprint: String,
    not_after: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct SignerSummary {
    key_file: PathBuf,
    algorithm: KeyAlgorithm,
    public_key: String,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    transport: Outcome<TransportSummary>,
    identity: Outcome<IdentitySummary>,
    signer: Outcome<SignerSummary>,
}

impl CheckReport {
    fn failures(&self) -> usize {
        [self.transport.ok, self.identity.ok, self.signer.ok]
            .iter()
            .filter(|ok| !**ok)
            .count()
    }
}

/// Execute the check command.
pub fn execute(ctx: &Context) -> Result<()> {
    let wallet = ctx.wallet()?;
    let report = CheckReport {
        transport: transport(&wallet).into(),
        identity: identity(&wallet).into(),
        signer: signer(&wallet).into(),
    };

    match ctx.output_format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Pretty => print_pretty(&report),
    }

    let failures = report.failures();
    if failures > 0 {
        anyhow::bail!("{failures} of 3 credential checks failed");
    }
    Ok(())
}

fn transport(wallet: &LocalWallet) -> fabric_wallet::Result<TransportSummary> {
    let creds = wallet.transport_credentials()?;
    let root = creds.root_certificate();
    Ok(TransportSummary {
        server_name: creds.host_name().to_string(),
        roots: creds.roots().len(),
        root_subject: root.subject().to_string(),
        root_fingerprint: root.fingerprint().to_string(),
        root_not_after: root.not_after(),
    })
}

fn identity(wallet: &LocalWallet) -> fabric_wallet::Result<IdentitySummary> {
    let identity = wallet.identity()?;
    let cert = identity.certificate();
    Ok(IdentitySummary {
        msp_id: identity.msp_id().to_string(),
        subject: cert.subject().to_string(),
        issuer: cert.issuer().to_string(),
        serial: cert.serial().to_string(),
        fingerprint: cert.fingerprint().to_string(),
        not_after: cert.not_after(),
    })
}

fn signer(wallet: &LocalWallet) -> fabric_wallet::Result<SignerSummary> {
    let (key_file, signer) = wallet.load_signer()?;
    Ok(SignerSummary {
        key_file,
        algorithm: signer.algorithm(),
        public_key: hex::encode(signer.public_key()),
    })
}

fn print_pretty(report: &CheckReport) {
    println!("{}", "Wallet check:".bold());
    println!();

    print_outcome("TLS transport", &report.transport, |t| {
        format!(
            "pinned to {} ({} root: {}, sha256 {}, expires {})",
            t.server_name.cyan(),
            t.roots,
            t.root_subject,
            short_hex(&t.root_fingerprint),
            t.root_not_after.format("%Y-%m-%d")
        )
    });
    print_outcome("Identity", &report.identity, |i| {
        format!(
            "{} {} (issuer: {}, expires {})",
            i.msp_id.cyan(),
            i.subject,
            i.issuer,
            i.not_after.format("%Y-%m-%d")
        )
    });
    print_outcome("Signer", &report.signer, |s| {
        format!(
            "{} key from {} (public key {})",
            s.algorithm.to_string().cyan(),
            s.key_file.display(),
            short_hex(&s.public_key)
        )
    });
}

fn print_outcome<T>(label: &str, outcome: &Outcome<T>, describe: impl Fn(&T) -> String) {
    match (&outcome.details, &outcome.error) {
        (Some(details), _) => {
            println!("  {} {:<14} {}", "ok".green().bold(), label, describe(details));
        }
        (None, error) => {
            println!(
                "  {} {:<14} {}",
                "!!".red().bold(),
                label,
                error.as_deref().unwrap_or("unknown error").red()
            );
        }
    }
}
