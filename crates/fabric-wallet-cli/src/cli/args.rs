//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use fabric_wallet::WalletConfigBuilder;

use crate::output::OutputFormat;

/// Inspect Hyperledger Fabric wallet layouts
///
/// Loads TLS credentials, identity and signing key the way a gateway
/// client would. The layout comes from a TOML profile; any flag below
/// overrides the matching profile key.
#[derive(Parser, Debug)]
#[command(name = "fabwallet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Wallet profile (TOML). Defaults to profile.toml in the config directory
    #[arg(short, long, env = "FABWALLET_PROFILE", global = true)]
    pub profile: Option<PathBuf>,

    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Per-field overrides of the wallet profile.
#[derive(Args, Debug, Default, Clone)]
pub struct LayoutArgs {
    /// Root of the credential layout
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// TLS folder, relative to the base directory
    #[arg(long)]
    pub tls_folder: Option<PathBuf>,

    /// TLS root CA file name inside the TLS folder
    #[arg(long = "tls-root-ca")]
    pub tls_root_ca_file: Option<PathBuf>,

    /// Server name the gateway peer must present
    #[arg(long)]
    pub tls_host_name: Option<String>,

    /// Private key directory, relative to the base directory
    #[arg(long)]
    pub key_store: Option<PathBuf>,

    /// Signing certificate, relative to the base directory
    #[arg(long)]
    pub sign_identity: Option<PathBuf>,

    /// Membership service provider ID
    #[arg(long)]
    pub msp_id: Option<String>,
}

impl LayoutArgs {
    /// Apply every flag that was given on top of `draft`.
    #[must_use]
    pub fn apply(self, mut draft: WalletConfigBuilder) -> WalletConfigBuilder {
        if let Some(v) = self.base_dir {
            draft = draft.base_dir(v);
        }
        if let Some(v) = self.tls_folder {
            draft = draft.tls_folder(v);
        }
        if let Some(v) = self.tls_root_ca_file {
            draft = draft.tls_root_ca_file(v);
        }
        if let Some(v) = self.tls_host_name {
            draft = draft.tls_host_name(v);
        }
        if let Some(v) = self.key_store {
            draft = draft.key_store(v);
        }
        if let Some(v) = self.sign_identity {
            draft = draft.sign_identity(v);
        }
        if let Some(v) = self.msp_id {
            draft = draft.msp_id(v);
        }
        draft
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load TLS credentials, identity and signer and report each
    Check,

    /// Sign a message with the wallet's private key
    Sign(SignArgs),

    /// Show or locate the wallet profile
    Profile(ProfileArgs),
}

// ============================================================================
// Sign command
// ============================================================================

#[derive(Args, Debug)]
pub struct SignArgs {
    /// Message to sign (reads stdin when neither this nor --file is given)
    #[arg(conflicts_with = "file")]
    pub message: Option<String>,

    /// Sign the contents of a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

// ============================================================================
// Profile command
// ============================================================================

#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommands,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show the effective layout (profile plus flags)
    Show,

    /// Print the default profile location
    Path,
}
