//! Command implementations.

pub mod check;
pub mod profile;
pub mod sign;

use anyhow::Context as _;
use fabric_wallet::{LocalWallet, WalletConfigBuilder};

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Wallet layout from the profile with flag overrides applied
    pub draft: WalletConfigBuilder,

    /// Output format
    pub output_format: OutputFormat,
}

impl Context {
    /// Validate the layout and open the wallet.
    pub fn wallet(&self) -> anyhow::Result<LocalWallet> {
        let config = self.draft.clone().build().context(
            "incomplete wallet layout; set the key in the profile or pass the matching flag",
        )?;
        Ok(LocalWallet::new(config))
    }
}
