//! Wallet profile files.
//!
//! A profile is a TOML document with the same keys as the wallet
//! configuration (`baseDir`, `tlsFolder`, ..., `mspID`). Missing keys stay
//! empty and are reported when the wallet is built.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use fabric_wallet::WalletConfigBuilder;

/// File name of the default profile inside the config directory.
const PROFILE_FILE: &str = "profile.toml";

/// Location of the default profile.
pub fn default_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("org", "hyperledger", "fabwallet")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    Ok(dirs.config_dir().join(PROFILE_FILE))
}

/// Read a profile file into a config draft.
pub fn read_profile(path: &Path) -> Result<WalletConfigBuilder> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read profile {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parse profile {}", path.display()))
}

/// Load the starting draft.
///
/// An explicit profile must exist. Without one, the default profile is used
/// when present and an empty draft otherwise.
pub fn load_draft(explicit: Option<&Path>) -> Result<WalletConfigBuilder> {
    if let Some(path) = explicit {
        return read_profile(path);
    }

    let path = default_path()?;
    if path.exists() {
        read_profile(&path)
    } else {
        Ok(WalletConfigBuilder::default())
    }
}
