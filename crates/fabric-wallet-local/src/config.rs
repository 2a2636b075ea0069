//! Wallet layout configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use fabric_wallet_core::{ConfigField, Result, WalletError};

use crate::path::resolve;

/// Validated filesystem layout of a local wallet.
///
/// Only obtainable through [`WalletConfigBuilder::build`], so every field
/// is non-empty. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletConfig {
    base_dir: PathBuf,
    tls_folder: PathBuf,
    tls_root_ca_file: PathBuf,
    tls_host_name: String,
    key_store: PathBuf,
    sign_identity: PathBuf,
    msp_id: String,
}

impl WalletConfig {
    /// Start an empty draft.
    #[must_use]
    pub fn builder() -> WalletConfigBuilder {
        WalletConfigBuilder::new()
    }

    /// Root of the credential layout
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// TLS folder, relative to the base directory
    #[must_use]
    pub fn tls_folder(&self) -> &Path {
        &self.tls_folder
    }

    /// TLS root CA file name inside the TLS folder
    #[must_use]
    pub fn tls_root_ca_file(&self) -> &Path {
        &self.tls_root_ca_file
    }

    /// Server name the TLS peer must present
    #[must_use]
    pub fn tls_host_name(&self) -> &str {
        &self.tls_host_name
    }

    /// Key store directory, relative to the base directory
    #[must_use]
    pub fn key_store(&self) -> &Path {
        &self.key_store
    }

    /// Signing certificate, relative to the base directory
    #[must_use]
    pub fn sign_identity(&self) -> &Path {
        &self.sign_identity
    }

    /// Membership service provider identifier
    #[must_use]
    pub fn msp_id(&self) -> &str {
        &self.msp_id
    }

    /// `<base>/<tlsFolder>/<tlsRootCAFile>`, cleaned.
    pub fn tls_root_ca_path(&self) -> Result<PathBuf> {
        resolve(
            &self.base_dir,
            &[self.tls_folder.as_path(), self.tls_root_ca_file.as_path()],
        )
    }

    /// `<base>/<signIdentity>`, cleaned.
    pub fn sign_identity_path(&self) -> Result<PathBuf> {
        resolve(&self.base_dir, &[self.sign_identity.as_path()])
    }

    /// `<base>/<keyStore>`, cleaned.
    pub fn key_store_dir(&self) -> Result<PathBuf> {
        resolve(&self.base_dir, &[self.key_store.as_path()])
    }
}

/// Draft of a [`WalletConfig`].
///
/// Every setter overwrites its field, so the last call wins. Profile files
/// deserialize straight into a draft; keys may be written in the camelCase
/// form used by error messages (`tlsRootCAFile`, `mspID`) or in snake_case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfigBuilder {
    #[serde(rename = "baseDir", alias = "base_dir")]
    base_dir: PathBuf,
    #[serde(rename = "tlsFolder", alias = "tls_folder")]
    tls_folder: PathBuf,
    #[serde(rename = "tlsRootCAFile", alias = "tls_root_ca_file")]
    tls_root_ca_file: PathBuf,
    #[serde(rename = "tlsHostName", alias = "tls_host_name")]
    tls_host_name: String,
    #[serde(rename = "keyStore", alias = "key_store")]
    key_store: PathBuf,
    #[serde(rename = "signIdentity", alias = "sign_identity")]
    sign_identity: PathBuf,
    #[serde(rename = "mspID", alias = "msp_id", alias = "mspId")]
    msp_id: String,
}

impl WalletConfigBuilder {
    /// Create an empty draft
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base directory
    #[must_use]
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Set the TLS folder
    #[must_use]
    pub fn tls_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.tls_folder = folder.into();
        self
    }

    /// Set the TLS root CA file name
    #[must_use]
    pub fn tls_root_ca_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.tls_root_ca_file = file.into();
        self
    }

    /// Set the expected TLS server name
    #[must_use]
    pub fn tls_host_name(mut self, host: impl Into<String>) -> Self {
        self.tls_host_name = host.into();
        self
    }

    /// Set the key store directory
    #[must_use]
    pub fn key_store(mut self, dir: impl Into<PathBuf>) -> Self {
        self.key_store = dir.into();
        self
    }

    /// Set the signing certificate path
    #[must_use]
    pub fn sign_identity(mut self, path: impl Into<PathBuf>) -> Self {
        self.sign_identity = path.into();
        self
    }

    /// Set the MSP ID
    #[must_use]
    pub fn msp_id(mut self, msp_id: impl Into<String>) -> Self {
        self.msp_id = msp_id.into();
        self
    }

    /// Whether `field` is still empty.
    #[must_use]
    pub fn is_unset(&self, field: ConfigField) -> bool {
        match field {
            ConfigField::BaseDir => self.base_dir.as_os_str().is_empty(),
            ConfigField::TlsFolder => self.tls_folder.as_os_str().is_empty(),
            ConfigField::TlsRootCaFile => self.tls_root_ca_file.as_os_str().is_empty(),
            ConfigField::TlsHostName => self.tls_host_name.is_empty(),
            ConfigField::KeyStore => self.key_store.as_os_str().is_empty(),
            ConfigField::SignIdentity => self.sign_identity.as_os_str().is_empty(),
            ConfigField::MspId => self.msp_id.is_empty(),
        }
    }

    /// Validate and freeze the draft.
    ///
    /// Fails with [`WalletError::MissingField`] naming the first empty
    /// field in [`ConfigField::ALL`] order. Does not touch the filesystem.
    pub fn build(self) -> Result<WalletConfig> {
        if let Some(field) = ConfigField::ALL.into_iter().find(|f| self.is_unset(*f)) {
            return Err(WalletError::MissingField { field });
        }

        Ok(WalletConfig {
            base_dir: self.base_dir,
            tls_folder: self.tls_folder,
            tls_root_ca_file: self.tls_root_ca_file,
            tls_host_name: self.tls_host_name,
            key_store: self.key_store,
            sign_identity: self.sign_identity,
            msp_id: self.msp_id,
        })
    }
}
