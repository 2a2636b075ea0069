//! Wallet backed by a Fabric MSP directory on the local filesystem.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use fabric_wallet_core::{
    Certificate, Identity, Result, Signer, TransportCredentials, Wallet, WalletError,
};

use crate::config::WalletConfig;

/// Wallet that reads its credentials from files under a base directory.
///
/// Holds only the configuration. Every call re-reads and re-parses its
/// source files, so a rewritten certificate or key is picked up on the
/// next call.
#[derive(Debug, Clone)]
pub struct LocalWallet {
    config: WalletConfig,
}

impl LocalWallet {
    /// Create a wallet over a validated layout
    #[must_use]
    pub const fn new(config: WalletConfig) -> Self {
        Self { config }
    }

    /// The layout this wallet reads from
    #[must_use]
    pub const fn config(&self) -> &WalletConfig {
        &self.config
    }

    /// Path of the private key [`Wallet::signer`] would load.
    ///
    /// Directories, and symlinks to directories, are ignored; among the
    /// remaining entries the first by file name is chosen.
    pub fn key_file(&self) -> Result<PathBuf> {
        let dir = self.config.key_store_dir()?;
        let mut candidates = list_files(&dir)?;
        candidates.sort();

        let count = candidates.len();
        let Some(selected) = candidates.into_iter().next() else {
            return Err(WalletError::EmptyKeyStore { path: dir });
        };

        if count > 1 {
            warn!(
                dir = %dir.display(),
                selected = %selected.display(),
                count,
                "key store holds more than one file, using the first by name"
            );
        }

        Ok(selected)
    }

    /// Select and load the private key from one listing of the key store.
    ///
    /// Returns the path the [`Signer`] was read from.
    pub fn load_signer(&self) -> Result<(PathBuf, Signer)> {
        let path = self.key_file()?;
        let pem = read_file(&path)?;
        let signer = Signer::from_pem(&pem, &path)?;
        debug!(
            path = %path.display(),
            algorithm = %signer.algorithm(),
            "loaded private key"
        );

        Ok((path, signer))
    }
}

impl From<WalletConfig> for LocalWallet {
    fn from(config: WalletConfig) -> Self {
        Self::new(config)
    }
}

impl Wallet for LocalWallet {
    fn transport_credentials(&self) -> Result<TransportCredentials> {
        let path = self.config.tls_root_ca_path()?;
        let root_ca = read_certificate(&path)?;
        debug!(
            path = %path.display(),
            fingerprint = root_ca.fingerprint(),
            host = self.config.tls_host_name(),
            "loaded TLS root CA"
        );

        TransportCredentials::new(root_ca, self.config.tls_host_name(), &path)
    }

    fn identity(&self) -> Result<Identity> {
        let path = self.config.sign_identity_path()?;
        let certificate = read_certificate(&path)?;
        debug!(
            path = %path.display(),
            subject = certificate.subject(),
            msp_id = self.config.msp_id(),
            "loaded signing identity"
        );

        Ok(Identity::new(self.config.msp_id(), certificate))
    }

    fn signer(&self) -> Result<Signer> {
        self.load_signer().map(|(_, signer)| signer)
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| WalletError::io(path, e))
}

fn read_certificate(path: &Path) -> Result<Certificate> {
    let pem = read_file(path)?;
    Certificate::from_pem(&pem, path)
}

/// Entries of `dir` that do not resolve to a directory, in listing order.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| WalletError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| WalletError::io(dir, e))?.path();
        // follows symlinks
        if path.is_dir() {
            continue;
        }
        files.push(path);
    }

    Ok(files)
}
