use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for wallet operations
pub type Result<T> = std::result::Result<T, WalletError>;

/// A required wallet configuration field.
///
/// Listed in the order `build()` validates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    /// Root of the credential layout
    BaseDir,
    /// Directory holding TLS material, relative to the base
    TlsFolder,
    /// File name of the TLS root CA inside the TLS folder
    TlsRootCaFile,
    /// Server name the TLS peer must present
    TlsHostName,
    /// Directory holding private keys, relative to the base
    KeyStore,
    /// Signing certificate path, relative to the base
    SignIdentity,
    /// Membership service provider identifier
    MspId,
}

impl ConfigField {
    /// Every field, in validation order.
    pub const ALL: [Self; 7] = [
        Self::BaseDir,
        Self::TlsFolder,
        Self::TlsRootCaFile,
        Self::TlsHostName,
        Self::KeyStore,
        Self::SignIdentity,
        Self::MspId,
    ];

    /// Name used in error messages and profile files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseDir => "baseDir",
            Self::TlsFolder => "tlsFolder",
            Self::TlsRootCaFile => "tlsRootCAFile",
            Self::TlsHostName => "tlsHostName",
            Self::KeyStore => "keyStore",
            Self::SignIdentity => "signIdentity",
            Self::MspId => "mspID",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while loading credentials
#[derive(Error, Debug)]
pub enum WalletError {
    /// A required configuration field was never set
    #[error("{field} is required")]
    MissingField {
        /// The first unset field, in validation order
        field: ConfigField,
    },

    /// A file or directory could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Resolved path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid PEM or decodes to a malformed certificate/key
    #[error("failed to parse {}: {reason}", .path.display())]
    Parse {
        /// Resolved path of the offending file
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// The key store directory contains no key files
    #[error("no files found in {}", .path.display())]
    EmptyKeyStore {
        /// Resolved key store directory
        path: PathBuf,
    },

    /// The configured TLS host name is not a DNS name or IP address
    #[error("invalid TLS server name: {name:?}")]
    InvalidServerName {
        /// The configured value
        name: String,
    },

    /// A configured subpath resolves outside the base directory
    #[error("path escapes the base directory: {}", .path.display())]
    OutsideBaseDir {
        /// Cleaned path that was rejected
        path: PathBuf,
    },

    /// The TLS client configuration could not be assembled
    #[error("TLS configuration error: {0}")]
    Tls(String),

    /// The private key failed to produce a signature
    #[error("signing failed")]
    Signing,
}

impl WalletError {
    /// Build an [`WalletError::Io`] for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a [`WalletError::Parse`] for `path`.
    pub fn parse(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// The file or directory involved, if the error has one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. }
            | Self::Parse { path, .. }
            | Self::EmptyKeyStore { path }
            | Self::OutsideBaseDir { path } => Some(path),
            _ => None,
        }
    }

    /// Returns true if the error comes from the wallet configuration
    /// rather than from the files it points at.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. } | Self::InvalidServerName { .. } | Self::OutsideBaseDir { .. }
        )
    }
}
