//! TLS transport credentials pinned to one root CA and one server name.

use rustls::pki_types::{CertificateDer, ServerName};
use rustls::{ClientConfig, RootCertStore};
use std::path::Path;
use std::sync::Arc;

use crate::cert::Certificate;
use crate::error::{Result, WalletError};

/// Trust pool plus the peer name a TLS channel must authenticate.
///
/// The pool holds exactly one anchor: the configured root CA. The
/// transport layer dials with [`TransportCredentials::server_name`] as
/// the expected identity, whatever names the peer's address resolves to.
#[derive(Debug, Clone)]
pub struct TransportCredentials {
    root_ca: Certificate,
    roots: Arc<RootCertStore>,
    host_name: String,
    server_name: ServerName<'static>,
}

impl TransportCredentials {
    /// Build credentials trusting only `root_ca` and pinned to `host_name`.
    ///
    /// `source` labels the error if the certificate is rejected as a trust
    /// anchor.
    pub fn new(root_ca: Certificate, host_name: &str, source: &Path) -> Result<Self> {
        let server_name = ServerName::try_from(host_name.to_string()).map_err(|_| {
            WalletError::InvalidServerName {
                name: host_name.to_string(),
            }
        })?;

        let mut roots = RootCertStore::empty();
        roots
            .add(CertificateDer::from(root_ca.der().to_vec()))
            .map_err(|e| WalletError::parse(source, format!("rejected as trust anchor: {e}")))?;

        Ok(Self {
            root_ca,
            roots: Arc::new(roots),
            host_name: host_name.to_string(),
            server_name,
        })
    }

    /// The single trusted root certificate
    #[must_use]
    pub const fn root_certificate(&self) -> &Certificate {
        &self.root_ca
    }

    /// Trust pool handed to rustls
    #[must_use]
    pub fn roots(&self) -> &RootCertStore {
        &self.roots
    }

    /// Pinned server name, as configured
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    /// Pinned server name, ready for `rustls::ClientConnection::new`
    #[must_use]
    pub const fn server_name(&self) -> &ServerName<'static> {
        &self.server_name
    }

    /// Client configuration that trusts only the pinned root.
    ///
    /// Uses the ring crypto provider and rustls' safe default protocol
    /// versions. No client certificate is presented.
    pub fn client_config(&self) -> Result<Arc<ClientConfig>> {
        let provider = Arc::new(rustls::crypto::ring::default_provider());
        let config = ClientConfig::builder_with_provider(provider)
            .with_safe_default_protocol_versions()
            .map_err(|e| WalletError::Tls(e.to_string()))?
            .with_root_certificates(Arc::clone(&self.roots))
            .with_no_client_auth();

        Ok(Arc::new(config))
    }
}
