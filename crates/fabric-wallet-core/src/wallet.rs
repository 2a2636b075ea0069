//! The credential capability set shared by every wallet kind.

use crate::error::Result;
use crate::identity::Identity;
use crate::signer::Signer;
use crate::tls::TransportCredentials;

/// Source of the credentials a Fabric gateway client needs.
///
/// Each call derives a fresh value; implementations keep no mutable state,
/// so one wallet can be shared across threads behind an `Arc<dyn Wallet>`.
pub trait Wallet: Send + Sync {
    /// Credentials for the TLS connection to the gateway peer
    fn transport_credentials(&self) -> Result<TransportCredentials>;

    /// Identity that submits transactions
    fn identity(&self) -> Result<Identity>;

    /// Signing implementation for proposals and envelopes
    fn signer(&self) -> Result<Signer>;
}

impl<W: Wallet + ?Sized> Wallet for Box<W> {
    fn transport_credentials(&self) -> Result<TransportCredentials> {
        (**self).transport_credentials()
    }

    fn identity(&self) -> Result<Identity> {
        (**self).identity()
    }

    fn signer(&self) -> Result<Signer> {
        (**self).signer()
    }
}

impl<W: Wallet + ?Sized> Wallet for std::sync::Arc<W> {
    fn transport_credentials(&self) -> Result<TransportCredentials> {
        (**self).transport_credentials()
    }

    fn identity(&self) -> Result<Identity> {
        (**self).identity()
    }

    fn signer(&self) -> Result<Signer> {
        (**self).signer()
    }
}
