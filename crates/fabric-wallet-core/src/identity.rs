//! Client identity presented to a Fabric gateway.

use serde::Serialize;

use crate::cert::Certificate;

/// An X.509 identity bound to a membership service provider.
///
/// The gateway uses the MSP ID to decide which organization the
/// certificate belongs to, and embeds [`Identity::credentials`] as the
/// creator of every proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    msp_id: String,
    certificate: Certificate,
}

impl Identity {
    /// Pair an MSP ID with a certificate.
    #[must_use]
    pub fn new(msp_id: impl Into<String>, certificate: Certificate) -> Self {
        Self {
            msp_id: msp_id.into(),
            certificate,
        }
    }

    /// Membership service provider identifier
    #[must_use]
    pub fn msp_id(&self) -> &str {
        &self.msp_id
    }

    /// The identity's certificate
    #[must_use]
    pub const fn certificate(&self) -> &Certificate {
        &self.certificate
    }

    /// PEM encoding of the certificate, as serialized into proposals.
    #[must_use]
    pub fn credentials(&self) -> Vec<u8> {
        self.certificate.to_pem().into_bytes()
    }

    /// Split into MSP ID and certificate.
    #[must_use]
    pub fn into_parts(self) -> (String, Certificate) {
        (self.msp_id, self.certificate)
    }
}
