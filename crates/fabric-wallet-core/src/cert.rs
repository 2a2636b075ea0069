//! X.509 certificates decoded from PEM files.

use chrono::{DateTime, TimeZone, Utc};
use pem::{EncodeConfig, LineEnding, Pem};
use ring::digest::{digest, SHA256};
use serde::Serialize;
use std::path::Path;

use crate::error::{Result, WalletError};

/// PEM tag of an X.509 certificate block.
pub const CERTIFICATE_TAG: &str = "CERTIFICATE";

/// A parsed X.509 certificate.
///
/// Keeps the DER encoding alongside the fields callers usually want to
/// display. Two certificates are equal when their DER bytes are equal.
#[derive(Debug, Clone, Serialize)]
pub struct Certificate {
    #[serde(skip)]
    der: Vec<u8>,
    subject: String,
    issuer: String,
    serial: String,
    not_before: DateTime<Utc>,
    not_after: DateTime<Utc>,
    fingerprint: String,
}

impl Certificate {
    /// Decode the first PEM block of `pem_bytes` as a certificate.
    ///
    /// `source` is only used to label errors.
    pub fn from_pem(pem_bytes: &[u8], source: &Path) -> Result<Self> {
        let block = pem::parse(pem_bytes)
            .map_err(|e| WalletError::parse(source, format!("invalid PEM: {e}")))?;

        if block.tag() != CERTIFICATE_TAG {
            return Err(WalletError::parse(
                source,
                format!("expected a {CERTIFICATE_TAG} block, found {}", block.tag()),
            ));
        }

        Self::from_der(block.into_contents(), source)
    }

    /// Parse a DER-encoded certificate.
    pub fn from_der(der: Vec<u8>, source: &Path) -> Result<Self> {
        let (subject, issuer, serial, not_before, not_after) = {
            let (_, cert) = x509_parser::parse_x509_certificate(&der)
                .map_err(|e| WalletError::parse(source, format!("invalid certificate: {e}")))?;

            let validity = cert.validity();
            (
                cert.subject().to_string(),
                cert.issuer().to_string(),
                cert.raw_serial_as_string(),
                asn1_to_utc(validity.not_before, source)?,
                asn1_to_utc(validity.not_after, source)?,
            )
        };

        let fingerprint = hex::encode(digest(&SHA256, &der).as_ref());

        Ok(Self {
            der,
            subject,
            issuer,
            serial,
            not_before,
            not_after,
            fingerprint,
        })
    }

    /// Raw DER encoding.
    #[must_use]
    pub fn der(&self) -> &[u8] {
        &self.der
    }

    /// Subject distinguished name (human-readable)
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Issuer distinguished name (human-readable)
    #[must_use]
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Serial number (hex)
    #[must_use]
    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// Not valid before
    #[must_use]
    pub const fn not_before(&self) -> DateTime<Utc> {
        self.not_before
    }

    /// Not valid after
    #[must_use]
    pub const fn not_after(&self) -> DateTime<Utc> {
        self.not_after
    }

    /// SHA-256 of the DER bytes, lowercase hex.
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Whether `at` falls inside the validity window.
    #[must_use]
    pub fn is_valid_at(&self, at: DateTime<Utc>) -> bool {
        self.not_before <= at && at <= self.not_after
    }

    /// Re-encode as a single PEM block with LF line endings.
    #[must_use]
    pub fn to_pem(&self) -> String {
        let block = Pem::new(CERTIFICATE_TAG, self.der.clone());
        pem::encode_config(&block, EncodeConfig::new().set_line_ending(LineEnding::LF))
    }
}

impl PartialEq for Certificate {
    fn eq(&self, other: &Self) -> bool {
        self.der == other.der
    }
}

impl Eq for Certificate {}

/// Convert an ASN.1 `GeneralizedTime` / `UTCTime` to `DateTime<Utc>`.
fn asn1_to_utc(t: x509_parser::time::ASN1Time, source: &Path) -> Result<DateTime<Utc>> {
    Utc.timestamp_opt(t.timestamp(), 0)
        .single()
        .ok_or_else(|| WalletError::parse(source, "certificate validity out of range"))
}
