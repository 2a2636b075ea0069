//! Credential types and the [`Wallet`] trait for Hyperledger Fabric clients.
//!
//! This crate provides the pieces every wallet kind shares:
//!
//! - **Values**: [`TransportCredentials`], [`Identity`], [`Signer`], plus the
//!   parsed [`Certificate`] they are built from
//! - **Errors**: one taxonomy for every wallet, [`WalletError`]
//! - **Trait**: [`Wallet`], the capability set a gateway client consumes
//!
//! # Example
//!
//! ```rust,ignore
//! use fabric_wallet_core::{Result, Wallet};
//!
//! fn describe(wallet: &dyn Wallet) -> Result<()> {
//!     let id = wallet.identity()?;
//!     println!("{} / {}", id.msp_id(), id.certificate().subject());
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/fabric-wallet-core/0.1.0")]

pub mod cert;
mod error;
pub mod identity;
pub mod signer;
pub mod tls;
mod wallet;

pub use cert::Certificate;
pub use error::{ConfigField, Result, WalletError};
pub use identity::Identity;
pub use signer::{KeyAlgorithm, Signer};
pub use tls::TransportCredentials;
pub use wallet::Wallet;
