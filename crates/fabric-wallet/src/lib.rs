//! Credential wallets for Hyperledger Fabric gateway clients.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fabric_wallet::{LocalWallet, Wallet, WalletConfig};
//!
//! fn main() -> fabric_wallet::Result<()> {
//!     let wallet = LocalWallet::new(
//!         WalletConfig::builder()
//!             .base_dir("organizations/peerOrganizations/org1.example.com")
//!             .msp_id("Org1MSP")
//!             .tls_folder("peers/peer0.org1.example.com/tls")
//!             .tls_root_ca_file("ca.crt")
//!             .tls_host_name("peer0.org1.example.com")
//!             .key_store("users/User1@org1.example.com/msp/keystore")
//!             .sign_identity("users/User1@org1.example.com/msp/signcerts/cert.pem")
//!             .build()?,
//!     );
//!
//!     // TLS channel to the gateway peer
//!     let tls = wallet.transport_credentials()?;
//!     let config = tls.client_config()?;
//!     let server_name = tls.server_name().clone();
//!
//!     // Who submits, and how proposals get signed
//!     let identity = wallet.identity()?;
//!     let signer = wallet.signer()?;
//!     let signature = signer.sign(b"proposal bytes")?;
//!
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/fabric-wallet/0.1.0")]

// Re-export core types
pub use fabric_wallet_core::*;

// Re-export the filesystem wallet
pub use fabric_wallet_local::{path, LocalWallet, WalletConfig, WalletConfigBuilder};

// Re-export TLS stack for convenience
pub use rustls;
