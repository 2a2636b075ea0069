//! Filesystem-backed wallet for Hyperledger Fabric gateway clients.
//!
//! Reads the layout `cryptogen` and the Fabric CA client produce:
//!
//! ```text
//! <baseDir>/
//!   <tlsFolder>/<tlsRootCAFile>   TLS root CA of the gateway peer
//!   <signIdentity>                the client's X.509 certificate
//!   <keyStore>/                   PKCS#8 private key(s)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use fabric_wallet_local::{LocalWallet, Wallet, WalletConfig};
//!
//! let config = WalletConfig::builder()
//!     .base_dir("organizations/peerOrganizations/org1.example.com")
//!     .msp_id("Org1MSP")
//!     .tls_folder("peers/peer0.org1.example.com/tls")
//!     .tls_root_ca_file("ca.crt")
//!     .tls_host_name("peer0.org1.example.com")
//!     .key_store("users/User1@org1.example.com/msp/keystore")
//!     .sign_identity("users/User1@org1.example.com/msp/signcerts/cert.pem")
//!     .build()?;
//!
//! let wallet = LocalWallet::new(config);
//! let tls = wallet.transport_credentials()?;
//! let identity = wallet.identity()?;
//! let signer = wallet.signer()?;
//! ```

#![doc(html_root_url = "https://docs.rs/fabric-wallet-local/0.1.0")]

mod config;
pub mod path;
mod wallet;

pub use config::{WalletConfig, WalletConfigBuilder};
pub use fabric_wallet_core::{Result, Wallet, WalletError};
pub use wallet::LocalWallet;
