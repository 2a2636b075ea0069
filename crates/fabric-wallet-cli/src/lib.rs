//! # fabric-wallet-cli
//!
//! Command-line front end for [`fabric_wallet::LocalWallet`].
//!
//! ## Features
//!
//! - **Profiles**: wallet layouts stored as TOML, overridable per flag
//! - **check**: derive TLS credentials, identity and signer, report each
//! - **sign**: sign a message with the wallet's key
//! - **Output formats**: pretty (colored) or JSON

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
