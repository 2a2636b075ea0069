//! fabwallet - inspect Hyperledger Fabric wallet layouts
//!
//! Loads a wallet the way a gateway client would and reports what it finds.

use anyhow::Result;

fn main() -> Result<()> {
    fabric_wallet_cli::run()
}
