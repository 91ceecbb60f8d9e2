//! rollups-connect
//!
//! Connects to the DApp factory of the network behind the configured RPC
//! endpoint and reports where it lives and who signs for it.
//!
//! ```text
//! ROLLUPS_CONFIG (TOML) ──▶ RollupsConfig ──▶ DeploymentRegistry
//! ROLLUPS_MNEMONIC ───────────────────────┐          │
//!                                         ▼          ▼
//!                                    connect_factory(rpc_url, ...)
//!                                              │
//!                                              ▼
//!                                  factory address + signer
//! ```

use rollups_connect::blockchain::wallet::mnemonic_from_env;
use rollups_connect::config::loader::load_from_env;
use rollups_connect::observability::init_logging;
use rollups_connect::{connect_factory, DeploymentRegistry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging("rollups_connect=info");

    let config = load_from_env()?;

    tracing::info!(
        rpc_url = %config.rpc_url,
        networks = config.networks.len(),
        "Configuration loaded"
    );

    let registry = DeploymentRegistry::from_networks(&config.networks)?;
    let mnemonic = mnemonic_from_env();

    let factory = connect_factory(
        &config.rpc_url,
        mnemonic.as_deref(),
        config.account_index,
        config.deployment_path.as_deref(),
        &registry,
    )
    .await?;

    match factory.signer() {
        Some(signer) => tracing::info!(
            chain_id = %factory.chain_id(),
            factory = %factory.address(),
            signer = %signer,
            "Ready to send transactions"
        ),
        None => tracing::info!(
            chain_id = %factory.chain_id(),
            factory = %factory.address(),
            "Read-only connection (ROLLUPS_MNEMONIC not set)"
        ),
    }

    Ok(())
}
