//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.
//! The recovery phrase is deliberately absent; see `blockchain::wallet`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for rollups connections.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RollupsConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Account of the recovery phrase used by the factory connection.
    pub account_index: Option<u32>,

    /// Deployment manifest for the local chain (31337).
    pub deployment_path: Option<PathBuf>,

    /// Public networks with known deployments.
    pub networks: Vec<NetworkConfig>,
}

impl Default for RollupsConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            account_index: None,
            deployment_path: None,
            networks: Vec::new(),
        }
    }
}

/// A public network registered from a deployment manifest.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkConfig {
    /// Network identifier for logging.
    pub name: String,

    /// Chain ID (e.g., 5 for goerli).
    pub chain_id: u64,

    /// Path to the deployment manifest (JSON).
    pub manifest: PathBuf,
}
