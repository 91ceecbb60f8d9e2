//! Deployment records and resolution errors.

use std::collections::HashMap;
use std::path::PathBuf;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A contract entry in a deployment manifest.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DeploymentContract {
    /// On-chain address.
    pub address: Address,

    /// Interface description. Carried along, never interpreted.
    #[serde(default)]
    pub abi: Vec<serde_json::Value>,
}

/// Contract addresses for one network.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    /// Network name (e.g., "localhost", "goerli").
    pub name: String,

    /// Chain id as written in the manifest.
    pub chain_id: String,

    /// Contracts keyed by name.
    pub contracts: HashMap<String, DeploymentContract>,
}

impl Deployment {
    /// Look up the address of `contract`.
    pub fn contract_address(&self, contract: &str) -> DeploymentResult<Address> {
        self.contracts
            .get(contract)
            .map(|c| c.address)
            .ok_or_else(|| DeploymentError::MissingContract {
                contract: contract.to_string(),
                deployment: self.name.clone(),
            })
    }
}

/// Errors raised while resolving contract addresses.
#[derive(Debug, Error)]
pub enum DeploymentError {
    /// Local network selected but no manifest path given.
    #[error("undefined deployment path for network {chain_id}")]
    MissingDeploymentPath { chain_id: u64 },

    /// Manifest path does not exist.
    #[error("deployment file '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// Manifest exists but could not be read.
    #[error("failed to read deployment file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest content is not a valid deployment.
    #[error("invalid deployment file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No deployment known for this chain.
    #[error("unsupported network {0}")]
    UnsupportedNetwork(u64),

    /// Deployment does not list the requested contract.
    #[error("contract '{contract}' not found in deployment '{deployment}'")]
    MissingContract { contract: String, deployment: String },
}

/// Result type for deployment resolution.
pub type DeploymentResult<T> = Result<T, DeploymentError>;
