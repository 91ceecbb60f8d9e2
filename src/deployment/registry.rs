//! Deployment registry for public networks.
//!
//! The built-in registry is empty. Public deployments are registered at
//! startup from configuration, so supporting a new network only needs a
//! manifest file and a `[[networks]]` entry.

use std::collections::HashMap;

use crate::config::schema::NetworkConfig;
use crate::deployment::manifest::load_manifest;
use crate::deployment::types::{Deployment, DeploymentResult};

/// Public test networks that have shipped deployments in the past.
/// None of them is registered by default.
const KNOWN_NETWORKS: &[(u64, &str)] = &[
    (5, "goerli"),
    (420, "optimism_goerli"),
    (80001, "polygon_mumbai"),
    (421613, "arbitrum_goerli"),
];

/// Name of a well-known network, if any.
pub fn known_network_name(chain_id: u64) -> Option<&'static str> {
    KNOWN_NETWORKS
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, name)| *name)
}

/// Chain id → deployment lookup table.
#[derive(Debug, Clone, Default)]
pub struct DeploymentRegistry {
    deployments: HashMap<u64, Deployment>,
}

impl DeploymentRegistry {
    /// The compiled-in registry. Currently has no entries.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Build a registry from configured network manifests.
    pub fn from_networks(networks: &[NetworkConfig]) -> DeploymentResult<Self> {
        let mut registry = Self::builtin();
        for network in networks {
            let deployment = load_manifest(&network.manifest)?;
            if deployment.chain_id != network.chain_id.to_string() {
                tracing::warn!(
                    network = %network.name,
                    configured = network.chain_id,
                    manifest = %deployment.chain_id,
                    "Manifest chain id differs from configured chain id"
                );
            }
            registry.insert(network.chain_id, deployment);
        }
        Ok(registry)
    }

    /// Register `deployment` for `chain_id`, replacing any previous entry.
    pub fn insert(&mut self, chain_id: u64, deployment: Deployment) -> Option<Deployment> {
        tracing::debug!(chain_id, network = %deployment.name, "Deployment registered");
        self.deployments.insert(chain_id, deployment)
    }

    pub fn get(&self, chain_id: u64) -> Option<&Deployment> {
        self.deployments.get(&chain_id)
    }

    pub fn len(&self) -> usize {
        self.deployments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deployments.is_empty()
    }
}
