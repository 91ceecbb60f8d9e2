//! Contract address resolution.
//!
//! # Policy
//! ```text
//! chain id == 31337 (local)
//!     → manifest path required
//!     → manifest must exist
//!     → parse manifest, look up contract
//! any other chain id
//!     → registry entry required
//!     → look up contract
//! ```

use std::path::Path;

use alloy::primitives::Address;

use crate::deployment::manifest::load_manifest;
use crate::deployment::registry::{known_network_name, DeploymentRegistry};
use crate::deployment::types::{DeploymentError, DeploymentResult};

/// Chain id of local development nodes (Hardhat, Anvil).
pub const LOCAL_CHAIN_ID: u64 = 31337;

/// Manifest key of the DApp factory contract.
pub const FACTORY_CONTRACT: &str = "CartesiDAppFactory";

/// Resolves contract addresses against a local manifest or a registry.
#[derive(Debug, Clone, Copy)]
pub struct DeploymentResolver<'a> {
    registry: &'a DeploymentRegistry,
}

impl<'a> DeploymentResolver<'a> {
    pub fn new(registry: &'a DeploymentRegistry) -> Self {
        Self { registry }
    }

    /// Address of the DApp factory on `chain_id`.
    ///
    /// `deployment_path` is only consulted for the local chain.
    pub fn resolve_factory_address(
        &self,
        chain_id: u64,
        deployment_path: Option<&Path>,
    ) -> DeploymentResult<Address> {
        self.resolve_contract_address(chain_id, deployment_path, FACTORY_CONTRACT)
    }

    /// Address of `contract` on `chain_id`.
    pub fn resolve_contract_address(
        &self,
        chain_id: u64,
        deployment_path: Option<&Path>,
        contract: &str,
    ) -> DeploymentResult<Address> {
        let address = if chain_id == LOCAL_CHAIN_ID {
            let path = deployment_path
                .ok_or(DeploymentError::MissingDeploymentPath { chain_id })?;
            load_manifest(path)?.contract_address(contract)?
        } else {
            let deployment = self.registry.get(chain_id).ok_or_else(|| {
                tracing::debug!(
                    chain_id,
                    network = known_network_name(chain_id).unwrap_or("unknown"),
                    "No deployment registered"
                );
                DeploymentError::UnsupportedNetwork(chain_id)
            })?;
            deployment.contract_address(contract)?
        };

        tracing::debug!(chain_id, contract, %address, "Contract address resolved");
        Ok(address)
    }
}
