//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject registry entries the resolver would never consult
//! - Detect conflicting network entries
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RollupsConfig → Result<(), Vec<ValidationError>>

use std::collections::HashSet;

use crate::config::schema::RollupsConfig;
use crate::deployment::LOCAL_CHAIN_ID;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyRpcUrl,
    LocalChainInNetworks { name: String },
    DuplicateChainId(u64),
    EmptyManifestPath { name: String },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyRpcUrl => write!(f, "rpc_url must not be empty"),
            ValidationError::LocalChainInNetworks { name } => write!(
                f,
                "network '{}' uses chain id {}, which is resolved from deployment_path",
                name, LOCAL_CHAIN_ID
            ),
            ValidationError::DuplicateChainId(id) => {
                write!(f, "chain id {} is configured more than once", id)
            }
            ValidationError::EmptyManifestPath { name } => {
                write!(f, "network '{}' has an empty manifest path", name)
            }
        }
    }
}

/// Check `config` for semantic errors.
pub fn validate_config(config: &RollupsConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.rpc_url.trim().is_empty() {
        errors.push(ValidationError::EmptyRpcUrl);
    }

    let mut seen = HashSet::new();
    for network in &config.networks {
        if network.chain_id == LOCAL_CHAIN_ID {
            errors.push(ValidationError::LocalChainInNetworks {
                name: network.name.clone(),
            });
        }
        if !seen.insert(network.chain_id) {
            errors.push(ValidationError::DuplicateChainId(network.chain_id));
        }
        if network.manifest.as_os_str().is_empty() {
            errors.push(ValidationError::EmptyManifestPath {
                name: network.name.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
