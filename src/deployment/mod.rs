//! Deployment resolution subsystem.
//!
//! # Data Flow
//! ```text
//! chain id + optional manifest path
//!     → resolver.rs (local vs. public network policy)
//!         → manifest.rs (local chain: read + parse JSON manifest)
//!         → registry.rs (public chains: configured deployments)
//!     → types.rs (Deployment::contract_address)
//!     → Address
//! ```
//!
//! # Design Decisions
//! - Deployments are read once per resolution and never mutated
//! - A missing contract entry is a typed error, not a default

pub mod manifest;
pub mod registry;
pub mod resolver;
pub mod types;

pub use registry::DeploymentRegistry;
pub use resolver::{DeploymentResolver, FACTORY_CONTRACT, LOCAL_CHAIN_ID};
pub use types::{Deployment, DeploymentContract, DeploymentError, DeploymentResult};
