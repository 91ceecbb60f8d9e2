//! Rollups contract connections.
//!
//! Resolves the deployed addresses of the rollups contracts for a network and
//! binds typed handles to either a read-only provider or a signing identity
//! derived from a recovery phrase.

pub mod blockchain;
pub mod config;
pub mod contracts;
pub mod deployment;
pub mod observability;

pub use config::RollupsConfig;
pub use contracts::{connect_contracts, connect_factory, ConnectError, DAppFactory, RollupsContracts};
pub use deployment::{DeploymentRegistry, DeploymentResolver};
