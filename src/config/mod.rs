//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, path from ROLLUPS_CONFIG)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RollupsConfig (validated, immutable)
//!     → DeploymentRegistry::from_networks / connect_factory
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{NetworkConfig, RollupsConfig};
