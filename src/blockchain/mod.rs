//! Network access and signing identities.
//!
//! # Data Flow
//! ```text
//! RPC URL
//!     → provider.rs (HTTP provider, chain id query)
//! ROLLUPS_MNEMONIC + derivation policy
//!     → wallet.rs (signer derivation)
//!     → provider.rs (provider with the signer attached)
//! ```
//!
//! # Security Constraints
//! - Recovery phrases ONLY from the environment or the caller
//! - Never log phrases or private keys

pub mod provider;
pub mod types;
pub mod wallet;

pub use provider::{chain_id, connect_provider, connect_signing_provider};
pub use types::{BlockchainError, BlockchainResult, ChainId};
pub use wallet::{derive_signer, DerivationPolicy};
