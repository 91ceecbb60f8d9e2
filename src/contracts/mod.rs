//! Rollups contract handles.
//!
//! # Data Flow
//! ```text
//! connect_contracts(rpc_url, address, mnemonic?)
//!     → wallet (default account) → access.rs → 4 handles at `address`
//!
//! connect_factory(rpc_url, mnemonic?, account_index?, deployment_path?, registry)
//!     → wallet (account path) → access.rs
//!     → eth_chainId → deployment resolver → factory handle
//! ```
//!
//! # Design Decisions
//! - One access handle per call, shared by every handle it returns
//! - Nothing is cached; each call builds fresh providers and handles

pub mod access;
pub mod bindings;
pub mod connect;

pub use access::AccessHandle;
pub use connect::{
    connect_contracts, connect_factory, ConnectError, ConnectResult, DAppFactory,
    RollupsContracts,
};
