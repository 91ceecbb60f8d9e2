//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! deployment, wallet, contracts
//!     → tracing events (chain id, resolved addresses, signer address)
//!     → logging.rs subscriber (stdout, filtered by RUST_LOG)
//! ```
//!
//! Recovery phrases never appear in events.

pub mod logging;

pub use logging::init_logging;
