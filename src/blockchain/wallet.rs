//! Signing identities derived from a recovery phrase.
//!
//! # Security
//! - The phrase is read from the environment, never from config files
//! - Phrases are never logged; only the derived address is

use alloy::signers::local::coins_bip39::English;
use alloy::signers::local::{MnemonicBuilder, PrivateKeySigner};

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Environment variable holding the recovery phrase.
pub const MNEMONIC_ENV_VAR: &str = "ROLLUPS_MNEMONIC";

/// Which account of a phrase to derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DerivationPolicy {
    /// The phrase's default account. No derivation path override.
    #[default]
    Default,
    /// Account `n` on the path `m/44'/60'/0'/0/{n}`.
    Account(u32),
}

/// Render the BIP-44 Ethereum path for account `index`.
pub fn account_path(index: u32) -> String {
    format!("m/44'/60'/0'/0/{}", index)
}

/// Derive a signer from `mnemonic`.
///
/// Returns `Ok(None)` when no phrase is given, or the phrase is blank, which
/// puts the caller in read-only mode.
pub fn derive_signer(
    mnemonic: Option<&str>,
    policy: DerivationPolicy,
) -> BlockchainResult<Option<PrivateKeySigner>> {
    let Some(phrase) = mnemonic.map(str::trim).filter(|phrase| !phrase.is_empty()) else {
        return Ok(None);
    };

    let mut builder = MnemonicBuilder::<English>::default().phrase(phrase);
    if let DerivationPolicy::Account(index) = policy {
        builder = builder
            .derivation_path(account_path(index))
            .map_err(|e| BlockchainError::Wallet(format!("Invalid derivation path: {}", e)))?;
    }

    let signer = builder
        .build()
        .map_err(|e| BlockchainError::Wallet(format!("Invalid mnemonic: {}", e)))?;

    tracing::info!(address = %signer.address(), ?policy, "Signer derived");

    Ok(Some(signer))
}

/// Read the recovery phrase from `ROLLUPS_MNEMONIC`, if set and non-empty.
pub fn mnemonic_from_env() -> Option<String> {
    std::env::var(MNEMONIC_ENV_VAR)
        .ok()
        .filter(|phrase| !phrase.trim().is_empty())
}
