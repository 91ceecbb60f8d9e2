//! Signer-or-provider access handle.
//!
//! Computed once per connection call and shared by every contract handle the
//! call returns, so one call never mixes signing and read-only handles.

use alloy::primitives::Address;
use alloy::providers::DynProvider;
use alloy::signers::local::PrivateKeySigner;

use crate::blockchain::provider::{connect_provider, connect_signing_provider};
use crate::blockchain::types::BlockchainResult;

/// How contract handles reach the network.
#[derive(Clone)]
pub enum AccessHandle {
    /// Queries only.
    ReadOnly(DynProvider),
    /// Provider with a wallet attached; transactions are signed by `signer`.
    Signing { provider: DynProvider, signer: Address },
}

impl AccessHandle {
    /// Pick the signer when one was derived, the plain provider otherwise.
    pub fn resolve(rpc_url: &str, signer: Option<PrivateKeySigner>) -> BlockchainResult<Self> {
        match signer {
            Some(signer) => {
                let address = signer.address();
                let provider = connect_signing_provider(rpc_url, signer)?;
                Ok(AccessHandle::Signing { provider, signer: address })
            }
            None => Ok(AccessHandle::ReadOnly(connect_provider(rpc_url)?)),
        }
    }

    pub fn provider(&self) -> &DynProvider {
        match self {
            AccessHandle::ReadOnly(provider) => provider,
            AccessHandle::Signing { provider, .. } => provider,
        }
    }

    /// Build a contract handle at `address` on this access handle's provider.
    ///
    /// Every handle returned from one connection call goes through here.
    pub fn bind<C>(&self, address: Address, new: impl FnOnce(Address, DynProvider) -> C) -> C {
        new(address, self.provider().clone())
    }

    /// Address of the signing identity, `None` in read-only mode.
    pub fn signer(&self) -> Option<Address> {
        match self {
            AccessHandle::ReadOnly(_) => None,
            AccessHandle::Signing { signer, .. } => Some(*signer),
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, AccessHandle::ReadOnly(_))
    }
}

impl std::fmt::Debug for AccessHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessHandle::ReadOnly(_) => f.write_str("ReadOnly"),
            AccessHandle::Signing { signer, .. } => {
                f.debug_struct("Signing").field("signer", signer).finish()
            }
        }
    }
}
