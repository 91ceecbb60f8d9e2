//! Contract handle construction.
//!
//! # Responsibilities
//! - Build the access handle (signer or read-only provider) once per call
//! - Bind the portal and input contracts at a caller-supplied address
//! - Resolve and bind the DApp factory for the connected network

use std::path::Path;

use alloy::primitives::Address;
use alloy::providers::DynProvider;
use thiserror::Error;

use crate::blockchain::provider::chain_id;
use crate::blockchain::types::{BlockchainError, ChainId};
use crate::blockchain::wallet::{derive_signer, DerivationPolicy};
use crate::contracts::access::AccessHandle;
use crate::contracts::bindings::{
    CartesiDAppFactory::{self, CartesiDAppFactoryInstance},
    ERC20Portal::{self, ERC20PortalInstance},
    ERC721Portal::{self, ERC721PortalInstance},
    EtherPortal::{self, EtherPortalInstance},
    InputBox::{self, InputBoxInstance},
};
use crate::deployment::registry::DeploymentRegistry;
use crate::deployment::resolver::DeploymentResolver;
use crate::deployment::types::DeploymentError;

/// Errors from either connection path.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error(transparent)]
    Blockchain(#[from] BlockchainError),

    #[error(transparent)]
    Deployment(#[from] DeploymentError),
}

/// Result type for connection operations.
pub type ConnectResult<T> = Result<T, ConnectError>;

/// Input and portal contracts bound to one address and one access handle.
#[derive(Clone)]
pub struct RollupsContracts {
    pub input_box: InputBoxInstance<DynProvider>,
    pub ether_portal: EtherPortalInstance<DynProvider>,
    pub erc20_portal: ERC20PortalInstance<DynProvider>,
    pub erc721_portal: ERC721PortalInstance<DynProvider>,
    access: AccessHandle,
}

impl RollupsContracts {
    pub fn access(&self) -> &AccessHandle {
        &self.access
    }

    /// Signing identity shared by all four handles, if any.
    pub fn signer(&self) -> Option<Address> {
        self.access.signer()
    }
}

impl std::fmt::Debug for RollupsContracts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RollupsContracts")
            .field("input_box", self.input_box.address())
            .field("ether_portal", self.ether_portal.address())
            .field("erc20_portal", self.erc20_portal.address())
            .field("erc721_portal", self.erc721_portal.address())
            .field("access", &self.access)
            .finish()
    }
}

/// DApp factory bound to the network it was resolved for.
#[derive(Clone)]
pub struct DAppFactory {
    pub factory: CartesiDAppFactoryInstance<DynProvider>,
    chain_id: ChainId,
    access: AccessHandle,
}

impl DAppFactory {
    pub fn address(&self) -> Address {
        *self.factory.address()
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    pub fn access(&self) -> &AccessHandle {
        &self.access
    }

    pub fn signer(&self) -> Option<Address> {
        self.access.signer()
    }
}

impl std::fmt::Debug for DAppFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DAppFactory")
            .field("address", self.factory.address())
            .field("chain_id", &self.chain_id)
            .field("access", &self.access)
            .finish()
    }
}

/// Connect the input box and the three portals at `address`.
///
/// With a `mnemonic`, every handle signs with the phrase's default account;
/// without one, every handle is read-only.
pub fn connect_contracts(
    rpc_url: &str,
    address: Address,
    mnemonic: Option<&str>,
) -> ConnectResult<RollupsContracts> {
    let signer = derive_signer(mnemonic, DerivationPolicy::Default)?;
    let access = AccessHandle::resolve(rpc_url, signer)?;

    tracing::debug!(%address, access = ?access, "Connecting rollups contracts");

    Ok(RollupsContracts {
        input_box: access.bind(address, InputBox::new),
        ether_portal: access.bind(address, EtherPortal::new),
        erc20_portal: access.bind(address, ERC20Portal::new),
        erc721_portal: access.bind(address, ERC721Portal::new),
        access,
    })
}

/// Connect the DApp factory of the network served at `rpc_url`.
///
/// The signer, if any, is account `account_index` (default 0) of `mnemonic`.
/// The factory address comes from `deployment_path` on the local chain and
/// from `registry` everywhere else.
pub async fn connect_factory(
    rpc_url: &str,
    mnemonic: Option<&str>,
    account_index: Option<u32>,
    deployment_path: Option<&Path>,
    registry: &DeploymentRegistry,
) -> ConnectResult<DAppFactory> {
    let policy = DerivationPolicy::Account(account_index.unwrap_or(0));
    let signer = derive_signer(mnemonic, policy)?;
    let access = AccessHandle::resolve(rpc_url, signer)?;

    let chain_id = chain_id(access.provider()).await?;
    let address = DeploymentResolver::new(registry)
        .resolve_factory_address(chain_id.0, deployment_path)?;

    tracing::info!(
        chain_id = chain_id.0,
        factory = %address,
        signer = ?access.signer(),
        "DApp factory connected"
    );

    Ok(DAppFactory {
        factory: access.bind(address, CartesiDAppFactory::new),
        chain_id,
        access,
    })
}
