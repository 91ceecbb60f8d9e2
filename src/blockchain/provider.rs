//! Network access provider.
//!
//! # Responsibilities
//! - Wrap a JSON-RPC endpoint URL into a provider handle
//! - Attach a signing identity when one is available
//! - Query the connected chain's id
//!
//! Construction never touches the network. An unreachable endpoint is only
//! reported by the first request made through the handle.

use alloy::network::EthereumWallet;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;

use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId};

fn parse_rpc_url(rpc_url: &str) -> BlockchainResult<url::Url> {
    rpc_url.parse().map_err(|e: url::ParseError| BlockchainError::InvalidRpcUrl {
        url: rpc_url.to_string(),
        reason: e.to_string(),
    })
}

/// Create a read-only HTTP provider for `rpc_url`.
///
/// The HTTP transport takes a parsed URL, so a malformed `rpc_url` is the one
/// failure reported here ([`BlockchainError::InvalidRpcUrl`]). The endpoint
/// itself is not contacted.
pub fn connect_provider(rpc_url: &str) -> BlockchainResult<DynProvider> {
    let url = parse_rpc_url(rpc_url)?;
    Ok(ProviderBuilder::new().connect_http(url).erased())
}

/// Create an HTTP provider for `rpc_url` that signs with `signer`.
pub fn connect_signing_provider(
    rpc_url: &str,
    signer: PrivateKeySigner,
) -> BlockchainResult<DynProvider> {
    let url = parse_rpc_url(rpc_url)?;
    let wallet = EthereumWallet::from(signer);
    Ok(ProviderBuilder::new().wallet(wallet).connect_http(url).erased())
}

/// Ask the node which chain it is serving.
pub async fn chain_id(provider: &DynProvider) -> BlockchainResult<ChainId> {
    let id = provider.get_chain_id().await?;
    tracing::debug!(chain_id = id, "Fetched network chain id");
    Ok(ChainId(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_does_not_dial() {
        // Nothing listens on port 1; construction must still succeed.
        assert!(connect_provider("http://127.0.0.1:1").is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let err = connect_provider("localhost without scheme").unwrap_err();
        assert!(matches!(err, BlockchainError::InvalidRpcUrl { .. }));
        assert!(err.to_string().contains("localhost without scheme"));
    }

    #[tokio::test]
    async fn test_chain_id_unreachable_is_rpc_error() {
        let provider = connect_provider("http://127.0.0.1:1").unwrap();
        let err = chain_id(&provider).await.unwrap_err();
        assert!(matches!(err, BlockchainError::Rpc(_)));
    }
}
