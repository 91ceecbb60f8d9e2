//! Portal and input box connections.

use alloy::network::TransactionBuilder;
use alloy::primitives::{address, Address};
use alloy::providers::{DynProvider, Provider};
use alloy::rpc::types::TransactionRequest;
use rollups_connect::{connect_contracts, RollupsContracts};

mod common;

use common::{start_mock_node, MockNode, TEST_MNEMONIC};

const DAPP: Address = address!("0x70ac08179605AF2D9e75782b8DEcDD3c22aA4D0C");

/// Push a fully specified transaction through `provider` and report the
/// method the node received last: `eth_sendRawTransaction` when the provider
/// signed it, `eth_sendTransaction` when it did not.
async fn send_method(node: &MockNode, provider: &DynProvider) -> String {
    let tx = TransactionRequest::default()
        .with_to(DAPP)
        .with_nonce(0)
        .with_chain_id(31337)
        .with_gas_limit(100_000)
        .with_max_fee_per_gas(1_000_000_000)
        .with_max_priority_fee_per_gas(1);

    // The node rejects both send methods; only the request matters here.
    let _ = provider.send_transaction(tx).await;

    node.methods().last().cloned().unwrap_or_default()
}

async fn handle_methods(node: &MockNode, contracts: &RollupsContracts) -> Vec<String> {
    vec![
        send_method(node, contracts.input_box.provider()).await,
        send_method(node, contracts.ether_portal.provider()).await,
        send_method(node, contracts.erc20_portal.provider()).await,
        send_method(node, contracts.erc721_portal.provider()).await,
    ]
}

#[tokio::test]
async fn test_construction_does_not_touch_network() {
    let node = start_mock_node(31337).await;

    let contracts = connect_contracts(&node.url, DAPP, Some(TEST_MNEMONIC)).unwrap();

    assert_eq!(*contracts.erc721_portal.address(), DAPP);
    assert_eq!(node.requests(), 0);
}

#[tokio::test]
async fn test_every_handle_signs_with_mnemonic() {
    let node = start_mock_node(31337).await;

    let signing = connect_contracts(&node.url, DAPP, Some(TEST_MNEMONIC)).unwrap();
    assert_eq!(
        signing.signer(),
        Some(address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"))
    );

    for method in handle_methods(&node, &signing).await {
        assert_eq!(method, "eth_sendRawTransaction");
    }
}

#[tokio::test]
async fn test_every_handle_is_read_only_without_mnemonic() {
    let node = start_mock_node(31337).await;

    let read_only = connect_contracts(&node.url, DAPP, None).unwrap();
    assert!(read_only.access().is_read_only());

    for method in handle_methods(&node, &read_only).await {
        assert_eq!(method, "eth_sendTransaction");
    }
}

#[tokio::test]
async fn test_blank_mnemonic_is_read_only() {
    let node = start_mock_node(31337).await;

    let contracts = connect_contracts(&node.url, DAPP, Some("")).unwrap();
    assert!(contracts.signer().is_none());

    for method in handle_methods(&node, &contracts).await {
        assert_eq!(method, "eth_sendTransaction");
    }
}

#[tokio::test]
async fn test_all_handles_share_address() {
    let node = start_mock_node(31337).await;

    let contracts = connect_contracts(&node.url, DAPP, Some(TEST_MNEMONIC)).unwrap();
    for handle_address in [
        contracts.input_box.address(),
        contracts.ether_portal.address(),
        contracts.erc20_portal.address(),
        contracts.erc721_portal.address(),
    ] {
        assert_eq!(*handle_address, DAPP);
    }
}
