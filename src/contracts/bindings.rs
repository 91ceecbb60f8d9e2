//! Typed rollups contract interfaces.

use alloy::sol;

sol! {
    /// Entry point for DApp inputs.
    #[sol(rpc)]
    #[derive(Debug)]
    interface InputBox {
        event InputAdded(address indexed dapp, uint256 indexed inboxInputIndex, address sender, bytes input);

        function addInput(address _dapp, bytes calldata _input) external returns (bytes32);
        function getNumberOfInputs(address _dapp) external view returns (uint256);
        function getInputHash(address _dapp, uint256 _index) external view returns (bytes32);
    }

    /// Ether deposits into a DApp.
    #[sol(rpc)]
    #[derive(Debug)]
    interface EtherPortal {
        function getInputBox() external view returns (address);
        function depositEther(address _dapp, bytes calldata _execLayerData) external payable;
    }

    /// ERC-20 token deposits into a DApp.
    #[sol(rpc)]
    #[derive(Debug)]
    interface ERC20Portal {
        function getInputBox() external view returns (address);
        function depositERC20Tokens(address _token, address _dapp, uint256 _amount, bytes calldata _execLayerData) external;
    }

    /// ERC-721 token deposits into a DApp.
    #[sol(rpc)]
    #[derive(Debug)]
    interface ERC721Portal {
        function getInputBox() external view returns (address);
        function depositERC721Token(address _token, address _dapp, uint256 _tokenId, bytes calldata _baseLayerData, bytes calldata _execLayerData) external;
    }

    /// Deploys new DApp instances.
    #[sol(rpc)]
    #[derive(Debug)]
    interface CartesiDAppFactory {
        event ApplicationCreated(address indexed consensus, address dappOwner, bytes32 templateHash, address application);

        function newApplication(address _consensus, address _dappOwner, bytes32 _templateHash) external returns (address);
        function calculateApplicationAddress(address _consensus, address _dappOwner, bytes32 _templateHash, bytes32 _salt) external view returns (address);
    }
}
