//! # Chain Adapter Contract
//!
//! The narrow seam between the orchestration core and the per-chain world.
//!
//! One [`ChainAdapter`] implementation exists per supported blockchain. It
//! owns everything chain-specific: signing, contract calls, token
//! resolution, and the translation of chain errors into the uniform
//! [`ChainError`](super::error::ChainError) surface. The orchestration
//! layer depends only on this trait, never on a concrete adapter.
//!
//! # Thread Safety
//!
//! Adapters are shared across concurrent in-flight operations as
//! `Arc<dyn ChainAdapter>` and must be internally immutable or
//! synchronized.

use crate::domain::entities::bid::ServiceNodeBid;
use crate::domain::value_objects::{
    Blockchain, BlockchainAddress, DeploymentTaskId, PrivateKey, TokenId, TokenSymbol, Timestamp,
    TransferTaskId,
};
use async_trait::async_trait;
use std::fmt;

/// Parameters of a token to be deployed, as handed to each target chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDeploymentSpec {
    /// Token name.
    pub name: String,
    /// Token symbol.
    pub symbol: TokenSymbol,
    /// Token decimal count.
    pub decimals: u32,
    /// Whether the token is pausable.
    pub pausable: bool,
    /// Whether the token is burnable.
    pub burnable: bool,
    /// Initial supply in the token's smallest subunit.
    pub supply: u64,
}

/// A signed transfer request addressed to a chosen service node.
#[derive(Debug, Clone)]
pub struct SubmitTransferRequest {
    /// The transfer's destination blockchain.
    pub destination_blockchain: Blockchain,
    /// The sender's unencrypted private key on the source chain.
    pub sender_private_key: PrivateKey,
    /// The recipient's address on the destination chain.
    pub recipient_address: BlockchainAddress,
    /// The token's contract address on the source chain.
    pub source_token_address: BlockchainAddress,
    /// The transferred amount in the token's smallest subunit.
    pub amount_subunit: u64,
    /// The chosen service node.
    pub service_node_address: BlockchainAddress,
    /// The chosen bid.
    pub bid: ServiceNodeBid,
    /// Deadline after which the service node must not execute the transfer.
    pub valid_until: Timestamp,
}

/// A deployment-fee payment to be submitted on the payment chain.
#[derive(Debug, Clone)]
pub struct DeploymentPaymentRequest {
    /// The payer's unencrypted private key on the payment chain.
    pub payer_private_key: PrivateKey,
    /// The aggregate fee in the payment token's smallest subunit.
    pub amount_subunit: u64,
    /// The deployment this payment covers.
    pub task_id: DeploymentTaskId,
}

/// A per-chain deployment request, tagged with the correlating task id.
#[derive(Debug, Clone)]
pub struct SubmitDeploymentRequest {
    /// The deployment this request belongs to.
    pub task_id: DeploymentTaskId,
    /// The token to deploy.
    pub token: TokenDeploymentSpec,
    /// The chain the deployment fee was paid on.
    pub payment_blockchain: Blockchain,
}

/// Per-blockchain collaborator for signing, submission, and queries.
///
/// The registry resolves a [`Blockchain`] value to exactly one adapter
/// instance; an unresolvable chain is a configuration error.
#[async_trait]
pub trait ChainAdapter: Send + Sync + fmt::Debug {
    /// The chain this adapter acts on.
    fn blockchain(&self) -> Blockchain;

    /// Decrypts a private key from password-encrypted keystore contents.
    async fn decrypt_private_key(&self, keystore: &str, password: &str)
        -> super::error::ChainResult<PrivateKey>;

    /// Derives the account address belonging to a private key.
    async fn derive_address(
        &self,
        key: &PrivateKey,
    ) -> super::error::ChainResult<BlockchainAddress>;

    /// Returns true if `address` is well-formed for this chain.
    async fn is_valid_address(
        &self,
        address: &BlockchainAddress,
    ) -> super::error::ChainResult<bool>;

    /// Resolves a token reference to its contract address on this chain.
    async fn resolve_token_address(
        &self,
        token: &TokenId,
    ) -> super::error::ChainResult<BlockchainAddress>;

    /// Returns the decimal count of a token contract.
    async fn token_decimals(&self, token: &BlockchainAddress) -> super::error::ChainResult<u32>;

    /// Returns an account's token balance in the token's smallest subunit.
    async fn token_balance(
        &self,
        account: &BlockchainAddress,
        token: &BlockchainAddress,
    ) -> super::error::ChainResult<u64>;

    /// Lists the service nodes registered for transfers from this chain to
    /// `destination`.
    async fn registered_service_nodes(
        &self,
        destination: Blockchain,
    ) -> super::error::ChainResult<Vec<BlockchainAddress>>;

    /// Returns the bids currently published by one service node for
    /// transfers from this chain to `destination`.
    ///
    /// Fees are reported in the PAN token's smallest subunit.
    async fn service_node_bids(
        &self,
        service_node: &BlockchainAddress,
        destination: Blockchain,
    ) -> super::error::ChainResult<Vec<ServiceNodeBid>>;

    /// Returns the fee for deploying a token on this chain, in the payment
    /// token's smallest subunit.
    async fn deployment_fee(&self) -> super::error::ChainResult<u64>;

    /// Signs and broadcasts the on-chain transfer-request transaction
    /// addressed to the chosen service node.
    ///
    /// Returns the task id issued for the transfer on success.
    async fn submit_transfer_request(
        &self,
        request: SubmitTransferRequest,
    ) -> super::error::ChainResult<TransferTaskId>;

    /// Signs and broadcasts the deployment-fee payment transaction.
    ///
    /// Returns the payment transaction hash.
    async fn submit_deployment_payment(
        &self,
        request: DeploymentPaymentRequest,
    ) -> super::error::ChainResult<String>;

    /// Submits a deployment request for this chain, tagged with the
    /// correlating task id.
    async fn submit_deployment_request(
        &self,
        request: SubmitDeploymentRequest,
    ) -> super::error::ChainResult<()>;
}
