//! # Transfer Tokens Use Case
//!
//! Orchestrates one cross-chain token transfer: resolve the token, resolve
//! the winning bid, and submit the signed transfer request to the chosen
//! service node via the source chain's adapter.
//!
//! Bid resolution is strictly ordered before submission, and neither step
//! is ever retried automatically: bids are economically time-sensitive,
//! and resubmitting a financial transaction risks double submission.
//! Completion tracking is the caller's responsibility via the returned
//! task handle.

use crate::application::error::{ClientError, ClientResult};
use crate::application::services::bid_selection::{BidCandidates, BidSelector};
use crate::application::use_cases::bounded;
use crate::application::use_cases::retrieve_bids::RetrieveBidsUseCase;
use crate::config::ClientConfig;
use crate::domain::entities::bid::BlockchainAddressBidPair;
use crate::domain::entities::task::ServiceNodeTaskInfo;
use crate::domain::value_objects::{
    Amount, Blockchain, BlockchainAddress, PrivateKey, Timestamp, TokenId,
};
use crate::infrastructure::chains::registry::ChainRegistry;
use crate::infrastructure::chains::traits::SubmitTransferRequest;
use std::sync::Arc;

/// Request data for a new token transfer.
#[derive(Debug, Clone)]
pub struct TransferTokensRequest {
    /// The transfer's source blockchain.
    pub source_blockchain: Blockchain,
    /// The transfer's destination blockchain.
    pub destination_blockchain: Blockchain,
    /// The sender's unencrypted private key on the source chain.
    pub sender_private_key: PrivateKey,
    /// The recipient's address on the destination chain.
    pub recipient_address: BlockchainAddress,
    /// The token to transfer, identified on the source chain.
    pub source_token_id: TokenId,
    /// The amount to transfer.
    pub token_amount: Amount,
    /// An explicitly chosen service node bid. If none, the cheapest
    /// registered bid is selected automatically.
    pub service_node_bid: Option<BlockchainAddressBidPair>,
    /// Overrides the configured "valid until" buffer for this transfer.
    pub valid_until_buffer_secs: Option<u64>,
}

/// Use case for orchestrating token transfers.
#[derive(Debug)]
pub struct TransferTokensUseCase {
    registry: Arc<ChainRegistry>,
    config: ClientConfig,
    selector: BidSelector,
}

impl TransferTokensUseCase {
    /// Creates the use case with its dependencies.
    #[must_use]
    pub fn new(registry: Arc<ChainRegistry>, config: ClientConfig, selector: BidSelector) -> Self {
        Self {
            registry,
            config,
            selector,
        }
    }

    /// Transfers tokens from a sender's account on the source blockchain
    /// to a recipient's account on the (possibly different) destination
    /// blockchain.
    ///
    /// The sender's balance is deliberately not pre-checked: an
    /// insufficient balance surfaces from the submission itself, which
    /// avoids a race between check and submission.
    ///
    /// # Errors
    ///
    /// - [`ClientError::ExpiredBid`] if the caller's bid override has
    ///   expired (no submission occurs)
    /// - [`ClientError::NoBidsAvailable`] if automatic selection finds no
    ///   selectable bid
    /// - [`ClientError::InvalidRequest`] if the recipient address fails
    ///   chain validation
    /// - [`ClientError::TransferSubmission`] for any adapter failure
    pub async fn execute(&self, request: TransferTokensRequest) -> ClientResult<ServiceNodeTaskInfo> {
        let timeout = self.config.request_timeout();
        let source_adapter = self
            .registry
            .get(request.source_blockchain)
            .map_err(ClientError::TransferSubmission)?;
        let destination_adapter = self
            .registry
            .get(request.destination_blockchain)
            .map_err(ClientError::TransferSubmission)?;

        // Resolve the token to a source-chain address and the amount to
        // the token's smallest subunit.
        let source_token_address = bounded(
            timeout,
            request.source_blockchain,
            "token resolution",
            source_adapter.resolve_token_address(&request.source_token_id),
        )
        .await
        .map_err(ClientError::TransferSubmission)?;
        let amount_subunit = match request.token_amount {
            Amount::Subunit(value) => value,
            Amount::MainUnit(_) => {
                let decimals = bounded(
                    timeout,
                    request.source_blockchain,
                    "token decimals query",
                    source_adapter.token_decimals(&source_token_address),
                )
                .await
                .map_err(ClientError::TransferSubmission)?;
                request.token_amount.to_subunit(decimals)?
            }
        };

        // Any failure of bid resolution is fatal to the transfer.
        let (service_node_address, bid) = self.resolve_bid(&request).await?.into_parts();
        tracing::debug!(
            source = %request.source_blockchain,
            destination = %request.destination_blockchain,
            service_node = %service_node_address,
            fee = %bid.fee(),
            "resolved service node bid"
        );

        let buffer_secs = request
            .valid_until_buffer_secs
            .unwrap_or(self.config.valid_until_buffer_secs);
        let valid_until = Timestamp::now()
            .add_secs(bid.execution_time_secs())
            .add_secs(buffer_secs);

        let recipient_valid = bounded(
            timeout,
            request.destination_blockchain,
            "recipient address validation",
            destination_adapter.is_valid_address(&request.recipient_address),
        )
        .await
        .map_err(ClientError::TransferSubmission)?;
        if !recipient_valid {
            return Err(ClientError::invalid_request(format!(
                "invalid recipient address: {}",
                request.recipient_address
            )));
        }

        // The source chain adapter signs and broadcasts the transfer
        // request addressed to the chosen service node.
        let task_id = bounded(
            timeout,
            request.source_blockchain,
            "transfer submission",
            source_adapter.submit_transfer_request(SubmitTransferRequest {
                destination_blockchain: request.destination_blockchain,
                sender_private_key: request.sender_private_key.clone(),
                recipient_address: request.recipient_address.clone(),
                source_token_address,
                amount_subunit,
                service_node_address: service_node_address.clone(),
                bid: bid.clone(),
                valid_until,
            }),
        )
        .await
        .map_err(ClientError::TransferSubmission)?;

        tracing::info!(
            %task_id,
            service_node = %service_node_address,
            "transfer request accepted"
        );
        Ok(ServiceNodeTaskInfo::new(service_node_address, bid, task_id))
    }

    /// Resolves the winning bid: caller override or automatic selection
    /// over freshly retrieved candidates with subunit fees.
    async fn resolve_bid(
        &self,
        request: &TransferTokensRequest,
    ) -> ClientResult<BlockchainAddressBidPair> {
        let candidates = if request.service_node_bid.is_some() {
            BidCandidates::new()
        } else {
            RetrieveBidsUseCase::new(Arc::clone(&self.registry), self.config.clone())
                .execute(
                    request.source_blockchain,
                    request.destination_blockchain,
                    false,
                )
                .await?
        };
        self.selector.select(
            request.source_blockchain,
            request.destination_blockchain,
            &candidates,
            request.service_node_bid.clone(),
            Timestamp::now(),
        )
    }
}
