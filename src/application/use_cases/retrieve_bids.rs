//! # Retrieve Bids Use Case
//!
//! Aggregates the published bids of all registered service nodes for one
//! source/destination chain pair.
//!
//! Per-node queries run concurrently, each bounded by the configured
//! timeout, so overall latency tracks the slowest responsive node rather
//! than the sum of all of them. Unreachable nodes are omitted from the
//! result; only a total failure (or an unresolvable chain) is an error.

use crate::application::error::{ClientError, ClientResult};
use crate::application::services::bid_selection::BidCandidates;
use crate::application::use_cases::bounded;
use crate::config::ClientConfig;
use crate::domain::entities::bid::ServiceNodeBid;
use crate::domain::value_objects::{Blockchain, BlockchainAddress, Timestamp, TokenId};
use crate::infrastructure::chains::error::ChainError;
use crate::infrastructure::chains::registry::ChainRegistry;
use crate::infrastructure::chains::traits::ChainAdapter;
use std::sync::Arc;

/// Result of querying one service node for its bids.
#[derive(Debug)]
struct NodeBidsResult {
    service_node_address: BlockchainAddress,
    bids: Result<Vec<ServiceNodeBid>, ChainError>,
}

/// Use case for aggregating service node bids.
#[derive(Debug)]
pub struct RetrieveBidsUseCase {
    registry: Arc<ChainRegistry>,
    config: ClientConfig,
}

impl RetrieveBidsUseCase {
    /// Creates the use case with its dependencies.
    #[must_use]
    pub fn new(registry: Arc<ChainRegistry>, config: ClientConfig) -> Self {
        Self { registry, config }
    }

    /// Retrieves the current bids of every registered service node for
    /// transfers from `source_blockchain` to `destination_blockchain`.
    ///
    /// Bids whose validity window has already elapsed are discarded. Fees
    /// are returned in the PAN token's main unit if
    /// `return_fee_in_main_unit` is true, in its smallest subunit
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BidRetrieval`] if no adapter can be resolved
    /// for either chain, or if every node query fails. Partial success is
    /// not an error; unreachable nodes are simply omitted.
    pub async fn execute(
        &self,
        source_blockchain: Blockchain,
        destination_blockchain: Blockchain,
        return_fee_in_main_unit: bool,
    ) -> ClientResult<BidCandidates> {
        let adapter = self.registry.get(source_blockchain).map_err(|e| {
            ClientError::bid_retrieval_from("source blockchain is not supported", e)
        })?;
        // The destination adapter is not queried here, but an unresolvable
        // destination chain is a configuration error all the same.
        self.registry.get(destination_blockchain).map_err(|e| {
            ClientError::bid_retrieval_from("destination blockchain is not supported", e)
        })?;

        let service_nodes = bounded(
            self.config.request_timeout(),
            source_blockchain,
            "service node listing",
            adapter.registered_service_nodes(destination_blockchain),
        )
        .await
        .map_err(|e| ClientError::bid_retrieval_from("unable to list service nodes", e))?;

        if service_nodes.is_empty() {
            return Ok(BidCandidates::new());
        }

        let results = self
            .query_nodes(&adapter, destination_blockchain, service_nodes)
            .await;

        let now = Timestamp::now();
        let mut candidates = BidCandidates::new();
        let mut failures = 0usize;
        for result in results {
            match result.bids {
                Ok(bids) => {
                    let valid: Vec<ServiceNodeBid> = bids
                        .into_iter()
                        .filter(|bid| !bid.is_expired_at(now))
                        .collect();
                    candidates.insert(result.service_node_address, valid);
                }
                Err(error) => {
                    tracing::warn!(
                        service_node = %result.service_node_address,
                        %error,
                        "omitting unreachable service node from bid aggregation"
                    );
                    failures += 1;
                }
            }
        }

        if candidates.is_empty() && failures > 0 {
            return Err(ClientError::bid_retrieval(
                "all service node queries failed",
            ));
        }

        if return_fee_in_main_unit {
            let decimals = self.pan_decimals(&adapter, source_blockchain).await?;
            for bids in candidates.values_mut() {
                for bid in bids.iter_mut() {
                    *bid = bid.with_fee(bid.fee().in_unit(true, decimals)?);
                }
            }
        }

        Ok(candidates)
    }

    /// Queries every node's bids concurrently, one bounded task per node.
    async fn query_nodes(
        &self,
        adapter: &Arc<dyn ChainAdapter>,
        destination_blockchain: Blockchain,
        service_nodes: Vec<BlockchainAddress>,
    ) -> Vec<NodeBidsResult> {
        let timeout = self.config.request_timeout();
        let source_blockchain = adapter.blockchain();
        let mut handles = Vec::with_capacity(service_nodes.len());

        for service_node_address in service_nodes {
            let adapter = Arc::clone(adapter);
            let handle = tokio::spawn(async move {
                let bids = bounded(
                    timeout,
                    source_blockchain,
                    "service node bid query",
                    adapter.service_node_bids(&service_node_address, destination_blockchain),
                )
                .await;
                NodeBidsResult {
                    service_node_address,
                    bids,
                }
            });
            handles.push(handle);
        }

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok(result) => results.push(result),
                Err(error) => {
                    tracing::error!(%error, "bid query task panicked");
                }
            }
        }
        results
    }

    /// Looks up the PAN token's decimal count on the source chain.
    async fn pan_decimals(
        &self,
        adapter: &Arc<dyn ChainAdapter>,
        source_blockchain: Blockchain,
    ) -> ClientResult<u32> {
        let pan_address = bounded(
            self.config.request_timeout(),
            source_blockchain,
            "PAN token resolution",
            adapter.resolve_token_address(&TokenId::pan()),
        )
        .await
        .map_err(|e| ClientError::bid_retrieval_from("unable to resolve the PAN token", e))?;
        bounded(
            self.config.request_timeout(),
            source_blockchain,
            "PAN decimals query",
            adapter.token_decimals(&pan_address),
        )
        .await
        .map_err(|e| ClientError::bid_retrieval_from("unable to query PAN decimals", e))
    }
}
