//! # Bid Selection
//!
//! Strategies for choosing a winning service node bid.
//!
//! Selection has real financial consequences: choosing too high a fee or
//! an expired bid costs the user money or fails the transfer. The default
//! [`LowestFeeStrategy`] is fully deterministic, with a fixed tie-break
//! chain so repeated runs over the same candidates pick the same bid.

use crate::application::error::{ClientError, ClientResult};
use crate::domain::entities::bid::{BlockchainAddressBidPair, ServiceNodeBid};
use crate::domain::value_objects::{Amount, Blockchain, BlockchainAddress, Timestamp};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fmt;

/// Candidate bids grouped by service node address.
pub type BidCandidates = HashMap<BlockchainAddress, Vec<ServiceNodeBid>>;

/// Trait for bid selection strategies.
///
/// Implementations choose one bid out of the candidate set, or none if no
/// candidate is selectable at `now`. Expired candidates must never be
/// selected.
pub trait BidSelectionStrategy: Send + Sync + fmt::Debug {
    /// Selects a bid from the candidates, if any is selectable at `now`.
    fn select(&self, candidates: &BidCandidates, now: Timestamp)
        -> Option<BlockchainAddressBidPair>;

    /// Returns the name of this strategy.
    fn name(&self) -> &'static str;
}

/// Lowest-fee selection with a deterministic tie-break chain.
///
/// Among all unexpired bids of all nodes, picks the minimum fee; equal
/// fees are broken by the shorter estimated execution time, and a further
/// tie by the lexicographically smaller service node address.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowestFeeStrategy;

impl LowestFeeStrategy {
    /// Creates a new lowest-fee strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Numeric value of a fee for comparison.
///
/// Candidates of one selection always carry their fees in the same unit,
/// so comparing the raw numeric values is well-defined.
fn fee_value(fee: Amount) -> Decimal {
    match fee {
        Amount::Subunit(value) => Decimal::from(value),
        Amount::MainUnit(value) => value,
    }
}

impl BidSelectionStrategy for LowestFeeStrategy {
    fn select(
        &self,
        candidates: &BidCandidates,
        now: Timestamp,
    ) -> Option<BlockchainAddressBidPair> {
        candidates
            .iter()
            .flat_map(|(address, bids)| bids.iter().map(move |bid| (address, bid)))
            .filter(|(_, bid)| !bid.is_expired_at(now))
            .min_by(|(addr_a, bid_a), (addr_b, bid_b)| {
                fee_value(bid_a.fee())
                    .cmp(&fee_value(bid_b.fee()))
                    .then_with(|| bid_a.execution_time_secs().cmp(&bid_b.execution_time_secs()))
                    .then_with(|| addr_a.cmp(addr_b))
            })
            .map(|(address, bid)| BlockchainAddressBidPair::new(address.clone(), bid.clone()))
    }

    fn name(&self) -> &'static str {
        "LowestFee"
    }
}

/// Resolves the bid for a transfer: caller override or strategy choice.
#[derive(Debug)]
pub struct BidSelector {
    strategy: Box<dyn BidSelectionStrategy>,
}

impl Default for BidSelector {
    fn default() -> Self {
        Self::new(Box::new(LowestFeeStrategy::new()))
    }
}

impl BidSelector {
    /// Creates a selector with a custom strategy.
    #[must_use]
    pub fn new(strategy: Box<dyn BidSelectionStrategy>) -> Self {
        Self { strategy }
    }

    /// Selects the winning bid.
    ///
    /// An `override_bid` is used verbatim provided it is still within its
    /// validity window at `now`; no candidate comparison happens in that
    /// case.
    ///
    /// # Errors
    ///
    /// - [`ClientError::ExpiredBid`] if the override's validity window has
    ///   elapsed
    /// - [`ClientError::NoBidsAvailable`] if no override is given and the
    ///   selectable candidate set is empty
    pub fn select(
        &self,
        source_blockchain: Blockchain,
        destination_blockchain: Blockchain,
        candidates: &BidCandidates,
        override_bid: Option<BlockchainAddressBidPair>,
        now: Timestamp,
    ) -> ClientResult<BlockchainAddressBidPair> {
        if let Some(pair) = override_bid {
            if pair.bid().is_expired_at(now) {
                return Err(ClientError::expired_bid(
                    pair.service_node_address().clone(),
                    pair.bid().valid_until(),
                ));
            }
            return Ok(pair);
        }
        self.strategy.select(candidates, now).ok_or_else(|| {
            ClientError::no_bids(source_blockchain, destination_blockchain)
        })
    }
}
