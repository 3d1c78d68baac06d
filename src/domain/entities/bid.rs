//! # Service Node Bids
//!
//! A bid is a service node's offer to relay one cross-chain transfer for a
//! fee within a validity window. Bids are value objects: they are fetched,
//! filtered, and compared, never mutated.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Amount, Blockchain, BlockchainAddress, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An offer by a service node to relay a transfer between one chain pair.
///
/// The fee is non-negative by construction. An expired bid (validity
/// window elapsed) is never selectable.
///
/// # Examples
///
/// ```
/// use pantos_client::domain::entities::bid::ServiceNodeBid;
/// use pantos_client::domain::value_objects::{Amount, Blockchain, Timestamp};
///
/// let bid = ServiceNodeBid::new(
///     Blockchain::Ethereum,
///     Blockchain::Avalanche,
///     Amount::subunit(100),
///     600,
///     Timestamp::now().add_secs(300),
/// )
/// .unwrap();
/// assert!(!bid.is_expired_at(Timestamp::now()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceNodeBid {
    source_blockchain: Blockchain,
    destination_blockchain: Blockchain,
    fee: Amount,
    execution_time_secs: u64,
    valid_until: Timestamp,
}

impl ServiceNodeBid {
    /// Creates a new bid.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBid`] if the fee is negative.
    pub fn new(
        source_blockchain: Blockchain,
        destination_blockchain: Blockchain,
        fee: Amount,
        execution_time_secs: u64,
        valid_until: Timestamp,
    ) -> DomainResult<Self> {
        if let Amount::MainUnit(value) = fee {
            if value.is_sign_negative() {
                return Err(DomainError::InvalidBid(format!(
                    "bid fee must be non-negative: {value}"
                )));
            }
        }
        Ok(Self {
            source_blockchain,
            destination_blockchain,
            fee,
            execution_time_secs,
            valid_until,
        })
    }

    /// The transfer's source blockchain.
    #[inline]
    #[must_use]
    pub const fn source_blockchain(&self) -> Blockchain {
        self.source_blockchain
    }

    /// The transfer's destination blockchain.
    #[inline]
    #[must_use]
    pub const fn destination_blockchain(&self) -> Blockchain {
        self.destination_blockchain
    }

    /// The offered relay fee.
    #[inline]
    #[must_use]
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// The node's estimate of the transfer's execution time in seconds.
    #[inline]
    #[must_use]
    pub const fn execution_time_secs(&self) -> u64 {
        self.execution_time_secs
    }

    /// The end of the bid's validity window.
    #[inline]
    #[must_use]
    pub const fn valid_until(&self) -> Timestamp {
        self.valid_until
    }

    /// Returns true if the bid's validity window has elapsed at `at`.
    #[must_use]
    pub fn is_expired_at(&self, at: Timestamp) -> bool {
        self.valid_until.is_before(at)
    }

    /// Returns a copy of this bid with the fee re-tagged in another unit.
    #[must_use]
    pub fn with_fee(&self, fee: Amount) -> Self {
        Self {
            fee,
            ..self.clone()
        }
    }
}

impl fmt::Display for ServiceNodeBid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bid {} -> {} fee={} exec={}s valid_until={}",
            self.source_blockchain,
            self.destination_blockchain,
            self.fee,
            self.execution_time_secs,
            self.valid_until
        )
    }
}

/// A service node address paired with one of its bids.
///
/// Produced by bid aggregation and accepted back as an explicit caller
/// override when submitting a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockchainAddressBidPair {
    service_node_address: BlockchainAddress,
    bid: ServiceNodeBid,
}

impl BlockchainAddressBidPair {
    /// Pairs a service node address with one of its bids.
    #[must_use]
    pub const fn new(service_node_address: BlockchainAddress, bid: ServiceNodeBid) -> Self {
        Self {
            service_node_address,
            bid,
        }
    }

    /// The service node's address.
    #[inline]
    #[must_use]
    pub const fn service_node_address(&self) -> &BlockchainAddress {
        &self.service_node_address
    }

    /// The service node's bid.
    #[inline]
    #[must_use]
    pub const fn bid(&self) -> &ServiceNodeBid {
        &self.bid
    }

    /// Splits the pair into its parts.
    #[must_use]
    pub fn into_parts(self) -> (BlockchainAddress, ServiceNodeBid) {
        (self.service_node_address, self.bid)
    }
}

impl fmt::Display for BlockchainAddressBidPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.service_node_address, self.bid)
    }
}
