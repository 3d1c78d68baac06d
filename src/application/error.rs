//! # Client Errors
//!
//! The uniform error taxonomy surfaced to library callers.
//!
//! Local validation failures never reach a collaborator. Adapter failures
//! are wrapped with their originating [`ChainError`] as the source, so
//! callers can diagnose without depending on adapter-specific types. No
//! error is retried automatically anywhere in this library: financial
//! operations must not be silently resubmitted.

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Blockchain, BlockchainAddress, DeploymentTaskId, Timestamp};
use crate::infrastructure::chains::error::ChainError;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Per-chain failures of a deployment fan-out, alongside the still-valid
/// task identifier.
///
/// The payment is not rolled back on partial failure (it is not
/// chain-specific and not refundable by this library); the caller can
/// track the successful chains under the task id and retry the failed
/// ones out-of-band.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct PartialDeploymentError {
    /// The deployment's correlating task id.
    pub task_id: DeploymentTaskId,
    /// The failed chains and their causes.
    pub failures: BTreeMap<Blockchain, ChainError>,
}

impl PartialDeploymentError {
    /// Creates a partial deployment error.
    #[must_use]
    pub fn new(task_id: DeploymentTaskId, failures: BTreeMap<Blockchain, ChainError>) -> Self {
        Self { task_id, failures }
    }

    /// The chains whose deployment submission failed, in order.
    #[must_use]
    pub fn failed_blockchains(&self) -> Vec<Blockchain> {
        self.failures.keys().copied().collect()
    }
}

impl fmt::Display for PartialDeploymentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "deployment {} failed on {} chain(s): ",
            self.task_id,
            self.failures.len()
        )?;
        let mut first = true;
        for (blockchain, cause) in &self.failures {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{blockchain}: {cause}")?;
            first = false;
        }
        Ok(())
    }
}

/// Error surfaced by the client library's public operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Malformed input caught by local validation; no collaborator was
    /// invoked.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Service node bids could not be retrieved.
    #[error("bid retrieval failed: {message}")]
    BidRetrieval {
        /// What went wrong.
        message: String,
        /// The originating adapter error, if one exists.
        #[source]
        source: Option<ChainError>,
    },

    /// No selectable bid exists for the requested chain pair.
    #[error("no service node bids available for {source_blockchain} -> {destination_blockchain}")]
    NoBidsAvailable {
        /// The transfer's source blockchain.
        source_blockchain: Blockchain,
        /// The transfer's destination blockchain.
        destination_blockchain: Blockchain,
    },

    /// An explicitly chosen bid is past its validity window.
    #[error("bid of service node {service_node_address} expired at {valid_until}")]
    ExpiredBid {
        /// The overriding bid's service node.
        service_node_address: BlockchainAddress,
        /// The elapsed validity deadline.
        valid_until: Timestamp,
    },

    /// A private key could not be decrypted from its keystore.
    #[error("key decryption failed")]
    KeyDecryption(#[source] ChainError),

    /// A token balance could not be retrieved.
    #[error("balance retrieval failed")]
    BalanceRetrieval(#[source] ChainError),

    /// A transfer submission was rejected or could not be delivered.
    #[error("transfer submission failed")]
    TransferSubmission(#[source] ChainError),

    /// The deployment-fee payment failed; no deployment request was sent.
    #[error("deployment payment submission failed")]
    PaymentSubmission(#[source] ChainError),

    /// Some per-chain deployment submissions failed.
    #[error(transparent)]
    PartialDeployment(#[from] PartialDeploymentError),

    /// Domain-level validation failure.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ClientError {
    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Creates a bid retrieval error without an adapter source.
    #[must_use]
    pub fn bid_retrieval(message: impl Into<String>) -> Self {
        Self::BidRetrieval {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a bid retrieval error wrapping an adapter failure.
    #[must_use]
    pub fn bid_retrieval_from(message: impl Into<String>, source: ChainError) -> Self {
        Self::BidRetrieval {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Creates a no-bids-available error for a chain pair.
    #[must_use]
    pub const fn no_bids(
        source_blockchain: Blockchain,
        destination_blockchain: Blockchain,
    ) -> Self {
        Self::NoBidsAvailable {
            source_blockchain,
            destination_blockchain,
        }
    }

    /// Creates an expired bid error.
    #[must_use]
    pub const fn expired_bid(
        service_node_address: BlockchainAddress,
        valid_until: Timestamp,
    ) -> Self {
        Self::ExpiredBid {
            service_node_address,
            valid_until,
        }
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
