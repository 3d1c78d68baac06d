//! # Chain Adapter Errors
//!
//! Uniform error surface for all chain adapters.
//!
//! Every adapter classifies its chain-specific failures into a
//! [`ChainError`] with a [`ChainErrorKind`], so the orchestration layer
//! can react to failure classes without knowing adapter internals.

use crate::domain::value_objects::Blockchain;
use thiserror::Error;

/// Classification of a chain adapter failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainErrorKind {
    /// No adapter is registered for the requested chain.
    Configuration,
    /// The chain or a service node could not be reached.
    Connection,
    /// The operation exceeded its timeout.
    Timeout,
    /// The keystore could not be decrypted (wrong password or malformed).
    InvalidKeystore,
    /// An address failed chain-specific validation.
    InvalidAddress,
    /// A token could not be resolved on the chain.
    UnknownToken,
    /// The account lacks funds for the operation.
    InsufficientFunds,
    /// An on-chain contract call reverted.
    ContractReverted,
    /// Any other adapter failure.
    Other,
}

impl ChainErrorKind {
    /// Returns a stable lower-case name for logging.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Connection => "connection",
            Self::Timeout => "timeout",
            Self::InvalidKeystore => "invalid_keystore",
            Self::InvalidAddress => "invalid_address",
            Self::UnknownToken => "unknown_token",
            Self::InsufficientFunds => "insufficient_funds",
            Self::ContractReverted => "contract_reverted",
            Self::Other => "other",
        }
    }
}

/// A failure reported by a chain adapter.
///
/// Carries the failing chain and a classification, wrapped by the
/// application layer into the caller-facing error taxonomy without leaking
/// adapter-specific types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{blockchain} adapter error ({}): {message}", kind.name())]
pub struct ChainError {
    /// The chain whose adapter failed.
    pub blockchain: Blockchain,
    /// Failure classification.
    pub kind: ChainErrorKind,
    /// Human-readable detail from the adapter.
    pub message: String,
}

impl ChainError {
    /// Creates a new chain error.
    #[must_use]
    pub fn new(blockchain: Blockchain, kind: ChainErrorKind, message: impl Into<String>) -> Self {
        Self {
            blockchain,
            kind,
            message: message.into(),
        }
    }

    /// Creates a configuration error for an unregistered chain.
    #[must_use]
    pub fn unregistered(blockchain: Blockchain) -> Self {
        Self::new(
            blockchain,
            ChainErrorKind::Configuration,
            "no adapter registered for this blockchain",
        )
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(blockchain: Blockchain, operation: &str) -> Self {
        Self::new(
            blockchain,
            ChainErrorKind::Timeout,
            format!("{operation} timed out"),
        )
    }
}

/// Result type for chain adapter operations.
pub type ChainResult<T> = Result<T, ChainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_chain_and_kind() {
        let err = ChainError::new(
            Blockchain::Fantom,
            ChainErrorKind::ContractReverted,
            "hub rejected the request",
        );
        let text = err.to_string();
        assert!(text.contains("FANTOM"));
        assert!(text.contains("contract_reverted"));
        assert!(text.contains("hub rejected"));
    }

    #[test]
    fn unregistered_is_a_configuration_error() {
        let err = ChainError::unregistered(Blockchain::Celo);
        assert_eq!(err.kind, ChainErrorKind::Configuration);
    }

    #[test]
    fn timeout_names_the_operation() {
        let err = ChainError::timeout(Blockchain::Ethereum, "bid query");
        assert_eq!(err.kind, ChainErrorKind::Timeout);
        assert!(err.message.contains("bid query"));
    }
}
