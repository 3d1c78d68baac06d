//! # Domain Errors
//!
//! Typed errors for domain-level validation.
//!
//! These errors are raised by value objects and entities and never carry
//! adapter-specific detail; infrastructure failures live in
//! [`ChainError`](crate::infrastructure::chains::error::ChainError).

use thiserror::Error;

/// Domain-level validation error.
///
/// # Examples
///
/// ```
/// use pantos_client::domain::errors::DomainError;
///
/// let error = DomainError::InvalidAmount("amount must be non-negative".to_string());
/// assert!(error.to_string().contains("non-negative"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// An amount could not be converted or is out of range.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A token symbol is malformed.
    #[error("invalid token symbol: {0}")]
    InvalidTokenSymbol(String),

    /// A bid is malformed.
    #[error("invalid bid: {0}")]
    InvalidBid(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_messages_carry_detail() {
        let err = DomainError::InvalidTokenSymbol("BTC/USD".to_string());
        assert!(err.to_string().contains("BTC/USD"));

        let err = DomainError::InvalidBid("fee missing".to_string());
        assert!(err.to_string().contains("fee missing"));
    }
}
