//! # Token Identity
//!
//! Value objects identifying a token on a blockchain.
//!
//! A token can be referred to either by its on-chain contract address or by
//! its symbol. [`TokenId`] models that as a tagged union which the chain
//! adapter resolves to a canonical address before any on-chain use.

use crate::domain::errors::DomainError;
use crate::domain::value_objects::BlockchainAddress;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A token symbol such as `PAN`.
///
/// Symbols are stored upper-case and must be non-empty ASCII alphanumerics.
///
/// # Examples
///
/// ```
/// use pantos_client::domain::value_objects::TokenSymbol;
///
/// let symbol = TokenSymbol::new("pan").unwrap();
/// assert_eq!(symbol.as_str(), "PAN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSymbol(String);

impl TokenSymbol {
    /// Creates a new token symbol, normalizing to upper case.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTokenSymbol`] if the symbol is empty
    /// or contains non-alphanumeric characters.
    pub fn new(symbol: impl AsRef<str>) -> Result<Self, DomainError> {
        let symbol = symbol.as_ref();
        if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::InvalidTokenSymbol(symbol.to_string()));
        }
        Ok(Self(symbol.to_ascii_uppercase()))
    }

    /// The symbol of the network's native PAN token.
    #[must_use]
    pub fn pan() -> Self {
        Self("PAN".to_string())
    }

    /// Returns the symbol as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A token reference: either a contract address or a symbol.
///
/// Resolved to a concrete [`BlockchainAddress`] by the adapter of the chain
/// the token lives on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenId {
    /// The token's contract address on a specific chain.
    Address(BlockchainAddress),
    /// The token's symbol, to be resolved by the adapter.
    Symbol(TokenSymbol),
}

impl TokenId {
    /// The PAN token, referenced by symbol.
    #[must_use]
    pub fn pan() -> Self {
        Self::Symbol(TokenSymbol::pan())
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(address) => write!(f, "{address}"),
            Self::Symbol(symbol) => write!(f, "{symbol}"),
        }
    }
}

impl From<BlockchainAddress> for TokenId {
    fn from(address: BlockchainAddress) -> Self {
        Self::Address(address)
    }
}

impl From<TokenSymbol> for TokenId {
    fn from(symbol: TokenSymbol) -> Self {
        Self::Symbol(symbol)
    }
}
