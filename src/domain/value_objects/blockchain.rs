//! # Blockchain Identifier
//!
//! Closed enumeration of the blockchains supported by the network.
//!
//! This module provides the [`Blockchain`] enum, the registry key used to
//! resolve a chain to its adapter. Adding support for a new chain means
//! adding a variant here and registering an adapter for it; orchestration
//! logic never branches on chain identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A supported blockchain network.
///
/// The set is closed: every variant maps to exactly one registered
/// [`ChainAdapter`](crate::infrastructure::chains::traits::ChainAdapter)
/// instance at process start.
///
/// # Examples
///
/// ```
/// use pantos_client::domain::value_objects::Blockchain;
///
/// let chain: Blockchain = "ETHEREUM".parse().unwrap();
/// assert_eq!(chain, Blockchain::Ethereum);
/// assert_eq!(chain.to_string(), "ETHEREUM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Blockchain {
    /// Avalanche C-Chain.
    Avalanche,
    /// BNB Smart Chain.
    BnbChain,
    /// Celo.
    Celo,
    /// Cronos.
    Cronos,
    /// Ethereum mainnet.
    Ethereum,
    /// Fantom Opera.
    Fantom,
    /// Polygon PoS.
    Polygon,
}

impl Blockchain {
    /// All supported blockchains.
    pub const ALL: [Self; 7] = [
        Self::Avalanche,
        Self::BnbChain,
        Self::Celo,
        Self::Cronos,
        Self::Ethereum,
        Self::Fantom,
        Self::Polygon,
    ];

    /// Returns the canonical upper-case name of the blockchain.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Avalanche => "AVALANCHE",
            Self::BnbChain => "BNB_CHAIN",
            Self::Celo => "CELO",
            Self::Cronos => "CRONOS",
            Self::Ethereum => "ETHEREUM",
            Self::Fantom => "FANTOM",
            Self::Polygon => "POLYGON",
        }
    }
}

impl fmt::Display for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown blockchain name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown blockchain: {0}")]
pub struct ParseBlockchainError(pub String);

impl FromStr for Blockchain {
    type Err = ParseBlockchainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AVALANCHE" => Ok(Self::Avalanche),
            "BNB_CHAIN" | "BNBCHAIN" => Ok(Self::BnbChain),
            "CELO" => Ok(Self::Celo),
            "CRONOS" => Ok(Self::Cronos),
            "ETHEREUM" => Ok(Self::Ethereum),
            "FANTOM" => Ok(Self::Fantom),
            "POLYGON" => Ok(Self::Polygon),
            _ => Err(ParseBlockchainError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips_through_from_str() {
        for chain in Blockchain::ALL {
            let parsed: Blockchain = chain.to_string().parse().unwrap();
            assert_eq!(parsed, chain);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!(
            "avalanche".parse::<Blockchain>().unwrap(),
            Blockchain::Avalanche
        );
        assert_eq!(
            "BnbChain".parse::<Blockchain>().unwrap(),
            Blockchain::BnbChain
        );
    }

    #[test]
    fn from_str_rejects_unknown_chain() {
        let err = "NEARPROTOCOL".parse::<Blockchain>().unwrap_err();
        assert!(err.to_string().contains("NEARPROTOCOL"));
    }

    #[test]
    fn serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&Blockchain::BnbChain).unwrap();
        assert_eq!(json, "\"BNB_CHAIN\"");
    }
}
