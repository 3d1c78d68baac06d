//! # Pantos Client
//!
//! Client-side orchestration library for a cross-chain token-transfer
//! network: aggregate and select among service node bids, submit
//! cross-chain token transfers, query balances, and coordinate multi-chain
//! token deployments with a single fee payment.
//!
//! ## Architecture
//!
//! This crate follows Domain-Driven Design with a layered architecture:
//!
//! - **Domain Layer** (`domain`): Value objects, entities, and domain errors
//! - **Application Layer** (`application`): Use cases, bid selection, and the error taxonomy
//! - **Infrastructure Layer** (`infrastructure`): The chain adapter contract and registry
//!
//! All chain-specific behavior (signing, contract calls, keystore
//! decryption) lives behind the [`ChainAdapter`] trait; hosts register one
//! adapter per supported blockchain and hand the registry to a
//! [`PantosClient`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use pantos_client::{Blockchain, ClientConfig, PantosClient};
//!
//! let client = PantosClient::new(registry, ClientConfig::from_env()?);
//! let bids = client
//!     .retrieve_service_node_bids(Blockchain::Ethereum, Blockchain::Avalanche, true)
//!     .await?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::error::{ClientError, ClientResult, PartialDeploymentError};
pub use application::services::bid_selection::{
    BidCandidates, BidSelectionStrategy, BidSelector, LowestFeeStrategy,
};
pub use application::use_cases::{
    RetrieveBalanceRequest, TokenDeploymentOutcome, TokenDeploymentRequest, TransferTokensRequest,
};
pub use client::PantosClient;
pub use config::ClientConfig;
pub use domain::entities::{BlockchainAddressBidPair, ServiceNodeBid, ServiceNodeTaskInfo};
pub use domain::value_objects::{
    AccountId, Amount, Blockchain, BlockchainAddress, DeploymentTaskId, PrivateKey, Timestamp,
    TokenId, TokenSymbol, TransferTaskId,
};
pub use infrastructure::chains::traits::ChainAdapter;
