//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`Blockchain`]: closed set of supported chains, the registry key
//! - [`BlockchainAddress`]: chain-specific account or contract address
//! - [`PrivateKey`]: unencrypted signing key material, redacted and zeroized
//! - [`AccountId`]: an account given as an address or a private key
//! - [`TransferTaskId`], [`DeploymentTaskId`]: opaque correlation handles
//!
//! ## Token Types
//!
//! - [`TokenSymbol`], [`TokenId`]: a token by symbol or contract address
//! - [`Amount`]: a quantity tagged as subunit (integer) or main unit
//!   (decimal), converted only with the token's decimal count
//!
//! ## Time
//!
//! - [`Timestamp`]: unix-second instants for validity windows

pub mod address;
pub mod amount;
pub mod blockchain;
pub mod ids;
pub mod timestamp;
pub mod token;

pub use address::{AccountId, BlockchainAddress, PrivateKey};
pub use amount::{to_main_unit, to_subunit, Amount, MAX_TOKEN_DECIMALS};
pub use blockchain::{Blockchain, ParseBlockchainError};
pub use ids::{DeploymentTaskId, TransferTaskId};
pub use timestamp::Timestamp;
pub use token::{TokenId, TokenSymbol};
