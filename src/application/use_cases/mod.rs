//! # Use Cases
//!
//! One module per public operation:
//!
//! - [`retrieve_bids`]: aggregate service node bids for a chain pair
//! - [`retrieve_balance`]: query a token balance
//! - [`transfer_tokens`]: orchestrate a cross-chain token transfer
//! - [`deploy_token`]: fan a token deployment out across chains

pub mod deploy_token;
pub mod retrieve_balance;
pub mod retrieve_bids;
pub mod transfer_tokens;

pub use deploy_token::{DeployTokenUseCase, TokenDeploymentOutcome, TokenDeploymentRequest};
pub use retrieve_balance::{RetrieveBalanceRequest, RetrieveBalanceUseCase};
pub use retrieve_bids::RetrieveBidsUseCase;
pub use transfer_tokens::{TransferTokensRequest, TransferTokensUseCase};

use crate::domain::value_objects::Blockchain;
use crate::infrastructure::chains::error::{ChainError, ChainResult};
use std::future::Future;
use std::time::Duration;

/// Bounds one network-bound adapter call by the configured timeout.
///
/// A call exceeding the timeout yields a
/// [`ChainErrorKind::Timeout`](crate::infrastructure::chains::error::ChainErrorKind::Timeout)
/// error attributed to `blockchain`.
pub(crate) async fn bounded<T, F>(
    timeout: Duration,
    blockchain: Blockchain,
    operation: &str,
    call: F,
) -> ChainResult<T>
where
    F: Future<Output = ChainResult<T>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(ChainError::timeout(blockchain, operation)),
    }
}
