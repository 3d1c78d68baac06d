//! # Retrieve Balance Use Case
//!
//! Reads an account's token balance on one chain, optionally converted to
//! the token's main unit.
//!
//! The account may be given as an address or a private key; a key is
//! resolved to its address by the chain's adapter before the balance
//! query, so no downstream step sees the key form.

use crate::application::error::{ClientError, ClientResult};
use crate::application::use_cases::bounded;
use crate::config::ClientConfig;
use crate::domain::value_objects::{AccountId, Amount, Blockchain, BlockchainAddress, TokenId};
use crate::infrastructure::chains::registry::ChainRegistry;
use std::sync::Arc;

/// Request data for a token balance query.
#[derive(Debug, Clone)]
pub struct RetrieveBalanceRequest {
    /// The chain to query.
    pub blockchain: Blockchain,
    /// The account whose balance is queried.
    pub account_id: AccountId,
    /// The token whose balance is queried.
    pub token_id: TokenId,
    /// Report the balance in the token's main unit instead of its subunit.
    pub return_in_main_unit: bool,
}

impl RetrieveBalanceRequest {
    /// Creates a request for the PAN token's balance in its main unit,
    /// the most common query.
    #[must_use]
    pub fn new(blockchain: Blockchain, account_id: AccountId) -> Self {
        Self {
            blockchain,
            account_id,
            token_id: TokenId::pan(),
            return_in_main_unit: true,
        }
    }

    /// Queries a different token.
    #[must_use]
    pub fn with_token(mut self, token_id: TokenId) -> Self {
        self.token_id = token_id;
        self
    }

    /// Reports the balance in the token's smallest subunit.
    #[must_use]
    pub fn in_subunit(mut self) -> Self {
        self.return_in_main_unit = false;
        self
    }
}

/// Use case for reading token balances.
#[derive(Debug)]
pub struct RetrieveBalanceUseCase {
    registry: Arc<ChainRegistry>,
    config: ClientConfig,
}

impl RetrieveBalanceUseCase {
    /// Creates the use case with its dependencies.
    #[must_use]
    pub fn new(registry: Arc<ChainRegistry>, config: ClientConfig) -> Self {
        Self { registry, config }
    }

    /// Queries the balance, converting to the requested unit.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BalanceRetrieval`] if the chain is not
    /// registered or any adapter step fails, and
    /// [`ClientError::Domain`] if the unit conversion is invalid.
    pub async fn execute(&self, request: RetrieveBalanceRequest) -> ClientResult<Amount> {
        let adapter = self
            .registry
            .get(request.blockchain)
            .map_err(ClientError::BalanceRetrieval)?;
        let timeout = self.config.request_timeout();

        let account: BlockchainAddress = match &request.account_id {
            AccountId::Address(address) => address.clone(),
            AccountId::Key(key) => bounded(
                timeout,
                request.blockchain,
                "address derivation",
                adapter.derive_address(key),
            )
            .await
            .map_err(ClientError::BalanceRetrieval)?,
        };

        let token_address = bounded(
            timeout,
            request.blockchain,
            "token resolution",
            adapter.resolve_token_address(&request.token_id),
        )
        .await
        .map_err(ClientError::BalanceRetrieval)?;

        let balance_subunit = bounded(
            timeout,
            request.blockchain,
            "balance query",
            adapter.token_balance(&account, &token_address),
        )
        .await
        .map_err(ClientError::BalanceRetrieval)?;
        tracing::debug!(
            blockchain = %request.blockchain,
            %account,
            token = %token_address,
            balance_subunit,
            "token balance retrieved"
        );

        if !request.return_in_main_unit {
            return Ok(Amount::subunit(balance_subunit));
        }
        let decimals = bounded(
            timeout,
            request.blockchain,
            "decimals query",
            adapter.token_decimals(&token_address),
        )
        .await
        .map_err(ClientError::BalanceRetrieval)?;
        Ok(Amount::subunit(balance_subunit).in_unit(true, decimals)?)
    }
}
