//! # Pantos Client
//!
//! The library's public entry point: one explicitly constructed context
//! object bundling the chain adapter registry, the configuration, and the
//! bid selection policy.
//!
//! A [`PantosClient`] is built once by the host and shared freely; every
//! operation is an async method taking `&self`, so any number of transfers,
//! queries, and deployments may be in flight concurrently.
//!
//! # Examples
//!
//! ```ignore
//! use pantos_client::{ClientConfig, PantosClient};
//! use pantos_client::infrastructure::chains::registry::ChainRegistry;
//!
//! let registry = ChainRegistry::builder()
//!     .with_adapter(ethereum_adapter)
//!     .with_adapter(avalanche_adapter)
//!     .build();
//! let client = PantosClient::new(Arc::new(registry), ClientConfig::default());
//! let bids = client
//!     .retrieve_service_node_bids(Blockchain::Ethereum, Blockchain::Avalanche, true)
//!     .await?;
//! ```

use crate::application::error::{ClientError, ClientResult};
use crate::application::services::bid_selection::{BidCandidates, BidSelector};
use crate::application::use_cases::{
    bounded, DeployTokenUseCase, RetrieveBalanceRequest, RetrieveBalanceUseCase,
    RetrieveBidsUseCase, TokenDeploymentOutcome, TokenDeploymentRequest, TransferTokensRequest,
    TransferTokensUseCase,
};
use crate::config::ClientConfig;
use crate::domain::entities::task::ServiceNodeTaskInfo;
use crate::domain::value_objects::{Amount, Blockchain, PrivateKey};
use crate::infrastructure::chains::registry::ChainRegistry;
use std::sync::Arc;

/// Client context for the cross-chain token-transfer network.
#[derive(Debug)]
pub struct PantosClient {
    registry: Arc<ChainRegistry>,
    config: ClientConfig,
    retrieve_bids: RetrieveBidsUseCase,
    retrieve_balance: RetrieveBalanceUseCase,
    transfer_tokens: TransferTokensUseCase,
    deploy_token: DeployTokenUseCase,
}

impl PantosClient {
    /// Creates a client with the default lowest-fee bid selection policy.
    #[must_use]
    pub fn new(registry: Arc<ChainRegistry>, config: ClientConfig) -> Self {
        Self::with_strategy(registry, config, BidSelector::default())
    }

    /// Creates a client with a custom bid selection policy.
    #[must_use]
    pub fn with_strategy(
        registry: Arc<ChainRegistry>,
        config: ClientConfig,
        selector: BidSelector,
    ) -> Self {
        Self {
            retrieve_bids: RetrieveBidsUseCase::new(Arc::clone(&registry), config.clone()),
            retrieve_balance: RetrieveBalanceUseCase::new(Arc::clone(&registry), config.clone()),
            transfer_tokens: TransferTokensUseCase::new(
                Arc::clone(&registry),
                config.clone(),
                selector,
            ),
            deploy_token: DeployTokenUseCase::new(Arc::clone(&registry), config.clone()),
            registry,
            config,
        }
    }

    /// The chains this client can act on.
    #[must_use]
    pub fn registered_blockchains(&self) -> Vec<Blockchain> {
        self.registry.registered_blockchains()
    }

    /// Decrypts a private key from password-encrypted keystore contents via
    /// the chain's adapter.
    ///
    /// The decrypted key lives only in the returned value and is zeroized
    /// when dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::KeyDecryption`] if the chain has no adapter
    /// or the keystore cannot be decrypted.
    pub async fn decrypt_private_key(
        &self,
        blockchain: Blockchain,
        keystore: &str,
        password: &str,
    ) -> ClientResult<PrivateKey> {
        let adapter = self
            .registry
            .get(blockchain)
            .map_err(ClientError::KeyDecryption)?;
        bounded(
            self.config.request_timeout(),
            blockchain,
            "key decryption",
            adapter.decrypt_private_key(keystore, password),
        )
        .await
        .map_err(ClientError::KeyDecryption)
    }

    /// Retrieves the current bids of every registered service node for
    /// transfers between the given chains.
    ///
    /// See [`RetrieveBidsUseCase::execute`] for semantics and errors.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BidRetrieval`] on an unresolvable chain or a
    /// total query failure.
    pub async fn retrieve_service_node_bids(
        &self,
        source_blockchain: Blockchain,
        destination_blockchain: Blockchain,
        return_fee_in_main_unit: bool,
    ) -> ClientResult<BidCandidates> {
        self.retrieve_bids
            .execute(
                source_blockchain,
                destination_blockchain,
                return_fee_in_main_unit,
            )
            .await
    }

    /// Retrieves an account's token balance.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BalanceRetrieval`] if the chain has no
    /// adapter or any adapter step fails.
    pub async fn retrieve_token_balance(
        &self,
        request: RetrieveBalanceRequest,
    ) -> ClientResult<Amount> {
        self.retrieve_balance.execute(request).await
    }

    /// Transfers tokens from a sender on the source chain to a recipient on
    /// the destination chain, via the selected service node.
    ///
    /// # Errors
    ///
    /// See [`TransferTokensUseCase::execute`].
    pub async fn transfer_tokens(
        &self,
        request: TransferTokensRequest,
    ) -> ClientResult<ServiceNodeTaskInfo> {
        self.transfer_tokens.execute(request).await
    }

    /// Deploys a token on several chains, paying the aggregate deployment
    /// fee on one chain.
    ///
    /// # Errors
    ///
    /// See [`DeployTokenUseCase::execute`]; per-chain submission failures
    /// after a successful payment are embedded in the returned outcome, not
    /// raised.
    pub async fn deploy_token(
        &self,
        request: TokenDeploymentRequest,
    ) -> ClientResult<TokenDeploymentOutcome> {
        self.deploy_token.execute(request).await
    }
}
