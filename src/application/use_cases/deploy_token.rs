//! # Deploy Token Use Case
//!
//! Coordinates deployment of a token contract across several blockchains
//! while settling the fee with a single payment on one designated chain.
//!
//! The protocol is strictly linear: validate, generate the correlating
//! task id, pay once, then fan deployment requests out to every target
//! chain concurrently. The payment always precedes the first deployment
//! submission, and a failed payment aborts the whole operation with zero
//! submissions issued. Per-chain submission failures after a successful
//! payment never roll the payment back; they are aggregated and reported
//! alongside the still-valid task id.

use crate::application::error::{ClientError, ClientResult, PartialDeploymentError};
use crate::application::use_cases::bounded;
use crate::config::ClientConfig;
use crate::domain::value_objects::{
    Blockchain, DeploymentTaskId, PrivateKey, TokenSymbol, MAX_TOKEN_DECIMALS,
};
use crate::infrastructure::chains::error::ChainError;
use crate::infrastructure::chains::registry::ChainRegistry;
use crate::infrastructure::chains::traits::{
    ChainAdapter, DeploymentPaymentRequest, SubmitDeploymentRequest, TokenDeploymentSpec,
};
use futures::future;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Request data for a new multi-chain token deployment.
#[derive(Debug, Clone)]
pub struct TokenDeploymentRequest {
    /// Token name.
    pub token_name: String,
    /// Token symbol.
    pub token_symbol: TokenSymbol,
    /// Token decimal count.
    pub token_decimals: u32,
    /// Whether the token is pausable.
    pub token_pausable: bool,
    /// Whether the token is burnable.
    pub token_burnable: bool,
    /// Initial supply in the token's smallest subunit.
    pub token_supply: u64,
    /// The chains to deploy the token on. Must be non-empty and free of
    /// duplicates.
    pub deployment_blockchains: Vec<Blockchain>,
    /// The chain the aggregate deployment fee is paid on. May or may not
    /// be a member of the deployment list.
    pub payment_blockchain: Blockchain,
    /// The payer's unencrypted private key on the payment chain.
    pub payer_private_key: PrivateKey,
}

/// Outcome of a token deployment request.
///
/// The task id is valid on full *and* partial fan-out success: chains
/// that were successfully requested can be tracked under it, and failed
/// chains can be retried out-of-band by the caller.
#[derive(Debug, Clone)]
pub struct TokenDeploymentOutcome {
    task_id: DeploymentTaskId,
    partial_failure: Option<PartialDeploymentError>,
}

impl TokenDeploymentOutcome {
    /// The deployment's correlating task id.
    #[inline]
    #[must_use]
    pub const fn task_id(&self) -> DeploymentTaskId {
        self.task_id
    }

    /// The per-chain failures, if any submission failed.
    #[inline]
    #[must_use]
    pub const fn partial_failure(&self) -> Option<&PartialDeploymentError> {
        self.partial_failure.as_ref()
    }

    /// Returns true if every per-chain submission was sent successfully.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.partial_failure.is_none()
    }

    /// Converts the outcome into a result, treating partial failure as an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::PartialDeployment`] if any per-chain
    /// submission failed.
    pub fn into_result(self) -> ClientResult<DeploymentTaskId> {
        match self.partial_failure {
            None => Ok(self.task_id),
            Some(failure) => Err(ClientError::PartialDeployment(failure)),
        }
    }
}

/// Use case for coordinating multi-chain token deployments.
#[derive(Debug)]
pub struct DeployTokenUseCase {
    registry: Arc<ChainRegistry>,
    config: ClientConfig,
}

impl DeployTokenUseCase {
    /// Creates the use case with its dependencies.
    #[must_use]
    pub fn new(registry: Arc<ChainRegistry>, config: ClientConfig) -> Self {
        Self { registry, config }
    }

    /// Deploys a token on all requested chains, paying the aggregate fee
    /// on the payment chain.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidRequest`] for local validation failures and
    ///   unregistered chains; no collaborator is invoked
    /// - [`ClientError::PaymentSubmission`] if the fee aggregation or the
    ///   payment itself fails; no deployment request has been sent
    pub async fn execute(
        &self,
        request: TokenDeploymentRequest,
    ) -> ClientResult<TokenDeploymentOutcome> {
        // Local validation; nothing observable happens on failure.
        self.validate(&request)?;
        let payment_adapter = self
            .registry
            .get(request.payment_blockchain)
            .map_err(|e| ClientError::invalid_request(e.to_string()))?;
        let target_adapters: Vec<Arc<dyn ChainAdapter>> = request
            .deployment_blockchains
            .iter()
            .map(|&blockchain| {
                self.registry
                    .get(blockchain)
                    .map_err(|e| ClientError::invalid_request(e.to_string()))
            })
            .collect::<ClientResult<_>>()?;

        // One correlating task id for the whole deployment.
        let task_id = DeploymentTaskId::new_v4();

        // One payment sized to the aggregate fee, strictly before any
        // deployment submission.
        let aggregate_fee = self.aggregate_fee(&target_adapters).await?;
        bounded(
            self.config.request_timeout(),
            request.payment_blockchain,
            "deployment payment",
            payment_adapter.submit_deployment_payment(DeploymentPaymentRequest {
                payer_private_key: request.payer_private_key.clone(),
                amount_subunit: aggregate_fee,
                task_id,
            }),
        )
        .await
        .map_err(ClientError::PaymentSubmission)?;
        tracing::info!(
            %task_id,
            payment_blockchain = %request.payment_blockchain,
            fee_subunit = aggregate_fee,
            "deployment payment submitted"
        );

        // Independent per-chain submissions, in any order.
        let failures = self.fan_out(&request, task_id, target_adapters).await;

        // Partial failure keeps the task id and reports the failed chains;
        // the payment is not rolled back.
        let partial_failure = if failures.is_empty() {
            None
        } else {
            tracing::warn!(
                %task_id,
                failed = failures.len(),
                "deployment fan-out partially failed"
            );
            Some(PartialDeploymentError::new(task_id, failures))
        };
        Ok(TokenDeploymentOutcome {
            task_id,
            partial_failure,
        })
    }

    fn validate(&self, request: &TokenDeploymentRequest) -> ClientResult<()> {
        if request.deployment_blockchains.is_empty() {
            return Err(ClientError::invalid_request(
                "deployment blockchains must not be empty",
            ));
        }
        let mut seen = std::collections::HashSet::new();
        for &blockchain in &request.deployment_blockchains {
            if !seen.insert(blockchain) {
                return Err(ClientError::invalid_request(format!(
                    "duplicate deployment blockchain: {blockchain}"
                )));
            }
        }
        if request.token_name.trim().is_empty() {
            return Err(ClientError::invalid_request("token name must not be empty"));
        }
        if request.token_decimals > MAX_TOKEN_DECIMALS {
            return Err(ClientError::invalid_request(format!(
                "token decimals {} exceed the supported maximum of {MAX_TOKEN_DECIMALS}",
                request.token_decimals
            )));
        }
        Ok(())
    }

    /// Sums the per-chain deployment fees, queried concurrently.
    async fn aggregate_fee(&self, adapters: &[Arc<dyn ChainAdapter>]) -> ClientResult<u64> {
        let timeout = self.config.request_timeout();
        let fees = future::join_all(adapters.iter().map(|adapter| {
            bounded(
                timeout,
                adapter.blockchain(),
                "deployment fee query",
                adapter.deployment_fee(),
            )
        }))
        .await;

        let mut total: u64 = 0;
        for fee in fees {
            let fee = fee.map_err(ClientError::PaymentSubmission)?;
            total = total.checked_add(fee).ok_or_else(|| {
                ClientError::invalid_request("aggregate deployment fee overflows")
            })?;
        }
        Ok(total)
    }

    /// Submits the deployment request to every target chain concurrently
    /// and captures per-chain failures.
    async fn fan_out(
        &self,
        request: &TokenDeploymentRequest,
        task_id: DeploymentTaskId,
        adapters: Vec<Arc<dyn ChainAdapter>>,
    ) -> BTreeMap<Blockchain, ChainError> {
        let timeout = self.config.request_timeout();
        let token = TokenDeploymentSpec {
            name: request.token_name.clone(),
            symbol: request.token_symbol.clone(),
            decimals: request.token_decimals,
            pausable: request.token_pausable,
            burnable: request.token_burnable,
            supply: request.token_supply,
        };

        let mut handles = Vec::with_capacity(adapters.len());
        for adapter in adapters {
            let blockchain = adapter.blockchain();
            let submit_request = SubmitDeploymentRequest {
                task_id,
                token: token.clone(),
                payment_blockchain: request.payment_blockchain,
            };
            handles.push(tokio::spawn(async move {
                let result = bounded(
                    timeout,
                    blockchain,
                    "deployment submission",
                    adapter.submit_deployment_request(submit_request),
                )
                .await;
                (blockchain, result)
            }));
        }

        let mut failures = BTreeMap::new();
        for handle in handles {
            match handle.await {
                Ok((_, Ok(()))) => {}
                Ok((blockchain, Err(error))) => {
                    tracing::warn!(%blockchain, %error, "deployment submission failed");
                    failures.insert(blockchain, error);
                }
                Err(error) => {
                    tracing::error!(%error, "deployment submission task panicked");
                }
            }
        }
        failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MockChainAdapter;

    fn registry(adapters: Vec<Arc<MockChainAdapter>>) -> Arc<ChainRegistry> {
        let mut builder = ChainRegistry::builder();
        for adapter in adapters {
            builder = builder.with_adapter(adapter);
        }
        Arc::new(builder.build())
    }

    fn use_case(registry: Arc<ChainRegistry>) -> DeployTokenUseCase {
        DeployTokenUseCase::new(registry, ClientConfig::default().with_request_timeout_ms(200))
    }

    fn request(chains: Vec<Blockchain>, payment: Blockchain) -> TokenDeploymentRequest {
        TokenDeploymentRequest {
            token_name: "Best Token".to_string(),
            token_symbol: TokenSymbol::new("BEST").unwrap(),
            token_decimals: 8,
            token_pausable: true,
            token_burnable: false,
            token_supply: 1_000_000,
            deployment_blockchains: chains,
            payment_blockchain: payment,
            payer_private_key: PrivateKey::new("aa"),
        }
    }

    #[tokio::test]
    async fn deploys_on_all_chains_after_one_payment() {
        let ethereum =
            Arc::new(MockChainAdapter::new(Blockchain::Ethereum).with_deployment_fee(10));
        let avalanche =
            Arc::new(MockChainAdapter::new(Blockchain::Avalanche).with_deployment_fee(5));
        let use_case = use_case(registry(vec![ethereum.clone(), avalanche.clone()]));

        let outcome = use_case
            .execute(request(
                vec![Blockchain::Ethereum, Blockchain::Avalanche],
                Blockchain::Ethereum,
            ))
            .await
            .unwrap();

        assert!(outcome.is_complete());
        // One payment on the payment chain, sized to the fee sum.
        let payments = ethereum.payment_submissions();
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].amount_subunit, 15);
        assert_eq!(payments[0].task_id, outcome.task_id());
        assert!(avalanche.payment_submissions().is_empty());
        // Each chain got exactly one tagged deployment request.
        assert_eq!(ethereum.deployment_submissions().len(), 1);
        assert_eq!(avalanche.deployment_submissions().len(), 1);
        assert_eq!(
            avalanche.deployment_submissions()[0].task_id,
            outcome.task_id()
        );
    }

    #[tokio::test]
    async fn failed_payment_issues_zero_deployment_submissions() {
        let ethereum = Arc::new(
            MockChainAdapter::new(Blockchain::Ethereum)
                .with_deployment_fee(10)
                .with_failing_payment(),
        );
        let avalanche =
            Arc::new(MockChainAdapter::new(Blockchain::Avalanche).with_deployment_fee(5));
        let use_case = use_case(registry(vec![ethereum.clone(), avalanche.clone()]));

        let err = use_case
            .execute(request(
                vec![Blockchain::Ethereum, Blockchain::Avalanche],
                Blockchain::Ethereum,
            ))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::PaymentSubmission(_)));
        assert!(ethereum.deployment_submissions().is_empty());
        assert!(avalanche.deployment_submissions().is_empty());
    }

    #[tokio::test]
    async fn one_failing_chain_of_three_yields_partial_failure() {
        let ethereum =
            Arc::new(MockChainAdapter::new(Blockchain::Ethereum).with_deployment_fee(10));
        let avalanche =
            Arc::new(MockChainAdapter::new(Blockchain::Avalanche).with_deployment_fee(5));
        let fantom = Arc::new(
            MockChainAdapter::new(Blockchain::Fantom)
                .with_deployment_fee(1)
                .with_failing_deployment(),
        );
        let use_case = use_case(registry(vec![
            ethereum.clone(),
            avalanche.clone(),
            fantom.clone(),
        ]));

        let outcome = use_case
            .execute(request(
                vec![
                    Blockchain::Ethereum,
                    Blockchain::Avalanche,
                    Blockchain::Fantom,
                ],
                Blockchain::Ethereum,
            ))
            .await
            .unwrap();

        let failure = outcome.partial_failure().expect("partial failure");
        assert_eq!(failure.failed_blockchains(), vec![Blockchain::Fantom]);
        assert_eq!(failure.task_id, outcome.task_id());
        // The two healthy chains were still requested.
        assert_eq!(ethereum.deployment_submissions().len(), 1);
        assert_eq!(avalanche.deployment_submissions().len(), 1);
        // into_result surfaces the partial failure as an error.
        assert!(matches!(
            outcome.into_result(),
            Err(ClientError::PartialDeployment(_))
        ));
    }

    #[tokio::test]
    async fn empty_chain_list_is_rejected_locally() {
        let ethereum = Arc::new(MockChainAdapter::new(Blockchain::Ethereum));
        let use_case = use_case(registry(vec![ethereum.clone()]));

        let err = use_case
            .execute(request(vec![], Blockchain::Ethereum))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::InvalidRequest(_)));
        assert!(ethereum.payment_submissions().is_empty());
    }

    #[tokio::test]
    async fn duplicate_chains_are_rejected_locally() {
        let ethereum = Arc::new(MockChainAdapter::new(Blockchain::Ethereum));
        let use_case = use_case(registry(vec![ethereum.clone()]));

        let err = use_case
            .execute(request(
                vec![Blockchain::Ethereum, Blockchain::Ethereum],
                Blockchain::Ethereum,
            ))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn payment_chain_need_not_be_a_deployment_chain() {
        let ethereum =
            Arc::new(MockChainAdapter::new(Blockchain::Ethereum).with_deployment_fee(10));
        let polygon = Arc::new(MockChainAdapter::new(Blockchain::Polygon));
        let use_case = use_case(registry(vec![ethereum.clone(), polygon.clone()]));

        let outcome = use_case
            .execute(request(vec![Blockchain::Ethereum], Blockchain::Polygon))
            .await
            .unwrap();

        assert!(outcome.is_complete());
        assert_eq!(polygon.payment_submissions().len(), 1);
        assert_eq!(ethereum.deployment_submissions().len(), 1);
    }

    #[tokio::test]
    async fn failing_fee_query_aborts_before_payment() {
        let ethereum = Arc::new(
            MockChainAdapter::new(Blockchain::Ethereum).with_failing_deployment_fee(),
        );
        let polygon = Arc::new(MockChainAdapter::new(Blockchain::Polygon));
        let use_case = use_case(registry(vec![ethereum.clone(), polygon.clone()]));

        let err = use_case
            .execute(request(vec![Blockchain::Ethereum], Blockchain::Polygon))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::PaymentSubmission(_)));
        assert!(polygon.payment_submissions().is_empty());
        assert!(ethereum.deployment_submissions().is_empty());
    }

    #[tokio::test]
    async fn unregistered_target_chain_fails_before_payment() {
        let ethereum = Arc::new(MockChainAdapter::new(Blockchain::Ethereum));
        let use_case = use_case(registry(vec![ethereum.clone()]));

        let err = use_case
            .execute(request(
                vec![Blockchain::Ethereum, Blockchain::Celo],
                Blockchain::Ethereum,
            ))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::InvalidRequest(_)));
        assert!(ethereum.payment_submissions().is_empty());
    }
}
