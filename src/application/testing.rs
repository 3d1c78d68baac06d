//! # Test Doubles
//!
//! A configurable [`ChainAdapter`] mock shared by the use case tests.
//!
//! The mock is built fluently, records every submission it receives, and
//! answers queries from in-memory fixtures, so tests can assert both on
//! returned values and on the exact adapter traffic an operation caused.

use crate::domain::entities::bid::ServiceNodeBid;
use crate::domain::value_objects::{
    Blockchain, BlockchainAddress, PrivateKey, TokenId, TransferTaskId,
};
use crate::infrastructure::chains::error::{ChainError, ChainErrorKind, ChainResult};
use crate::infrastructure::chains::traits::{
    ChainAdapter, DeploymentPaymentRequest, SubmitDeploymentRequest, SubmitTransferRequest,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Behavior of one simulated service node.
#[derive(Debug, Clone)]
enum NodeBehavior {
    Bids(Vec<ServiceNodeBid>),
    Failing,
    Slow(u64),
}

/// Configurable in-memory [`ChainAdapter`] double.
#[derive(Debug)]
pub(crate) struct MockChainAdapter {
    blockchain: Blockchain,
    nodes: HashMap<BlockchainAddress, NodeBehavior>,
    pan_decimals: u32,
    balance: u64,
    deployment_fee: u64,
    invalid_addresses: bool,
    failing_balance: bool,
    failing_decrypt: bool,
    failing_transfer: bool,
    failing_payment: bool,
    failing_deployment: bool,
    failing_deployment_fee: bool,
    transfer_submissions: Mutex<Vec<SubmitTransferRequest>>,
    payment_submissions: Mutex<Vec<DeploymentPaymentRequest>>,
    deployment_submissions: Mutex<Vec<SubmitDeploymentRequest>>,
}

impl MockChainAdapter {
    pub(crate) fn new(blockchain: Blockchain) -> Self {
        Self {
            blockchain,
            nodes: HashMap::new(),
            pan_decimals: 8,
            balance: 0,
            deployment_fee: 0,
            invalid_addresses: false,
            failing_balance: false,
            failing_decrypt: false,
            failing_transfer: false,
            failing_payment: false,
            failing_deployment: false,
            failing_deployment_fee: false,
            transfer_submissions: Mutex::new(Vec::new()),
            payment_submissions: Mutex::new(Vec::new()),
            deployment_submissions: Mutex::new(Vec::new()),
        }
    }

    /// Registers a service node answering with the given bids.
    pub(crate) fn with_service_node_bids(
        mut self,
        address: &str,
        bids: Vec<ServiceNodeBid>,
    ) -> Self {
        self.nodes
            .insert(BlockchainAddress::new(address), NodeBehavior::Bids(bids));
        self
    }

    /// Registers a service node whose bid query fails.
    pub(crate) fn with_failing_service_node(mut self, address: &str) -> Self {
        self.nodes
            .insert(BlockchainAddress::new(address), NodeBehavior::Failing);
        self
    }

    /// Registers a service node that answers only after `delay_ms`.
    pub(crate) fn with_slow_service_node(mut self, address: &str, delay_ms: u64) -> Self {
        self.nodes
            .insert(BlockchainAddress::new(address), NodeBehavior::Slow(delay_ms));
        self
    }

    pub(crate) fn with_pan_decimals(mut self, decimals: u32) -> Self {
        self.pan_decimals = decimals;
        self
    }

    pub(crate) fn with_balance(mut self, balance_subunit: u64) -> Self {
        self.balance = balance_subunit;
        self
    }

    pub(crate) fn with_deployment_fee(mut self, fee_subunit: u64) -> Self {
        self.deployment_fee = fee_subunit;
        self
    }

    /// Makes every address fail chain-side validation.
    pub(crate) fn with_invalid_addresses(mut self) -> Self {
        self.invalid_addresses = true;
        self
    }

    pub(crate) fn with_failing_balance(mut self) -> Self {
        self.failing_balance = true;
        self
    }

    pub(crate) fn with_failing_decrypt(mut self) -> Self {
        self.failing_decrypt = true;
        self
    }

    pub(crate) fn with_failing_transfer(mut self) -> Self {
        self.failing_transfer = true;
        self
    }

    pub(crate) fn with_failing_payment(mut self) -> Self {
        self.failing_payment = true;
        self
    }

    pub(crate) fn with_failing_deployment(mut self) -> Self {
        self.failing_deployment = true;
        self
    }

    pub(crate) fn with_failing_deployment_fee(mut self) -> Self {
        self.failing_deployment_fee = true;
        self
    }

    /// The transfer requests this adapter received, in order.
    pub(crate) fn transfer_submissions(&self) -> Vec<SubmitTransferRequest> {
        self.transfer_submissions.lock().unwrap().clone()
    }

    /// The deployment-fee payments this adapter received, in order.
    pub(crate) fn payment_submissions(&self) -> Vec<DeploymentPaymentRequest> {
        self.payment_submissions.lock().unwrap().clone()
    }

    /// The deployment requests this adapter received, in order.
    pub(crate) fn deployment_submissions(&self) -> Vec<SubmitDeploymentRequest> {
        self.deployment_submissions.lock().unwrap().clone()
    }

    fn error(&self, kind: ChainErrorKind, message: &str) -> ChainError {
        ChainError::new(self.blockchain, kind, message)
    }
}

#[async_trait]
impl ChainAdapter for MockChainAdapter {
    fn blockchain(&self) -> Blockchain {
        self.blockchain
    }

    async fn decrypt_private_key(
        &self,
        _keystore: &str,
        _password: &str,
    ) -> ChainResult<PrivateKey> {
        if self.failing_decrypt {
            return Err(self.error(ChainErrorKind::InvalidKeystore, "keystore rejected"));
        }
        Ok(PrivateKey::new("decrypted"))
    }

    async fn derive_address(&self, _key: &PrivateKey) -> ChainResult<BlockchainAddress> {
        Ok(BlockchainAddress::new("0xderived"))
    }

    async fn is_valid_address(&self, _address: &BlockchainAddress) -> ChainResult<bool> {
        Ok(!self.invalid_addresses)
    }

    async fn resolve_token_address(&self, _token: &TokenId) -> ChainResult<BlockchainAddress> {
        Ok(BlockchainAddress::new("0xtoken"))
    }

    async fn token_decimals(&self, _token: &BlockchainAddress) -> ChainResult<u32> {
        Ok(self.pan_decimals)
    }

    async fn token_balance(
        &self,
        _account: &BlockchainAddress,
        _token: &BlockchainAddress,
    ) -> ChainResult<u64> {
        if self.failing_balance {
            return Err(self.error(ChainErrorKind::Connection, "balance query failed"));
        }
        Ok(self.balance)
    }

    async fn registered_service_nodes(
        &self,
        _destination: Blockchain,
    ) -> ChainResult<Vec<BlockchainAddress>> {
        let mut nodes: Vec<BlockchainAddress> = self.nodes.keys().cloned().collect();
        nodes.sort();
        Ok(nodes)
    }

    async fn service_node_bids(
        &self,
        service_node: &BlockchainAddress,
        _destination: Blockchain,
    ) -> ChainResult<Vec<ServiceNodeBid>> {
        match self.nodes.get(service_node) {
            Some(NodeBehavior::Bids(bids)) => Ok(bids.clone()),
            Some(NodeBehavior::Failing) => {
                Err(self.error(ChainErrorKind::Connection, "service node unreachable"))
            }
            Some(NodeBehavior::Slow(delay_ms)) => {
                tokio::time::sleep(Duration::from_millis(*delay_ms)).await;
                Ok(Vec::new())
            }
            None => Ok(Vec::new()),
        }
    }

    async fn deployment_fee(&self) -> ChainResult<u64> {
        if self.failing_deployment_fee {
            return Err(self.error(ChainErrorKind::Connection, "fee query failed"));
        }
        Ok(self.deployment_fee)
    }

    async fn submit_transfer_request(
        &self,
        request: SubmitTransferRequest,
    ) -> ChainResult<TransferTaskId> {
        self.transfer_submissions.lock().unwrap().push(request);
        if self.failing_transfer {
            return Err(self.error(ChainErrorKind::ContractReverted, "transfer rejected"));
        }
        Ok(TransferTaskId::new_v4())
    }

    async fn submit_deployment_payment(
        &self,
        request: DeploymentPaymentRequest,
    ) -> ChainResult<String> {
        if self.failing_payment {
            return Err(self.error(ChainErrorKind::InsufficientFunds, "payment rejected"));
        }
        self.payment_submissions.lock().unwrap().push(request);
        Ok("0xpaymenttx".to_string())
    }

    async fn submit_deployment_request(
        &self,
        request: SubmitDeploymentRequest,
    ) -> ChainResult<()> {
        self.deployment_submissions.lock().unwrap().push(request);
        if self.failing_deployment {
            return Err(self.error(ChainErrorKind::ContractReverted, "deployment rejected"));
        }
        Ok(())
    }
}
