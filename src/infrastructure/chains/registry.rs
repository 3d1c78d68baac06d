//! # Chain Adapter Registry
//!
//! Maps each [`Blockchain`] to the adapter capable of acting on it.
//!
//! The registry is built once by the host application, before first use,
//! and is read-only afterward: any number of in-flight operations may
//! resolve adapters concurrently through a shared `Arc<ChainRegistry>`.
//!
//! # Examples
//!
//! ```ignore
//! use pantos_client::infrastructure::chains::registry::ChainRegistry;
//!
//! let registry = ChainRegistry::builder()
//!     .with_adapter(ethereum_adapter)
//!     .with_adapter(avalanche_adapter)
//!     .build();
//! let adapter = registry.get(Blockchain::Ethereum)?;
//! ```

use crate::domain::value_objects::Blockchain;
use crate::infrastructure::chains::error::{ChainError, ChainResult};
use crate::infrastructure::chains::traits::ChainAdapter;
use std::collections::HashMap;
use std::sync::Arc;

/// Read-only registry of chain adapters, keyed by [`Blockchain`].
#[derive(Debug, Default)]
pub struct ChainRegistry {
    adapters: HashMap<Blockchain, Arc<dyn ChainAdapter>>,
}

impl ChainRegistry {
    /// Starts building a registry.
    #[must_use]
    pub fn builder() -> ChainRegistryBuilder {
        ChainRegistryBuilder::default()
    }

    /// Resolves the adapter for a blockchain.
    ///
    /// # Errors
    ///
    /// Returns a [`ChainErrorKind::Configuration`](super::error::ChainErrorKind::Configuration)
    /// error if no adapter is registered for `blockchain`.
    pub fn get(&self, blockchain: Blockchain) -> ChainResult<Arc<dyn ChainAdapter>> {
        self.adapters
            .get(&blockchain)
            .cloned()
            .ok_or_else(|| ChainError::unregistered(blockchain))
    }

    /// Returns the chains with a registered adapter.
    #[must_use]
    pub fn registered_blockchains(&self) -> Vec<Blockchain> {
        let mut chains: Vec<Blockchain> = self.adapters.keys().copied().collect();
        chains.sort();
        chains
    }

    /// Returns the number of registered adapters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Returns true if no adapter is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

/// Builder for [`ChainRegistry`].
///
/// Registering two adapters for the same chain keeps the last one.
#[derive(Debug, Default)]
pub struct ChainRegistryBuilder {
    adapters: HashMap<Blockchain, Arc<dyn ChainAdapter>>,
}

impl ChainRegistryBuilder {
    /// Registers an adapter under the chain it reports via
    /// [`ChainAdapter::blockchain`].
    #[must_use]
    pub fn with_adapter(mut self, adapter: Arc<dyn ChainAdapter>) -> Self {
        self.adapters.insert(adapter.blockchain(), adapter);
        self
    }

    /// Finalizes the registry.
    #[must_use]
    pub fn build(self) -> ChainRegistry {
        ChainRegistry {
            adapters: self.adapters,
        }
    }
}
