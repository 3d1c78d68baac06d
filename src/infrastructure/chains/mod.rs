//! # Chain Adapters
//!
//! The adapter contract, its uniform error surface, and the process-wide
//! read-only registry resolving each [`Blockchain`](crate::domain::value_objects::Blockchain)
//! to its adapter.

pub mod error;
pub mod registry;
pub mod traits;

pub use error::{ChainError, ChainErrorKind, ChainResult};
pub use registry::{ChainRegistry, ChainRegistryBuilder};
pub use traits::{
    ChainAdapter, DeploymentPaymentRequest, SubmitDeploymentRequest, SubmitTransferRequest,
    TokenDeploymentSpec,
};
