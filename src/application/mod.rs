//! # Application Layer
//!
//! Orchestration of the client's operations over the domain model and the
//! chain adapter seam: use cases for bid aggregation, transfers, balance
//! queries, and multi-chain deployments, plus the bid selection policy.

pub mod error;
pub mod services;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{ClientError, ClientResult, PartialDeploymentError};
