//! # Identity Value Objects
//!
//! Type-safe identity wrappers for task correlation handles.
//!
//! Task identifiers are opaque correlation keys: they are generated (or
//! issued by a collaborator) once per submission, returned to the caller,
//! and only meaningful to out-of-band status lookups.
//!
//! - [`TransferTaskId`] — issued by the chosen service node for a transfer
//! - [`DeploymentTaskId`] — generated client-side, correlates one
//!   deployment across all target chains

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a submitted transfer task, issued by the service node.
///
/// # Examples
///
/// ```
/// use pantos_client::domain::value_objects::ids::TransferTaskId;
///
/// let task_id = TransferTaskId::new_v4();
/// println!("transfer task: {task_id}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferTaskId(Uuid);

impl TransferTaskId {
    /// Wraps an existing UUID.
    #[inline]
    #[must_use]
    pub const fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generates a new random identifier.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for TransferTaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for TransferTaskId {
    #[inline]
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Identifier correlating one token deployment across all target chains.
///
/// Generated once per deployment request, attached to every per-chain
/// submission, and returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeploymentTaskId(Uuid);

impl DeploymentTaskId {
    /// Wraps an existing UUID.
    #[inline]
    #[must_use]
    pub const fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generates a new random identifier.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for DeploymentTaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for DeploymentTaskId {
    #[inline]
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
