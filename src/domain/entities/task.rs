//! # Task Handles
//!
//! Handles returned to the caller after a successful submission.

use crate::domain::entities::bid::ServiceNodeBid;
use crate::domain::value_objects::{BlockchainAddress, TransferTaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Service-node-related information of a submitted token transfer.
///
/// Created only after the transfer request has been accepted by the chosen
/// service node; immutable afterward. The task id is the caller's handle
/// for out-of-band status tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceNodeTaskInfo {
    service_node_address: BlockchainAddress,
    bid: ServiceNodeBid,
    task_id: TransferTaskId,
}

impl ServiceNodeTaskInfo {
    /// Combines the chosen node, the chosen bid, and the issued task id.
    #[must_use]
    pub const fn new(
        service_node_address: BlockchainAddress,
        bid: ServiceNodeBid,
        task_id: TransferTaskId,
    ) -> Self {
        Self {
            service_node_address,
            bid,
            task_id,
        }
    }

    /// The chosen service node's address.
    #[inline]
    #[must_use]
    pub const fn service_node_address(&self) -> &BlockchainAddress {
        &self.service_node_address
    }

    /// The chosen bid.
    #[inline]
    #[must_use]
    pub const fn bid(&self) -> &ServiceNodeBid {
        &self.bid
    }

    /// The task id issued by the service node.
    #[inline]
    #[must_use]
    pub const fn task_id(&self) -> TransferTaskId {
        self.task_id
    }
}

impl fmt::Display for ServiceNodeTaskInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "task {} at node {}",
            self.task_id, self.service_node_address
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Amount, Blockchain, Timestamp};

    #[test]
    fn task_info_exposes_its_parts() {
        let bid = ServiceNodeBid::new(
            Blockchain::Ethereum,
            Blockchain::Polygon,
            Amount::subunit(80),
            300,
            Timestamp::now().add_secs(120),
        )
        .unwrap();
        let task_id = TransferTaskId::new_v4();
        let info = ServiceNodeTaskInfo::new(BlockchainAddress::new("0xnode"), bid.clone(), task_id);

        assert_eq!(info.service_node_address().as_str(), "0xnode");
        assert_eq!(info.bid(), &bid);
        assert_eq!(info.task_id(), task_id);
        assert!(info.to_string().contains("0xnode"));
    }
}
