//! # Domain Entities
//!
//! - [`ServiceNodeBid`]: a node's offer to relay one transfer
//! - [`BlockchainAddressBidPair`]: a node address paired with a bid
//! - [`ServiceNodeTaskInfo`]: handle to a submitted transfer

pub mod bid;
pub mod task;

pub use bid::{BlockchainAddressBidPair, ServiceNodeBid};
pub use task::ServiceNodeTaskInfo;
