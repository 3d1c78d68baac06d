//! # Application Services
//!
//! Policies shared across use cases.

pub mod bid_selection;

pub use bid_selection::{BidCandidates, BidSelectionStrategy, BidSelector, LowestFeeStrategy};
