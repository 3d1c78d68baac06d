//! # Infrastructure Layer
//!
//! External collaborator surfaces. The orchestration core touches the
//! outside world only through the [`chains`] adapter contract.

pub mod chains;
