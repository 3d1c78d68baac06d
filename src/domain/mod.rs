//! # Domain Layer
//!
//! Core business types: value objects, entities, and domain errors.
//! Everything here is a per-call value with no I/O and no shared state.

pub mod entities;
pub mod errors;
pub mod value_objects;
