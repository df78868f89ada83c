//! Utility functions for the engine module.
//!
//! Candidate lookup over an atom list and uniform sampling of a subset of
//! those candidates.

pub mod query;
pub mod sampling;
