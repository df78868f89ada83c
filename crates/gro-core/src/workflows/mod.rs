//! # Workflows Module
//!
//! High-level entry points that tie the [`core`](crate::core) model and the
//! [`engine`](crate::engine) steps into a complete run.
//!
//! - **Substitution Workflow** ([`replace`]) - Select, sample, relabel, reorder and
//!   renumber atoms, returning a file ready to be written.

pub mod replace;
