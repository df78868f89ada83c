//! # Engine Module
//!
//! The substitution machinery that runs between reading and writing a file.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - What to select, what to rename it to, and how many
//! - **Candidate lookup and sampling** ([`utils`]) - Field matching and uniform subset draws
//! - **Relabeling** ([`mutation`]) - In-place renaming of the sampled atoms
//! - **Reordering** ([`reorder`]) - The new atom order and the regenerated identifiers
//! - **Error Handling** ([`error`]) - Engine-level error aggregation

pub mod config;
pub mod error;
pub mod mutation;
pub mod reorder;
pub mod utils;
