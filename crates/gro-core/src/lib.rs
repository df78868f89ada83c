//! # grosub Core Library
//!
//! Random residue substitution for fixed-column GROMACS `.gro` coordinate files:
//! pick atoms by a column value, relabel a random subset of them, move the
//! relabeled atoms to the front of the matched block, and renumber the file.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer split:
//!
//! - **[`core`]: The Foundation.** The atom record and file envelope, and the
//!   column-exact reader and writer.
//!
//! - **[`engine`]: The Logic Core.** Candidate selection, uniform sampling with an
//!   injected random generator, relabeling, and the reorder/renumber algorithm.
//!
//! - **[`workflows`]: The Public API.** [`workflows::replace::run`] chains the engine
//!   steps over a parsed file.

pub mod core;
pub mod engine;
pub mod workflows;
