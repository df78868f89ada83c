//! # Core Module
//!
//! The foundation layer: the in-memory model of a coordinate file and the
//! column-exact codec that reads and writes it.
//!
//! - **Molecular Representation** ([`models`]) - Atom records and the file envelope
//! - **File I/O** ([`io`]) - Fixed-column decoding and encoding

pub mod io;
pub mod models;
