//! # Core Models Module
//!
//! Data structures describing the contents of a fixed-column coordinate file.
//!
//! - [`atom`] - A single atom record, plus the field/value types used to select atoms
//! - [`system`] - The whole file: title line, atom list and box line
//!
//! Atom order is meaningful: consecutive atoms sharing a `resid` form one residue.

pub mod atom;
pub mod system;
