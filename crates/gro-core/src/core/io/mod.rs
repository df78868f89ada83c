//! Provides input/output functionality for fixed-column coordinate files.
//!
//! [`traits::CoordinateFile`] is the format-independent reading/writing interface;
//! [`gro`] implements it for the GROMACS `.gro` layout and exposes the single-line
//! atom codec used by the reader and writer.

pub mod gro;
pub mod traits;
