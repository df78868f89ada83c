use crate::core::models::atom::AtomRecord;
use tracing::warn;

/// Relabels the atoms at `indices` with a new residue name and atom name.
///
/// Identifiers and coordinates are left as they are; renumbering happens
/// later, once the new order is known. Indices past the end of the list are
/// skipped with a warning.
pub fn alter(atoms: &mut [AtomRecord], indices: &[usize], resname: &str, atom_name: &str) {
    let len = atoms.len();
    for &i in indices {
        match atoms.get_mut(i) {
            Some(atom) => {
                atom.resname = resname.to_string();
                atom.atom_name = atom_name.to_string();
            }
            None => warn!(index = i, len, "Skipping out-of-range atom index."),
        }
    }
}
