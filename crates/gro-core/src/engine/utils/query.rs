use crate::core::models::atom::{AtomField, AtomRecord, FieldValue};

/// Yields, in ascending order, the index of every atom whose `field` equals `value`.
///
/// The iterator borrows the atom list; call again to restart.
pub fn select<'a>(
    atoms: &'a [AtomRecord],
    field: AtomField,
    value: &'a FieldValue,
) -> impl Iterator<Item = usize> + 'a {
    atoms
        .iter()
        .enumerate()
        .filter(move |(_, atom)| atom.matches(field, value))
        .map(|(i, _)| i)
}
