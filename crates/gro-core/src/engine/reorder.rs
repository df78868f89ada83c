//! Reordering and renumbering of an atom list after substitution.
//!
//! Substituted atoms are pulled out of their original slots and regrouped at
//! the start of the candidate block; identifiers are then regenerated so the
//! file stays contiguous.

use crate::core::models::atom::AtomRecord;
use std::collections::HashSet;

/// Residue numbers wrap at this value to fit their five-column field.
pub const RESID_MODULO: i64 = 100_000;
/// Atom numbers wrap at this value to fit their five-column field.
pub const ATOMID_MODULO: i64 = 100_000;

/// Computes the new atom order as a permutation of `0..length`.
///
/// The result is: every index below `anchor` that is not in `moved`, in
/// ascending order; then `moved` in the order given; then every remaining
/// index from `anchor` upwards, in ascending order. An `anchor` past the end
/// is treated as `length`.
///
/// `moved` must hold distinct indices below `length` for the result to be a
/// permutation.
pub fn reorder(length: usize, moved: &[usize], anchor: usize) -> Vec<usize> {
    debug_assert!(moved.iter().all(|&i| i < length));
    let anchor = anchor.min(length);
    let moved_set: HashSet<usize> = moved.iter().copied().collect();
    debug_assert_eq!(moved_set.len(), moved.len());

    let mut order = Vec::with_capacity(length);
    order.extend((0..anchor).filter(|i| !moved_set.contains(i)));
    order.extend_from_slice(moved);
    order.extend((anchor..length).filter(|i| !moved_set.contains(i)));
    order
}

/// Moves the atoms out of `atoms` in the sequence given by `order`.
///
/// Indices that are out of range or repeated yield nothing.
pub fn apply_order(atoms: Vec<AtomRecord>, order: &[usize]) -> Vec<AtomRecord> {
    let mut slots: Vec<Option<AtomRecord>> = atoms.into_iter().map(Some).collect();
    order
        .iter()
        .filter_map(|&i| slots.get_mut(i).and_then(Option::take))
        .collect()
}

/// Iterator returned by [`renumber`].
#[derive(Debug, Clone)]
pub struct Renumber<I> {
    inner: I,
    residue_counter: i64,
    // 0 doubles as "no residue seen yet".
    prev_source_resid: i64,
    position: i64,
}

impl<I> Iterator for Renumber<I>
where
    I: Iterator<Item = AtomRecord>,
{
    type Item = AtomRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let mut atom = self.inner.next()?;
        self.position += 1;
        if atom.resid != self.prev_source_resid {
            self.residue_counter += 1;
            self.prev_source_resid = atom.resid;
        }
        atom.resid = self.residue_counter % RESID_MODULO;
        atom.atomid = self.position % ATOMID_MODULO;
        Some(atom)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Regenerates residue and atom numbers in traversal order.
///
/// A new residue starts whenever an atom's *original* `resid` differs from the
/// previous atom's; names play no part. Residues count from 1 and atoms from
/// 1, both wrapping at 100000. An original `resid` of 0 on the very first atom
/// is indistinguishable from the starting state, so that run is numbered 0.
pub fn renumber<I>(atoms: I) -> Renumber<I::IntoIter>
where
    I: IntoIterator<Item = AtomRecord>,
{
    Renumber {
        inner: atoms.into_iter(),
        residue_counter: 0,
        prev_source_resid: 0,
        position: 0,
    }
}
