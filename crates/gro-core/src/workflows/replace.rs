use crate::core::models::atom::{AtomField, AtomRecord, FieldValue};
use crate::core::models::system::GroFile;
use crate::engine::config::ReplaceConfig;
use crate::engine::error::EngineError;
use crate::engine::mutation::alter;
use crate::engine::reorder::{Renumber, apply_order, renumber, reorder};
use crate::engine::utils::query::select;
use crate::engine::utils::sampling::sample;
use rand::Rng;
use std::vec;
use tracing::{debug, info, instrument};

/// Substitutes `n` randomly chosen candidates and renumbers the result.
///
/// Candidates are the atoms whose `field` equals `value`. The chosen atoms are
/// renamed to `resname`/`atom_name`, moved (in the order they were drawn) to
/// the position of the first candidate, and every atom then gets fresh
/// residue and atom numbers. The returned iterator yields the atoms in their
/// final order.
///
/// # Errors
///
/// Returns [`EngineError::Sampling`] if `n` exceeds the number of candidates.
#[instrument(level = "debug", skip(atoms, value, rng), fields(atoms = atoms.len()))]
pub fn replace_atom(
    mut atoms: Vec<AtomRecord>,
    field: AtomField,
    value: &FieldValue,
    resname: &str,
    atom_name: &str,
    n: usize,
    rng: &mut impl Rng,
) -> Result<Renumber<vec::IntoIter<AtomRecord>>, EngineError> {
    let candidates: Vec<usize> = select(&atoms, field, value).collect();
    info!(
        "Found {} candidate atom(s) with {} = {}.",
        candidates.len(),
        field,
        value
    );

    let selection = sample(&candidates, n, rng)?;
    debug!(?selection, "Sampled atoms to substitute.");

    alter(&mut atoms, &selection, resname, atom_name);

    let anchor = candidates.first().copied().unwrap_or(atoms.len());
    let order = reorder(atoms.len(), &selection, anchor);
    Ok(renumber(apply_order(atoms, &order)))
}

/// Runs a substitution over a whole file, keeping its title and box line.
///
/// # Errors
///
/// Propagates any error from [`replace_atom`].
#[instrument(skip_all, name = "replace_workflow")]
pub fn run(
    file: GroFile,
    config: &ReplaceConfig,
    rng: &mut impl Rng,
) -> Result<GroFile, EngineError> {
    let GroFile {
        title,
        atoms,
        box_line,
    } = file;

    let atoms: Vec<AtomRecord> = replace_atom(
        atoms,
        config.field,
        &config.match_value,
        &config.new_resname,
        &config.new_atom_name,
        config.count,
        rng,
    )?
    .collect();

    info!(
        "Substituted {} atom(s) with {}/{}; {} atom(s) written.",
        config.count,
        config.new_resname,
        config.new_atom_name,
        atoms.len()
    );
    Ok(GroFile::new(title, atoms, box_line))
}
