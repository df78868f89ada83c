use super::atom::AtomRecord;

/// The complete contents of a coordinate file.
///
/// The title and box lines are opaque: they are kept exactly as read (minus
/// the line terminator) and written back untouched. Only the atom list is
/// expected to change between reading and writing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroFile {
    /// The first line of the file.
    pub title: String,
    /// The atom records in file order.
    pub atoms: Vec<AtomRecord>,
    /// The last line of the file, describing the simulation box.
    pub box_line: String,
}

impl GroFile {
    pub fn new(
        title: impl Into<String>,
        atoms: Vec<AtomRecord>,
        box_line: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            atoms,
            box_line: box_line.into(),
        }
    }

    /// Returns the number of atoms, which is what the count line is written from.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Replaces the atom list, keeping title and box line.
    pub fn with_atoms(self, atoms: Vec<AtomRecord>) -> Self {
        Self { atoms, ..self }
    }
}
