use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;

/// Identifies one of the identity columns of an atom record.
///
/// Coordinates are deliberately absent: atoms are selected by what they are,
/// never by where they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AtomField {
    /// The residue sequence number.
    Resid,
    /// The residue name (e.g., "SOL", "POPC").
    #[default]
    Resname,
    /// The atom name within its residue (e.g., "OW", "NA").
    AtomName,
    /// The atom sequence number.
    Atomid,
}

impl AtomField {
    /// Returns `true` if values of this field are integers.
    pub fn is_numeric(self) -> bool {
        matches!(self, AtomField::Resid | AtomField::Atomid)
    }
}

impl fmt::Display for AtomField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AtomField::Resid => "resid",
            AtomField::Resname => "resname",
            AtomField::AtomName => "atom_name",
            AtomField::Atomid => "atomid",
        };
        f.write_str(name)
    }
}

impl FromStr for AtomField {
    type Err = ();

    /// Parses a field name, case-insensitively.
    ///
    /// The atom name column accepts `atom_name`, `atom-name` and `atomname`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "resid" => Ok(AtomField::Resid),
            "resname" => Ok(AtomField::Resname),
            "atom_name" | "atom-name" | "atomname" => Ok(AtomField::AtomName),
            "atomid" => Ok(AtomField::Atomid),
            _ => Err(()),
        }
    }
}

/// A value an [`AtomField`] can be compared against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Int(i64),
    Text(String),
}

impl FieldValue {
    /// Converts user-supplied text into the value type `field` stores.
    ///
    /// Text fields take the trimmed input verbatim; integer fields must parse
    /// as `i64`. Returns `None` when an integer field receives non-numeric text.
    pub fn parse_for(field: AtomField, text: &str) -> Option<Self> {
        let text = text.trim();
        if field.is_numeric() {
            text.parse().ok().map(FieldValue::Int)
        } else {
            Some(FieldValue::Text(text.to_string()))
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// One atom line of a coordinate file.
///
/// All seven columns are always populated; a record is only ever built from a
/// fully decoded line or from explicit values.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// The residue sequence number.
    pub resid: i64,
    /// The residue name, trimmed.
    pub resname: String,
    /// The atom name, trimmed.
    pub atom_name: String,
    /// The atom sequence number.
    pub atomid: i64,
    /// The coordinates in nanometres.
    pub position: Point3<f64>,
}

impl AtomRecord {
    pub fn new(
        resid: i64,
        resname: &str,
        atom_name: &str,
        atomid: i64,
        position: Point3<f64>,
    ) -> Self {
        Self {
            resid,
            resname: resname.to_string(),
            atom_name: atom_name.to_string(),
            atomid,
            position,
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    /// Returns `true` if this record's `field` equals `value`.
    ///
    /// A text value never matches a numeric field and vice versa.
    pub fn matches(&self, field: AtomField, value: &FieldValue) -> bool {
        match (field, value) {
            (AtomField::Resid, FieldValue::Int(v)) => self.resid == *v,
            (AtomField::Atomid, FieldValue::Int(v)) => self.atomid == *v,
            (AtomField::Resname, FieldValue::Text(s)) => self.resname == *s,
            (AtomField::AtomName, FieldValue::Text(s)) => self.atom_name == *s,
            _ => false,
        }
    }
}
