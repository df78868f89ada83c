use crate::core::io::traits::CoordinateFile;
use crate::core::models::atom::AtomRecord;
use crate::core::models::system::GroFile;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, trace};

const RESID_COLUMNS: (usize, usize) = (0, 5);
const RESNAME_COLUMNS: (usize, usize) = (5, 10);
const ATOM_NAME_COLUMNS: (usize, usize) = (10, 15);
const ATOMID_COLUMNS: (usize, usize) = (15, 20);
const X_COLUMNS: (usize, usize) = (20, 28);
const Y_COLUMNS: (usize, usize) = (28, 36);
const Z_COLUMNS: (usize, usize) = (36, 44);

#[derive(Debug, Error)]
pub enum GroError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: GroParseErrorKind,
    },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
}

/// Returns the trimmed text of `[start, end)`, clipped to the line length.
fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    let len = line.len();
    line.get(start.min(len)..end.min(len)).unwrap_or("").trim()
}

fn column_label((start, end): (usize, usize)) -> String {
    format!("{}-{}", start + 1, end)
}

fn parse_int(line: &str, columns: (usize, usize)) -> Result<i64, GroParseErrorKind> {
    let text = slice_and_trim(line, columns.0, columns.1);
    text.parse().map_err(|_| GroParseErrorKind::InvalidInt {
        columns: column_label(columns),
        value: text.into(),
    })
}

fn parse_float(line: &str, columns: (usize, usize)) -> Result<f64, GroParseErrorKind> {
    let text = slice_and_trim(line, columns.0, columns.1);
    text.parse().map_err(|_| GroParseErrorKind::InvalidFloat {
        columns: column_label(columns),
        value: text.into(),
    })
}

/// Decodes one atom line into an [`AtomRecord`].
///
/// Each field is cut from its fixed column span and trimmed. Spans past the
/// end of a short line read as empty, so a truncated line fails on its first
/// missing numeric column.
///
/// # Errors
///
/// Returns the offending column and text if a numeric span does not parse.
pub fn decode_atom_line(line: &str) -> Result<AtomRecord, GroParseErrorKind> {
    let resid = parse_int(line, RESID_COLUMNS)?;
    let resname = slice_and_trim(line, RESNAME_COLUMNS.0, RESNAME_COLUMNS.1);
    let atom_name = slice_and_trim(line, ATOM_NAME_COLUMNS.0, ATOM_NAME_COLUMNS.1);
    let atomid = parse_int(line, ATOMID_COLUMNS)?;
    let x = parse_float(line, X_COLUMNS)?;
    let y = parse_float(line, Y_COLUMNS)?;
    let z = parse_float(line, Z_COLUMNS)?;

    Ok(AtomRecord::new(
        resid,
        resname,
        atom_name,
        atomid,
        Point3::new(x, y, z),
    ))
}

/// Encodes an [`AtomRecord`] as a fixed-column line, without terminator.
///
/// Coordinates are written with three decimals, so the round trip preserves
/// values at that precision rather than the original text.
pub fn encode_atom_line(atom: &AtomRecord) -> String {
    format!(
        "{:>5}{:<5}{:>5}{:>5}{:8.3}{:8.3}{:8.3}",
        atom.resid,
        atom.resname,
        atom.atom_name,
        atom.atomid,
        atom.position.x,
        atom.position.y,
        atom.position.z,
    )
}

/// Yields the lines of a coordinate file in output order, without terminators.
///
/// The count line is taken from the atom list itself.
pub fn output_lines(file: &GroFile) -> impl Iterator<Item = String> + '_ {
    std::iter::once(file.title.clone())
        .chain(std::iter::once(file.atom_count().to_string()))
        .chain(file.atoms.iter().map(encode_atom_line))
        .chain(std::iter::once(file.box_line.clone()))
}

fn strip_cr(mut line: String) -> String {
    if line.ends_with('\r') {
        line.pop();
    }
    line
}

pub struct GroFormat;

impl CoordinateFile for GroFormat {
    type Error = GroError;

    /// Reads title, atoms and box line.
    ///
    /// The declared atom count is skipped. Atom lines are recognised by
    /// lookahead: a line is decoded as an atom only once a following non-blank
    /// line is seen, and the last line before a blank line (or end of input)
    /// is the box line. Anything after the first blank line is ignored.
    fn read_from(reader: &mut impl BufRead) -> Result<GroFile, Self::Error> {
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(idx, line)| line.map(|l| (idx + 1, strip_cr(l))));

        let (_, title) = lines
            .next()
            .transpose()?
            .ok_or_else(|| GroError::MissingRecord("title line".into()))?;
        let (_, declared_count) = lines
            .next()
            .transpose()?
            .ok_or_else(|| GroError::MissingRecord("atom count line".into()))?;
        trace!(declared = declared_count.trim(), "Ignoring declared atom count.");

        let (mut prev_num, mut prev_line) = lines
            .next()
            .transpose()?
            .ok_or_else(|| GroError::MissingRecord("box line".into()))?;

        let mut atoms = Vec::new();
        for item in lines {
            let (line_num, line) = item?;
            if line.trim().is_empty() {
                break;
            }
            let atom = decode_atom_line(&prev_line).map_err(|kind| GroError::Parse {
                line: prev_num,
                kind,
            })?;
            atoms.push(atom);
            prev_num = line_num;
            prev_line = line;
        }

        debug!(atoms = atoms.len(), "Read coordinate file.");
        Ok(GroFile {
            title,
            atoms,
            box_line: prev_line,
        })
    }

    fn write_to(file: &GroFile, writer: &mut impl Write) -> Result<(), Self::Error> {
        for line in output_lines(file) {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const WATER: &str = "\
Two waters
6
    1SOL     OW    1   0.126   1.624   1.679
    1SOL    HW1    2   0.190   1.661   1.747
    1SOL    HW2    3   0.177   1.568   1.613
    2SOL     OW    4   1.275   0.053   0.622
    2SOL    HW1    5   1.337   0.002   0.680
    2SOL    HW2    6   1.326   0.120   0.568
   1.86206   1.86206   1.86206
";

    fn read_str(text: &str) -> Result<GroFile, GroError> {
        GroFormat::read_from(&mut Cursor::new(text.as_bytes()))
    }

    fn write_string(file: &GroFile) -> String {
        let mut buffer = Vec::new();
        GroFormat::write_to(file, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn decode_extracts_all_columns() {
        let atom = decode_atom_line("   12POPC   C13   45  -0.126   1.624  11.679").unwrap();
        assert_eq!(atom.resid, 12);
        assert_eq!(atom.resname, "POPC");
        assert_eq!(atom.atom_name, "C13");
        assert_eq!(atom.atomid, 45);
        assert_eq!(atom.position, Point3::new(-0.126, 1.624, 11.679));
    }

    #[test]
    fn decode_reads_columns_that_touch_without_spaces() {
        let atom = decode_atom_line("99999LONGNALONG99999-999.999-999.999-999.999").unwrap();
        assert_eq!(atom.resid, 99999);
        assert_eq!(atom.resname, "LONGN");
        assert_eq!(atom.atom_name, "ALONG");
        assert_eq!(atom.atomid, 99999);
        assert_eq!(atom.position, Point3::new(-999.999, -999.999, -999.999));
    }

    #[test]
    fn decode_rejects_non_numeric_resid() {
        let err = decode_atom_line("  abcSOL     OW    1   0.126   1.624   1.679").unwrap_err();
        assert_eq!(
            err,
            GroParseErrorKind::InvalidInt {
                columns: "1-5".into(),
                value: "abc".into(),
            }
        );
    }

    #[test]
    fn decode_rejects_non_numeric_coordinate() {
        let err = decode_atom_line("    1SOL     OW    1   0.126   x.xxx   1.679").unwrap_err();
        assert_eq!(
            err,
            GroParseErrorKind::InvalidFloat {
                columns: "29-36".into(),
                value: "x.xxx".into(),
            }
        );
    }

    #[test]
    fn decode_rejects_truncated_line() {
        let err = decode_atom_line("    1SOL     OW    1   0.126").unwrap_err();
        assert!(matches!(
            err,
            GroParseErrorKind::InvalidFloat { ref columns, .. } if columns == "29-36"
        ));
    }

    #[test]
    fn canonical_line_round_trips_byte_for_byte() {
        for line in WATER.lines().skip(2).take(6) {
            let atom = decode_atom_line(line).unwrap();
            assert_eq!(encode_atom_line(&atom), line);
        }
    }

    #[test]
    fn encode_normalizes_coordinate_precision() {
        let atom = decode_atom_line("    1SOL     OW    1  0.1264 1.62   1.6").unwrap();
        assert_eq!(
            encode_atom_line(&atom),
            "    1SOL     OW    1   0.126   1.620   1.600"
        );
    }

    #[test]
    fn read_splits_title_atoms_and_box() {
        let file = read_str(WATER).unwrap();
        assert_eq!(file.title, "Two waters");
        assert_eq!(file.atoms.len(), 6);
        assert_eq!(file.atoms[3].resid, 2);
        assert_eq!(file.atoms[3].atom_name, "OW");
        assert_eq!(file.box_line, "   1.86206   1.86206   1.86206");
    }

    #[test]
    fn read_ignores_declared_atom_count() {
        let text = WATER.replacen("\n6\n", "\n42\n", 1);
        let file = read_str(&text).unwrap();
        assert_eq!(file.atoms.len(), 6);
    }

    #[test]
    fn read_stops_at_first_blank_line() {
        let text = format!("{}\n   \nnot an atom line at all\n", WATER);
        let file = read_str(&text).unwrap();
        assert_eq!(file.atoms.len(), 6);
        assert_eq!(file.box_line, "   1.86206   1.86206   1.86206");
    }

    #[test]
    fn read_accepts_crlf_line_endings() {
        let text = WATER.replace('\n', "\r\n");
        let file = read_str(&text).unwrap();
        assert_eq!(file.title, "Two waters");
        assert_eq!(file.atoms.len(), 6);
        assert_eq!(file.box_line, "   1.86206   1.86206   1.86206");
    }

    #[test]
    fn read_with_no_atoms_keeps_box_line() {
        let file = read_str("Empty\n0\n   1.0   1.0   1.0\n").unwrap();
        assert!(file.atoms.is_empty());
        assert_eq!(file.box_line, "   1.0   1.0   1.0");
    }

    #[test]
    fn read_reports_line_number_of_bad_atom() {
        let text = WATER.replace("    2SOL     OW    4", "    2SOL     OW    Y");
        match read_str(&text) {
            Err(GroError::Parse { line, kind }) => {
                assert_eq!(line, 6);
                assert!(matches!(kind, GroParseErrorKind::InvalidInt { .. }));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn read_fails_on_missing_header_or_box() {
        assert!(matches!(read_str(""), Err(GroError::MissingRecord(_))));
        assert!(matches!(read_str("Title\n"), Err(GroError::MissingRecord(_))));
        assert!(matches!(read_str("Title\n3\n"), Err(GroError::MissingRecord(_))));
    }

    #[test]
    fn write_emits_title_count_atoms_and_box() {
        let file = read_str(WATER).unwrap();
        assert_eq!(write_string(&file), WATER);
    }

    #[test]
    fn write_uses_actual_atom_count() {
        let mut file = read_str(WATER).unwrap();
        file.atoms.truncate(3);
        let text = write_string(&file);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[1], "3");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn path_helpers_round_trip_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf.gro");
        let file = read_str(WATER).unwrap();

        GroFormat::write_to_path(&file, &path).unwrap();
        let reread = GroFormat::read_from_path(&path).unwrap();

        assert_eq!(reread, file);
    }

    #[test]
    fn read_from_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = GroFormat::read_from_path(dir.path().join("missing.gro"));
        assert!(matches!(result, Err(GroError::Io(_))));
    }
}
