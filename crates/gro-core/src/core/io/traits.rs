use crate::core::models::system::GroFile;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing a coordinate file format.
///
/// Implementors handle the format-specific parsing and serialization; the
/// provided methods add path-based convenience on top.
pub trait CoordinateFile {
    /// The error type for I/O and parse failures.
    type Error: Error + From<io::Error>;

    /// Reads a coordinate file from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the reader fails.
    fn read_from(reader: &mut impl BufRead) -> Result<GroFile, Self::Error>;

    /// Writes a coordinate file to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(file: &GroFile, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a coordinate file from a path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<GroFile, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a coordinate file to a path, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(file: &GroFile, path: P) -> Result<(), Self::Error> {
        let handle = File::create(path)?;
        let mut writer = BufWriter::new(handle);
        Self::write_to(file, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
