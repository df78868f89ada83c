use crate::core::models::atom::{AtomField, FieldValue};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for parameter '{parameter}': {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

/// Everything a substitution run needs to know.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaceConfig {
    /// The column candidates are selected on.
    pub field: AtomField,
    /// The value that column must hold for an atom to be a candidate.
    pub match_value: FieldValue,
    /// The residue name written onto substituted atoms.
    pub new_resname: String,
    /// The atom name written onto substituted atoms.
    pub new_atom_name: String,
    /// How many candidates to substitute.
    pub count: usize,
}

#[derive(Default)]
pub struct ReplaceConfigBuilder {
    field: Option<AtomField>,
    match_value: Option<String>,
    new_resname: Option<String>,
    new_atom_name: Option<String>,
    count: Option<usize>,
}

impl ReplaceConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: AtomField) -> Self {
        self.field = Some(field);
        self
    }
    pub fn match_value(mut self, value: impl Into<String>) -> Self {
        self.match_value = Some(value.into());
        self
    }
    pub fn new_resname(mut self, name: impl Into<String>) -> Self {
        self.new_resname = Some(name.into());
        self
    }
    pub fn new_atom_name(mut self, name: impl Into<String>) -> Self {
        self.new_atom_name = Some(name.into());
        self
    }
    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Validates and assembles the configuration.
    ///
    /// The field defaults to the residue name. The match value is converted to
    /// the field's type here, so a numeric field with non-numeric text is
    /// rejected before any file is touched.
    pub fn build(self) -> Result<ReplaceConfig, ConfigError> {
        let field = self.field.unwrap_or_default();
        let raw_value = self
            .match_value
            .ok_or(ConfigError::MissingParameter("match_value"))?;
        let match_value =
            FieldValue::parse_for(field, &raw_value).ok_or_else(|| ConfigError::InvalidParameter {
                parameter: "match_value",
                reason: format!("'{}' is not a valid {} value", raw_value, field),
            })?;

        let count = self.count.ok_or(ConfigError::MissingParameter("count"))?;
        if count == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "count",
                reason: "must be a positive integer".into(),
            });
        }

        Ok(ReplaceConfig {
            field,
            match_value,
            new_resname: self
                .new_resname
                .ok_or(ConfigError::MissingParameter("new_resname"))?,
            new_atom_name: self
                .new_atom_name
                .ok_or(ConfigError::MissingParameter("new_atom_name"))?,
            count,
        })
    }
}
