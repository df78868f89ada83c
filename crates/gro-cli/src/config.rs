use crate::cli::Cli;
use crate::error::{CliError, Result};
use grosub::core::models::atom::AtomField;
use grosub::engine::config::{ReplaceConfig, ReplaceConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Settings as they may appear in a TOML file. Every key is optional; the
/// command line fills in or overrides what is here.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialReplaceConfig {
    natoms: Option<usize>,
    oresname: Option<String>,
    nresname: Option<String>,
    natname: Option<String>,
    field: Option<String>,
    seed: Option<u64>,
}

/// The fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub replace: ReplaceConfig,
    pub seed: Option<u64>,
}

fn require<T>(value: Option<T>, flag: &str) -> Result<T> {
    value.ok_or_else(|| {
        CliError::Config(format!(
            "missing required option '{}' (give it on the command line or in the config file)",
            flag
        ))
    })
}

impl PartialReplaceConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration file {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file named by `--config`, or starts empty when there is none.
    pub fn load(cli: &Cli) -> Result<Self> {
        match &cli.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Overlays command-line values on the file values and validates the result.
    pub fn merge_with_cli(self, cli: &Cli) -> Result<RunSettings> {
        let natoms = require(cli.natoms.or(self.natoms), "--natoms")?;
        let oresname = require(cli.oresname.clone().or(self.oresname), "--oresname")?;
        let nresname = require(cli.nresname.clone().or(self.nresname), "--nresname")?;
        let natname = require(cli.natname.clone().or(self.natname), "--natname")?;

        let mut builder = ReplaceConfigBuilder::new()
            .count(natoms)
            .match_value(oresname)
            .new_resname(nresname)
            .new_atom_name(natname);

        if let Some(field) = cli.field.clone().or(self.field) {
            let field = AtomField::from_str(&field).map_err(|_| {
                CliError::Config(format!(
                    "unknown field '{}' (expected resname, atom_name, resid or atomid)",
                    field
                ))
            })?;
            builder = builder.field(field);
        }

        let replace = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;
        let settings = RunSettings {
            replace,
            seed: cli.seed.or(self.seed),
        };
        debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }
}
