use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "grosub - Replace a random subset of atoms in a .gro coordinate file with a new residue and atom name.",
    override_usage = "grosub [OPTIONS] < input.gro > output.gro",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    // --- Substitution ---
    /// Number of atoms to modify.
    #[arg(short = 'n', long, value_name = "INT")]
    pub natoms: Option<usize>,

    /// Original residue name (or other field value, see --field) of the atoms to replace.
    #[arg(short = 'o', long, value_name = "NAME")]
    pub oresname: Option<String>,

    /// New residue name of the replaced atoms.
    #[arg(short = 'r', long, value_name = "NAME")]
    pub nresname: Option<String>,

    /// New atom name of the replaced atoms.
    #[arg(short = 'a', long, value_name = "NAME")]
    pub natname: Option<String>,

    /// Atom column the --oresname value is matched against
    /// (resname, atom_name, resid or atomid).
    #[arg(long, value_name = "FIELD")]
    pub field: Option<String>,

    /// Seed for the random generator, for reproducible output.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    // --- Input / Output ---
    /// Read the coordinate file from this path instead of standard input.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Write the coordinate file to this path instead of standard output.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Read settings from a TOML file; command-line options take precedence.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Logging ---
    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
