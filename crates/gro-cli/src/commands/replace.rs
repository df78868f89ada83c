use crate::cli::Cli;
use crate::config::PartialReplaceConfig;
use crate::error::{CliError, Result};
use grosub::core::io::{gro::GroFormat, traits::CoordinateFile};
use grosub::core::models::system::GroFile;
use grosub::engine::utils::sampling::create_rng;
use grosub::workflows;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

fn read_input(input: Option<&Path>) -> Result<GroFile> {
    match input {
        Some(path) => {
            info!("Loading input structure from {:?}", path);
            GroFormat::read_from_path(path).map_err(|e| CliError::FileParsing {
                path: path.to_path_buf(),
                source: e.into(),
            })
        }
        None => {
            info!("Loading input structure from standard input");
            Ok(GroFormat::read_from(&mut io::stdin().lock())?)
        }
    }
}

fn write_output(file: &GroFile, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            info!("Writing result to {:?}", path);
            GroFormat::write_to_path(file, path)?;
        }
        None => {
            let mut writer = BufWriter::new(io::stdout().lock());
            GroFormat::write_to(file, &mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

pub fn run(cli: &Cli) -> Result<()> {
    let settings = PartialReplaceConfig::load(cli)?.merge_with_cli(cli)?;

    let file = read_input(cli.input.as_deref())?;
    info!(
        "Read {} atom(s); title: {:?}",
        file.atom_count(),
        file.title
    );

    let mut rng = create_rng(settings.seed);
    let result = workflows::replace::run(file, &settings.replace, &mut rng)?;

    write_output(&result, cli.output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    const INPUT: &str = "\
Three waters
9
    1SOL     OW    1   0.126   1.624   1.679
    1SOL    HW1    2   0.190   1.661   1.747
    1SOL    HW2    3   0.177   1.568   1.613
    2SOL     OW    4   1.275   0.053   0.622
    2SOL    HW1    5   1.337   0.002   0.680
    2SOL    HW2    6   1.326   0.120   0.568
    3SOL     OW    7   0.500   0.500   0.500
    3SOL    HW1    8   0.550   0.550   0.550
    3SOL    HW2    9   0.450   0.450   0.450
   1.86206   1.86206   1.86206
";

    fn run_with(args: &[&str], dir: &Path) -> Result<String> {
        let input = dir.join("in.gro");
        let output = dir.join("out.gro");
        fs::write(&input, INPUT).unwrap();

        let mut full = vec![
            "grosub".to_string(),
            "--input".to_string(),
            input.to_string_lossy().into_owned(),
            "--output".to_string(),
            output.to_string_lossy().into_owned(),
        ];
        full.extend(args.iter().map(|a| a.to_string()));
        let cli = Cli::try_parse_from(full).unwrap();

        run(&cli)?;
        Ok(fs::read_to_string(output).unwrap())
    }

    #[test]
    fn replaces_oxygens_and_keeps_envelope() {
        let dir = tempdir().unwrap();
        let text = run_with(
            &["-n", "2", "-o", "OW", "--field", "atom_name", "-r", "NA", "-a", "NA", "--seed", "4"],
            dir.path(),
        )
        .unwrap();

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "Three waters");
        assert_eq!(lines[1], "9");
        assert_eq!(lines[11], "   1.86206   1.86206   1.86206");
        // The anchor is the first oxygen, so both substituted atoms lead the list.
        assert_eq!(&lines[2][5..15], "NA      NA");
        assert_eq!(&lines[3][5..15], "NA      NA");
        assert_eq!(text.matches("NA      NA").count(), 2);
        for (i, line) in lines[2..11].iter().enumerate() {
            assert_eq!(line[15..20].trim(), (i + 1).to_string());
        }
    }

    #[test]
    fn same_seed_gives_identical_output() {
        let dir = tempdir().unwrap();
        let args = ["-n", "3", "-o", "SOL", "-r", "ION", "-a", "CL", "--seed", "99"];
        let first = run_with(&args, dir.path()).unwrap();
        let second = run_with(&args, dir.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn too_many_substitutions_fail() {
        let dir = tempdir().unwrap();
        let result = run_with(
            &["-n", "4", "-o", "OW", "--field", "atom_name", "-r", "NA", "-a", "NA"],
            dir.path(),
        );
        assert!(matches!(result, Err(CliError::GroSub(_))));
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.gro");
        fs::write(&input, "Title\n1\n  xx1SOL     OW    1   0.1   0.1   0.1\nbox\n").unwrap();

        let cli = Cli::try_parse_from([
            "grosub",
            "--input",
            input.to_str().unwrap(),
            "-n",
            "1",
            "-o",
            "SOL",
            "-r",
            "ION",
            "-a",
            "NA",
        ])
        .unwrap();

        assert!(matches!(run(&cli), Err(CliError::FileParsing { .. })));
    }
}
