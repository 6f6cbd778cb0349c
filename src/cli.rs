use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::io::output::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human-readable report
    Terminal,
    /// JSON report
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Terminal => OutputFormat::Terminal,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "modelschema")]
#[command(about = "Infer property schemas from declared accessor methods", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the schema of one or more types from a catalog
    Extract {
        /// Type catalog (.json or .toml)
        catalog: PathBuf,

        /// Root type to extract (repeatable)
        #[arg(short = 't', long = "type", required = true)]
        types: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: FormatArg,

        /// Configuration file (defaults to the nearest .modelschema.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write a default .modelschema.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extract() {
        let cli = Cli::try_parse_from([
            "modelschema", "-vv", "extract", "types.toml", "--type", "Person", "-t", "Address",
            "--format", "json",
        ])
        .unwrap();

        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Extract { types, format, .. } => {
                assert_eq!(types, vec!["Person", "Address"]);
                assert_eq!(format, FormatArg::Json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_extract_requires_type() {
        assert!(Cli::try_parse_from(["modelschema", "extract", "types.toml"]).is_err());
    }
}
