//! Command-line settings
//!
//! Defines the CLI arguments and subcommands of the schema inspector.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// filestager-conf - Inspect the FileStager configuration schema
#[derive(Parser, Debug, Clone)]
#[command(name = "filestager-conf")]
#[command(author = "FileStager Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect FileStager component declarations and registry")]
#[command(long_about = r#"
Publishes the configuration schema of the FileStager plugin: the declared
components, their properties and defaults, and the registry entries a host
framework uses to find them.

Examples:
  filestager-conf list                        # Declared components
  filestager-conf show FileStagerSvc          # Properties of one component
  filestager-conf registry                    # Registry entries
  filestager-conf schema --format json        # Full schema as JSON
  filestager-conf check joboptions.json       # Apply job options
"#)]
pub struct CliArgs {
    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format for reports
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List declared components
    #[command(name = "list")]
    List,

    /// Show the properties of one component
    #[command(name = "show")]
    Show {
        /// Configurable or type name (e.g. Gaudi::StagedIODataManager)
        name: String,
    },

    /// Show registry entries
    #[command(name = "registry")]
    Registry,

    /// Export the complete schema
    #[command(name = "schema")]
    Schema,

    /// Apply a job options file and print effective values
    #[command(name = "check")]
    Check {
        /// Job options file (JSON)
        options: PathBuf,

        /// Only print overridden properties
        #[arg(long)]
        changed_only: bool,
    },
}

/// Output format for reports
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format
    Json,
}

impl CliArgs {
    /// Default log filter for the verbosity flag
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show() {
        let args = CliArgs::try_parse_from(["filestager-conf", "show", "FileStagerSvc"]).unwrap();
        assert!(matches!(args.command, Commands::Show { ref name } if name == "FileStagerSvc"));
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.log_filter(), "warn");
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args =
            CliArgs::try_parse_from(["filestager-conf", "schema", "--format", "json", "-vv"]).unwrap();
        assert!(matches!(args.command, Commands::Schema));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.log_filter(), "debug");
    }

    #[test]
    fn test_parse_check() {
        let args = CliArgs::try_parse_from([
            "filestager-conf",
            "check",
            "opts.json",
            "--changed-only",
        ])
        .unwrap();
        match args.command {
            Commands::Check { options, changed_only } => {
                assert_eq!(options, PathBuf::from("opts.json"));
                assert!(changed_only);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_missing_subcommand_fails() {
        assert!(CliArgs::try_parse_from(["filestager-conf"]).is_err());
    }
}
