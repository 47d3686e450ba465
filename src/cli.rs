//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and shared options.
//! Individual command definitions are in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Command;
use crate::config::DEFAULT_CONFIG_FILE;
use crate::generator::DialectKind;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render record descriptions as CREATE TABLE statements", long_about = None)]
pub struct Args {
    /// Target SQL dialect (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub dialect: Option<DialectKind>,

    /// Path to the JSON config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    pub config: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Log debug details to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Default log filter for the verbosity flags.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_defaults() {
        let args = Args::try_parse_from(["schema_ddl", "types"]).unwrap();
        assert_eq!(args.dialect, None);
        assert_eq!(args.config, PathBuf::from(".schema_ddl.json"));
        assert_eq!(args.format, OutputFormat::Table);
        assert_eq!(args.log_filter(), "info");
    }

    #[rstest]
    #[case(&["schema_ddl", "-v", "types"], "debug")]
    #[case(&["schema_ddl", "-q", "types"], "error")]
    fn test_log_filter(#[case] argv: &[&str], #[case] expected: &str) {
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.log_filter(), expected);
    }

    #[rstest]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Args::try_parse_from(["schema_ddl", "-v", "-q", "types"]).is_err());
    }

    #[rstest]
    #[case("mysql", DialectKind::Mysql)]
    #[case("postgres", DialectKind::Postgres)]
    #[case("sqlite", DialectKind::Sqlite)]
    fn test_dialect_values(#[case] value: &str, #[case] expected: DialectKind) {
        let args = Args::try_parse_from(["schema_ddl", "-d", value, "types"]).unwrap();
        assert_eq!(args.dialect, Some(expected));
    }

    #[rstest]
    fn test_unknown_command_rejected() {
        assert!(Args::try_parse_from(["schema_ddl", "migrate"]).is_err());
    }
}
