//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - `execute.rs`: the `Execute` impl and its result type
//! - `output.rs`: the `Outputable` impl for the result type

mod create_table;
mod drop;
mod init;
mod types;

pub use create_table::{CreateTableCmd, CreateTableResult, TableDdl};
pub use drop::DropCmd;
pub use init::{InitCmd, ScriptResult};
pub use types::{TypeRow, TypesCmd, TypesResult};

use clap::Subcommand;
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::generator::Dialect;
use crate::output::{OutputFormat, Outputable};
use crate::spec::{RecordDescription, load_descriptions};

/// Settings shared by every command, resolved from flags and the config file.
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    /// Target dialect
    pub dialect: Dialect,
    /// Database name from the config file, if any
    pub database: Option<String>,
}

impl ExecutionContext {
    pub fn new(dialect: Dialect, database: Option<String>) -> Self {
        Self { dialect, database }
    }

    /// Database name from the command line, falling back to the config file.
    pub fn database_name(&self, explicit: Option<&str>) -> Result<String, Box<dyn Error>> {
        explicit
            .map(str::to_string)
            .or_else(|| self.database.clone())
            .ok_or_else(|| {
                "No database name given. Pass --database or set \"database\" in .schema_ddl.json".into()
            })
    }
}

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, ctx: &ExecutionContext) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print CREATE TABLE statements for record description files
    CreateTable(CreateTableCmd),

    /// Print the script that creates the database and all tables
    Init(InitCmd),

    /// Print the script that drops the database
    Drop(DropCmd),

    /// Show the dialect's logical to column type table
    Types(TypesCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, ctx: &ExecutionContext, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::CreateTable(cmd) => {
                let result = cmd.execute(ctx)?;
                Ok(result.format(format))
            }
            Command::Init(cmd) => {
                let result = cmd.execute(ctx)?;
                Ok(result.format(format))
            }
            Command::Drop(cmd) => {
                let result = cmd.execute(ctx)?;
                Ok(result.format(format))
            }
            Command::Types(cmd) => {
                let result = cmd.execute(ctx)?;
                Ok(result.format(format))
            }
        }
    }
}

/// Value parser for description file arguments.
pub(crate) fn validate_file_exists(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("File not found: {}", path.display()))
    }
}

/// Load every description from every file, preserving file and entry order.
pub(crate) fn load_all_descriptions(files: &[PathBuf]) -> Result<Vec<RecordDescription>, Box<dyn Error>> {
    let mut descriptions = Vec::new();
    for file in files {
        descriptions.extend(load_descriptions(Path::new(file))?);
    }
    Ok(descriptions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_database_name_prefers_explicit() {
        let ctx = ExecutionContext::new(Dialect::default(), Some("from_config".to_string()));
        assert_eq!(ctx.database_name(Some("cli")).unwrap(), "cli");
        assert_eq!(ctx.database_name(None).unwrap(), "from_config");
    }

    #[rstest]
    fn test_database_name_missing() {
        let ctx = ExecutionContext::default();
        let err = ctx.database_name(None).unwrap_err();
        assert!(err.to_string().contains("--database"));
    }
}
