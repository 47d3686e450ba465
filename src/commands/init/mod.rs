mod execute;
mod output;

pub use execute::ScriptResult;

use std::path::PathBuf;

use clap::Args;

use super::validate_file_exists;

/// Print the script that creates the database and all tables
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_ddl init --database app users.json blog.json   # CREATE DATABASE + tables
  schema_ddl init users.json                            # Database name from .schema_ddl.json")]
pub struct InitCmd {
    /// Database to create (defaults to "database" in the config file)
    #[arg(long)]
    pub database: Option<String>,

    /// Record description files, in table creation order
    #[arg(required = true, value_parser = validate_file_exists)]
    pub files: Vec<PathBuf>,
}
