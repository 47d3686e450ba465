mod execute;
mod output;

pub use execute::{CreateTableResult, TableDdl};

use std::path::PathBuf;

use clap::Args;

use super::validate_file_exists;

/// Print CREATE TABLE statements for record description files
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_ddl create-table users.json                # One statement per description
  schema_ddl create-table blog.json -d postgres     # Render for PostgreSQL
  schema_ddl create-table *.json -f json            # Statements as JSON")]
pub struct CreateTableCmd {
    /// Record description files (one description or an array per file)
    #[arg(required = true, value_parser = validate_file_exists)]
    pub files: Vec<PathBuf>,
}
