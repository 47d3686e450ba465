mod execute;
mod execute_tests;

use clap::Args;

/// Print the script that drops the database
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_ddl drop --database app_test       # DROP DATABASE IF EXISTS app_test
  schema_ddl drop -d sqlite --database app  # SQLite has nothing to drop")]
pub struct DropCmd {
    /// Database to drop (defaults to "database" in the config file)
    #[arg(long)]
    pub database: Option<String>,
}
