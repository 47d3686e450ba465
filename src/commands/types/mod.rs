mod execute;
mod output;

pub use execute::{TypeRow, TypesResult};

use clap::Args;

/// Show the dialect's logical to column type table
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_ddl types                 # MySQL (or configured) type table
  schema_ddl types -d postgres     # PostgreSQL type table")]
pub struct TypesCmd {}
