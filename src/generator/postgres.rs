//! PostgreSQL DDL generator.

use super::{SqlGenerator, TypeTable, check_setting};
use crate::error::DdlError;
use crate::spec::FieldType;

/// PostgreSQL column types for each logical type.
pub const POSTGRES_TYPES: TypeTable = &[
    (FieldType::Uuid, "UUID"),
    (FieldType::Boolean, "BOOLEAN"),
    (FieldType::DateTime, "TIMESTAMP"),
    (FieldType::Integer, "INTEGER"),
    (FieldType::Float, "DOUBLE PRECISION"),
    (FieldType::String, "VARCHAR(255)"),
    (FieldType::Text, "TEXT"),
    (FieldType::LongText, "TEXT"),
];

/// PostgreSQL generator. Quotes identifiers with double quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Postgres {
    /// Encoding used when creating the database
    pub encoding: String,
}

impl Default for Postgres {
    fn default() -> Self {
        Self {
            encoding: "UTF8".to_string(),
        }
    }
}

impl SqlGenerator for Postgres {
    fn dialect_name(&self) -> &'static str {
        "postgres"
    }

    fn type_table(&self) -> TypeTable {
        POSTGRES_TYPES
    }

    fn quote_char(&self) -> char {
        '"'
    }

    fn validate_settings(&self) -> Result<(), DdlError> {
        check_setting("encoding", &self.encoding)
    }

    // PostgreSQL has no CREATE DATABASE IF NOT EXISTS.
    fn create_database_query(&self, database: &str) -> Option<String> {
        Some(format!("CREATE DATABASE {} ENCODING '{}'", database, self.encoding))
    }

    fn drop_database_query(&self, database: &str) -> Option<String> {
        Some(format!("DROP DATABASE IF EXISTS {}", database))
    }
}
