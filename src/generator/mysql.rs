//! MySQL DDL generator.

use super::{SqlGenerator, TypeTable, check_setting};
use crate::error::DdlError;
use crate::spec::FieldType;

/// MySQL column types for each logical type.
pub const MYSQL_TYPES: TypeTable = &[
    (FieldType::Uuid, "VARCHAR(36)"),
    (FieldType::Boolean, "TINYINT(1)"),
    (FieldType::DateTime, "DATETIME"),
    (FieldType::Integer, "INTEGER(11)"),
    (FieldType::Float, "DOUBLE"),
    (FieldType::String, "VARCHAR(255)"),
    (FieldType::Text, "TEXT"),
    (FieldType::LongText, "LONGTEXT"),
];

/// MySQL generator. Quotes identifiers with backticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MySql {
    /// Character set used when creating the database
    pub charset: String,
    /// Collation used when creating the database
    pub collation: String,
}

impl Default for MySql {
    fn default() -> Self {
        Self {
            charset: "utf8mb4".to_string(),
            collation: "utf8mb4_unicode_ci".to_string(),
        }
    }
}

impl SqlGenerator for MySql {
    fn dialect_name(&self) -> &'static str {
        "mysql"
    }

    fn type_table(&self) -> TypeTable {
        MYSQL_TYPES
    }

    fn validate_settings(&self) -> Result<(), DdlError> {
        check_setting("charset", &self.charset)?;
        check_setting("collation", &self.collation)
    }

    fn create_database_query(&self, database: &str) -> Option<String> {
        Some(format!(
            "CREATE DATABASE IF NOT EXISTS {} CHARACTER SET {} COLLATE {}",
            database, self.charset, self.collation
        ))
    }

    fn drop_database_query(&self, database: &str) -> Option<String> {
        Some(format!("DROP DATABASE IF EXISTS {}", database))
    }
}
