//! SQLite DDL generator.
//!
//! SQLite uses type affinities, so most logical types collapse to TEXT or
//! INTEGER. A database is a file, so there are no database statements.

use super::{SqlGenerator, TypeTable};
use crate::spec::FieldType;

/// SQLite column types for each logical type.
pub const SQLITE_TYPES: TypeTable = &[
    (FieldType::Uuid, "TEXT"),
    (FieldType::Boolean, "INTEGER"),
    (FieldType::DateTime, "TEXT"),
    (FieldType::Integer, "INTEGER"),
    (FieldType::Float, "REAL"),
    (FieldType::String, "TEXT"),
    (FieldType::Text, "TEXT"),
    (FieldType::LongText, "TEXT"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sqlite;

impl SqlGenerator for Sqlite {
    fn dialect_name(&self) -> &'static str {
        "sqlite"
    }

    fn type_table(&self) -> TypeTable {
        SQLITE_TYPES
    }

    fn quote_char(&self) -> char {
        '"'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::ClassSpecification;
    use rstest::rstest;

    #[rstest]
    fn test_events_table() {
        let spec = ClassSpecification::builder("events")
            .field("id", FieldType::Integer)
            .field("happened_at", FieldType::DateTime)
            .nullable_field("weight", FieldType::Float)
            .id_fields(["id"])
            .constraint("unique", ["happened_at"], Some("ON CONFLICT REPLACE"))
            .build()
            .unwrap();

        assert_eq!(
            Sqlite.generate_create_query(&spec).unwrap(),
            r#"CREATE TABLE events ("id" INTEGER NOT NULL, "happened_at" TEXT NOT NULL, "weight" REAL NULL DEFAULT NULL, PRIMARY KEY ("id"), UNIQUE ("happened_at") ON CONFLICT REPLACE)"#
        );
    }

    #[rstest]
    fn test_no_database_statements() {
        assert_eq!(Sqlite.create_database_query("app"), None);
        assert_eq!(Sqlite.drop_database_query("app"), None);
    }
}
