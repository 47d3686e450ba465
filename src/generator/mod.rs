//! DDL generators.
//!
//! Renders `ClassSpecification` definitions into a target dialect's
//! `CREATE TABLE` syntax. Each dialect owns a fixed logical → physical type
//! table and its identifier quoting; the rendering algorithm is shared.
//!
//! Output format:
//! ```sql
//! CREATE TABLE name (`col` TYPE NOT NULL, ..., PRIMARY KEY (`id`), UNIQUE (`col`) extras)
//! ```

mod mysql;
mod postgres;
mod sqlite;

pub use mysql::{MYSQL_TYPES, MySql};
pub use postgres::{POSTGRES_TYPES, Postgres};
pub use sqlite::{SQLITE_TYPES, Sqlite};

use std::sync::LazyLock;

use clap::ValueEnum;
use enum_dispatch::enum_dispatch;
use regex::Regex;

use crate::error::DdlError;
use crate::spec::{ClassSpecification, FieldType, TypeDescription};

static PLAIN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("valid plain name regex"));

/// True when `value` can be interpolated into SQL unquoted.
pub fn is_plain_name(value: &str) -> bool {
    PLAIN_NAME.is_match(value)
}

/// Reject a dialect setting that is not a plain name.
pub(crate) fn check_setting(setting: &str, value: &str) -> Result<(), DdlError> {
    if is_plain_name(value) {
        Ok(())
    } else {
        Err(DdlError::invalid_setting(setting, value))
    }
}

/// Logical type → column type literal pairs for one dialect.
pub type TypeTable = &'static [(FieldType, &'static str)];

/// A SQL dialect that can render table specifications.
///
/// Implementors supply the type table and quoting; the provided methods
/// implement the rendering itself.
#[enum_dispatch]
pub trait SqlGenerator {
    /// Short dialect name for logging and output (e.g., "mysql").
    fn dialect_name(&self) -> &'static str;

    /// The dialect's logical → physical type table.
    fn type_table(&self) -> TypeTable;

    /// Character used to quote identifiers.
    fn quote_char(&self) -> char {
        '`'
    }

    /// Quote one identifier, doubling any embedded quote character.
    fn quote_identifier(&self, identifier: &str) -> String {
        let quote = self.quote_char();
        let mut quoted = String::with_capacity(identifier.len() + 2);
        quoted.push(quote);
        for c in identifier.chars() {
            if c == quote {
                quoted.push(quote);
            }
            quoted.push(c);
        }
        quoted.push(quote);
        quoted
    }

    /// Quote each name and join with `, `.
    fn quote_list(&self, identifiers: &[String]) -> String {
        identifiers
            .iter()
            .map(|i| self.quote_identifier(i))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Look up the column type literal for a logical type.
    ///
    /// # Errors
    /// Returns `DdlError::UnknownFieldType` if the type table has no entry.
    fn physical_type(&self, field_type: FieldType) -> Result<&'static str, DdlError> {
        self.type_table()
            .iter()
            .find(|(logical, _)| *logical == field_type)
            .map(|(_, physical)| *physical)
            .ok_or_else(|| DdlError::UnknownFieldType(field_type.name().to_string()))
    }

    /// Render a `CREATE TABLE` statement for the specification.
    ///
    /// Clauses are emitted as: every column in mapping order, one primary key
    /// clause, then constraints in declared order. Any unmapped field type
    /// aborts the render.
    fn generate_create_query(&self, spec: &ClassSpecification) -> Result<String, DdlError> {
        let mut definitions =
            Vec::with_capacity(spec.mappings().len() + 1 + spec.constraints().len());

        for mapping in spec.mappings() {
            let db_type = self.physical_type(mapping.field_type)?;
            let null_clause = if mapping.nullable {
                "NULL DEFAULT NULL"
            } else {
                "NOT NULL"
            };
            definitions.push(format!(
                "{} {} {}",
                self.quote_identifier(&mapping.field_name),
                db_type,
                null_clause
            ));
        }

        definitions.push(format!("PRIMARY KEY ({})", self.quote_list(spec.id_fields())));

        for constraint in spec.constraints() {
            let clause = format!(
                "{} ({}) {}",
                constraint.kind.to_uppercase(),
                self.quote_list(&constraint.field_names),
                constraint.extras.as_deref().unwrap_or("")
            );
            definitions.push(clause.trim().to_string());
        }

        log::debug!(
            "Rendered {} table '{}' ({} clauses)",
            self.dialect_name(),
            spec.name(),
            definitions.len()
        );

        Ok(format!("CREATE TABLE {} ({})", spec.name(), definitions.join(", ")))
    }

    /// Analyze a record-type description and render it.
    fn convert_class_to_create_query(
        &self,
        description: &dyn TypeDescription,
    ) -> Result<String, DdlError> {
        let spec = description.analyze()?;
        self.generate_create_query(&spec)
    }

    /// Check the settings interpolated into database statements.
    ///
    /// # Errors
    /// Returns `DdlError::InvalidSetting` for any value that is not a plain name.
    fn validate_settings(&self) -> Result<(), DdlError> {
        Ok(())
    }

    /// Statement creating the database, if the dialect has one.
    fn create_database_query(&self, _database: &str) -> Option<String> {
        None
    }

    /// Statement dropping the database, if the dialect has one.
    fn drop_database_query(&self, _database: &str) -> Option<String> {
        None
    }
}

/// Every supported dialect, dispatching `SqlGenerator` to the concrete type.
#[enum_dispatch(SqlGenerator)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialect {
    MySql,
    Postgres,
    Sqlite,
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::MySql(MySql::default())
    }
}

/// Dialect selector for the CLI and config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DialectKind {
    /// MySQL / MariaDB
    #[default]
    Mysql,
    /// PostgreSQL
    Postgres,
    /// SQLite
    Sqlite,
}

impl DialectKind {
    /// Build the dialect with default settings.
    pub fn into_dialect(self) -> Dialect {
        match self {
            DialectKind::Mysql => MySql::default().into(),
            DialectKind::Postgres => Postgres::default().into(),
            DialectKind::Sqlite => Sqlite.into(),
        }
    }
}
