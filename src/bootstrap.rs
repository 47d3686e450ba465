//! Database bootstrap: create the database and every table, or drop it.
//!
//! Statements are handed to a `StatementExecutor`; this module never opens a
//! connection itself. `ScriptBuffer` records statements so they can be printed
//! as a script or inspected in tests.

use std::error::Error;

use crate::generator::{Dialect, SqlGenerator, is_plain_name};
use crate::spec::TypeDescription;

/// Execution collaborator that receives rendered statements in order.
pub trait StatementExecutor {
    /// Execute one statement.
    fn execute(&mut self, statement: &str) -> Result<(), Box<dyn Error>>;
}

/// Executor that records statements instead of running them.
#[derive(Debug, Default, Clone)]
pub struct ScriptBuffer {
    statements: Vec<String>,
}

impl ScriptBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded statements in execution order
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn into_statements(self) -> Vec<String> {
        self.statements
    }

    /// Render the recorded statements as a `;`-terminated script.
    pub fn to_script(&self) -> String {
        self.statements
            .iter()
            .map(|s| format!("{};", s))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl StatementExecutor for ScriptBuffer {
    fn execute(&mut self, statement: &str) -> Result<(), Box<dyn Error>> {
        self.statements.push(statement.to_string());
        Ok(())
    }
}

/// Creates or drops one database through an executor.
pub struct Bootstrap<E: StatementExecutor> {
    dialect: Dialect,
    database: String,
    executor: E,
}

impl<E: StatementExecutor> Bootstrap<E> {
    /// # Errors
    ///
    /// Returns an error if the database name or any dialect setting contains
    /// anything other than ASCII letters, digits and underscores. Both are
    /// emitted unquoted.
    pub fn new(dialect: Dialect, database: &str, executor: E) -> Result<Self, Box<dyn Error>> {
        dialect.validate_settings()?;
        if !is_plain_name(database) {
            return Err(format!(
                "Invalid database name '{}': use letters, digits and underscores only",
                database
            )
            .into());
        }
        Ok(Self {
            dialect,
            database: database.to_string(),
            executor,
        })
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn into_executor(self) -> E {
        self.executor
    }

    /// Create the database (when the dialect has such a statement) and one
    /// table per description, in the given order.
    ///
    /// Every table is rendered before anything is executed, so an unknown
    /// field type or invalid description leaves the executor untouched.
    /// Returns the number of tables created.
    pub fn initialize(&mut self, descriptions: &[&dyn TypeDescription]) -> Result<usize, Box<dyn Error>> {
        let tables = descriptions
            .iter()
            .map(|d| self.dialect.convert_class_to_create_query(*d))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(create_db) = self.dialect.create_database_query(&self.database) {
            log::info!("Creating database {}", self.database);
            self.executor.execute(&create_db)?;
        }

        for ddl in &tables {
            self.executor.execute(ddl)?;
        }
        log::info!(
            "Created {} table(s) in {} ({})",
            tables.len(),
            self.database,
            self.dialect.dialect_name()
        );

        Ok(tables.len())
    }

    /// Drop the database. Intended for tests and throwaway environments.
    ///
    /// Returns false when the dialect has no drop statement.
    pub fn deinitialize(&mut self) -> Result<bool, Box<dyn Error>> {
        match self.dialect.drop_database_query(&self.database) {
            Some(drop_db) => {
                log::info!("Dropping database {}", self.database);
                self.executor.execute(&drop_db)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
