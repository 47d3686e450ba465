//! schema_ddl library - record descriptions to CREATE TABLE statements
//!
//! Provides the dialect-agnostic table specification model, per-dialect DDL
//! generators, a bootstrap layer that hands statements to an executor, and
//! the command and output infrastructure behind the `schema_ddl` binary.

pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod spec;

pub use error::DdlError;
pub use generator::{Dialect, DialectKind, SqlGenerator};
pub use spec::{ClassSpecification, Constraint, FieldMapping, FieldType, TypeDescription};

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod fixtures;

#[cfg(test)]
pub mod test_utils;
