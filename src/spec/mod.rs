//! Dialect-agnostic table specifications.
//!
//! # Overview
//!
//! 1. **Core Types** (`definition.rs`):
//!    - `FieldType` - closed set of logical column types
//!    - `FieldMapping` - one column (name, type, nullability)
//!    - `Constraint` - a secondary constraint over one or more columns
//!    - `ClassSpecification` - a validated table description
//!
//! 2. **Analyzers** (`analyzer.rs`):
//!    - `TypeDescription` - anything that can be turned into a `ClassSpecification`
//!    - `RecordDescription` - JSON record descriptions loaded from files
//!
//! # Logical Types
//!
//! | Tag | MySQL | PostgreSQL | SQLite |
//! |-----|-------|------------|--------|
//! | UUID | VARCHAR(36) | UUID | TEXT |
//! | Boolean | TINYINT(1) | BOOLEAN | INTEGER |
//! | DateTime | DATETIME | TIMESTAMP | TEXT |
//! | Integer | INTEGER(11) | INTEGER | INTEGER |
//! | Float | DOUBLE | DOUBLE PRECISION | REAL |
//! | String | VARCHAR(255) | VARCHAR(255) | TEXT |
//! | Text | TEXT | TEXT | TEXT |
//! | LongText | LONGTEXT | TEXT | TEXT |

mod analyzer;
mod definition;

pub use analyzer::{
    ConstraintDescription, FieldDescription, RecordDescription, TypeDescription,
    load_descriptions, parse_descriptions,
};
pub use definition::{ClassSpecification, Constraint, FieldMapping, FieldType, SpecBuilder};
