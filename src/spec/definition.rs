//! Core specification types.
//!
//! Provides a dialect-agnostic description of one table. These types form the
//! input of every generator in `crate::generator`.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::DdlError;

/// Logical column type, independent of any SQL dialect.
///
/// Each generator maps these to its own physical type literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldType {
    #[serde(rename = "UUID")]
    Uuid,
    Boolean,
    DateTime,
    Integer,
    Float,
    String,
    Text,
    LongText,
}

impl FieldType {
    /// Every logical type tag, in declaration order.
    pub const ALL: [FieldType; 8] = [
        FieldType::Uuid,
        FieldType::Boolean,
        FieldType::DateTime,
        FieldType::Integer,
        FieldType::Float,
        FieldType::String,
        FieldType::Text,
        FieldType::LongText,
    ];

    /// Returns the tag name used in descriptions and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Uuid => "UUID",
            FieldType::Boolean => "Boolean",
            FieldType::DateTime => "DateTime",
            FieldType::Integer => "Integer",
            FieldType::Float => "Float",
            FieldType::String => "String",
            FieldType::Text => "Text",
            FieldType::LongText => "LongText",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldType {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| DdlError::UnknownFieldType(s.to_string()))
    }
}

/// One column of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    /// Column name (e.g., "id", "email")
    pub field_name: String,

    /// Logical type of the column
    pub field_type: FieldType,

    /// Whether the column accepts NULL
    pub nullable: bool,
}

impl FieldMapping {
    pub fn new(field_name: impl Into<String>, field_type: FieldType, nullable: bool) -> Self {
        Self {
            field_name: field_name.into(),
            field_type,
            nullable,
        }
    }
}

/// A secondary constraint such as a unique index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    /// Constraint kind (e.g., "unique", "key"). Rendered upper-cased.
    pub kind: String,

    /// Columns covered by the constraint, in order
    pub field_names: Vec<String>,

    /// Trailing clause emitted verbatim (e.g., "USING BTREE")
    pub extras: Option<String>,
}

impl Constraint {
    pub fn new<I, S>(kind: impl Into<String>, field_names: I, extras: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: kind.into(),
            field_names: field_names.into_iter().map(Into::into).collect(),
            extras: extras.map(str::to_string),
        }
    }
}

/// Complete, validated description of one table.
///
/// Only constructible through [`ClassSpecification::new`] or the builder, both
/// of which check that every key and constraint column exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSpecification {
    name: String,
    mappings: Vec<FieldMapping>,
    id_fields: Vec<String>,
    constraints: Vec<Constraint>,
}

impl ClassSpecification {
    /// Build a specification, checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns `DdlError::InvalidSpecification` if:
    /// - the table name is empty
    /// - there are no mappings, or a field name is empty or repeated
    /// - `id_fields` is empty, repeats a name, or names an unknown field
    /// - a constraint has an empty kind, no fields, or names an unknown field
    pub fn new(
        name: impl Into<String>,
        mappings: Vec<FieldMapping>,
        id_fields: Vec<String>,
        constraints: Vec<Constraint>,
    ) -> Result<Self, DdlError> {
        let spec = Self {
            name: name.into(),
            mappings,
            id_fields,
            constraints,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Start a declarative builder for the named table.
    pub fn builder(name: impl Into<String>) -> SpecBuilder {
        SpecBuilder::new(name)
    }

    /// Table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Columns in declaration order
    pub fn mappings(&self) -> &[FieldMapping] {
        &self.mappings
    }

    /// Primary key columns in key order
    pub fn id_fields(&self) -> &[String] {
        &self.id_fields
    }

    /// Secondary constraints in declaration order
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Look up a mapping by field name.
    pub fn mapping(&self, field_name: &str) -> Option<&FieldMapping> {
        self.mappings.iter().find(|m| m.field_name == field_name)
    }

    fn validate(&self) -> Result<(), DdlError> {
        let invalid = |message: String| DdlError::invalid_spec(&self.name, message);

        if self.name.trim().is_empty() {
            return Err(invalid("table name must not be empty".to_string()));
        }
        if self.mappings.is_empty() {
            return Err(invalid("at least one field mapping is required".to_string()));
        }

        let mut seen = HashSet::new();
        for mapping in &self.mappings {
            if mapping.field_name.is_empty() {
                return Err(invalid("field names must not be empty".to_string()));
            }
            if !seen.insert(mapping.field_name.as_str()) {
                return Err(invalid(format!("duplicate field '{}'", mapping.field_name)));
            }
        }

        if self.id_fields.is_empty() {
            return Err(invalid("id_fields must not be empty".to_string()));
        }
        let mut seen_ids = HashSet::new();
        for id in &self.id_fields {
            if !seen.contains(id.as_str()) {
                return Err(invalid(format!("id field '{}' is not a mapped field", id)));
            }
            if !seen_ids.insert(id.as_str()) {
                return Err(invalid(format!("id field '{}' listed twice", id)));
            }
        }

        for constraint in &self.constraints {
            if constraint.kind.trim().is_empty() {
                return Err(invalid("constraint type must not be empty".to_string()));
            }
            if constraint.field_names.is_empty() {
                return Err(invalid(format!(
                    "{} constraint must name at least one field",
                    constraint.kind
                )));
            }
            if let Some(missing) = constraint
                .field_names
                .iter()
                .find(|f| !seen.contains(f.as_str()))
            {
                return Err(invalid(format!(
                    "{} constraint references unknown field '{}'",
                    constraint.kind, missing
                )));
            }
        }

        Ok(())
    }
}

/// Declarative builder for [`ClassSpecification`].
///
/// ```
/// use schema_ddl::spec::{ClassSpecification, FieldType};
///
/// let spec = ClassSpecification::builder("users")
///     .field("id", FieldType::Uuid)
///     .field("email", FieldType::String)
///     .nullable_field("bio", FieldType::Text)
///     .id_fields(["id"])
///     .constraint("unique", ["email"], None)
///     .build()
///     .unwrap();
/// assert_eq!(spec.mappings().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SpecBuilder {
    name: String,
    mappings: Vec<FieldMapping>,
    id_fields: Vec<String>,
    constraints: Vec<Constraint>,
}

impl SpecBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mappings: Vec::new(),
            id_fields: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Add a NOT NULL column.
    pub fn field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.mappings.push(FieldMapping::new(name, field_type, false));
        self
    }

    /// Add a nullable column.
    pub fn nullable_field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.mappings.push(FieldMapping::new(name, field_type, true));
        self
    }

    pub fn mapping(mut self, mapping: FieldMapping) -> Self {
        self.mappings.push(mapping);
        self
    }

    /// Set the primary key columns, replacing any previous ones.
    pub fn id_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.id_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn constraint<I, S>(mut self, kind: impl Into<String>, fields: I, extras: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints.push(Constraint::new(kind, fields, extras));
        self
    }

    pub fn build(self) -> Result<ClassSpecification, DdlError> {
        ClassSpecification::new(self.name, self.mappings, self.id_fields, self.constraints)
    }
}
