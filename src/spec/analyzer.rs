//! Analyzers that turn record-type descriptions into specifications.
//!
//! A `TypeDescription` is anything a generator can analyze into a
//! `ClassSpecification`. Record descriptions are usually loaded from JSON:
//!
//! ```json
//! {
//!   "name": "users",
//!   "fields": [
//!     {"name": "id", "type": "UUID", "primary_key": true},
//!     {"name": "email", "type": "String"},
//!     {"name": "bio", "type": "Text", "nullable": true}
//!   ],
//!   "constraints": [{"type": "unique", "fields": ["email"]}]
//! }
//! ```

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::definition::{ClassSpecification, Constraint, FieldMapping, FieldType};
use crate::error::DdlError;

/// Something that can be analyzed into a table specification.
pub trait TypeDescription {
    fn analyze(&self) -> Result<ClassSpecification, DdlError>;
}

impl TypeDescription for ClassSpecification {
    fn analyze(&self) -> Result<ClassSpecification, DdlError> {
        Ok(self.clone())
    }
}

/// A column entry in a record description.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDescription {
    pub name: String,

    /// Logical type tag name (e.g., "UUID", "String")
    #[serde(rename = "type")]
    pub field_type: String,

    #[serde(default)]
    pub nullable: bool,

    /// Part of the primary key when `id_fields` is not given
    #[serde(default)]
    pub primary_key: bool,
}

/// A constraint entry in a record description.
#[derive(Debug, Clone, Deserialize)]
pub struct ConstraintDescription {
    #[serde(rename = "type")]
    pub kind: String,

    pub fields: Vec<String>,

    #[serde(default)]
    pub extras: Option<String>,
}

/// Declarative description of one record type.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordDescription {
    pub name: String,

    pub fields: Vec<FieldDescription>,

    /// Explicit primary key. Falls back to fields flagged `primary_key`.
    #[serde(default)]
    pub id_fields: Option<Vec<String>>,

    #[serde(default)]
    pub constraints: Vec<ConstraintDescription>,
}

impl TypeDescription for RecordDescription {
    fn analyze(&self) -> Result<ClassSpecification, DdlError> {
        let mappings = self
            .fields
            .iter()
            .map(|f| {
                let field_type = f.field_type.parse::<FieldType>()?;
                Ok(FieldMapping::new(&f.name, field_type, f.nullable))
            })
            .collect::<Result<Vec<_>, DdlError>>()?;

        let id_fields = match &self.id_fields {
            Some(ids) => ids.clone(),
            None => self
                .fields
                .iter()
                .filter(|f| f.primary_key)
                .map(|f| f.name.clone())
                .collect(),
        };

        let constraints = self
            .constraints
            .iter()
            .map(|c| Constraint::new(&c.kind, &c.fields, c.extras.as_deref()))
            .collect();

        ClassSpecification::new(&self.name, mappings, id_fields, constraints)
    }
}

/// Parse JSON holding either one record description or an array of them.
///
/// `source_name` is used only for error messages.
pub fn parse_descriptions(source_name: &str, content: &str) -> Result<Vec<RecordDescription>, DdlError> {
    let invalid = |e: serde_json::Error| DdlError::invalid_description(source_name, e.to_string());

    let value: serde_json::Value = serde_json::from_str(content).map_err(invalid)?;
    if value.is_array() {
        serde_json::from_value(value).map_err(invalid)
    } else {
        serde_json::from_value(value).map(|d| vec![d]).map_err(invalid)
    }
}

/// Load record descriptions from a JSON file.
pub fn load_descriptions(path: &Path) -> Result<Vec<RecordDescription>, Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let descriptions = parse_descriptions(&path.display().to_string(), &content)?;
    log::debug!("Loaded {} record description(s) from {}", descriptions.len(), path.display());
    Ok(descriptions)
}
