//! Error types for specification building and DDL generation.

use thiserror::Error;

/// Errors raised while building a specification or rendering it to DDL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DdlError {
    /// The dialect's type table has no entry for a logical type tag,
    /// or a description names a tag that does not exist.
    #[error("Unknown field type: {0}")]
    UnknownFieldType(String),

    #[error("Invalid specification for table '{table}': {message}")]
    InvalidSpecification { table: String, message: String },

    #[error("Invalid record description in {source_name}: {message}")]
    InvalidDescription { source_name: String, message: String },

    /// A dialect setting that is interpolated into SQL unquoted.
    #[error("Invalid {setting} '{value}': use letters, digits and underscores only")]
    InvalidSetting { setting: String, value: String },
}

impl DdlError {
    /// Create an InvalidSpecification error
    pub fn invalid_spec(table: impl Into<String>, message: impl Into<String>) -> Self {
        DdlError::InvalidSpecification {
            table: table.into(),
            message: message.into(),
        }
    }

    /// Create an InvalidSetting error
    pub fn invalid_setting(setting: impl Into<String>, value: impl Into<String>) -> Self {
        DdlError::InvalidSetting {
            setting: setting.into(),
            value: value.into(),
        }
    }

    /// Create an InvalidDescription error
    pub fn invalid_description(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        DdlError::InvalidDescription {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}
