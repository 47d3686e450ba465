//! Configuration file handling.
//!
//! This module loads the optional `.schema_ddl.json` file that selects the
//! target dialect, its database settings and a default database name.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DdlError;
use crate::generator::{Dialect, DialectKind, MySql, Postgres, SqlGenerator, Sqlite};

/// Default configuration file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".schema_ddl.json";

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Target dialect and its settings
    #[serde(default)]
    pub dialect: DialectConfigFile,

    /// Database name used by `init` and `drop` when `--database` is omitted
    #[serde(default)]
    pub database: Option<String>,
}

/// Dialect configuration variants.
///
/// JSON format uses a "type" field with lowercase variant names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DialectConfigFile {
    Mysql {
        #[serde(default = "default_charset")]
        charset: String,
        #[serde(default = "default_collation")]
        collation: String,
    },
    Postgres {
        #[serde(default = "default_encoding")]
        encoding: String,
    },
    Sqlite,
}

fn default_charset() -> String {
    "utf8mb4".to_string()
}

fn default_collation() -> String {
    "utf8mb4_unicode_ci".to_string()
}

fn default_encoding() -> String {
    "UTF8".to_string()
}

impl Default for DialectConfigFile {
    fn default() -> Self {
        DialectConfigFile::Mysql {
            charset: default_charset(),
            collation: default_collation(),
        }
    }
}

impl DialectConfigFile {
    /// Convert this configuration to a generator.
    pub fn to_dialect(&self) -> Dialect {
        match self {
            Self::Mysql { charset, collation } => MySql {
                charset: charset.clone(),
                collation: collation.clone(),
            }
            .into(),
            Self::Postgres { encoding } => Postgres {
                encoding: encoding.clone(),
            }
            .into(),
            Self::Sqlite => Sqlite.into(),
        }
    }

    /// Reject settings that cannot be emitted unquoted in database statements.
    pub fn validate(&self) -> Result<(), DdlError> {
        self.to_dialect().validate_settings()
    }

    pub fn kind(&self) -> DialectKind {
        match self {
            Self::Mysql { .. } => DialectKind::Mysql,
            Self::Postgres { .. } => DialectKind::Postgres,
            Self::Sqlite => DialectKind::Sqlite,
        }
    }
}

impl ConfigFile {
    /// Load configuration from `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the JSON is invalid.
    pub fn load_from(path: &Path) -> Result<Option<Self>, Box<dyn Error>> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

        let config: ConfigFile = serde_json::from_str(&content)
            .map_err(|e| format!("Invalid JSON in {}: {}", path.display(), e))?;
        config.dialect.validate()?;

        Ok(Some(config))
    }

    /// Load `.schema_ddl.json` from the current directory.
    pub fn load() -> Result<Option<Self>, Box<dyn Error>> {
        Self::load_from(&PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Pick the dialect: an explicit kind wins, then the config file, then MySQL.
    ///
    /// An explicit kind matching the configured one keeps the configured settings.
    pub fn resolve_dialect(config: Option<&ConfigFile>, explicit: Option<DialectKind>) -> Dialect {
        match (config, explicit) {
            (Some(config), Some(kind)) if config.dialect.kind() == kind => config.dialect.to_dialect(),
            (_, Some(kind)) => kind.into_dialect(),
            (Some(config), None) => config.dialect.to_dialect(),
            (None, None) => Dialect::default(),
        }
    }
}
