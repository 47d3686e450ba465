//! Output formatting for command results.
//!
//! Supports multiple output formats: plain text (SQL / table), JSON, and toon.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable SQL script or table
    #[default]
    Table,
    /// JSON format
    Json,
    /// Token-efficient toon format
    Toon,
}

/// Trait for types that can be formatted for output
pub trait Outputable: Serialize {
    /// Format as human-readable text
    fn to_table(&self) -> String;

    /// Format according to the specified output format
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
            OutputFormat::Toon => {
                let json_value = serde_json::to_value(self).unwrap_or_default();
                toon::encode(&json_value, None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Serialize)]
    struct Sample {
        name: &'static str,
    }

    impl Outputable for Sample {
        fn to_table(&self) -> String {
            format!("name = {}", self.name)
        }
    }

    #[rstest]
    fn test_table_format_uses_to_table() {
        assert_eq!(Sample { name: "users" }.format(OutputFormat::Table), "name = users");
    }

    #[rstest]
    fn test_json_format() {
        let output = Sample { name: "users" }.format(OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["name"], "users");
    }

    #[rstest]
    fn test_toon_format() {
        let output = Sample { name: "users" }.format(OutputFormat::Toon);
        assert!(output.contains("users"));
    }
}
