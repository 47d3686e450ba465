//! Output formatting for types command results.

use super::execute::TypesResult;
use crate::output::Outputable;

impl Outputable for TypesResult {
    fn to_table(&self) -> String {
        let width = self
            .types
            .iter()
            .map(|t| t.logical.name().len())
            .max()
            .unwrap_or(0)
            .max("Logical".len());

        let mut lines = Vec::new();
        lines.push(format!("Types ({}):", self.dialect));
        lines.push(String::new());
        lines.push(format!("  {:<width$}  Column", "Logical"));
        for row in &self.types {
            lines.push(format!("  {:<width$}  {}", row.logical.name(), row.physical));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::super::execute::TypeRow;
    use super::*;
    use crate::spec::FieldType;
    use rstest::{fixture, rstest};

    const SMALL_TABLE: &str = "\
Types (mysql):

  Logical   Column
  UUID      VARCHAR(36)
  LongText  LONGTEXT";

    #[fixture]
    fn small() -> TypesResult {
        TypesResult {
            dialect: "mysql".to_string(),
            types: vec![
                TypeRow {
                    logical: FieldType::Uuid,
                    physical: "VARCHAR(36)".to_string(),
                },
                TypeRow {
                    logical: FieldType::LongText,
                    physical: "LONGTEXT".to_string(),
                },
            ],
        }
    }

    crate::output_table_test! {
        test_name: test_to_table,
        fixture: small,
        fixture_type: TypesResult,
        expected: SMALL_TABLE,
    }

    crate::output_json_test! {
        test_name: test_format_json,
        fixture: small,
        fixture_type: TypesResult,
        assertions: {
            "dialect": "mysql",
            "types": serde_json::json!([
                {"logical": "UUID", "physical": "VARCHAR(36)"},
                {"logical": "LongText", "physical": "LONGTEXT"},
            ]),
        },
    }
}
