//! Output formatting for create-table command results.

use super::execute::CreateTableResult;
use crate::output::Outputable;

impl Outputable for CreateTableResult {
    fn to_table(&self) -> String {
        if self.tables.is_empty() {
            return "-- No record descriptions found.".to_string();
        }

        self.tables
            .iter()
            .map(|t| format!("{};", t.ddl))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
