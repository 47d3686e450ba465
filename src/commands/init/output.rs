//! Output formatting for bootstrap scripts (init and drop).

use super::execute::ScriptResult;
use crate::output::Outputable;

impl Outputable for ScriptResult {
    fn to_table(&self) -> String {
        if self.statements.is_empty() {
            return format!("-- {} has no statements for database {}", self.dialect, self.database);
        }

        self.statements
            .iter()
            .map(|s| format!("{};", s))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
