use std::error::Error;

use serde::Serialize;

use super::CreateTableCmd;
use crate::commands::{Execute, ExecutionContext, load_all_descriptions};
use crate::generator::SqlGenerator;

/// One rendered table
#[derive(Debug, Clone, Serialize)]
pub struct TableDdl {
    pub table: String,
    pub ddl: String,
}

/// Result of the create-table command execution
#[derive(Debug, Default, Serialize)]
pub struct CreateTableResult {
    pub dialect: String,
    pub tables: Vec<TableDdl>,
}

impl Execute for CreateTableCmd {
    type Output = CreateTableResult;

    fn execute(self, ctx: &ExecutionContext) -> Result<Self::Output, Box<dyn Error>> {
        let descriptions = load_all_descriptions(&self.files)?;

        let tables = descriptions
            .iter()
            .map(|d| {
                let ddl = ctx.dialect.convert_class_to_create_query(d)?;
                Ok(TableDdl {
                    table: d.name.clone(),
                    ddl,
                })
            })
            .collect::<Result<Vec<_>, Box<dyn Error>>>()?;

        Ok(CreateTableResult {
            dialect: ctx.dialect.dialect_name().to_string(),
            tables,
        })
    }
}
