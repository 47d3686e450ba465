use std::error::Error;

use super::DropCmd;
use crate::bootstrap::{Bootstrap, ScriptBuffer};
use crate::commands::{Execute, ExecutionContext, ScriptResult};
use crate::generator::SqlGenerator;

impl Execute for DropCmd {
    type Output = ScriptResult;

    fn execute(self, ctx: &ExecutionContext) -> Result<Self::Output, Box<dyn Error>> {
        let database = ctx.database_name(self.database.as_deref())?;

        let mut bootstrap = Bootstrap::new(ctx.dialect.clone(), &database, ScriptBuffer::new())?;
        if !bootstrap.deinitialize()? {
            log::warn!("{} has no drop statement for {}", ctx.dialect.dialect_name(), database);
        }

        Ok(ScriptResult {
            dialect: ctx.dialect.dialect_name().to_string(),
            database,
            statements: bootstrap.into_executor().into_statements(),
        })
    }
}
