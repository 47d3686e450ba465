use std::error::Error;

use serde::Serialize;

use super::InitCmd;
use crate::bootstrap::{Bootstrap, ScriptBuffer};
use crate::commands::{Execute, ExecutionContext, load_all_descriptions};
use crate::generator::SqlGenerator;
use crate::spec::TypeDescription;

/// Statements produced by a bootstrap run, in execution order.
///
/// Shared by the init and drop commands.
#[derive(Debug, Default, Serialize)]
pub struct ScriptResult {
    pub dialect: String,
    pub database: String,
    pub statements: Vec<String>,
}

impl Execute for InitCmd {
    type Output = ScriptResult;

    fn execute(self, ctx: &ExecutionContext) -> Result<Self::Output, Box<dyn Error>> {
        let database = ctx.database_name(self.database.as_deref())?;
        let descriptions = load_all_descriptions(&self.files)?;
        let described: Vec<&dyn TypeDescription> = descriptions
            .iter()
            .map(|d| d as &dyn TypeDescription)
            .collect();

        let mut bootstrap = Bootstrap::new(ctx.dialect.clone(), &database, ScriptBuffer::new())?;
        bootstrap.initialize(&described)?;

        Ok(ScriptResult {
            dialect: ctx.dialect.dialect_name().to_string(),
            database,
            statements: bootstrap.into_executor().into_statements(),
        })
    }
}
