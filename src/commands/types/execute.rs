use std::error::Error;

use serde::Serialize;

use super::TypesCmd;
use crate::commands::{Execute, ExecutionContext};
use crate::generator::SqlGenerator;
use crate::spec::FieldType;

/// One logical type and the column type it renders to
#[derive(Debug, Clone, Serialize)]
pub struct TypeRow {
    pub logical: FieldType,
    pub physical: String,
}

/// Result of the types command execution
#[derive(Debug, Default, Serialize)]
pub struct TypesResult {
    pub dialect: String,
    pub types: Vec<TypeRow>,
}

impl Execute for TypesCmd {
    type Output = TypesResult;

    fn execute(self, ctx: &ExecutionContext) -> Result<Self::Output, Box<dyn Error>> {
        let types = FieldType::ALL
            .into_iter()
            .map(|logical| {
                let physical = ctx.dialect.physical_type(logical)?;
                Ok(TypeRow {
                    logical,
                    physical: physical.to_string(),
                })
            })
            .collect::<Result<Vec<_>, Box<dyn Error>>>()?;

        Ok(TypesResult {
            dialect: ctx.dialect.dialect_name().to_string(),
            types,
        })
    }
}
