use serde::Serialize;

use super::ReadCmd;
use crate::commands::{parse_param, Context, Execute};
use crate::db::{Row, Value};
use crate::error::Result;

/// Rows returned by a read statement
#[derive(Debug, Serialize)]
pub struct RowsResult {
    pub statement: String,
    pub rows: Vec<Row>,
}

impl Execute for ReadCmd {
    type Output = RowsResult;

    fn execute(self, ctx: &Context) -> Result<Self::Output> {
        let params: Vec<Value> = self.params.iter().map(|p| parse_param(p)).collect();
        let rows = ctx.crud()?.read(&self.statement, &params)?;

        Ok(RowsResult {
            statement: self.statement,
            rows,
        })
    }
}
