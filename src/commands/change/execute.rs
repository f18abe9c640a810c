use serde::Serialize;

use super::ChangeCmd;
use crate::commands::{parse_param, Context, Execute};
use crate::db::{ChangeSummary, Value};
use crate::error::Result;

/// Outcome of a change statement
#[derive(Debug, Serialize)]
pub struct ChangeResult {
    pub statement: String,
    #[serde(flatten)]
    pub summary: ChangeSummary,
}

impl Execute for ChangeCmd {
    type Output = ChangeResult;

    fn execute(self, ctx: &Context) -> Result<Self::Output> {
        let params: Vec<Value> = self.params.iter().map(|p| parse_param(p)).collect();
        let summary = ctx.crud()?.change(&self.statement, &params)?;

        Ok(ChangeResult {
            statement: self.statement,
            summary,
        })
    }
}
