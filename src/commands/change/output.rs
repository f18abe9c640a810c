//! Output formatting for change command results.

use super::execute::ChangeResult;
use crate::output::Outputable;

impl Outputable for ChangeResult {
    fn to_table(&self) -> String {
        let last_insert_id = match self.summary.last_insert_id {
            Some(id) => id.to_string(),
            None => "none".to_string(),
        };

        [
            format!("Change: {}", self.statement),
            String::new(),
            format!("Rows affected:  {}", self.summary.row_count),
            format!("Last insert id: {}", last_insert_id),
        ]
        .join("\n")
    }
}
