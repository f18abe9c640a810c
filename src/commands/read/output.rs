//! Output formatting for read command results.

use super::execute::RowsResult;
use crate::output::{render_columns, Outputable};

impl Outputable for RowsResult {
    fn to_table(&self) -> String {
        let mut lines = vec![format!("Query: {}", self.statement), String::new()];

        let Some(first) = self.rows.first() else {
            lines.push("No rows returned.".to_string());
            return lines.join("\n");
        };

        lines.push(format!("Rows ({}):", self.rows.len()));

        let mut cells = vec![first.columns().map(str::to_string).collect::<Vec<_>>()];
        cells.extend(
            self.rows
                .iter()
                .map(|row| row.values().map(|v| v.to_string()).collect()),
        );
        lines.extend(render_columns(&cells));

        lines.join("\n")
    }
}
