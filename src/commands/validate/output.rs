//! Output formatting for validate command results.

use super::execute::ValidationReport;
use crate::output::Outputable;

impl Outputable for ValidationReport {
    fn to_table(&self) -> String {
        let kind = serde_json::to_value(self.kind)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();

        let verdict = match (&self.value, &self.error) {
            (Some(value), _) => format!("Valid: {}", value),
            (None, Some(error)) => format!("Invalid: {}", error),
            (None, None) => "Invalid".to_string(),
        };

        format!("Validate {}: {}\n\n{}", kind, self.input, verdict)
    }
}
