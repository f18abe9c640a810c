//! Output formatting for setup command results.

use super::execute::SetupResult;
use crate::output::Outputable;

impl Outputable for SetupResult {
    fn to_table(&self) -> String {
        let lines = [
            format!("Credentials written to {}", self.path.display()),
            String::new(),
            format!("  Server:    {}:{}", self.server, self.port),
            format!("  Database:  {}", self.database),
            format!("  User name: {}", self.username),
        ];
        lines.join("\n")
    }
}
