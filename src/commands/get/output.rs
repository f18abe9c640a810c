//! Output formatting for GET/POST results.

use super::execute::ResponseResult;
use crate::output::Outputable;

impl Outputable for ResponseResult {
    fn to_table(&self) -> String {
        self.body.clone()
    }
}
