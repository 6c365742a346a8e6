use serde::{Deserialize, Serialize};

use crate::Value;

/// Column-ordered result of a warehouse query. Cell values keep whatever
/// JSON shape the driver hands back.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct QueryOutput {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl QueryOutput {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
