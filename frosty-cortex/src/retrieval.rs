use tracing::warn;

use frosty_core::{ContextPair, ContextRetriever, FrostyError, Value, Warehouse};

use crate::statements;
use crate::CortexWarehouse;

pub const DEFAULT_REFERENCE_TABLE: &str = "REFERENCE_QA";
pub const DEFAULT_EMBEDDING_MODEL: &str = "e5-base-v2";

/// Similarity search over the reference question/answer table, scored by
/// the warehouse's embedding function.
#[derive(Clone)]
pub struct CortexRetriever {
    warehouse: CortexWarehouse,
    reference_table: String,
    embedding_model: String,
}

impl CortexRetriever {
    pub fn new(warehouse: CortexWarehouse) -> Self {
        Self {
            warehouse,
            reference_table: DEFAULT_REFERENCE_TABLE.to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
        }
    }

    pub fn with_reference_table(mut self, table: impl Into<String>) -> Self {
        self.reference_table = table.into();
        self
    }

    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = model.into();
        self
    }
}

#[async_trait::async_trait]
impl ContextRetriever for CortexRetriever {
    /// Top-`k` pairs by cosine similarity, best first. Order among equal
    /// scores is whatever the warehouse returns. A failed or empty ranking
    /// query degrades to no context rather than an error.
    async fn retrieve(
        &self,
        question: &str,
        k: usize,
    ) -> Result<Vec<ContextPair>, FrostyError> {
        let statement = statements::ranking_statement(
            &self.reference_table,
            &self.embedding_model,
            question,
            k,
        );
        let output = match self.warehouse.query(&statement).await {
            Ok(output) => output,
            Err(err) => {
                warn!(error = %err, "retrieval failed, continuing without context");
                return Ok(Vec::new());
            }
        };

        let question_idx = column_index(&output.columns, "QUESTION");
        let answer_idx = column_index(&output.columns, "ANSWER_SQL");
        let (Some(question_idx), Some(answer_idx)) = (question_idx, answer_idx) else {
            warn!("reference table is missing QUESTION/ANSWER_SQL columns");
            return Ok(Vec::new());
        };

        Ok(output
            .rows
            .iter()
            .map(|row| ContextPair {
                question: cell_text(row.get(question_idx)),
                answer_sql: cell_text(row.get(answer_idx)),
            })
            .collect())
    }
}

fn column_index(columns: &[String], name: &str) -> Option<usize> {
    columns
        .iter()
        .position(|column| column.eq_ignore_ascii_case(name))
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
