use tracing::debug;

use frosty_core::{CompletionModel, FrostyError, Value, Warehouse};

use crate::statements;
use crate::CortexWarehouse;

/// Completion through the warehouse's hosted function: one
/// `SNOWFLAKE.CORTEX.COMPLETE` call per turn, single synchronous response.
#[derive(Clone)]
pub struct CortexCompletion {
    warehouse: CortexWarehouse,
}

impl CortexCompletion {
    pub fn new(warehouse: CortexWarehouse) -> Self {
        Self { warehouse }
    }
}

#[async_trait::async_trait]
impl CompletionModel for CortexCompletion {
    async fn complete(&self, model_id: &str, prompt: &str) -> Result<String, FrostyError> {
        debug!(model = model_id, prompt_chars = prompt.len(), "cortex complete");
        let statement = statements::complete_statement(model_id, prompt);
        let output = self
            .warehouse
            .query(&statement)
            .await
            .map_err(|err| FrostyError::Completion(err.to_string()))?;

        match output.rows.first().and_then(|row| row.first()) {
            Some(Value::String(text)) => Ok(text.clone()),
            Some(other) => Ok(other.to_string()),
            None => Err(FrostyError::Completion(
                "completion returned no rows".to_string(),
            )),
        }
    }
}
