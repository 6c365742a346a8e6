use serde::{Deserialize, Serialize};

use crate::{FrostyError, QueryOutput};

/// A prior question and the SQL that answered it, pulled from the reference
/// table per request and consumed immediately by the prompt builder.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContextPair {
    pub question: String,
    pub answer_sql: String,
}

#[async_trait::async_trait]
pub trait CompletionModel: Send + Sync {
    /// Send the prompt to the hosted completion function and wait for the
    /// single text response. Transport failures surface as
    /// [`FrostyError::Completion`]; the orchestrator decides what the user
    /// sees.
    async fn complete(&self, model_id: &str, prompt: &str) -> Result<String, FrostyError>;
}

#[async_trait::async_trait]
pub trait Warehouse: Send + Sync {
    /// Pin the session to the configured database and schema. Called before
    /// each table read.
    async fn select_namespace(&self) -> Result<(), FrostyError>;

    async fn query(&self, sql: &str) -> Result<QueryOutput, FrostyError>;
}

#[async_trait::async_trait]
pub trait ContextRetriever: Send + Sync {
    /// Top-`k` reference pairs ranked by similarity to `question`,
    /// best first. An empty reference table yields an empty vec.
    async fn retrieve(&self, question: &str, k: usize)
        -> Result<Vec<ContextPair>, FrostyError>;
}
