use tracing::{debug, warn};

use frosty_core::{
    with_retries, Catalog, CompletionModel, ContextRetriever, Conversation, FrostyError, Message,
    QueryOutput, Role, Warehouse,
};
use frosty_prompt::{PromptBuilder, DEFAULT_CONTEXT_PAIRS};
use frosty_sql::{clean, is_mutating, SqlExtractor};

pub const REFUSAL_NOTICE: &str = "Sorry, I can't execute queries that can modify the database.";
pub const APOLOGY: &str = "Sorry, an error occurred while processing your request.";

/// The per-turn control flow, surfaced for logging. Every cycle walks
/// `BuildingPrompt → AwaitingCompletion → ExtractingSql`, optionally
/// `ExecutingSql`, and ends in `RenderingResult`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingInput,
    BuildingPrompt,
    AwaitingCompletion,
    ExtractingSql,
    ExecutingSql,
    RenderingResult,
}

/// What one completion cycle produced. Every failure edge of the turn is an
/// explicit variant; nothing escapes `respond()` as an error.
#[derive(Clone, Debug, PartialEq)]
pub enum TurnOutcome {
    /// Completion text, plus rows when SQL was extracted, allowed, and ran.
    Answered {
        response: String,
        sql: Option<String>,
        rows: Option<QueryOutput>,
    },
    /// SQL was extracted but the guard classified it as mutating.
    Refused { response: String, notice: String },
    /// SQL ran and the warehouse rejected it; the text answer survives.
    ExecutionFailed { response: String, notice: String },
    /// The completion endpoint itself failed; the apology was appended.
    Failed { notice: String },
}

pub struct Orchestrator<C, W, R> {
    completion: C,
    warehouse: W,
    retriever: Option<R>,
    extractor: SqlExtractor,
    prompts: PromptBuilder,
    conversation: Conversation,
    catalog: Catalog,
    model_id: String,
    table: String,
    top_k: usize,
    max_attempts: usize,
}

impl<C, W, R> Orchestrator<C, W, R>
where
    C: CompletionModel,
    W: Warehouse,
    R: ContextRetriever,
{
    pub fn new(completion: C, warehouse: W, retriever: Option<R>, extractor: SqlExtractor) -> Self {
        let catalog = Catalog::new();
        let model_id = catalog.default_model().to_string();
        let table = catalog.default_table().to_string();
        Self {
            completion,
            warehouse,
            retriever,
            extractor,
            prompts: PromptBuilder::new(),
            conversation: Conversation::new(),
            catalog,
            model_id,
            table,
            top_k: DEFAULT_CONTEXT_PAIRS,
            max_attempts: 2,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn select_model(&mut self, model_id: &str) -> Result<(), FrostyError> {
        if !self.catalog.has_model(model_id) {
            return Err(FrostyError::InvalidConfig(format!(
                "unknown model: {model_id}"
            )));
        }
        self.model_id = model_id.to_string();
        Ok(())
    }

    pub fn select_table(&mut self, table: &str) -> Result<(), FrostyError> {
        if !self.catalog.has_table(table) {
            return Err(FrostyError::InvalidConfig(format!("unknown table: {table}")));
        }
        self.table = table.to_string();
        Ok(())
    }

    /// Record a user turn. Appending alone never starts a cycle; that is
    /// `respond()`'s job, so duplicate submissions cannot double-trigger.
    pub fn push_user(&mut self, text: &str) {
        self.enter(Phase::AwaitingInput);
        self.conversation.push(Message::user(text));
    }

    /// Run one completion cycle if an unanswered user turn exists. Returns
    /// `None` when the assistant already has the last word. Exactly one
    /// assistant message is appended per cycle, whatever the outcome.
    pub async fn respond(&mut self) -> Option<TurnOutcome> {
        if !self.conversation.awaiting_reply() {
            return None;
        }
        let question = self
            .conversation
            .messages()
            .iter()
            .rev()
            .find(|message| message.role == Role::User)
            .map(|message| message.content.clone())?;

        let outcome = match self.run_cycle(&question).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "completion cycle failed");
                TurnOutcome::Failed {
                    notice: format!("An error occurred while processing the query: {err}"),
                }
            }
        };

        self.enter(Phase::RenderingResult);
        let reply = match &outcome {
            TurnOutcome::Answered { response, .. }
            | TurnOutcome::Refused { response, .. }
            | TurnOutcome::ExecutionFailed { response, .. } => response.clone(),
            TurnOutcome::Failed { .. } => APOLOGY.to_string(),
        };
        self.conversation.push(Message::assistant(reply));
        self.enter(Phase::Idle);
        Some(outcome)
    }

    async fn run_cycle(&self, question: &str) -> Result<TurnOutcome, FrostyError> {
        self.enter(Phase::BuildingPrompt);
        self.warehouse.select_namespace().await?;
        let prompt = self.build_prompt(question).await?;

        self.enter(Phase::AwaitingCompletion);
        let response = self.completion.complete(&self.model_id, &prompt).await?;

        self.enter(Phase::ExtractingSql);
        let Some(raw_sql) = self.extractor.extract(&response) else {
            return Ok(TurnOutcome::Answered {
                response,
                sql: None,
                rows: None,
            });
        };
        let sql = clean(&raw_sql);
        if is_mutating(&sql) {
            debug!(sql = %sql, "mutating statement refused");
            return Ok(TurnOutcome::Refused {
                response,
                notice: REFUSAL_NOTICE.to_string(),
            });
        }

        self.enter(Phase::ExecutingSql);
        match with_retries(self.max_attempts, || self.warehouse.query(&sql)).await {
            Ok(rows) => Ok(TurnOutcome::Answered {
                response,
                sql: Some(sql),
                rows: Some(rows),
            }),
            Err(err) => Ok(TurnOutcome::ExecutionFailed {
                response,
                notice: format!("An error occurred while executing the SQL query: {err}"),
            }),
        }
    }

    async fn build_prompt(&self, question: &str) -> Result<String, FrostyError> {
        match &self.retriever {
            Some(retriever) => {
                let context = match retriever.retrieve(question, self.top_k).await {
                    Ok(context) => context,
                    Err(err) => {
                        warn!(error = %err, "retrieval failed, continuing without context");
                        Vec::new()
                    }
                };
                self.prompts.build_with_context(question, &context)
            }
            None => self.prompts.build_direct(&self.table, question),
        }
    }

    /// Reset chat: a freshly seeded conversation and a re-pinned namespace.
    pub async fn reset(&mut self) -> Result<(), FrostyError> {
        self.conversation = Conversation::new();
        self.warehouse.select_namespace().await
    }

    /// The "Load Data" action: preview `limit` rows of a catalog table.
    pub async fn load_table(&self, table: &str, limit: usize) -> Result<QueryOutput, FrostyError> {
        if !self.catalog.has_table(table) {
            return Err(FrostyError::InvalidConfig(format!("unknown table: {table}")));
        }
        self.warehouse.select_namespace().await?;
        let sql = format!("SELECT * FROM {table} LIMIT {limit}");
        with_retries(self.max_attempts, || self.warehouse.query(&sql)).await
    }

    fn enter(&self, phase: Phase) {
        debug!(?phase, "orchestrator phase");
    }
}
