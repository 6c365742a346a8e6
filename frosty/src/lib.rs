//! Umbrella crate: one dependency line for the Frosty building blocks.

pub use frosty_core as core;
pub use frosty_prompt as prompt;
pub use frosty_sql as sql;

#[cfg(feature = "cortex")]
pub use frosty_cortex as cortex;

pub use frosty_core::{
    Catalog, CompletionModel, ContextPair, ContextRetriever, Conversation, FrostyError, Message,
    QueryOutput, Role, Warehouse,
};
pub use frosty_prompt::{PromptBuilder, PromptTemplate};
pub use frosty_sql::{clean, is_mutating, ExtractionMode, SqlExtractor};
