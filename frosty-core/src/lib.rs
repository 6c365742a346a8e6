mod catalog;
mod conversation;
mod error;
mod message;
mod retry;
mod rows;
mod seams;

pub use catalog::{Catalog, MODELS, TABLES};
pub use conversation::Conversation;
pub use error::FrostyError;
pub use message::{Message, Role};
pub use retry::with_retries;
pub use rows::QueryOutput;
pub use seams::{CompletionModel, ContextPair, ContextRetriever, Warehouse};

pub type Value = serde_json::Value;
