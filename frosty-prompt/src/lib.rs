mod builder;
mod template;

pub use builder::{PromptBuilder, DEFAULT_CONTEXT_PAIRS};
pub use template::PromptTemplate;
