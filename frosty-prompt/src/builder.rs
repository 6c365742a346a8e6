use std::collections::HashMap;

use frosty_core::{ContextPair, FrostyError, Value};

use crate::PromptTemplate;

/// How many reference pairs the retrieval-augmented prompt carries.
pub const DEFAULT_CONTEXT_PAIRS: usize = 3;

const DIRECT_TEMPLATE: &str = "\
You are Frosty, an assistant that answers questions about the `{{table}}` table \
by writing Snowflake SQL. When a query answers the question, put it in a \
```sql fenced block.

Question: {{question}}
Answer:";

const CONTEXT_TEMPLATE: &str = "\
Answer the question using the context below. The context shows previous \
questions and the SQL that answered them. Be concise. If the context does not \
contain the information needed, say you do not know instead of making \
something up.

Context:
{{context}}
Question: {{question}}
Answer:";

/// Assembles the text sent to the completion endpoint, with or without
/// retrieved context.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    direct: PromptTemplate,
    with_context: PromptTemplate,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self {
            direct: PromptTemplate::new(DIRECT_TEMPLATE.to_string()),
            with_context: PromptTemplate::new(CONTEXT_TEMPLATE.to_string()),
        }
    }

    pub fn build_direct(&self, table: &str, question: &str) -> Result<String, FrostyError> {
        let mut vars = HashMap::new();
        vars.insert("table".to_string(), Value::from(table));
        vars.insert("question".to_string(), Value::from(question));
        self.direct.render(&vars)
    }

    /// Prompt carrying retrieved `Q:`/`A:` pairs. Apostrophes are stripped
    /// from the concatenated context so the assembled text survives the
    /// completion call's own quoting.
    pub fn build_with_context(
        &self,
        question: &str,
        context: &[ContextPair],
    ) -> Result<String, FrostyError> {
        let mut block = String::new();
        for pair in context {
            block.push_str("Q: ");
            block.push_str(&pair.question);
            block.push_str("\nA: ");
            block.push_str(&pair.answer_sql);
            block.push('\n');
        }
        let block = block.replace('\'', "");

        let mut vars = HashMap::new();
        vars.insert("context".to_string(), Value::from(block));
        vars.insert("question".to_string(), Value::from(question));
        self.with_context.render(&vars)
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}
