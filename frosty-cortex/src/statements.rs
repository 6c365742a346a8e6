//! SQL text builders for the session round trips. Kept as free functions so
//! the statement shapes are testable without a live session.

/// Double embedded single quotes so `text` can sit inside a SQL string
/// literal.
pub fn quote_literal(text: &str) -> String {
    text.replace('\'', "''")
}

/// The warehouse rejects a trailing statement terminator on single-statement
/// calls; strip at most one.
pub fn strip_trailing_semicolon(sql: &str) -> &str {
    let trimmed = sql.trim();
    trimmed.strip_suffix(';').unwrap_or(trimmed)
}

pub fn use_database(database: &str) -> String {
    format!("USE DATABASE {database}")
}

pub fn use_schema(schema: &str) -> String {
    format!("USE SCHEMA {schema}")
}

pub fn complete_statement(model_id: &str, prompt: &str) -> String {
    format!(
        "SELECT SNOWFLAKE.CORTEX.COMPLETE('{}', '{}') AS RESPONSE",
        quote_literal(model_id),
        quote_literal(prompt)
    )
}

/// Rank the reference table by embedding cosine similarity against the
/// incoming question, best match first.
pub fn ranking_statement(
    reference_table: &str,
    embedding_model: &str,
    question: &str,
    k: usize,
) -> String {
    format!(
        "SELECT QUESTION, ANSWER_SQL FROM {table} \
         ORDER BY VECTOR_COSINE_SIMILARITY(\
         SNOWFLAKE.CORTEX.EMBED_TEXT_768('{model}', QUESTION), \
         SNOWFLAKE.CORTEX.EMBED_TEXT_768('{model}', '{question}')\
         ) DESC LIMIT {k}",
        table = reference_table,
        model = quote_literal(embedding_model),
        question = quote_literal(question),
        k = k
    )
}
