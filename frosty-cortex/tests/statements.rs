use frosty_cortex::statements::{
    complete_statement, quote_literal, ranking_statement, strip_trailing_semicolon, use_database,
    use_schema,
};

#[test]
fn doubles_embedded_quotes() {
    assert_eq!(quote_literal("Rex's bowl"), "Rex''s bowl");
    assert_eq!(quote_literal("no quotes"), "no quotes");
}

#[test]
fn strips_one_trailing_semicolon() {
    assert_eq!(strip_trailing_semicolon("SELECT 1;"), "SELECT 1");
    assert_eq!(strip_trailing_semicolon("  SELECT 1  "), "SELECT 1");
    assert_eq!(strip_trailing_semicolon("SELECT 1;;"), "SELECT 1;");
}

#[test]
fn namespace_statements() {
    assert_eq!(use_database("pet_store_db"), "USE DATABASE pet_store_db");
    assert_eq!(use_schema("pet_store_schema"), "USE SCHEMA pet_store_schema");
}

#[test]
fn complete_statement_quotes_the_prompt() {
    let statement = complete_statement("snowflake-arctic", "What's in pets?");
    assert_eq!(
        statement,
        "SELECT SNOWFLAKE.CORTEX.COMPLETE('snowflake-arctic', 'What''s in pets?') AS RESPONSE"
    );
}

#[test]
fn ranking_statement_embeds_both_sides() {
    let statement = ranking_statement("REFERENCE_QA", "e5-base-v2", "how many pets?", 3);
    assert!(statement.starts_with("SELECT QUESTION, ANSWER_SQL FROM REFERENCE_QA"));
    assert_eq!(statement.matches("EMBED_TEXT_768('e5-base-v2'").count(), 2);
    assert!(statement.contains("VECTOR_COSINE_SIMILARITY"));
    assert!(statement.contains("'how many pets?'"));
    assert!(statement.ends_with("DESC LIMIT 3"));
}

#[test]
fn ranking_statement_escapes_the_question() {
    let statement = ranking_statement("REFERENCE_QA", "e5-base-v2", "Rex's age?", 1);
    assert!(statement.contains("'Rex''s age?'"));
}
