use frosty_sql::{ExtractionMode, SqlExtractor};

#[test]
fn strict_mode_reads_a_fenced_block() {
    let extractor = SqlExtractor::new(ExtractionMode::Strict);
    let text = "```sql\nSELECT 1;\n```";
    assert_eq!(extractor.extract(text), Some("SELECT 1;".to_string()));
}

#[test]
fn strict_mode_keeps_the_body_verbatim() {
    let extractor = SqlExtractor::new(ExtractionMode::Strict);
    let text = "```sql\nSELECT *\nFROM pets\nWHERE name = 'Rex';\n```";
    assert_eq!(
        extractor.extract(text),
        Some("SELECT *\nFROM pets\nWHERE name = 'Rex';".to_string())
    );
}

#[test]
fn strict_mode_ignores_inline_statements() {
    let extractor = SqlExtractor::new(ExtractionMode::Strict);
    assert_eq!(extractor.extract("Here you go: SELECT * FROM pets; Thanks"), None);
}

#[test]
fn lenient_mode_finds_a_statement_in_prose() {
    let extractor = SqlExtractor::new(ExtractionMode::Lenient);
    assert_eq!(
        extractor.extract("Here you go: SELECT * FROM pets; Thanks"),
        Some("SELECT * FROM pets;".to_string())
    );
}

#[test]
fn lenient_mode_stops_at_the_first_semicolon() {
    let extractor = SqlExtractor::new(ExtractionMode::Lenient);
    assert_eq!(
        extractor.extract("SELECT 1; SELECT 2;"),
        Some("SELECT 1;".to_string())
    );
}

#[test]
fn lenient_mode_scans_across_newlines() {
    let extractor = SqlExtractor::new(ExtractionMode::Lenient);
    assert_eq!(
        extractor.extract("Sure:\nSELECT name\nFROM pets\nWHERE id = 1;\nEnjoy."),
        Some("SELECT name\nFROM pets\nWHERE id = 1;".to_string())
    );
}

#[test]
fn lenient_mode_falls_back_to_the_fence() {
    let extractor = SqlExtractor::new(ExtractionMode::Lenient);
    // No semicolon, so the statement pattern misses; the fence still hits.
    let text = "```sql\nSELECT count(*) FROM customers\n```";
    assert_eq!(
        extractor.extract(text),
        Some("SELECT count(*) FROM customers".to_string())
    );
}

#[test]
fn no_sql_markers_yield_none_in_both_modes() {
    let text = "There are three tables you can ask about.";
    assert_eq!(SqlExtractor::new(ExtractionMode::Strict).extract(text), None);
    assert_eq!(SqlExtractor::new(ExtractionMode::Lenient).extract(text), None);
}

#[test]
fn modes_diverge_on_inline_statements() {
    // The documented ambiguity: the same input extracts differently per
    // mode, which is why the mode is explicit configuration.
    let text = "Try this one: WITH t AS (SELECT 1) SELECT * FROM t; done";
    assert_eq!(SqlExtractor::new(ExtractionMode::Strict).extract(text), None);
    assert!(SqlExtractor::new(ExtractionMode::Lenient)
        .extract(text)
        .is_some());
}
