const MUTATING_KEYWORDS: [&str; 6] = ["drop", "alter", "truncate", "delete", "insert", "update"];

/// True when the leading token of `sql` is a statement keyword that can
/// modify the database.
///
/// Prefix heuristic only, not a parser: a mutating statement hidden behind a
/// leading comment, inside a CTE body, or in a later statement of a
/// multi-statement batch is not detected. Callers must treat the warehouse's
/// own permissions as the real boundary.
pub fn is_mutating(sql: &str) -> bool {
    let trimmed = sql.trim_start();
    let token_len = trimmed
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(trimmed.len());
    let token = &trimmed[..token_len];
    MUTATING_KEYWORDS
        .iter()
        .any(|keyword| token.eq_ignore_ascii_case(keyword))
}
