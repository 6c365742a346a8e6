use frosty_sql::is_mutating;

#[test]
fn rejects_every_mutating_keyword() {
    for sql in [
        "DROP TABLE pets",
        "alter table pets add column age int",
        "TRUNCATE TABLE customers",
        "delete from pets where id = 1",
        "INSERT INTO pets VALUES (1, 'Rex')",
        "update pets set name = 'Rex'",
    ] {
        assert!(is_mutating(sql), "expected rejection: {sql}");
    }
}

#[test]
fn ignores_leading_whitespace_and_case() {
    assert!(is_mutating("   \n\tDrOp TABLE pets"));
    assert!(is_mutating("  delete from pets;"));
}

#[test]
fn allows_read_only_statements() {
    assert!(!is_mutating("SELECT * FROM pets"));
    assert!(!is_mutating("select count(*) from customers;"));
    assert!(!is_mutating(
        "WITH counts AS (SELECT 1) SELECT * FROM counts"
    ));
    assert!(!is_mutating("EXPLAIN SELECT 1"));
}

#[test]
fn empty_input_is_not_mutating() {
    assert!(!is_mutating(""));
    assert!(!is_mutating("   "));
}

#[test]
fn keyword_must_be_the_leading_token() {
    // Prefix heuristic: mention of a mutating keyword later in the
    // statement does not trip the guard.
    assert!(!is_mutating("SELECT 'delete' FROM pets"));
    // And a keyword-prefixed identifier is not a keyword.
    assert!(!is_mutating("dropped_rows_report"));
}

#[test]
fn known_blind_spots_stay_blind() {
    // The guard is a leading-token check by design; statements hidden
    // behind a comment or inside a CTE pass through.
    assert!(!is_mutating("-- comment\nDROP TABLE pets"));
    assert!(!is_mutating("WITH x AS (DELETE FROM pets RETURNING *) SELECT 1"));
}
