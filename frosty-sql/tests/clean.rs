use frosty_sql::clean;

#[test]
fn unescapes_asterisks() {
    assert_eq!(clean("SELECT \\* FROM pets"), "SELECT * FROM pets");
}

#[test]
fn drops_stray_backslashes() {
    assert_eq!(clean("SELECT \\name FROM pets\\"), "SELECT name FROM pets");
}

#[test]
fn normalizes_smart_quotes() {
    assert_eq!(
        clean("SELECT \u{2018}Rex\u{2019}, \u{201C}Spot\u{201D}"),
        "SELECT 'Rex', \"Spot\""
    );
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(clean("  SELECT 1;  \n"), "SELECT 1;");
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(clean(""), "");
    assert_eq!(clean("   "), "");
}

#[test]
fn cleaning_is_idempotent() {
    for sql in [
        "SELECT \\* FROM pets",
        "  SELECT \u{2018}x\u{2019} FROM t; ",
        "plain text, no sql",
        "",
        "\\\\* \u{201C}quoted\u{201D} \\",
    ] {
        let once = clean(sql);
        assert_eq!(clean(&once), once, "not idempotent for {sql:?}");
    }
}
