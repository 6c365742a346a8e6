/// Normalize SQL text extracted from completion output before execution.
/// Total and idempotent: escaped asterisks become bare, remaining
/// backslashes are dropped, smart quotes map to their ASCII equivalents,
/// and the result is trimmed.
pub fn clean(sql: &str) -> String {
    sql.replace("\\*", "*")
        .replace('\\', "")
        .replace(['\u{2018}', '\u{2019}'], "'")
        .replace(['\u{201C}', '\u{201D}'], "\"")
        .trim()
        .to_string()
}
