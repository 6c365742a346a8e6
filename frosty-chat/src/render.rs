use frosty_core::{QueryOutput, Value};

/// Format query rows as an aligned plain-text table.
pub fn render_table(output: &QueryOutput) -> String {
    if output.columns.is_empty() {
        return "(no rows)".to_string();
    }

    let cells: Vec<Vec<String>> = output
        .rows
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    let mut widths: Vec<usize> = output.columns.iter().map(|name| name.len()).collect();
    for row in &cells {
        for (idx, cell) in row.iter().enumerate() {
            if idx < widths.len() && cell.len() > widths[idx] {
                widths[idx] = cell.len();
            }
        }
    }

    let mut out = String::new();
    push_row(&mut out, &output.columns, &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &cells {
        push_row(&mut out, row, &widths);
    }
    out.push_str(&format!(
        "({} row{})",
        output.row_count(),
        if output.row_count() == 1 { "" } else { "s" }
    ));
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref(), width = width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
