use crate::errors::AppResult;
use crate::store::Table;
use std::collections::HashMap;

/// Label used for null cells in distributions.
pub const EMPTY_LABEL: &str = "(empty)";

/// Occurrences of each value of `column`, most frequent first, ties by label.
pub fn status_distribution(table: &Table, column: &str) -> AppResult<Vec<(String, usize)>> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for v in table.column_values(column)? {
        *counts.entry(v.unwrap_or(EMPTY_LABEL)).or_default() += 1;
    }

    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(out)
}
