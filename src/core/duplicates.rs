use crate::utils::error::Result;
use std::collections::HashMap;

/// Values that occur more than once in the input, each reported once,
/// in order of first appearance.
///
/// Explicit occurrence counting; the result never depends on which
/// occurrence of a value is seen as "the duplicate".
pub fn find_duplicates(values: &[i64]) -> Vec<i64> {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for &value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut duplicates = Vec::new();
    for &value in values {
        if counts.get(&value).copied().unwrap_or(0) >= 2 && !duplicates.contains(&value) {
            duplicates.push(value);
        }
    }
    duplicates
}

/// Renders a duplicate list for console output, either as the debug-style
/// `[a, b, c]` line or as a JSON array.
pub fn render_duplicates(duplicates: &[i64], json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(duplicates)?)
    } else {
        Ok(format!("{:?}", duplicates))
    }
}
