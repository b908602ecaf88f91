use tracing::debug;

use crate::dataset::Dataset;

/// Rows whose formula contains `text`, ignoring case, in their original order.
///
/// Blank input (empty or whitespace only) leaves the dataset untouched.
pub fn filter_by_formula(dataset: &Dataset, text: &str) -> Dataset {
    let needle = text.trim();
    if needle.is_empty() {
        return dataset.clone();
    }
    let needle = needle.to_lowercase();

    let rows: Vec<_> = dataset
        .rows()
        .iter()
        .filter(|row| {
            dataset
                .key(row)
                .is_some_and(|formula| formula.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();

    debug!(filter = %needle, kept = rows.len(), total = dataset.len(), "formula filter");
    dataset.with_rows(rows)
}
