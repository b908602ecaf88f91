use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::dataset::{Dataset, dedup_names};
use crate::error::Result;
use crate::normalize::min_max_scale;

/// Wide-form projection: one row per selected entity, one column per
/// selected property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WideTable {
    pub entities: Vec<String>,
    pub properties: Vec<String>,
    /// `values[row][col]`, aligned with `entities` and `properties`.
    pub values: Vec<Vec<Option<f64>>>,
}

impl WideTable {
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() || self.properties.is_empty()
    }

    pub fn column(&self, col: usize) -> Vec<Option<f64>> {
        self.values.iter().map(|row| row[col]).collect()
    }

    /// Copy of the table with every column min-max scaled over its own rows.
    pub fn normalized(&self, epsilon: f64) -> WideTable {
        let mut out = self.clone();
        for col in 0..self.properties.len() {
            let scaled = min_max_scale(&self.column(col), epsilon);
            for (row, v) in out.values.iter_mut().zip(scaled) {
                row[col] = v;
            }
        }
        out
    }

    /// Drop rows whose values are all missing, then columns whose values are
    /// all missing.
    pub fn drop_missing(&self) -> WideTable {
        let (entities, values): (Vec<_>, Vec<_>) = self
            .entities
            .iter()
            .zip(&self.values)
            .filter(|(_, row)| row.iter().any(Option::is_some))
            .map(|(e, row)| (e.clone(), row.clone()))
            .unzip();

        let keep: Vec<usize> = (0..self.properties.len())
            .filter(|&c| values.iter().any(|row: &Vec<Option<f64>>| row[c].is_some()))
            .collect();

        WideTable {
            entities,
            properties: keep.iter().map(|&c| self.properties[c].clone()).collect(),
            values: values
                .iter()
                .map(|row| keep.iter().map(|&c| row[c]).collect())
                .collect(),
        }
    }
}

/// Project `dataset` onto the selected entities and numeric properties.
///
/// Rows follow the dataset's order and properties follow the selection order.
/// Returns `Ok(None)` when no row matches or no property was requested;
/// unknown or non-numeric property names are errors.
pub fn subset<E, P>(dataset: &Dataset, entities: &[E], properties: &[P]) -> Result<Option<WideTable>>
where
    E: AsRef<str>,
    P: AsRef<str>,
{
    let properties = dedup_names(properties);
    let columns = properties
        .iter()
        .map(|p| dataset.schema().numeric_index(p))
        .collect::<Result<Vec<_>>>()?;

    let wanted: HashSet<&str> = entities.iter().map(AsRef::as_ref).collect();
    let mut table = WideTable {
        entities: Vec::new(),
        properties: properties.iter().map(|p| p.to_string()).collect(),
        values: Vec::new(),
    };
    for row in dataset.rows() {
        let Some(key) = dataset.key(row).filter(|k| wanted.contains(k)) else {
            continue;
        };
        table.entities.push(key.to_string());
        table
            .values
            .push(columns.iter().map(|&c| row[c].as_f64()).collect());
    }

    debug!(rows = table.entities.len(), cols = table.properties.len(), "subset");

    Ok((!table.is_empty()).then_some(table))
}
