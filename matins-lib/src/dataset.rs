use std::collections::HashSet;

use matins_data::{ColumnKind, ColumnRecord, TableRecord, Value};
use tracing::warn;

use crate::constants::ENTITY_KEY;
use crate::error::{MatinsError, Result};

/// A named, typed column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Column {
            name: name.into(),
            kind,
        }
    }
}

/// Ordered column-name to type mapping shared by every row of a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::new();
        for col in &columns {
            if !seen.insert(col.name.as_str()) {
                return Err(MatinsError::SchemaMismatch {
                    column: col.name.clone(),
                    reason: "duplicate column name".to_string(),
                });
            }
        }
        Ok(Schema { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn kind_of(&self, name: &str) -> Option<ColumnKind> {
        self.columns.iter().find(|c| c.name == name).map(|c| c.kind)
    }

    /// Names of the integer and float columns, in schema order.
    pub fn numeric_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.kind.is_numeric())
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Resolve a property name to its column index, rejecting unknown and
    /// non-numeric columns.
    pub fn numeric_index(&self, name: &str) -> Result<usize> {
        let idx = self
            .index_of(name)
            .ok_or_else(|| MatinsError::UnknownColumn(name.to_string()))?;
        if !self.columns[idx].kind.is_numeric() {
            return Err(MatinsError::NonNumericColumn(name.to_string()));
        }
        Ok(idx)
    }

    /// Fail with `SchemaMismatch` unless `name` exists and satisfies `check`.
    pub fn require(
        &self,
        name: &str,
        check: impl Fn(ColumnKind) -> bool,
        expected: &str,
    ) -> Result<()> {
        match self.kind_of(name) {
            None => Err(MatinsError::SchemaMismatch {
                column: name.to_string(),
                reason: "column is missing".to_string(),
            }),
            Some(kind) if !check(kind) => Err(MatinsError::SchemaMismatch {
                column: name.to_string(),
                reason: format!("expected {expected} column, found {kind:?}"),
            }),
            Some(_) => Ok(()),
        }
    }
}

/// Free-standing form of [`Schema::numeric_columns`].
pub fn numeric_columns(schema: &Schema) -> Vec<&str> {
    schema.numeric_columns()
}

/// An immutable, ordered table of material records sharing one schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    schema: Schema,
    rows: Vec<Vec<Value>>,
    key_idx: usize,
}

impl Dataset {
    /// Build a dataset, checking row arity, cell types and the identity column.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Result<Self> {
        schema.require(ENTITY_KEY, |k| k == ColumnKind::Text, "text")?;
        let key_idx = schema.index_of(ENTITY_KEY).unwrap_or_default();

        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != schema.len() {
                return Err(MatinsError::MalformedRow {
                    row: row_idx,
                    reason: format!("expected {} values, found {}", schema.len(), row.len()),
                });
            }
            for (col, value) in schema.columns.iter().zip(row) {
                if !col.kind.accepts(value) {
                    return Err(MatinsError::MalformedRow {
                        row: row_idx,
                        reason: format!("value {value:?} does not fit {:?} column '{}'", col.kind, col.name),
                    });
                }
            }
        }

        Ok(Dataset {
            schema,
            rows,
            key_idx,
        })
    }

    /// Derive a dataset from a subset of this one's rows. Rows are already
    /// known to satisfy the schema.
    pub(crate) fn with_rows(&self, rows: Vec<Vec<Value>>) -> Self {
        Dataset {
            schema: self.schema.clone(),
            rows,
            key_idx: self.key_idx,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Entity key of a row; `None` when the formula cell is null.
    pub fn key<'a>(&self, row: &'a [Value]) -> Option<&'a str> {
        row.get(self.key_idx).and_then(Value::as_str)
    }

    /// Numeric values of one column, in row order.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let idx = self.schema.numeric_index(name)?;
        Ok(self.rows.iter().map(|r| r[idx].as_f64()).collect())
    }
}

impl TryFrom<&TableRecord> for Dataset {
    type Error = MatinsError;

    fn try_from(table: &TableRecord) -> Result<Self> {
        let columns = table
            .columns
            .iter()
            .map(|ColumnRecord { name, kind }| Column::new(name.clone(), *kind))
            .collect();
        Dataset::new(Schema::new(columns)?, table.rows.clone())
    }
}

/// Distinct entity keys in first-seen order.
pub fn entity_keys(dataset: &Dataset) -> Vec<&str> {
    let mut seen = HashSet::new();
    dataset
        .rows()
        .iter()
        .filter_map(|r| dataset.key(r))
        .filter(|k| seen.insert(*k))
        .collect()
}

/// Selected entities that occur in `dataset`, de-duplicated, in selection
/// order. Chart validation counts these, not the raw selection.
pub fn entities_in_view<'a, S: AsRef<str>>(dataset: &Dataset, entities: &'a [S]) -> Vec<&'a str> {
    let present: HashSet<&str> = entity_keys(dataset).into_iter().collect();
    let selected = dedup_names(entities);
    let in_view: Vec<&str> = selected
        .iter()
        .copied()
        .filter(|e| present.contains(e))
        .collect();
    if in_view.len() < selected.len() {
        warn!(
            requested = selected.len(),
            in_view = in_view.len(),
            "some selected materials are not in the current view"
        );
    }
    in_view
}

/// Collapse duplicates, keeping the first occurrence of each name.
pub(crate) fn dedup_names<S: AsRef<str>>(names: &[S]) -> Vec<&str> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(AsRef::as_ref)
        .filter(|n| seen.insert(*n))
        .collect()
}
