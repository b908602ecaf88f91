#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Current on-disk layout of [`MaterialsStore`].
pub const FORMAT_VERSION: u16 = 1;

/// Name of the table the dashboard reads.
pub const MATERIALS_TABLE: &str = "materials";

/// The complete embedded store, deserialized from the compressed blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialsStore {
    pub format_version: u16,
    pub tables: Vec<TableRecord>,
}

impl MaterialsStore {
    pub fn new() -> Self {
        MaterialsStore {
            format_version: FORMAT_VERSION,
            tables: Vec::new(),
        }
    }

    pub fn table(&self, name: &str) -> Option<&TableRecord> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Drop any table with the same name and append `table` in its place.
    pub fn replace_table(&mut self, table: TableRecord) -> Option<TableRecord> {
        let old = self
            .tables
            .iter()
            .position(|t| t.name == table.name)
            .map(|idx| self.tables.remove(idx));
        self.tables.push(table);
        old
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRecord {
    pub name: String,
    pub columns: Vec<ColumnRecord>,
    pub rows: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRecord {
    pub name: String,
    pub kind: ColumnKind,
}

/// Declared type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    Integer,
    Float,
    Boolean,
    Text,
}

impl ColumnKind {
    /// Integer and floating point columns; booleans are not numeric.
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Integer | ColumnKind::Float)
    }

    /// Whether a non-null value may be stored in a column of this kind.
    pub fn accepts(self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (ColumnKind::Integer, Value::Integer(_)) => true,
            (ColumnKind::Float, Value::Float(_) | Value::Integer(_)) => true,
            (ColumnKind::Boolean, Value::Boolean(_)) => true,
            (ColumnKind::Text, Value::Text(_)) => true,
            _ => false,
        }
    }
}

/// A single cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
}

impl Value {
    /// Numeric view of the cell. NaN counts as missing.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Integer(i) => Some(i as f64),
            Value::Float(f) if !f.is_nan() => Some(f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}
