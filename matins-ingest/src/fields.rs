use std::collections::BTreeSet;

use matins_data::{ColumnKind, ColumnRecord, TableRecord, Value};
use serde_json::Value as Json;
use tracing::warn;

/// One approved column: its stored name, declared kind, and the document
/// paths it may be read from, tried in order.
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub sources: &'static [&'static str],
}

const fn col(name: &'static str, kind: ColumnKind, sources: &'static [&'static str]) -> ColumnSpec {
    ColumnSpec {
        name,
        kind,
        sources,
    }
}

/// The only columns written to the store, in table order.
pub const APPROVED_COLUMNS: &[ColumnSpec] = &[
    // identifiers
    col("material_id", ColumnKind::Text, &["material_id"]),
    col("formula_pretty", ColumnKind::Text, &["formula_pretty"]),
    // structure / composition
    col("nsites", ColumnKind::Integer, &["nsites"]),
    col("volume", ColumnKind::Float, &["volume"]),
    col("density", ColumnKind::Float, &["density"]),
    col("spacegroup", ColumnKind::Text, &["spacegroup", "symmetry.symbol"]),
    col("crystal_system", ColumnKind::Text, &["crystal_system", "symmetry.crystal_system"]),
    // thermodynamics
    col("formation_energy_per_atom", ColumnKind::Float, &["formation_energy_per_atom"]),
    col("energy_above_hull", ColumnKind::Float, &["energy_above_hull"]),
    col(
        "equilibrium_reaction_energy_per_atom",
        ColumnKind::Float,
        &["equilibrium_reaction_energy_per_atom"],
    ),
    // electronic
    col("band_gap", ColumnKind::Float, &["band_gap"]),
    // mechanical
    col("elasticity.anisotropy", ColumnKind::Float, &["elasticity.anisotropy", "universal_anisotropy"]),
    col("elasticity.G_Voigt", ColumnKind::Float, &["elasticity.G_Voigt", "shear_modulus.voigt"]),
    col("elasticity.K_Voigt", ColumnKind::Float, &["elasticity.K_Voigt", "bulk_modulus.voigt"]),
    // magnetic
    col(
        "magnetism.total_magnetization",
        ColumnKind::Float,
        &["magnetism.total_magnetization", "total_magnetization"],
    ),
    col("magnetism.ordering", ColumnKind::Text, &["magnetism.ordering", "ordering"]),
    col("is_stable", ColumnKind::Boolean, &["is_stable"]),
];

/// Top-level document fields to request from the provider.
pub fn query_fields() -> Vec<&'static str> {
    let mut seen = BTreeSet::new();
    APPROVED_COLUMNS
        .iter()
        .flat_map(|c| c.sources.iter().copied())
        .map(|s| s.split('.').next().unwrap_or(s))
        .filter(|s| seen.insert(*s))
        .collect()
}

/// Look a path up in a document. A literal dotted key (flat exports) wins
/// over walking nested objects.
pub fn lookup<'a>(doc: &'a Json, path: &str) -> Option<&'a Json> {
    if let Some(v) = doc.get(path) {
        return Some(v);
    }
    path.split('.').try_fold(doc, |node, key| node.get(key))
}

/// Convert a JSON value into a cell of the declared kind. `None` means the
/// value does not fit the column.
pub fn coerce(value: &Json, kind: ColumnKind) -> Option<Value> {
    if value.is_null() {
        return Some(Value::Null);
    }
    match kind {
        ColumnKind::Integer => match value.as_i64() {
            Some(i) => Some(Value::Integer(i)),
            None => value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| Value::Integer(f as i64)),
        },
        ColumnKind::Float => value.as_f64().map(Value::Float),
        ColumnKind::Boolean => value.as_bool().map(Value::Boolean),
        ColumnKind::Text => match value {
            Json::String(s) => Some(Value::Text(s.clone())),
            Json::Number(n) => Some(Value::Text(n.to_string())),
            Json::Bool(b) => Some(Value::Text(b.to_string())),
            _ => None,
        },
    }
}

/// Restrict provider documents to the approved columns.
///
/// Missing fields are stored as null; values of the wrong type are stored as
/// null and logged.
pub fn build_table(name: &str, docs: &[Json]) -> TableRecord {
    let columns = APPROVED_COLUMNS
        .iter()
        .map(|c| ColumnRecord {
            name: c.name.to_string(),
            kind: c.kind,
        })
        .collect();

    let rows = docs
        .iter()
        .enumerate()
        .map(|(idx, doc)| {
            APPROVED_COLUMNS
                .iter()
                .map(|spec| {
                    let Some(raw) = spec
                        .sources
                        .iter()
                        .find_map(|s| lookup(doc, s).filter(|v| !v.is_null()))
                    else {
                        return Value::Null;
                    };
                    coerce(raw, spec.kind).unwrap_or_else(|| {
                        warn!(row = idx, column = spec.name, value = %raw, "type mismatch, stored as null");
                        Value::Null
                    })
                })
                .collect()
        })
        .collect();

    TableRecord {
        name: name.to_string(),
        columns,
        rows,
    }
}
