#![allow(dead_code)]

use matins::matins_data::{ColumnKind, Value};
use matins::{Column, Dataset, Schema};

pub fn schema() -> Schema {
    Schema::new(vec![
        Column::new("material_id", ColumnKind::Text),
        Column::new("formula_pretty", ColumnKind::Text),
        Column::new("nsites", ColumnKind::Integer),
        Column::new("density", ColumnKind::Float),
        Column::new("formation_energy_per_atom", ColumnKind::Float),
        Column::new("band_gap", ColumnKind::Float),
        Column::new("energy_above_hull", ColumnKind::Float),
        Column::new("is_stable", ColumnKind::Boolean),
    ])
    .unwrap()
}

fn num(v: Option<f64>) -> Value {
    v.map_or(Value::Null, Value::Float)
}

/// `(formula, nsites, density, formation_energy, band_gap, e_above_hull)`
pub fn row(
    formula: &str,
    nsites: i64,
    density: Option<f64>,
    formation: Option<f64>,
    band_gap: Option<f64>,
    hull: Option<f64>,
) -> Vec<Value> {
    vec![
        Value::Text(format!("mp-{}", formula.to_lowercase())),
        Value::Text(formula.to_string()),
        Value::Integer(nsites),
        num(density),
        num(formation),
        num(band_gap),
        num(hull),
        Value::Boolean(hull == Some(0.0)),
    ]
}

pub fn iron_oxides() -> Dataset {
    Dataset::new(
        schema(),
        vec![
            row("Fe2O3", 10, Some(5.2), Some(-1.7), Some(2.0), Some(0.0)),
            row("FeO", 2, Some(5.7), Some(-0.9), Some(2.0), Some(0.05)),
            row("Al2O3", 10, Some(3.9), Some(-3.4), Some(2.0), None),
            row("Fe3O4", 14, Some(5.1), Some(-1.6), Some(2.0), None),
            row("FeS2", 12, Some(5.0), Some(-0.6), None, Some(0.0)),
        ],
    )
    .unwrap()
}
