use serde::Serialize;

use crate::subset::WideTable;

/// One (entity, property, value) triple of a long-form table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongRecord {
    pub entity: String,
    pub property: String,
    pub value: Option<f64>,
}

/// Reshape wide to long: entity order first, then property order.
pub fn melt(table: &WideTable) -> Vec<LongRecord> {
    table
        .entities
        .iter()
        .zip(&table.values)
        .flat_map(|(entity, row)| {
            table
                .properties
                .iter()
                .zip(row)
                .map(move |(property, &value)| LongRecord {
                    entity: entity.clone(),
                    property: property.clone(),
                    value,
                })
        })
        .collect()
}

/// Inverse of [`melt`]: group by entity, then property, in first-seen order.
///
/// Pairs that never appear are missing in the result; a repeated pair keeps
/// its last value.
pub fn pivot(records: &[LongRecord]) -> WideTable {
    let mut entities: Vec<String> = Vec::new();
    let mut properties: Vec<String> = Vec::new();
    let mut cells = Vec::with_capacity(records.len());

    for rec in records {
        let row = position_or_push(&mut entities, &rec.entity);
        let col = position_or_push(&mut properties, &rec.property);
        cells.push((row, col, rec.value));
    }

    let mut values = vec![vec![None; properties.len()]; entities.len()];
    for (row, col, value) in cells {
        values[row][col] = value;
    }

    WideTable {
        entities,
        properties,
        values,
    }
}

fn position_or_push(names: &mut Vec<String>, name: &str) -> usize {
    match names.iter().position(|n| n == name) {
        Some(idx) => idx,
        None => {
            names.push(name.to_string());
            names.len() - 1
        }
    }
}
