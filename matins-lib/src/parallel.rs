use serde::Serialize;
use tracing::debug;

use crate::config::CompareConfig;
use crate::constants::{EMPTY_AFTER_DROPNA, EMPTY_SELECTION};
use crate::dataset::{Dataset, dedup_names, entities_in_view};
use crate::error::Result;
use crate::normalize::ColumnRange;
use crate::outcome::ChartOutcome;
use crate::selection::SelectionState;
use crate::subset::subset;

/// Closed interval shown on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayRange {
    pub lo: f64,
    pub hi: f64,
}

impl DisplayRange {
    /// Axis range for a column. A collapsed column is widened around its value
    /// by `rel * |v|`, or by `abs` when the value is zero.
    pub fn for_column(range: ColumnRange, abs: f64, rel: f64) -> Self {
        if !range.is_collapsed() {
            return DisplayRange {
                lo: range.min,
                hi: range.max,
            };
        }
        let v = range.min;
        let pad = if v != 0.0 { rel * v.abs() } else { abs };
        DisplayRange {
            lo: v - pad,
            hi: v + pad,
        }
    }

    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }
}

/// One vertical axis: raw values in material order plus the range to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParallelAxis {
    pub label: String,
    pub values: Vec<Option<f64>>,
    pub range: DisplayRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParallelCoordinates {
    /// One polyline per material, aligned with every axis' `values`.
    pub entities: Vec<String>,
    pub axes: Vec<ParallelAxis>,
}

pub fn build_parallel_coordinates<E, P>(
    dataset: &Dataset,
    entities: &[E],
    properties: &[P],
    config: &CompareConfig,
) -> Result<ChartOutcome<ParallelCoordinates>>
where
    E: AsRef<str>,
    P: AsRef<str>,
{
    let entities = entities_in_view(dataset, entities);
    let n_properties = dedup_names(properties).len();
    if let SelectionState::Incomplete { guidance } = config.parallel.check(entities.len(), n_properties) {
        return Ok(ChartOutcome::Incomplete { guidance });
    }

    let Some(wide) = subset(dataset, &entities, properties)? else {
        return Ok(ChartOutcome::empty(EMPTY_SELECTION));
    };

    let axes: Vec<ParallelAxis> = wide
        .properties
        .iter()
        .enumerate()
        .filter_map(|(col, label)| {
            let values = wide.column(col);
            // An axis without any value has no range to draw.
            let range = ColumnRange::of(&values)?;
            Some(ParallelAxis {
                label: label.clone(),
                values,
                range: DisplayRange::for_column(
                    range,
                    config.collapsed_pad_abs,
                    config.collapsed_pad_rel,
                ),
            })
        })
        .collect();

    if axes.is_empty() {
        return Ok(ChartOutcome::empty(EMPTY_AFTER_DROPNA));
    }
    debug!(axes = axes.len(), lines = wide.entities.len(), "parallel coordinates");

    Ok(ChartOutcome::Ready {
        data: ParallelCoordinates {
            entities: wide.entities,
            axes,
        },
    })
}
