use serde::Serialize;

use crate::constants::{DEFAULT_X_AXIS, DEFAULT_Y_AXIS};
use crate::dataset::{Dataset, Schema};
use crate::error::Result;

/// The pair of columns plotted against each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScatterAxes {
    pub x: String,
    pub y: String,
}

impl ScatterAxes {
    /// `density` against `formation_energy_per_atom`. Both must be numeric
    /// columns of `schema`; there is no fallback to another column.
    pub fn default_for(schema: &Schema) -> Result<Self> {
        for name in [DEFAULT_X_AXIS, DEFAULT_Y_AXIS] {
            schema.require(name, |k| k.is_numeric(), "numeric")?;
        }
        Ok(ScatterAxes {
            x: DEFAULT_X_AXIS.to_string(),
            y: DEFAULT_Y_AXIS.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// Hover label.
    pub label: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub axes: ScatterAxes,
    pub points: Vec<ScatterPoint>,
}

/// One point per row where both `x` and `y` are present.
pub fn build_scatter(dataset: &Dataset, x: &str, y: &str) -> Result<ScatterSeries> {
    let xs = dataset.numeric_column(x)?;
    let ys = dataset.numeric_column(y)?;

    let points = dataset
        .rows()
        .iter()
        .zip(xs.into_iter().zip(ys))
        .filter_map(|(row, (x, y))| {
            Some(ScatterPoint {
                label: dataset.key(row).unwrap_or_default().to_string(),
                x: x?,
                y: y?,
            })
        })
        .collect();

    Ok(ScatterSeries {
        axes: ScatterAxes {
            x: x.to_string(),
            y: y.to_string(),
        },
        points,
    })
}
