use serde::Serialize;
use tracing::debug;

use crate::config::CompareConfig;
use crate::constants::EMPTY_AFTER_DROPNA;
use crate::dataset::{Dataset, dedup_names, entities_in_view};
use crate::error::Result;
use crate::outcome::ChartOutcome;
use crate::selection::SelectionState;
use crate::subset::subset;

/// Scaled material x property matrix with its axis labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapMatrix {
    /// Materials, top to bottom.
    pub row_labels: Vec<String>,
    /// Properties, left to right.
    pub col_labels: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl HeatmapMatrix {
    /// Plot height in pixels: a fixed base plus one band per material.
    pub fn suggested_height(&self) -> u32 {
        400 + 20 * self.row_labels.len() as u32
    }
}

pub fn build_heatmap_matrix<E, P>(
    dataset: &Dataset,
    entities: &[E],
    properties: &[P],
    config: &CompareConfig,
) -> Result<ChartOutcome<HeatmapMatrix>>
where
    E: AsRef<str>,
    P: AsRef<str>,
{
    let entities = entities_in_view(dataset, entities);
    let n_properties = dedup_names(properties).len();
    if let SelectionState::Incomplete { guidance } = config.heatmap.check(entities.len(), n_properties) {
        return Ok(ChartOutcome::Incomplete { guidance });
    }

    let Some(wide) = subset(dataset, &entities, properties)? else {
        return Ok(ChartOutcome::empty(EMPTY_AFTER_DROPNA));
    };
    let kept = wide.drop_missing();
    if kept.is_empty() {
        debug!(
            rows = wide.entities.len(),
            cols = wide.properties.len(),
            "heat-map empty after dropping missing rows and columns"
        );
        return Ok(ChartOutcome::empty(EMPTY_AFTER_DROPNA));
    }

    let scaled = kept.normalized(config.epsilon);
    Ok(ChartOutcome::Ready {
        data: HeatmapMatrix {
            row_labels: scaled.entities,
            col_labels: scaled.properties,
            values: scaled.values,
        },
    })
}
