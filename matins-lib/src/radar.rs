use serde::Serialize;
use tracing::debug;

use crate::config::CompareConfig;
use crate::constants::EMPTY_SELECTION;
use crate::dataset::{Dataset, dedup_names, entities_in_view};
use crate::error::Result;
use crate::outcome::ChartOutcome;
use crate::reshape::{LongRecord, melt};
use crate::selection::SelectionState;
use crate::subset::subset;

/// Long-form radar input: one point per (material, property), scaled to [0, 1]
/// per property over the selected materials.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub points: Vec<LongRecord>,
}

impl RadarSeries {
    /// Points of one material, in property order (one closed polygon).
    pub fn trace<'a>(&'a self, entity: &'a str) -> impl Iterator<Item = &'a LongRecord> + 'a {
        self.points.iter().filter(move |p| p.entity == entity)
    }
}

pub fn build_radar_series<E, P>(
    dataset: &Dataset,
    entities: &[E],
    properties: &[P],
    config: &CompareConfig,
) -> Result<ChartOutcome<RadarSeries>>
where
    E: AsRef<str>,
    P: AsRef<str>,
{
    let entities = entities_in_view(dataset, entities);
    let n_properties = dedup_names(properties).len();
    if let SelectionState::Incomplete { guidance } = config.radar.check(entities.len(), n_properties) {
        return Ok(ChartOutcome::Incomplete { guidance });
    }

    let Some(wide) = subset(dataset, &entities, properties)? else {
        return Ok(ChartOutcome::empty(EMPTY_SELECTION));
    };
    let points = melt(&wide.normalized(config.epsilon));
    debug!(points = points.len(), "radar series");

    Ok(ChartOutcome::Ready {
        data: RadarSeries { points },
    })
}
