use serde::{Deserialize, Serialize};

use crate::constants::{COLLAPSED_PAD_ABS, COLLAPSED_PAD_REL, MIN_MAX_EPSILON};
use crate::error::{MatinsError, Result};
use crate::selection::{CountBounds, SelectionPolicy};

/// The comparison charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Radar,
    Heatmap,
    ParallelCoordinates,
}

impl ChartKind {
    /// How many numeric columns pre-fill the property picker.
    pub fn default_property_count(self) -> usize {
        match self {
            ChartKind::Radar => 5,
            ChartKind::Heatmap => 8,
            ChartKind::ParallelCoordinates => 5,
        }
    }
}

/// Tunables for every comparison transform.
///
/// Deserializes from partial JSON: unnamed fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Added to `max - min` in min-max scaling.
    pub epsilon: f64,
    pub radar: SelectionPolicy,
    pub heatmap: SelectionPolicy,
    pub parallel: SelectionPolicy,
    /// Half-width of a collapsed parallel axis at value 0.
    pub collapsed_pad_abs: f64,
    /// Half-width of a collapsed parallel axis as a fraction of `|value|`.
    pub collapsed_pad_rel: f64,
}

impl Default for CompareConfig {
    fn default() -> Self {
        CompareConfig {
            epsilon: MIN_MAX_EPSILON,
            radar: SelectionPolicy::new(CountBounds::between(2, 8), CountBounds::between(3, 8)),
            heatmap: SelectionPolicy::new(CountBounds::at_least(2), CountBounds::at_least(2)),
            parallel: SelectionPolicy::new(
                CountBounds::between(2, 10),
                CountBounds::between(2, 10),
            ),
            collapsed_pad_abs: COLLAPSED_PAD_ABS,
            collapsed_pad_rel: COLLAPSED_PAD_REL,
        }
    }
}

impl CompareConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: CompareConfig = serde_json::from_str(text)
            .map_err(|e| MatinsError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn policy(&self, chart: ChartKind) -> &SelectionPolicy {
        match chart {
            ChartKind::Radar => &self.radar,
            ChartKind::Heatmap => &self.heatmap,
            ChartKind::ParallelCoordinates => &self.parallel,
        }
    }

    pub fn with_policy(mut self, chart: ChartKind, policy: SelectionPolicy) -> Self {
        match chart {
            ChartKind::Radar => self.radar = policy,
            ChartKind::Heatmap => self.heatmap = policy,
            ChartKind::ParallelCoordinates => self.parallel = policy,
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(MatinsError::InvalidConfig(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        if !(self.collapsed_pad_abs > 0.0) || self.collapsed_pad_rel < 0.0 {
            return Err(MatinsError::InvalidConfig(
                "collapsed-range padding must be positive".to_string(),
            ));
        }
        for chart in [ChartKind::Radar, ChartKind::Heatmap, ChartKind::ParallelCoordinates] {
            let policy = self.policy(chart);
            if !policy.entities.is_consistent() || !policy.properties.is_consistent() {
                return Err(MatinsError::InvalidConfig(format!(
                    "{chart:?} selection bounds have min > max"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            CompareConfig::from_json(r#"{"radar": {"entities": {"min": 2, "max": 5}, "properties": {"min": 3, "max": 5}}}"#)
                .unwrap();
        assert_eq!(config.radar.entities, CountBounds::between(2, 5));
        assert_eq!(config.epsilon, MIN_MAX_EPSILON);
        assert_eq!(config.parallel, CompareConfig::default().parallel);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = CompareConfig::from_json(r#"{"heatmap": {"entities": {"min": 4, "max": 3}, "properties": {"min": 2, "max": null}}}"#)
            .unwrap_err();
        assert!(matches!(err, MatinsError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_epsilon_rejected() {
        assert!(CompareConfig::from_json(r#"{"epsilon": 0.0}"#).is_err());
    }
}
