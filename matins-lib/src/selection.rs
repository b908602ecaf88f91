use serde::{Deserialize, Serialize};

/// Inclusive bounds on how many items a chart accepts. `max = None` is
/// unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountBounds {
    pub min: usize,
    pub max: Option<usize>,
}

impl CountBounds {
    pub const fn between(min: usize, max: usize) -> Self {
        CountBounds {
            min,
            max: Some(max),
        }
    }

    pub const fn at_least(min: usize) -> Self {
        CountBounds { min, max: None }
    }

    pub fn contains(&self, n: usize) -> bool {
        n >= self.min && self.max.is_none_or(|max| n <= max)
    }

    pub fn is_consistent(&self) -> bool {
        self.max.is_none_or(|max| max >= self.min)
    }

    fn describe(&self) -> String {
        match self.max {
            Some(max) if max == self.min => format!("{max}"),
            Some(max) => format!("{} – {}", self.min, max),
            None => format!("{} +", self.min),
        }
    }
}

/// Whether a chart's selection is complete enough to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SelectionState {
    Ready,
    Incomplete { guidance: String },
}

impl SelectionState {
    pub fn is_ready(&self) -> bool {
        matches!(self, SelectionState::Ready)
    }
}

/// Per-chart selection-count policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPolicy {
    pub entities: CountBounds,
    pub properties: CountBounds,
}

impl SelectionPolicy {
    pub const fn new(entities: CountBounds, properties: CountBounds) -> Self {
        SelectionPolicy {
            entities,
            properties,
        }
    }

    /// Counts are of distinct selected materials and properties.
    pub fn check(&self, n_entities: usize, n_properties: usize) -> SelectionState {
        let mut hints = Vec::new();
        if !self.entities.contains(n_entities) {
            hints.push(format!(
                "Pick {} materials (currently {n_entities})",
                self.entities.describe()
            ));
        }
        if !self.properties.contains(n_properties) {
            hints.push(format!(
                "Pick {} numeric properties (currently {n_properties})",
                self.properties.describe()
            ));
        }
        if hints.is_empty() {
            SelectionState::Ready
        } else {
            SelectionState::Incomplete {
                guidance: hints.join("; "),
            }
        }
    }
}
