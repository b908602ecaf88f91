use serde::Serialize;

/// Result of a chart transform that did not fail.
///
/// Only `Ready` carries chart data; the other variants carry the text the
/// page shows in place of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChartOutcome<T> {
    Ready { data: T },
    Incomplete { guidance: String },
    Empty { message: String },
}

impl<T> ChartOutcome<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, ChartOutcome::Ready { .. })
    }

    pub fn into_ready(self) -> Option<T> {
        match self {
            ChartOutcome::Ready { data } => Some(data),
            _ => None,
        }
    }

    /// Guidance or informational text, if no chart should be drawn.
    pub fn message(&self) -> Option<&str> {
        match self {
            ChartOutcome::Ready { .. } => None,
            ChartOutcome::Incomplete { guidance } => Some(guidance),
            ChartOutcome::Empty { message } => Some(message),
        }
    }

    pub(crate) fn empty(message: &str) -> Self {
        ChartOutcome::Empty {
            message: message.to_string(),
        }
    }
}
