/// Minimum and maximum over the present values of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnRange {
    pub min: f64,
    pub max: f64,
}

impl ColumnRange {
    /// `None` when no value is present.
    pub fn of(values: &[Option<f64>]) -> Option<Self> {
        values.iter().flatten().fold(None, |acc, &v| {
            Some(match acc {
                None => ColumnRange { min: v, max: v },
                Some(r) => ColumnRange {
                    min: r.min.min(v),
                    max: r.max.max(v),
                },
            })
        })
    }

    pub fn is_collapsed(&self) -> bool {
        self.min == self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Min-max scale a column: `(v - min) / (max - min + epsilon)`.
///
/// Missing values stay missing. When every present value is equal (including
/// the single-value case) each of them scales to exactly `0.0`.
pub fn min_max_scale(values: &[Option<f64>], epsilon: f64) -> Vec<Option<f64>> {
    let Some(range) = ColumnRange::of(values) else {
        return values.to_vec();
    };
    let denom = range.span() + epsilon;
    values
        .iter()
        .map(|v| v.map(|v| (v - range.min) / denom))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_skips_missing() {
        let r = ColumnRange::of(&[None, Some(3.0), Some(-1.0), None]).unwrap();
        assert_eq!(r, ColumnRange { min: -1.0, max: 3.0 });
        assert!(ColumnRange::of(&[None, None]).is_none());
    }

    #[test]
    fn test_scale_single_value_is_zero() {
        assert_eq!(min_max_scale(&[None, Some(42.0)], 1e-12), vec![None, Some(0.0)]);
    }

    #[test]
    fn test_scale_all_missing_passthrough() {
        assert_eq!(min_max_scale(&[None, None], 1e-12), vec![None, None]);
    }
}
