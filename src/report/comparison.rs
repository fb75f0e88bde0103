//! Bar-chart model comparing every stored attempt.

use crate::core::scoring;
use crate::errors::{AppError, AppResult};
use crate::models::edition::ReferenceLine;
use crate::models::result_entry::ResultLogEntry;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub bars: Vec<Bar>,
    /// Index of the bar identified as the current attempt.
    pub highlight: Option<usize>,
    pub reference: f64,
    pub reference_label: &'static str,
}

impl ComparisonReport {
    /// One bar per stored row, in file order.
    ///
    /// The current attempt is found by value: the first bar whose name and
    /// percentage both match. Identical earlier rows therefore take the
    /// highlight instead of the row just written.
    pub fn build(
        entries: &[ResultLogEntry],
        current: Option<(&str, f64)>,
        reference: ReferenceLine,
    ) -> AppResult<Self> {
        if entries.is_empty() {
            return Err(AppError::Report("no results to compare yet".into()));
        }

        let bars: Vec<Bar> = entries
            .iter()
            .map(|e| Bar {
                label: e.name.clone(),
                value: e.percentage,
            })
            .collect();

        let highlight = current.and_then(|(name, pct)| {
            bars.iter().position(|b| b.label == name && b.value == pct)
        });

        let values: Vec<f64> = bars.iter().map(|b| b.value).collect();
        let average = scoring::mean(&values).unwrap_or(0.0);

        let (reference, reference_label) = match (reference, current) {
            (ReferenceLine::CurrentScore, Some((_, pct))) => (pct, "Your Score"),
            _ => (average, "Average Score"),
        };

        Ok(Self {
            bars,
            highlight,
            reference,
            reference_label,
        })
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
