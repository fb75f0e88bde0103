use crate::models::edition::StoreLayout;
use serde::{Deserialize, Serialize};

/// Flattened, persisted form of an attempt: one row of the result store.
///
/// Older files lack `Questions_Attempted` and/or `Date`; those columns
/// deserialize as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultLogEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Score")]
    pub score: u32,
    #[serde(rename = "Percentage")]
    pub percentage: f64,
    #[serde(
        rename = "Questions_Attempted",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub questions_attempted: Option<u32>,
    #[serde(rename = "Date", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ResultLogEntry {
    /// Row cells for the given layout, in header order.
    pub fn to_record(&self, layout: StoreLayout) -> Vec<String> {
        let mut row = vec![
            self.name.clone(),
            self.score.to_string(),
            format!("{:.1}", self.percentage),
        ];

        if layout == StoreLayout::Full {
            row.push(
                self.questions_attempted
                    .map(|q| q.to_string())
                    .unwrap_or_default(),
            );
        }
        if layout != StoreLayout::Basic {
            row.push(self.date.clone().unwrap_or_default());
        }

        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> ResultLogEntry {
        ResultLogEntry {
            name: "Mia".into(),
            score: 4,
            percentage: 80.0,
            questions_attempted: Some(5),
            date: Some("2025-01-02 10:00:00".into()),
        }
    }

    #[test]
    fn basic_layout_drops_newer_columns() {
        assert_eq!(
            entry().to_record(StoreLayout::Basic),
            vec!["Mia", "4", "80.0"]
        );
    }

    #[test]
    fn full_layout_orders_count_before_date() {
        assert_eq!(
            entry().to_record(StoreLayout::Full),
            vec!["Mia", "4", "80.0", "5", "2025-01-02 10:00:00"]
        );
    }
}
