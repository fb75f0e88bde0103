use crate::core::scoring;
use crate::models::result_entry::ResultLogEntry;
use chrono::NaiveDateTime;

/// Date format written to the result store.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One completed run of the quiz, ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub participant_name: String,
    pub age: u32,
    pub score: u32,
    pub questions_asked: u32,
    pub timestamp: Option<NaiveDateTime>,
}

impl Attempt {
    /// Always derived from the (score, questions_asked) pair.
    pub fn percentage(&self) -> f64 {
        scoring::percentage(self.score, self.questions_asked)
    }

    pub fn to_entry(&self) -> ResultLogEntry {
        ResultLogEntry {
            name: self.participant_name.clone(),
            score: self.score,
            percentage: self.percentage(),
            questions_attempted: Some(self.questions_asked),
            date: self.timestamp.map(|t| t.format(DATE_FORMAT).to_string()),
        }
    }
}

/// Outcome of one answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub prompt: String,
    pub submitted: String,
    pub expected: String,
    pub correct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn entry_carries_recomputed_percentage_and_date() {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let attempt = Attempt {
            participant_name: "Jo".into(),
            age: 15,
            score: 2,
            questions_asked: 3,
            timestamp: Some(ts),
        };

        let entry = attempt.to_entry();
        assert_eq!(entry.percentage, 66.7);
        assert_eq!(entry.questions_attempted, Some(3));
        assert_eq!(entry.date.as_deref(), Some("2025-03-14 09:30:00"));
    }
}
