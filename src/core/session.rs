use crate::core::{evaluator, scoring};
use crate::models::attempt::{AnswerRecord, Attempt};
use crate::models::question::Question;
use chrono::NaiveDateTime;

/// Mutable state of one quiz run.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub name: String,
    pub age: u32,
    pub score: u32,
    pub asked: u32,
    pub correct: Vec<AnswerRecord>,
    pub wrong: Vec<AnswerRecord>,
}

impl Session {
    pub fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
            ..Default::default()
        }
    }

    /// Score one normalized, non-blank answer and remember it.
    pub fn record(&mut self, question: &Question, submitted: &str) -> bool {
        let correct = evaluator::is_correct(submitted, &question.answer);
        let record = AnswerRecord {
            prompt: question.prompt.clone(),
            submitted: submitted.to_string(),
            expected: question.answer.clone(),
            correct,
        };

        self.asked += 1;
        if correct {
            self.score += 1;
            self.correct.push(record);
        } else {
            self.wrong.push(record);
        }
        correct
    }

    pub fn percentage(&self) -> f64 {
        scoring::percentage(self.score, self.asked)
    }

    pub fn finish(&self, timestamp: Option<NaiveDateTime>) -> Attempt {
        Attempt {
            participant_name: self.name.clone(),
            age: self.age,
            score: self.score,
            questions_asked: self.asked,
            timestamp,
        }
    }

    /// Text shown at the end of the quiz.
    pub fn summary(&self) -> String {
        let mut out = format!("Quiz Summary for {}\n\n", self.name);
        out.push_str(&format!(
            "Score: {}/{} ({:.1}%)\n\n",
            self.score,
            self.asked,
            self.percentage()
        ));

        out.push_str("Correct Answers:\n");
        for r in &self.correct {
            out.push_str(&format!(
                "✓ {}\n   Your answer: {}\n\n",
                r.prompt, r.submitted
            ));
        }

        out.push_str("Incorrect Answers:\n");
        for r in &self.wrong {
            out.push_str(&format!(
                "✗ {}\n   Your answer: {}\n   Correct answer: {}\n\n",
                r.prompt, r.submitted, r.expected
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> Question {
        Question::free_text("What is the capital city of France?", "Paris")
    }

    #[test]
    fn record_updates_score_and_lists() {
        let mut s = Session::new("Jo", 15);
        assert!(s.record(&paris(), "PARIS"));
        assert!(!s.record(&paris(), "Lyon"));

        assert_eq!((s.score, s.asked), (1, 2));
        assert_eq!(s.correct.len(), 1);
        assert_eq!(s.wrong[0].expected, "Paris");
        assert_eq!(s.percentage(), 50.0);
    }

    #[test]
    fn summary_lists_both_sides() {
        let mut s = Session::new("Jo", 15);
        s.record(&paris(), "paris");
        s.record(&paris(), "Nice");

        let text = s.summary();
        assert!(text.contains("Score: 1/2 (50.0%)"));
        assert!(text.contains("Your answer: Nice\n   Correct answer: Paris"));
    }

    #[test]
    fn finish_freezes_counts() {
        let mut s = Session::new("Jo", 15);
        for _ in 0..5 {
            s.record(&paris(), "Paris");
        }
        let attempt = s.finish(None);
        assert_eq!(attempt.score, 5);
        assert_eq!(attempt.percentage(), 100.0);
    }
}
