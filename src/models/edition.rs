use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The three quiz iterations. Each one fixes the question bank, the
/// selection strategy, the blank-answer policy and the result file layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuizEdition {
    /// Five typed capital-city questions, fixed order.
    Classic,
    /// Multiple-choice capitals, shuffled.
    Choice,
    /// Mixed bank (multiple choice, true/false, numeric), user-selected length.
    #[default]
    Mixed,
}

/// Which CSV columns an edition writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreLayout {
    /// Name, Score, Percentage
    Basic,
    /// Name, Score, Percentage, Date
    Dated,
    /// Name, Score, Percentage, Questions_Attempted, Date
    Full,
}

impl StoreLayout {
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            StoreLayout::Basic => &["Name", "Score", "Percentage"],
            StoreLayout::Dated => &["Name", "Score", "Percentage", "Date"],
            StoreLayout::Full => &[
                "Name",
                "Score",
                "Percentage",
                "Questions_Attempted",
                "Date",
            ],
        }
    }
}

/// What happens when the participant submits an empty answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankPolicy {
    Reprompt,
    ConfirmQuit,
}

/// Horizontal line drawn across the comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceLine {
    CurrentScore,
    Average,
}

impl QuizEdition {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizEdition::Classic => "classic",
            QuizEdition::Choice => "choice",
            QuizEdition::Mixed => "mixed",
        }
    }

    pub fn layout(&self) -> StoreLayout {
        match self {
            QuizEdition::Classic => StoreLayout::Basic,
            QuizEdition::Choice => StoreLayout::Dated,
            QuizEdition::Mixed => StoreLayout::Full,
        }
    }

    /// `None` means the participant chooses how many questions to attempt.
    pub fn fixed_count(&self) -> Option<usize> {
        match self {
            QuizEdition::Classic | QuizEdition::Choice => Some(5),
            QuizEdition::Mixed => None,
        }
    }

    pub fn shuffles(&self) -> bool {
        !matches!(self, QuizEdition::Classic)
    }

    pub fn blank_policy(&self) -> BlankPolicy {
        match self {
            QuizEdition::Classic => BlankPolicy::Reprompt,
            _ => BlankPolicy::ConfirmQuit,
        }
    }

    pub fn reference_line(&self) -> ReferenceLine {
        match self {
            QuizEdition::Classic => ReferenceLine::CurrentScore,
            _ => ReferenceLine::Average,
        }
    }

    pub fn rejects_numeric_names(&self) -> bool {
        matches!(self, QuizEdition::Choice)
    }

    /// Default result file name, one per edition so the layouts never mix.
    pub fn results_file_name(&self) -> &'static str {
        match self {
            QuizEdition::Classic => "quiz_results.csv",
            QuizEdition::Choice => "quiz_results_2.csv",
            QuizEdition::Mixed => "quiz_results_3.csv",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            QuizEdition::Classic => "Welcome to the Quiz Game!",
            QuizEdition::Choice => "Welcome to the Capital Cities Quiz!",
            QuizEdition::Mixed => "Welcome to the Quiz Game!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_grow_with_each_edition() {
        assert_eq!(QuizEdition::Classic.layout().headers().len(), 3);
        assert_eq!(QuizEdition::Choice.layout().headers().len(), 4);
        assert_eq!(QuizEdition::Mixed.layout().headers().len(), 5);
    }

    #[test]
    fn only_classic_keeps_fixed_order() {
        assert!(!QuizEdition::Classic.shuffles());
        assert!(QuizEdition::Choice.shuffles());
        assert_eq!(QuizEdition::Mixed.fixed_count(), None);
    }
}
