/// Per-kind payload of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    MultipleChoice { options: Vec<String> },
    TrueFalse,
    Numeric,
    FreeText,
}

impl QuestionKind {
    pub fn code(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice { .. } => "multiple_choice",
            QuestionKind::TrueFalse => "true_false",
            QuestionKind::Numeric => "numeric",
            QuestionKind::FreeText => "free_text",
        }
    }

    /// Title shown above the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice { .. } => "Multiple Choice Question",
            QuestionKind::TrueFalse => "True/False Question",
            QuestionKind::Numeric => "Numerical Question",
            QuestionKind::FreeText => "Quiz Question",
        }
    }
}

/// A single immutable question of the bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub kind: QuestionKind,
    pub answer: String,
    pub explanation: Option<String>,
}

impl Question {
    pub fn free_text(prompt: &str, answer: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            kind: QuestionKind::FreeText,
            answer: answer.to_string(),
            explanation: None,
        }
    }

    pub fn multiple_choice(prompt: &str, answer: &str, options: &[&str]) -> Self {
        Self {
            prompt: prompt.to_string(),
            kind: QuestionKind::MultipleChoice {
                options: options.iter().map(|o| o.to_string()).collect(),
            },
            answer: answer.to_string(),
            explanation: None,
        }
    }

    pub fn true_false(prompt: &str, answer: bool, explanation: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            kind: QuestionKind::TrueFalse,
            answer: if answer { "True" } else { "False" }.to_string(),
            explanation: Some(explanation.to_string()),
        }
    }

    pub fn numeric(prompt: &str, answer: &str, explanation: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            kind: QuestionKind::Numeric,
            answer: answer.to_string(),
            explanation: Some(explanation.to_string()),
        }
    }

    /// Options in display order; empty for kinds without options.
    pub fn options(&self) -> &[String] {
        match &self.kind {
            QuestionKind::MultipleChoice { options } => options,
            _ => &[],
        }
    }
}
