//! Answer normalization and comparison.

use crate::errors::{AppError, AppResult};
use crate::models::question::{Question, QuestionKind};

/// Case-insensitive comparison of trimmed texts.
pub fn is_correct(submitted: &str, expected: &str) -> bool {
    submitted.trim().to_lowercase() == expected.trim().to_lowercase()
}

/// Turn raw input into the text that gets compared, according to the kind.
///
/// - multiple choice: a 1-based option number or the option text itself
///   (any case) resolves to the option text;
/// - true/false: the option number (1 = True, 2 = False), `t`, `f`,
///   `true`, `false`, `yes`, `no` in any case;
/// - numeric / free text: trimmed input.
///
/// Blank input is never passed here; the runner handles it first.
pub fn normalize(question: &Question, raw: &str) -> AppResult<String> {
    let input = raw.trim();

    match &question.kind {
        QuestionKind::MultipleChoice { options } => {
            // option text wins over an option number ("8" among 6|8|12)
            if let Some(o) = options.iter().find(|o| is_correct(input, o)) {
                return Ok(o.clone());
            }
            let Ok(n) = input.parse::<usize>() else {
                let msg = format!("'{input}' is not an option");
                return Err(AppError::InvalidAnswer(msg));
            };
            options.get(n.wrapping_sub(1)).cloned().ok_or_else(|| {
                let msg = format!("choose an option between 1 and {}", options.len());
                AppError::InvalidAnswer(msg)
            })
        }
        QuestionKind::TrueFalse => match input.to_lowercase().as_str() {
            "1" | "t" | "true" | "y" | "yes" => Ok("True".to_string()),
            "2" | "f" | "false" | "n" | "no" => Ok("False".to_string()),
            _ => Err(AppError::InvalidAnswer("answer True or False".to_string())),
        },
        QuestionKind::Numeric | QuestionKind::FreeText => Ok(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_ignores_case_and_padding() {
        assert!(is_correct("PARIS", "Paris"));
        assert!(is_correct("paris", "Paris"));
        assert!(is_correct("  Paris ", "Paris"));
        assert!(!is_correct("Lyon", "Paris"));
    }

    #[test]
    fn numeric_compares_as_text() {
        assert!(is_correct("206", "206"));
        assert!(!is_correct("206.0", "206"));
    }

    #[test]
    fn option_number_resolves_to_text() {
        let q = Question::multiple_choice("Capital of France?", "Paris", &["Lyon", "Paris"]);
        assert_eq!(normalize(&q, "2").unwrap(), "Paris");
        assert_eq!(normalize(&q, "paris").unwrap(), "Paris");
        assert!(matches!(
            normalize(&q, "3"),
            Err(AppError::InvalidAnswer(_))
        ));
        assert!(matches!(
            normalize(&q, "0"),
            Err(AppError::InvalidAnswer(_))
        ));
        assert!(matches!(
            normalize(&q, "Rome"),
            Err(AppError::InvalidAnswer(_))
        ));
    }

    #[test]
    fn numeric_option_text_beats_index() {
        let q = Question::multiple_choice("Legs on a spider?", "8", &["6", "8", "12"]);
        assert_eq!(normalize(&q, "8").unwrap(), "8");
        assert_eq!(normalize(&q, "2").unwrap(), "8");
    }

    #[test]
    fn true_false_shortcuts() {
        let q = Question::true_false("Water is wet", true, "");
        assert_eq!(normalize(&q, "t").unwrap(), "True");
        assert_eq!(normalize(&q, "FALSE").unwrap(), "False");
        assert_eq!(normalize(&q, "2").unwrap(), "False");
        assert!(normalize(&q, "maybe").is_err());
    }
}
