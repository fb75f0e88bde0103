//! Built-in question banks and question selection.

use crate::errors::{AppError, AppResult};
use crate::models::edition::QuizEdition;
use crate::models::question::{Question, QuestionKind};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::path::Path;

/// Bank shipped with the given edition.
pub fn builtin(edition: QuizEdition) -> Vec<Question> {
    match edition {
        QuizEdition::Classic => classic(),
        QuizEdition::Choice => capitals(),
        QuizEdition::Mixed => mixed(),
    }
}

fn classic() -> Vec<Question> {
    vec![
        Question::free_text("What is New Zealand's Capital City?", "Wellington"),
        Question::free_text("What is the capital city of France?", "Paris"),
        Question::free_text("What is the capital city of Germany?", "Berlin"),
        Question::free_text("What is the capital city of Italy?", "Rome"),
        Question::free_text("What is the capital city of Japan?", "Tokyo"),
    ]
}

fn capitals() -> Vec<Question> {
    vec![
        Question::multiple_choice(
            "What is the capital of France?",
            "Paris",
            &["Paris", "London", "Berlin", "Madrid"],
        ),
        Question::multiple_choice(
            "What is the capital of Japan?",
            "Tokyo",
            &["Tokyo", "Seoul", "Beijing", "Bangkok"],
        ),
        Question::multiple_choice(
            "What is the capital of Brazil?",
            "Brasília",
            &["Brasília", "Rio de Janeiro", "São Paulo", "Buenos Aires"],
        ),
        Question::multiple_choice(
            "What is the capital of Australia?",
            "Canberra",
            &["Canberra", "Sydney", "Melbourne", "Perth"],
        ),
        Question::multiple_choice(
            "What is the capital of Egypt?",
            "Cairo",
            &["Cairo", "Alexandria", "Luxor", "Aswan"],
        ),
        Question::multiple_choice(
            "What is the capital of India?",
            "New Delhi",
            &["New Delhi", "Mumbai", "Bangalore", "Chennai"],
        ),
    ]
}

fn mixed() -> Vec<Question> {
    vec![
        // multiple choice
        Question::multiple_choice(
            "What is the capital of France?",
            "Paris",
            &["Paris", "London", "Berlin", "Madrid"],
        ),
        Question::multiple_choice(
            "Which planet is known as the Red Planet?",
            "Mars",
            &["Mars", "Venus", "Jupiter", "Saturn"],
        ),
        Question::multiple_choice(
            "What is the chemical symbol for gold?",
            "Au",
            &["Au", "Ag", "Fe", "Cu"],
        ),
        Question::multiple_choice(
            "Who painted the Mona Lisa?",
            "Leonardo da Vinci",
            &["Leonardo da Vinci", "Michelangelo", "Van Gogh", "Picasso"],
        ),
        Question::multiple_choice(
            "What is the largest mammal on Earth?",
            "Blue Whale",
            &["Blue Whale", "African Elephant", "Giraffe", "Polar Bear"],
        ),
        // true / false
        Question::true_false(
            "The Great Wall of China is visible from space",
            false,
            "This is a common myth. The wall is too narrow to be seen from space.",
        ),
        Question::true_false(
            "Water boils at 100 degrees Celsius at sea level",
            true,
            "This is correct at standard atmospheric pressure.",
        ),
        Question::true_false(
            "Humans use only 10% of their brains",
            false,
            "This is a myth. Humans use most of their brain.",
        ),
        Question::true_false(
            "Sound travels faster in water than in air",
            true,
            "Sound indeed travels about 4 times faster in water.",
        ),
        Question::true_false(
            "A day on Venus is longer than its year",
            true,
            "Venus takes longer to rotate on its axis than to orbit the Sun.",
        ),
        // numeric
        Question::numeric(
            "What is the square root of 144?",
            "12",
            "This is a basic perfect square.",
        ),
        Question::numeric(
            "How many bones are in the adult human body?",
            "206",
            "The adult human skeleton consists of 206 bones.",
        ),
        Question::numeric(
            "In which year did World War II end?",
            "1945",
            "World War II ended with Japan's surrender in 1945.",
        ),
        Question::numeric(
            "What is the atomic number of Carbon?",
            "6",
            "Carbon has 6 protons in its nucleus.",
        ),
        Question::numeric(
            "How many planets are in our solar system?",
            "8",
            "Since 2006, when Pluto was reclassified.",
        ),
    ]
}

/// Pick `count` questions: the first `count` in bank order, or a random
/// non-repeating sample. Multiple-choice options are shuffled as well when
/// `shuffle` is set.
pub fn select<R: Rng + ?Sized>(
    bank: &[Question],
    count: usize,
    shuffle: bool,
    rng: &mut R,
) -> Vec<Question> {
    let count = count.min(bank.len());

    if !shuffle {
        return bank[..count].to_vec();
    }

    let mut picked: Vec<Question> = bank.choose_multiple(rng, count).cloned().collect();
    picked.shuffle(rng);
    for q in &mut picked {
        if let QuestionKind::MultipleChoice { options } = &mut q.kind {
            options.shuffle(rng);
        }
    }
    picked
}

/// Row of a custom bank file.
#[derive(Debug, Deserialize)]
struct BankRow {
    kind: String,
    prompt: String,
    answer: String,
    #[serde(default)]
    options: String,
    #[serde(default)]
    explanation: String,
}

/// Load a question bank from CSV (`kind,prompt,answer,options,explanation`).
pub fn load_csv(path: &Path) -> AppResult<Vec<Question>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut questions = Vec::new();

    for (i, result) in rdr.deserialize().enumerate() {
        let row: BankRow = result?;
        let line = i + 2;
        let question = row_to_question(row)
            .map_err(|e| AppError::InvalidBank(format!("{e} (line {line})")))?;
        questions.push(question);
    }

    if questions.is_empty() {
        let msg = format!("no questions in {}", path.display());
        return Err(AppError::InvalidBank(msg));
    }

    log::debug!(
        "Loaded {} questions from {}",
        questions.len(),
        path.display()
    );
    Ok(questions)
}

fn row_to_question(row: BankRow) -> Result<Question, String> {
    let explanation = Some(row.explanation.trim().to_string()).filter(|e| !e.is_empty());
    let answer = row.answer.trim().to_string();

    if row.prompt.trim().is_empty() || answer.is_empty() {
        return Err("prompt and answer are required".into());
    }

    let kind = match row.kind.trim().to_lowercase().as_str() {
        "multiple_choice" => {
            let options: Vec<String> = row
                .options
                .split('|')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
            if !options.iter().any(|o| o == &answer) {
                return Err(format!("answer '{}' is not among the options", answer));
            }
            QuestionKind::MultipleChoice { options }
        }
        "true_false" => {
            if !matches!(answer.as_str(), "True" | "False") {
                return Err("true/false answer must be True or False".into());
            }
            QuestionKind::TrueFalse
        }
        "numeric" => QuestionKind::Numeric,
        "free_text" => QuestionKind::FreeText,
        other => return Err(format!("unknown question kind '{}'", other)),
    };

    Ok(Question {
        prompt: row.prompt.trim().to_string(),
        kind,
        answer,
        explanation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn builtin_banks_have_expected_sizes() {
        assert_eq!(builtin(QuizEdition::Classic).len(), 5);
        assert_eq!(builtin(QuizEdition::Choice).len(), 6);
        assert_eq!(builtin(QuizEdition::Mixed).len(), 15);
    }

    #[test]
    fn multiple_choice_answers_are_among_options() {
        for edition in [QuizEdition::Choice, QuizEdition::Mixed] {
            for q in builtin(edition) {
                if let QuestionKind::MultipleChoice { options } = &q.kind {
                    assert!(options.contains(&q.answer), "{}", q.prompt);
                }
            }
        }
    }

    #[test]
    fn fixed_order_keeps_bank_order() {
        let bank = builtin(QuizEdition::Classic);
        let mut rng = StdRng::seed_from_u64(1);
        let picked = select(&bank, 5, false, &mut rng);
        assert_eq!(picked, bank);
    }

    #[test]
    fn shuffled_selection_never_repeats() {
        let bank = builtin(QuizEdition::Mixed);
        let mut rng = StdRng::seed_from_u64(7);
        let picked = select(&bank, 15, true, &mut rng);
        let prompts: HashSet<_> = picked.iter().map(|q| q.prompt.clone()).collect();
        assert_eq!(prompts.len(), 15);
    }

    #[test]
    fn count_is_capped_at_bank_size() {
        let bank = builtin(QuizEdition::Choice);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(select(&bank, 50, true, &mut rng).len(), 6);
    }

    const OCEANS: &str = "Atlantic|Pacific|Indian,";

    #[test]
    fn csv_bank_is_parsed_by_kind() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "kind,prompt,answer,options,explanation").unwrap();
        writeln!(f, "multiple_choice,Largest ocean?,Pacific,{}", OCEANS).unwrap();
        writeln!(f, "true_false,Bats are blind,False,,Most bats can see.").unwrap();
        writeln!(f, "numeric,Legs on a spider?,8,,").unwrap();

        let bank = load_csv(f.path()).unwrap();
        assert_eq!(bank.len(), 3);
        assert_eq!(bank[0].options().len(), 3);
        assert_eq!(bank[1].explanation.as_deref(), Some("Most bats can see."));
        assert_eq!(bank[2].kind, QuestionKind::Numeric);
    }

    #[test]
    fn csv_bank_rejects_unknown_kind() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "kind,prompt,answer,options,explanation").unwrap();
        writeln!(f, "essay,Why?,Because,,").unwrap();

        assert!(matches!(load_csv(f.path()), Err(AppError::InvalidBank(_))));
    }
}
