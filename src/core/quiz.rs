//! Interactive quiz flow: identity → eligibility → questions → scoring → store.

use crate::core::bank;
use crate::core::eligibility::{self, AgeRange};
use crate::core::evaluator;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::attempt::Attempt;
use crate::models::edition::{BlankPolicy, QuizEdition, StoreLayout};
use crate::models::question::{Question, QuestionKind};
use crate::store::ResultStore;
use crate::ui::prompt::Console;
use chrono::Local;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};

/// Everything the runner needs besides the console and the store.
#[derive(Debug, Clone, Default)]
pub struct QuizOptions {
    pub edition: QuizEdition,
    pub age_range: AgeRange,
    /// Pre-filled answers to the identity prompts; still validated.
    pub name: Option<String>,
    pub age: Option<String>,
    pub questions: Option<usize>,
    pub seed: Option<u64>,
}

pub struct QuizRunner<'a, R, W> {
    console: &'a mut Console<R, W>,
    bank: Vec<Question>,
    opts: QuizOptions,
    rng: StdRng,
}

impl<'a, R: BufRead, W: Write> QuizRunner<'a, R, W> {
    pub fn new(console: &'a mut Console<R, W>, bank: Vec<Question>, opts: QuizOptions) -> Self {
        let rng = match opts.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            console,
            bank,
            opts,
            rng,
        }
    }

    /// Run one attempt and persist it. Nothing is written to the store when
    /// the participant is not eligible or cancels.
    pub fn run(&mut self, store: &ResultStore) -> AppResult<Attempt> {
        if self.bank.is_empty() {
            return Err(AppError::InvalidBank("the question bank is empty".into()));
        }
        store.ensure_initialized()?;

        let edition = self.opts.edition;
        self.console.title(edition.title())?;

        let name = self.ask_name()?;
        let age = self.ask_age()?;
        let mut session = Session::new(&name, age);

        let count = self.question_count()?;
        let questions = bank::select(&self.bank, count, edition.shuffles(), &mut self.rng);
        log::debug!("Selected {} questions for {}", questions.len(), name);

        for q in &questions {
            self.ask_question(q, &mut session)?;
        }
        self.console.separator()?;

        self.console.message(&format!(
            "Quiz complete! Your score is {} out of {} ({:.1}%).",
            session.score,
            session.asked,
            session.percentage()
        ))?;
        if edition == QuizEdition::Mixed {
            self.console.show_text("Quiz Summary", &session.summary())?;
        }

        let timestamp = match store.layout() {
            StoreLayout::Basic => None,
            _ => Some(Local::now().naive_local()),
        };
        let attempt = session.finish(timestamp);
        store.append(&attempt.to_entry())?;

        Ok(attempt)
    }

    fn ask_name(&mut self) -> AppResult<String> {
        let reject_numeric = self.opts.edition.rejects_numeric_names();
        let mut preset = self.opts.name.take();

        loop {
            let raw = match preset.take() {
                Some(n) => n,
                None => self.console.ask_text("Please enter your name:")?,
            };
            match eligibility::validate_name(&raw, reject_numeric) {
                Ok(name) => return Ok(name),
                Err(AppError::InvalidName(msg)) => self.console.warn(&msg)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn ask_age(&mut self) -> AppResult<u32> {
        let range = self.opts.age_range;
        let mut preset = self.opts.age.take();

        loop {
            let raw = match preset.take() {
                Some(a) => a,
                None => self.console.ask_text("Please enter your age:")?,
            };
            let age = match eligibility::parse_age(&raw) {
                Ok(age) => age,
                Err(AppError::InvalidAge(msg)) => {
                    self.console.warn(&msg)?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            match eligibility::check_age(age, &range) {
                Ok(age) => {
                    self.console.good("Age verified! You can proceed with the quiz.")?;
                    return Ok(age);
                }
                Err(e) => {
                    self.console.bad(&format!(
                        "Sorry, this quiz is only for participants aged {}-{}.",
                        range.min, range.max
                    ))?;
                    return Err(e);
                }
            }
        }
    }

    fn question_count(&mut self) -> AppResult<usize> {
        let total = self.bank.len();

        if let Some(fixed) = self.opts.edition.fixed_count() {
            let count = fixed.min(total);
            self.console
                .message(&format!("You will be asked {} questions.", count))?;
            return Ok(count);
        }

        if let Some(n) = self.opts.questions {
            if (1..=total).contains(&n) {
                return Ok(n);
            }
            self.console.warn(&format!(
                "Cannot attempt {} questions, the bank has {}.",
                n, total
            ))?;
        }

        loop {
            match self.console.ask_integer(
                "How many questions would you like to attempt?",
                1,
                total as u32,
            )? {
                Some(n) => return Ok(n as usize),
                None => self.confirm_quit("Do you want to quit?")?,
            }
        }
    }

    /// Ask until a usable answer arrives, then score it.
    fn ask_question(&mut self, q: &Question, session: &mut Session) -> AppResult<()> {
        self.console.separator()?;
        self.console.title(q.kind.label())?;

        loop {
            let raw = match &q.kind {
                QuestionKind::MultipleChoice { options } => {
                    self.console.ask_choice(&q.prompt, options)?
                }
                QuestionKind::TrueFalse => self
                    .console
                    .ask_choice(&q.prompt, &["True".to_string(), "False".to_string()])?,
                QuestionKind::Numeric | QuestionKind::FreeText => {
                    self.console.ask_text(&format!("{}:", q.prompt))?
                }
            };

            if raw.trim().is_empty() {
                match self.opts.edition.blank_policy() {
                    BlankPolicy::Reprompt => {
                        self.console.warn("Please enter an answer. Try again.")?
                    }
                    BlankPolicy::ConfirmQuit => self.confirm_quit("Do you want to quit the quiz?")?,
                }
                continue;
            }

            let answer = match evaluator::normalize(q, &raw) {
                Ok(a) => a,
                Err(AppError::InvalidAnswer(msg)) => {
                    self.console.warn(&msg)?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            if session.record(q, &answer) {
                self.console.good("✓ Correct! You earned a point.")?;
            } else {
                self.console.bad(&format!(
                    "✗ Incorrect. The correct answer is {}.",
                    q.answer
                ))?;
            }
            if let Some(explanation) = &q.explanation {
                self.console.message(explanation)?;
            }
            return Ok(());
        }
    }

    fn confirm_quit(&mut self, question: &str) -> AppResult<()> {
        if self.console.confirm(question)? {
            return Err(AppError::Cancelled);
        }
        Ok(())
    }
}
