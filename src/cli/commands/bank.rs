use crate::Context;
use crate::cli::parser::Commands;
use crate::core::bank;
use crate::errors::AppResult;
use crate::models::question::Question;
use crate::utils::formatting::{bold, italic};
use crate::utils::path::expand_tilde;

fn describe(i: usize, q: &Question, answers: bool) -> String {
    let mut out = format!("{:>2}. [{}] {}\n", i + 1, q.kind.code(), q.prompt);
    for (n, option) in q.options().iter().enumerate() {
        out.push_str(&format!("      {}) {}\n", n + 1, option));
    }
    if answers {
        out.push_str(&format!("      → {}\n", bold(&q.answer)));
        if let Some(e) = &q.explanation {
            out.push_str(&format!("      {}\n", italic(e)));
        }
    }
    out
}

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Bank { answers, file } = cmd {
        let questions = match file {
            Some(f) => bank::load_csv(&expand_tilde(f))?,
            None => bank::builtin(ctx.edition),
        };

        println!(
            "📚 {} questions ({} edition)\n",
            questions.len(),
            ctx.edition.as_str()
        );
        for (i, q) in questions.iter().enumerate() {
            print!("{}", describe(i, q, *answers));
        }
    }
    Ok(())
}
