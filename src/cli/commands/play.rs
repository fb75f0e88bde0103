use crate::Context;
use crate::cli::parser::Commands;
use crate::core::bank;
use crate::core::eligibility::AgeRange;
use crate::core::quiz::{QuizOptions, QuizRunner};
use crate::errors::{AppError, AppResult};
use crate::report::fs_utils::ensure_writable;
use crate::report::{ReportLogic, ReportOptions};
use crate::store::log::qlog_quiet;
use crate::ui::messages::success;
use crate::ui::prompt::Console;
use crate::utils::path::expand_tilde;
use std::io;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Play {
        name,
        age,
        questions,
        seed,
        bank: bank_file,
        no_chart,
        chart,
    } = cmd
    {
        let edition = ctx.edition;
        let questions_bank = match bank_file {
            Some(f) => bank::load_csv(&expand_tilde(f))?,
            None => bank::builtin(edition),
        };

        let opts = QuizOptions {
            edition,
            age_range: AgeRange {
                min: ctx.cfg.min_age,
                max: ctx.cfg.max_age,
            },
            name: name.clone(),
            age: age.clone(),
            questions: *questions,
            seed: *seed,
        };

        let store = ctx.store();
        let log_path = ctx.activity_log();

        // ask about an existing chart file before the console takes stdin
        let chart_path = chart.as_deref().map(expand_tilde);
        if let Some(path) = &chart_path {
            ensure_writable(path, false)?;
        }

        let outcome = {
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout());
            QuizRunner::new(&mut console, questions_bank, opts).run(&store)
        };

        let attempt = match outcome {
            Ok(a) => a,
            Err(e) => {
                match &e {
                    AppError::NotEligible { age, .. } => qlog_quiet(
                        &log_path,
                        "rejected",
                        "",
                        &format!("Age {} outside the allowed range", age),
                    ),
                    AppError::Cancelled => {
                        qlog_quiet(&log_path, "cancel", "", "Quiz cancelled, nothing saved")
                    }
                    _ => {}
                }
                return Err(e);
            }
        };

        success(format!("Result saved to {}", store.path().display()));
        qlog_quiet(
            &log_path,
            "play",
            &attempt.participant_name,
            &format!(
                "{} edition: {}/{} ({:.1}%)",
                edition.as_str(),
                attempt.score,
                attempt.questions_asked,
                attempt.percentage()
            ),
        );

        let show_terminal = ctx.cfg.show_chart && !*no_chart;
        if show_terminal || chart_path.is_some() {
            let entries = store.load_all()?;
            let report_opts = ReportOptions {
                terminal_width: show_terminal.then_some(ctx.cfg.chart_width),
                pdf: chart_path.as_deref(),
                force: true,
            };
            ReportLogic::show(
                &entries,
                Some((attempt.participant_name.as_str(), attempt.percentage())),
                edition.reference_line(),
                &report_opts,
            )?;
        }
    }
    Ok(())
}
