use crate::Context;
use crate::cli::parser::Commands;
use crate::core::scoring;
use crate::errors::AppResult;
use crate::report::{ReportLogic, ReportOptions};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Report {
        name,
        percentage,
        pdf,
        force,
    } = cmd
    {
        let entries = ctx.store().load_all()?;
        let current = match (name, percentage) {
            (Some(n), Some(p)) => Some((n.as_str(), scoring::round1(*p))),
            _ => None,
        };

        let pdf_path = pdf.as_deref().map(expand_tilde);
        let opts = ReportOptions {
            terminal_width: pdf_path.is_none().then_some(ctx.cfg.chart_width),
            pdf: pdf_path.as_deref(),
            force: *force,
        };

        ReportLogic::show(&entries, current, ctx.edition.reference_line(), &opts)?;
    }
    Ok(())
}
