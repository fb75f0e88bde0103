// src/report/mod.rs

pub mod comparison;
pub(crate) mod fs_utils;
pub mod history;
pub mod pdf;
pub mod terminal;

pub use comparison::ComparisonReport;

use crate::errors::AppResult;
use crate::models::edition::ReferenceLine;
use crate::models::result_entry::ResultLogEntry;
use crate::ui::messages::{header, success};
use std::path::Path;

/// How a comparison should be shown.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions<'a> {
    pub terminal_width: Option<usize>,
    pub pdf: Option<&'a Path>,
    pub force: bool,
}

pub struct ReportLogic;

impl ReportLogic {
    /// Build the comparison from stored rows and display it on the terminal
    /// and/or write it to a PDF.
    pub fn show(
        entries: &[ResultLogEntry],
        current: Option<(&str, f64)>,
        reference: ReferenceLine,
        opts: &ReportOptions<'_>,
    ) -> AppResult<ComparisonReport> {
        let report = ComparisonReport::build(entries, current, reference)?;

        if let Some(width) = opts.terminal_width {
            header("Results Comparison");
            print!("{}", terminal::render(&report, width));
        }

        if let Some(path) = opts.pdf {
            fs_utils::ensure_writable(path, opts.force)?;
            pdf::write_chart(&report, path)?;
            success(format!("Chart written: {}", path.display()));
        }

        Ok(report)
    }
}
