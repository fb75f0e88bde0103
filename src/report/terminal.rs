//! Horizontal ANSI bar chart for the terminal.

use crate::report::comparison::ComparisonReport;
use crate::utils::colors::{BLUE, GREEN, GREY, RED, RESET};
use crate::utils::fmt_percentage;
use crate::utils::formatting::{pad_left, pad_right, truncate};

const LABEL_MAX: usize = 16;

fn column_for(value: f64, width: usize) -> usize {
    let clamped = value.clamp(0.0, 100.0);
    ((clamped / 100.0) * width as f64).round() as usize
}

/// Render the chart `width` columns wide (the 0–100% axis).
pub fn render(report: &ComparisonReport, width: usize) -> String {
    let label_w = report
        .bars
        .iter()
        .map(|b| unicode_width::UnicodeWidthStr::width(b.label.as_str()))
        .max()
        .unwrap_or(0)
        .clamp("Participants".len(), LABEL_MAX);
    let ref_col = column_for(report.reference, width).min(width.saturating_sub(1));

    let mut out = String::new();
    out.push_str("Quiz Results Comparison\n\n");

    // axis header
    out.push_str(&format!(
        "{} 0%{}100%  Score (%)\n",
        pad_right("Participants", label_w),
        " ".repeat(width.saturating_sub(5))
    ));

    for (i, bar) in report.bars.iter().enumerate() {
        let color = if report.highlight == Some(i) {
            GREEN
        } else {
            BLUE
        };
        let filled = column_for(bar.value, width);

        let mut line = String::new();
        for col in 0..width {
            if col == ref_col {
                line.push_str(&format!("{RED}┆{RESET}"));
            } else if col < filled {
                line.push_str(&format!("{color}█{RESET}"));
            } else {
                line.push(' ');
            }
        }

        out.push_str(&format!(
            "{} │{}│ {}{}\n",
            pad_right(&truncate(&bar.label, label_w), label_w),
            line,
            pad_left(&fmt_percentage(bar.value), 6),
            if report.highlight == Some(i) {
                format!(" {GREEN}◀ you{RESET}")
            } else {
                String::new()
            }
        ));
    }

    out.push_str(&format!(
        "\n{BLUE}█{RESET} attempt  {GREEN}█{RESET} current attempt  {RED}┆{RESET} {} ({})\n",
        report.reference_label,
        fmt_percentage(report.reference)
    ));
    out.push_str(&format!(
        "{GREY}{} attempt(s) on record{RESET}\n",
        report.len()
    ));
    out
}
