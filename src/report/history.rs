//! Listing of stored attempts.

use crate::errors::AppResult;
use crate::models::result_entry::ResultLogEntry;
use crate::utils::colors::{GREY, RESET, color_for_optional_field, color_for_percentage};
use crate::utils::fmt_percentage;
use crate::utils::table::{Column, Table};

/// Rows whose name matches `name` case-insensitively (all rows for `None`).
pub fn filter_by_name<'a>(
    entries: &'a [ResultLogEntry],
    name: Option<&str>,
) -> Vec<&'a ResultLogEntry> {
    entries
        .iter()
        .filter(|e| match name {
            Some(n) => e.name.trim().eq_ignore_ascii_case(n.trim()),
            None => true,
        })
        .collect()
}

pub fn render_table(entries: &[&ResultLogEntry]) -> String {
    let mut table = Table::new(vec![
        Column::new("#", 5),
        Column::new("Name", 24),
        Column::new("Score", 7),
        Column::new("Percentage", 10),
        Column::new("Questions", 9),
        Column::new("Date", 19),
    ]);

    for (i, e) in entries.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            e.name.clone(),
            e.score.to_string(),
            fmt_percentage(e.percentage),
            e.questions_attempted
                .map(|q| q.to_string())
                .unwrap_or_else(|| "--".into()),
            e.date.clone().unwrap_or_else(|| "--".into()),
        ]);
    }

    // colour whole lines after layout so widths stay correct
    let rendered = table.render();
    let mut out = String::new();
    for (i, line) in rendered.lines().enumerate() {
        match i.checked_sub(2).and_then(|r| entries.get(r)) {
            Some(e) => {
                let color = match color_for_optional_field(e.date.as_deref()) {
                    GREY => GREY,
                    _ => color_for_percentage(e.percentage),
                };
                out.push_str(&format!("{color}{line}{RESET}\n"));
            }
            None => {
                out.push_str(line);
                out.push('\n');
            }
        }
    }
    out
}

pub fn to_json(entries: &[&ResultLogEntry]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<ResultLogEntry> {
        vec![
            ResultLogEntry {
                name: "Jo".into(),
                score: 5,
                percentage: 100.0,
                questions_attempted: Some(5),
                date: Some("2025-02-01 08:00:00".into()),
            },
            ResultLogEntry {
                name: "Ana".into(),
                score: 1,
                percentage: 20.0,
                questions_attempted: None,
                date: None,
            },
            ResultLogEntry {
                name: "jo".into(),
                score: 2,
                percentage: 40.0,
                questions_attempted: Some(5),
                date: Some("2025-02-02 08:00:00".into()),
            },
        ]
    }

    #[test]
    fn name_filter_ignores_case() {
        let all = rows();
        assert_eq!(filter_by_name(&all, Some("JO")).len(), 2);
        assert_eq!(filter_by_name(&all, None).len(), 3);
    }

    #[test]
    fn table_shows_placeholders_for_old_rows() {
        let all = rows();
        let out = render_table(&filter_by_name(&all, None));
        assert!(out.contains("Ana"));
        assert!(out.contains("--"));
        assert!(out.contains("100.0%"));
    }

    #[test]
    fn json_skips_missing_columns() {
        let all = rows();
        let json = to_json(&filter_by_name(&all, Some("Ana"))).unwrap();
        assert!(json.contains("\"Name\": \"Ana\""));
        assert!(!json.contains("Date"));
    }
}
