use crate::errors::AppResult;
use crate::store::log::{LogEntry, read_log};
use ansi_term::Colour;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

const MAX_OP_WIDTH: usize = 40;
const ANSI_ESCAPE: &str = r"\x1B\[[0-9;]*[mK]";

fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(ANSI_ESCAPE).expect("valid ANSI regex"));
    re.replace_all(s, "").into_owned()
}

/// Colour of the operation name in the log listing.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "play" => Colour::Green,
        "rejected" => Colour::Red,
        "cancel" => Colour::Yellow,
        "backup" => Colour::Blue,
        "config" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `op (target)` with only the operation coloured, cut to `MAX_OP_WIDTH`
/// visible characters.
fn format_op_target(entry: &LogEntry) -> String {
    let plain = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let visible = if plain.chars().count() > MAX_OP_WIDTH {
        let mut s: String = plain.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        plain
    };

    let colour = color_for_operation(&entry.operation);
    match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", colour.paint(op), rest),
        None => colour.paint(visible.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn render(entries: &[LogEntry]) -> String {
        let op_w = entries
            .iter()
            .map(|e| strip_ansi(&format_op_target(e)).chars().count())
            .max()
            .unwrap_or(10);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);
        let id_w = entries.len().to_string().len();

        let mut out = String::new();
        for (i, entry) in entries.iter().enumerate() {
            let op_target = format_op_target(entry);
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op_target).chars().count()));
            out.push_str(&format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}\n",
                i + 1,
                entry.date,
                op_target,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            ));
        }
        out
    }

    pub fn print_log(path: &Path) -> AppResult<()> {
        let entries = read_log(path)?;
        if entries.is_empty() {
            println!("📜 Activity log is empty ({})", path.display());
            return Ok(());
        }

        println!("📜 Activity log:\n");
        print!("{}", Self::render(&entries));
        Ok(())
    }
}
