use crate::errors::AppResult;
use chrono::Local;
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::Path;

/// One line of the internal activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append an activity line (no header, RFC 3339 local timestamp).
pub fn qlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
    wtr.serialize(LogEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    })?;
    wtr.flush()?;
    Ok(())
}

/// Same as `qlog`, but a failure only produces a warning.
pub fn qlog_quiet(path: &Path, operation: &str, target: &str, message: &str) {
    if let Err(e) = qlog(path, operation, target, message) {
        crate::ui::messages::warning(format!("Failed to write activity log: {}", e));
    }
}

/// All entries, oldest first. A missing file is an empty log.
pub fn read_log(path: &Path) -> AppResult<Vec<LogEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = ReaderBuilder::new().has_headers(false).from_path(path)?;
    let mut entries = Vec::new();
    for r in rdr.deserialize() {
        entries.push(r?);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn entries_round_trip_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs").join("rtrivia.log");

        qlog(&path, "init", "results.csv", "Result store created").unwrap();
        qlog(&path, "play", "Jo", "Score 5/5, with a comma").unwrap();

        let entries = read_log(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, "init");
        assert_eq!(entries[1].message, "Score 5/5, with a comma");
    }

    #[test]
    fn missing_log_is_empty() {
        let dir = tempdir().unwrap();
        assert!(read_log(&dir.path().join("none.log")).unwrap().is_empty());
    }
}
