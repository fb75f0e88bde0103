//! Append-only CSV result store.

use crate::errors::AppResult;
use crate::models::edition::StoreLayout;
use crate::models::result_entry::ResultLogEntry;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

pub struct ResultStore {
    path: PathBuf,
    layout: StoreLayout,
}

impl ResultStore {
    pub fn new(path: impl Into<PathBuf>, layout: StoreLayout) -> Self {
        Self {
            path: path.into(),
            layout,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn layout(&self) -> StoreLayout {
        self.layout
    }

    /// Create the file with its header row if it does not exist yet.
    /// Returns `true` when the file was created.
    pub fn ensure_initialized(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut wtr = WriterBuilder::new().from_path(&self.path)?;
        wtr.write_record(self.layout.headers())?;
        wtr.flush()?;

        log::info!("Created result store {}", self.path.display());
        Ok(true)
    }

    /// Append exactly one row. Earlier rows are never touched.
    pub fn append(&self, entry: &ResultLogEntry) -> AppResult<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
        wtr.write_record(entry.to_record(self.layout))?;
        wtr.flush()?;

        log::debug!(
            "Appended result for {} ({:.1}%) to {}",
            entry.name,
            entry.percentage,
            self.path.display()
        );
        Ok(())
    }

    /// Every persisted row, in file order. Works with any of the three
    /// layouts regardless of the layout this store writes.
    pub fn load_all(&self) -> AppResult<Vec<ResultLogEntry>> {
        load_entries(&self.path)
    }
}

pub fn load_entries(path: &Path) -> AppResult<Vec<ResultLogEntry>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_path(path)?;
    let mut entries = Vec::new();
    for result in rdr.deserialize() {
        let entry: ResultLogEntry = result?;
        entries.push(entry);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(name: &str, score: u32, pct: f64) -> ResultLogEntry {
        ResultLogEntry {
            name: name.into(),
            score,
            percentage: pct,
            questions_attempted: Some(5),
            date: Some("2025-05-05 12:00:00".into()),
        }
    }

    #[test]
    fn header_written_once() {
        let dir = tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("r.csv"), StoreLayout::Full);

        assert!(store.ensure_initialized().unwrap());
        assert!(!store.ensure_initialized().unwrap());

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "Name,Score,Percentage,Questions_Attempted,Date\n");
    }

    #[test]
    fn appends_are_strictly_additive() {
        let dir = tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("r.csv"), StoreLayout::Dated);
        store.ensure_initialized().unwrap();

        store.append(&entry("Jo", 5, 100.0)).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        store.append(&entry("Jo", 0, 0.0)).unwrap();
        store.append(&entry("Ana", 3, 60.0)).unwrap();
        let after = fs::read_to_string(store.path()).unwrap();

        assert!(after.starts_with(&before));
        assert_eq!(after.lines().count(), 3 + 1);

        let rows = store.load_all().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, rows[1].name);
        assert_eq!(rows[1].percentage, 0.0);
        assert_eq!(rows[2].questions_attempted, None);
    }

    #[test]
    fn old_three_column_files_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quiz_results.csv");
        fs::write(&path, "Name,Score,Percentage\nJo,4,80.0\nKim,5,100.0\n").unwrap();

        let rows = load_entries(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].percentage, 100.0);
        assert_eq!(rows[0].date, None);
        assert_eq!(rows[0].questions_attempted, None);
    }

    #[test]
    fn missing_store_is_an_error() {
        let dir = tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("absent.csv"), StoreLayout::Basic);
        assert!(store.append(&entry("Jo", 1, 20.0)).is_err());
        assert!(store.load_all().is_err());
    }
}
