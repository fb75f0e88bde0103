use crate::errors::AppResult;
use crate::store::log::qlog_quiet;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the result store to `dest_file`, optionally replacing the copy
    /// with a `.zip` archive. Returns the final path, or `None` when the user
    /// declined to overwrite an existing file.
    pub fn backup(
        src: &Path,
        dest_file: &str,
        compress: bool,
        activity_log: &Path,
    ) -> AppResult<Option<PathBuf>> {
        let dest = Path::new(dest_file);

        // 1️⃣ Check store exists
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Result store not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ If destination file exists → ask confirmation
        if dest.exists() && !confirm_overwrite(dest)? {
            info("Backup cancelled by user.");
            return Ok(None);
        }

        // 4️⃣ Copy
        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 5️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(dest)?;
            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            }
            compressed
        } else {
            dest.to_path_buf()
        };

        qlog_quiet(
            activity_log,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    warning(format!("The file '{}' already exists.", dest.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "quiz_results.csv".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)?;
    io::copy(&mut f, &mut zip)?;
    zip.finish()?;

    info(format!("Compressed: {}", zip_path.display()));
    Ok(zip_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn plain_copy_matches_source() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("quiz_results.csv");
        fs::write(&src, "Name,Score,Percentage\nJo,5,100.0\n").unwrap();
        let dest = dir.path().join("bak").join("copy.csv");

        let out = BackupLogic::backup(
            &src,
            &dest.to_string_lossy(),
            false,
            &dir.path().join("a.log"),
        )
        .unwrap();

        assert_eq!(out.as_deref(), Some(dest.as_path()));
        assert_eq!(fs::read(&src).unwrap(), fs::read(&dest).unwrap());
    }

    #[test]
    fn compressed_backup_replaces_copy() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("quiz_results.csv");
        fs::write(&src, "Name,Score,Percentage\n").unwrap();
        let dest = dir.path().join("copy.csv");

        let log = dir.path().join("a.log");
        let out = BackupLogic::backup(&src, &dest.to_string_lossy(), true, &log)
            .unwrap()
            .unwrap();

        assert_eq!(out.extension().and_then(|e| e.to_str()), Some("zip"));
        assert!(out.exists());
        assert!(!dest.exists());
    }

    #[test]
    fn missing_source_fails() {
        let dir = tempdir().unwrap();
        let err = BackupLogic::backup(
            &dir.path().join("none.csv"),
            &dir.path().join("x.csv").to_string_lossy(),
            false,
            &dir.path().join("a.log"),
        );
        assert!(err.is_err());
    }
}
