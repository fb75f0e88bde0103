//! Path utilities: expand ~ and resolve paths relative to the config directory.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Absolute (or `~/`) paths are kept, relative ones are anchored at `base`.
pub fn resolve(path: &str, base: &Path) -> PathBuf {
    let expanded = expand_tilde(path);
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_are_anchored() {
        let base = Path::new("/data/rtrivia");
        assert_eq!(
            resolve("quiz_results.csv", base),
            PathBuf::from("/data/rtrivia/quiz_results.csv")
        );
    }

    #[cfg(unix)]
    #[test]
    fn absolute_paths_are_kept() {
        let base = Path::new("/data/rtrivia");
        assert_eq!(resolve("/tmp/r.csv", base), PathBuf::from("/tmp/r.csv"));
    }
}
