use crate::errors::{AppError, AppResult};
use crate::models::edition::QuizEdition;
use crate::utils::path;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_results_dir")]
    pub results_dir: String,
    #[serde(default = "default_activity_log")]
    pub activity_log: String,
    #[serde(default)]
    pub edition: QuizEdition,
    #[serde(default = "default_min_age")]
    pub min_age: u32,
    #[serde(default = "default_max_age")]
    pub max_age: u32,
    #[serde(default = "default_show_chart")]
    pub show_chart: bool,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_results_dir() -> String {
    Config::config_dir().to_string_lossy().to_string()
}
fn default_activity_log() -> String {
    Config::config_dir()
        .join("rtrivia.log")
        .to_string_lossy()
        .to_string()
}
fn default_min_age() -> u32 {
    12
}
fn default_max_age() -> u32 {
    18
}
fn default_show_chart() -> bool {
    true
}
fn default_chart_width() -> usize {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
            activity_log: default_activity_log(),
            edition: QuizEdition::default(),
            min_age: default_min_age(),
            max_age: default_max_age(),
            show_chart: default_show_chart(),
            chart_width: default_chart_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform.
    /// `RTRIVIA_HOME` overrides it (used by the integration tests).
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var("RTRIVIA_HOME") {
            return path::expand_tilde(&custom);
        }
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtrivia")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rtrivia")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtrivia.conf")
    }

    /// Result store for the given edition, unless overridden on the command line.
    pub fn results_file(&self, edition: QuizEdition) -> PathBuf {
        path::resolve(&self.results_dir, &Self::config_dir()).join(edition.results_file_name())
    }

    pub fn activity_log_file(&self) -> PathBuf {
        path::resolve(&self.activity_log, &Self::config_dir())
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            let cfg: Config = serde_yaml::from_str(&content)?;
            cfg.validate()?;
            log::debug!("Loaded configuration from {}", path.display());
            Ok(cfg)
        } else {
            Ok(Config::default())
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.min_age > self.max_age {
            return Err(AppError::Config(format!(
                "min_age ({}) is greater than max_age ({})",
                self.min_age, self.max_age
            )));
        }
        if self.chart_width < 10 {
            return Err(AppError::Config("chart_width must be at least 10".into()));
        }
        Ok(())
    }

    /// Write the configuration file (creating the directory) and return its path.
    pub fn save(&self) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let yaml = serde_yaml::to_string(self)?;
        let path = Self::config_file();
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(path)
    }
}
