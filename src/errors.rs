//! Unified application error type.
//! All modules (store, core, report, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Result store
    // ---------------------------
    #[error("Result store error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Input validation (re-prompted by the quiz runner)
    // ---------------------------
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid age: {0}")]
    InvalidAge(String),

    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),

    // ---------------------------
    // Flow termination
    // ---------------------------
    #[error("Sorry, this quiz is only for participants aged {min}-{max} (got {age})")]
    NotEligible { age: i64, min: u32, max: u32 },

    #[error("Quiz cancelled by user")]
    Cancelled,

    // ---------------------------
    // Question bank
    // ---------------------------
    #[error("Invalid question bank: {0}")]
    InvalidBank(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Report / backup errors
    // ---------------------------
    #[error("Report error: {0}")]
    Report(String),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Process exit code used by `main` for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::NotEligible { .. } => 2,
            AppError::Cancelled => 3,
            _ => 1,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
