//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Hours cannot be negative")]
    NegativeHours,

    #[error("Hourly rate cannot be negative")]
    NegativeRate,

    #[error("Tax rate must be between 0% and 100%")]
    TaxRateOutOfRange,

    #[error("Error importing data: {0}")]
    InvalidImport(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Week offset {0} is outside the supported calendar range")]
    WeekOutOfRange(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration format error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // User interaction
    // ---------------------------
    #[error("Operation cancelled: {0}")]
    Cancelled(String),
}

impl AppError {
    /// True for the rejections caused by bad user input (hours, rate, tax,
    /// import payload). These never leave a partial mutation behind.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::NegativeHours
                | AppError::NegativeRate
                | AppError::TaxRateOutOfRange
                | AppError::InvalidImport(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
