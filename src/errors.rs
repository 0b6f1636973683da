//! Unified application error type.
//! Every layer (models, core, storage, export, cli) returns AppError so the
//! binary can report failures uniformly and keep running where possible.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Persistence
    // ---------------------------
    #[error("Corrupted data file: {0}")]
    Corrupt(String),

    #[error("Could not allocate memory for new event")]
    Allocation,

    #[error("No event ids left; the calendar cannot take new events")]
    IdsExhausted,

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Description cannot be empty")]
    EmptyDescription,

    #[error("Keyword cannot be empty")]
    EmptyKeyword,

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Event ID {0} not found")]
    NotFound(i32),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for errors caused by bad user input rather than by the
    /// environment (files, memory).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_)
                | AppError::InvalidTime(_)
                | AppError::InvalidRange(_)
                | AppError::EmptyDescription
                | AppError::EmptyKeyword
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
