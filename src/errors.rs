//! Unified application error type.
//! All modules (db, core, server, cli) return AppError to keep the error
//! handling consistent and easy to map onto HTTP responses.

use std::io;
use thiserror::Error;

/// Client-facing text for failures whose detail stays in the server log.
pub const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Request errors
    // ---------------------------
    /// A required field is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The store could not provide the requested data.
    #[error("{0}")]
    DataUnavailable(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Server
    // ---------------------------
    #[error("Server error: {0}")]
    Server(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn validation<M: Into<String>>(message: M) -> Self {
        AppError::Validation(message.into())
    }

    pub fn cannot_read_activities() -> Self {
        AppError::DataUnavailable("Cannot read activities".to_string())
    }

    /// Message exposed to HTTP clients in `errorMessage`.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Validation(m) | AppError::DataUnavailable(m) => m.clone(),
            AppError::InvalidDate(_) | AppError::InvalidTime(_) => self.to_string(),
            AppError::Db(_) => "Cannot read database".to_string(),
            _ => INTERNAL_ERROR.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
