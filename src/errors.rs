//! Unified application error type.
//! All modules (data, core, ui, config) return AppError to keep the error
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

    /// Standard input reached EOF while a prompt was waiting.
    #[error("Input stream closed")]
    InputClosed,

    // ---------------------------
    // Interactive input (recoverable)
    // ---------------------------
    #[error("Unknown city: '{0}'. Please choose either Chicago, New York, or Washington")]
    UnknownCity(String),

    #[error("Unknown filter option: '{0}'. Please type month, day, or all")]
    UnknownFilterAxis(String),

    #[error("Unknown month: '{0}'")]
    UnknownMonth(String),

    #[error("Unknown day: '{0}'")]
    UnknownDay(String),

    // ---------------------------
    // Data source errors
    // ---------------------------
    #[error("Cannot load trip data from {path}: {reason}")]
    DataSource { path: String, reason: String },

    #[error("Column '{0}' is not available in this dataset")]
    MissingColumn(&'static str),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

impl AppError {
    /// True for user typos during prompting; those are re-prompted, never fatal.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            AppError::UnknownCity(_)
                | AppError::UnknownFilterAxis(_)
                | AppError::UnknownMonth(_)
                | AppError::UnknownDay(_)
        )
    }

    pub fn data_source(path: impl Into<String>, reason: impl ToString) -> Self {
        AppError::DataSource {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
