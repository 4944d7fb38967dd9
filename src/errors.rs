//! Unified application error type.
//! All modules (db, gateway, core, cli) return AppError so a failure can
//! always be turned into a single user-visible message.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    /// Store failure surfaced through the gateway (read or write).
    #[error("Backend error: {0}")]
    Backend(String),

    // ---------------------------
    // User input
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    #[error("Cannot {command} while {state}")]
    InvalidTransition {
        command: &'static str,
        state: &'static str,
    },

    // ---------------------------
    // Identity
    // ---------------------------
    #[error("Authentication failed: {0}")]
    Auth(String),

    // ---------------------------
    // Config / session files
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Input problems are reported inline as warnings; everything else is an error.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::InvalidTransition { .. }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
