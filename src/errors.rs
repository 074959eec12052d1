use thiserror::Error;

use crate::ledger::period::PeriodParseError;

/// Error type that captures storage, backup and configuration failures.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{0}")]
    InvalidBackup(String),
    #[error(transparent)]
    InvalidPeriod(#[from] PeriodParseError),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BudgetError>;
