pub mod balance_service;
pub mod envelope_service;
pub mod settings_service;
pub mod summary_service;
pub mod transaction_service;

pub use balance_service::BalanceService;
pub use envelope_service::{parse_amount_or_zero, EnvelopeDraft, EnvelopeService};
pub use settings_service::SettingsService;
pub use summary_service::{EnvelopeRow, SummaryService, TransactionRow};
pub use transaction_service::{DraftKind, TransactionDraft, TransactionService};

use crate::errors::BudgetError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Budget(#[from] BudgetError),
    /// Rejected input; the store is left unchanged.
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
}
