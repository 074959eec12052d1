//! Business logic helpers for recording, editing and deleting transactions.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::ledger::{BudgetStore, RecordId, Transaction, TransactionKind};

use super::{ServiceError, ServiceResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftKind {
    #[default]
    Expense,
    Income,
    Transfer,
}

impl FromStr for DraftKind {
    type Err = ServiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "expense" => Ok(DraftKind::Expense),
            "income" => Ok(DraftKind::Income),
            "transfer" => Ok(DraftKind::Transfer),
            other => Err(ServiceError::Validation(format!(
                "Unknown transaction type `{other}`."
            ))),
        }
    }
}

impl fmt::Display for DraftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DraftKind::Expense => "expense",
            DraftKind::Income => "income",
            DraftKind::Transfer => "transfer",
        })
    }
}

/// Submitted transaction fields prior to validation.
#[derive(Debug, Clone, Default)]
pub struct TransactionDraft {
    pub id: Option<RecordId>,
    pub kind: DraftKind,
    pub date: Option<NaiveDate>,
    pub amount: Decimal,
    pub description: String,
    pub envelope_id: Option<RecordId>,
    pub from_envelope_id: Option<RecordId>,
    pub to_envelope_id: Option<RecordId>,
}

impl TransactionDraft {
    /// Checks the draft and builds the stored transaction.
    pub fn validate(self) -> ServiceResult<Transaction> {
        let date = self
            .date
            .ok_or_else(|| ServiceError::Validation("Date is required.".into()))?;
        if self.amount <= Decimal::ZERO {
            return Err(ServiceError::Validation(
                "Amount must be greater than 0.".into(),
            ));
        }

        let kind = match self.kind {
            DraftKind::Transfer => {
                let (Some(from), Some(to)) = (self.from_envelope_id, self.to_envelope_id) else {
                    return Err(ServiceError::Validation(
                        "Choose both From and To envelopes.".into(),
                    ));
                };
                if from == to {
                    return Err(ServiceError::Validation(
                        "From and To cannot be the same.".into(),
                    ));
                }
                TransactionKind::Transfer {
                    from_envelope_id: from,
                    to_envelope_id: to,
                }
            }
            DraftKind::Expense | DraftKind::Income => {
                let envelope_id = self
                    .envelope_id
                    .ok_or_else(|| ServiceError::Validation("Choose an envelope.".into()))?;
                if self.kind == DraftKind::Expense {
                    TransactionKind::Expense { envelope_id }
                } else {
                    TransactionKind::Income { envelope_id }
                }
            }
        };

        Ok(Transaction {
            id: self.id.unwrap_or_else(RecordId::generate),
            date,
            amount: self.amount,
            description: self.description.trim().to_string(),
            kind,
        })
    }
}

/// Provides validated CRUD helpers for ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Validates `draft`, then replaces the transaction with the same id or appends it.
    pub fn upsert(store: &mut BudgetStore, draft: TransactionDraft) -> ServiceResult<RecordId> {
        let transaction = draft.validate()?;
        let id = transaction.id.clone();
        match store.transactions.iter().position(|txn| txn.id == id) {
            Some(index) => {
                store.transactions[index] = transaction;
                tracing::info!(%id, "updated transaction");
            }
            None => {
                store.transactions.push(transaction);
                tracing::info!(%id, "recorded transaction");
            }
        }
        Ok(id)
    }

    /// Removes the transaction identified by `id`, returning the removed instance.
    pub fn delete(store: &mut BudgetStore, id: &RecordId) -> ServiceResult<Transaction> {
        let removed = store
            .remove_transaction(id)
            .ok_or_else(|| ServiceError::NotFound(format!("Transaction {id} not found.")))?;
        tracing::info!(%id, "deleted transaction");
        Ok(removed)
    }

    /// Transactions dated inside the reporting month, newest first.
    pub fn in_report_month(store: &BudgetStore) -> Vec<&Transaction> {
        let report = store.settings.report;
        let mut txns: Vec<&Transaction> = store
            .transactions
            .iter()
            .filter(|txn| report.contains(txn.date))
            .collect();
        txns.sort_by(|a, b| b.date.cmp(&a.date));
        txns
    }
}
