use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::RecordId;

/// A dated ledger entry. The stored amount is always positive; its sign is
/// derived from [`TransactionKind`] and the envelope's role in it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: RecordId,
    pub date: NaiveDate,
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub kind: TransactionKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransactionKind {
    Expense {
        #[serde(rename = "envelopeId")]
        envelope_id: RecordId,
    },
    Income {
        #[serde(rename = "envelopeId")]
        envelope_id: RecordId,
    },
    Transfer {
        #[serde(rename = "fromEnvelopeId")]
        from_envelope_id: RecordId,
        #[serde(rename = "toEnvelopeId")]
        to_envelope_id: RecordId,
    },
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Expense { .. } => "Expense",
            TransactionKind::Income { .. } => "Income",
            TransactionKind::Transfer { .. } => "Transfer",
        }
    }

    /// Envelope ids this kind points at, in from/to order for transfers.
    pub fn envelope_refs(&self) -> Vec<&RecordId> {
        match self {
            TransactionKind::Expense { envelope_id } | TransactionKind::Income { envelope_id } => {
                vec![envelope_id]
            }
            TransactionKind::Transfer {
                from_envelope_id,
                to_envelope_id,
            } => vec![from_envelope_id, to_envelope_id],
        }
    }
}

impl Transaction {
    pub fn new(date: NaiveDate, amount: Decimal, kind: TransactionKind) -> Self {
        Self {
            id: RecordId::generate(),
            date,
            amount,
            description: String::new(),
            kind,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Signed change this transaction applies to `envelope_id`.
    ///
    /// Zero when the envelope is not involved. A transfer whose endpoints were
    /// stored equal nets to zero.
    pub fn effect_on(&self, envelope_id: &RecordId) -> Decimal {
        match &self.kind {
            TransactionKind::Expense { envelope_id: target } if target == envelope_id => {
                -self.amount
            }
            TransactionKind::Income { envelope_id: target } if target == envelope_id => {
                self.amount
            }
            TransactionKind::Transfer {
                from_envelope_id,
                to_envelope_id,
            } => {
                let mut delta = Decimal::ZERO;
                if from_envelope_id == envelope_id {
                    delta -= self.amount;
                }
                if to_envelope_id == envelope_id {
                    delta += self.amount;
                }
                delta
            }
            _ => Decimal::ZERO,
        }
    }
}
