use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;

use super::{
    envelope::Envelope,
    id::RecordId,
    period::Period,
    settings::Settings,
    transaction::Transaction,
};

/// The whole budget: settings, envelopes and the transaction ledger.
///
/// Owned by the caller and passed explicitly to calculators and services.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BudgetStore {
    pub settings: Settings,
    pub envelopes: Vec<Envelope>,
    pub transactions: Vec<Transaction>,
}

impl BudgetStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            envelopes: Vec::new(),
            transactions: Vec::new(),
        }
    }

    /// First-run store: three starter envelopes, no transactions, both periods
    /// on `current` and rollover enabled.
    pub fn seeded(current: Period, currency: CurrencyCode) -> Self {
        let mut store = Self::new(Settings::starting_at(current, currency));
        store.envelopes = vec![
            Envelope::new("To Be Budgeted", Decimal::ZERO, Decimal::ZERO),
            Envelope::new("Groceries", Decimal::from(600), Decimal::ZERO),
            Envelope::new("Rent", Decimal::from(1800), Decimal::ZERO),
        ];
        store
    }

    pub fn envelope(&self, id: &RecordId) -> Option<&Envelope> {
        self.envelopes.iter().find(|envelope| &envelope.id == id)
    }

    pub fn envelope_mut(&mut self, id: &RecordId) -> Option<&mut Envelope> {
        self.envelopes.iter_mut().find(|envelope| &envelope.id == id)
    }

    pub fn transaction(&self, id: &RecordId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| &txn.id == id)
    }

    pub fn remove_transaction(&mut self, id: &RecordId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| &txn.id == id)?;
        Some(self.transactions.remove(index))
    }

    /// Transaction references that do not resolve to an envelope.
    pub fn dangling_references(&self) -> Vec<(RecordId, RecordId)> {
        let known: HashSet<&RecordId> = self.envelopes.iter().map(|e| &e.id).collect();
        self.transactions
            .iter()
            .flat_map(|txn| {
                txn.kind
                    .envelope_refs()
                    .into_iter()
                    .filter(|id| !known.contains(id))
                    .map(|id| (txn.id.clone(), id.clone()))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}
