//! Create and edit envelopes. Envelopes are never deleted.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::ledger::{BudgetStore, Envelope, RecordId};

use super::{ServiceError, ServiceResult};

/// Submitted envelope fields. `id` selects an existing envelope to edit.
#[derive(Debug, Clone, Default)]
pub struct EnvelopeDraft {
    pub id: Option<RecordId>,
    pub name: String,
    pub monthly_add: Decimal,
    pub starting_balance: Decimal,
}

/// Parses a numeric form field, treating blank or unparsable input as zero.
pub fn parse_amount_or_zero(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

pub struct EnvelopeService;

impl EnvelopeService {
    /// Replaces the fields of the envelope matching `draft.id`, or appends a new one.
    pub fn upsert(store: &mut BudgetStore, draft: EnvelopeDraft) -> ServiceResult<RecordId> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ServiceError::Validation("Envelope name is required.".into()));
        }

        if let Some(existing) = draft.id.as_ref().and_then(|id| store.envelope_mut(id)) {
            existing.name = name.to_string();
            existing.monthly_add = draft.monthly_add;
            existing.starting_balance = draft.starting_balance;
            tracing::info!(id = %existing.id, name, "updated envelope");
            return Ok(existing.id.clone());
        }

        let mut envelope = Envelope::new(name, draft.monthly_add, draft.starting_balance);
        if let Some(id) = draft.id.clone() {
            envelope.id = id;
        }
        let id = envelope.id.clone();
        store.envelopes.push(envelope);
        tracing::info!(id = %id, name, "created envelope");
        Ok(id)
    }

    /// Resolves an envelope by exact id, then by case-insensitive exact name.
    ///
    /// Ambiguous names resolve to nothing.
    pub fn find<'a>(store: &'a BudgetStore, reference: &str) -> Option<&'a Envelope> {
        let reference = reference.trim();
        if let Some(envelope) = store
            .envelopes
            .iter()
            .find(|envelope| envelope.id.as_str() == reference)
        {
            return Some(envelope);
        }
        let mut matches = store
            .envelopes
            .iter()
            .filter(|envelope| envelope.name.trim().eq_ignore_ascii_case(reference));
        match (matches.next(), matches.next()) {
            (Some(envelope), None) => Some(envelope),
            _ => None,
        }
    }
}
