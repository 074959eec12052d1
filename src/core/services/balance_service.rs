//! Envelope balance calculations for the reporting month.
//!
//! Both calculations replay the transaction ledger from scratch on every call.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use crate::ledger::{months_between_inclusive, BudgetStore, RecordId};

pub struct BalanceService;

impl BalanceService {
    /// Cumulative balance of `envelope_id` at the end of the reporting month.
    ///
    /// Starts from the opening balance, adds allocations (every month from the
    /// budget start through the report month when rollover is on, a single
    /// month otherwise) and applies every transaction dated on or before the
    /// report month's last day. Unknown envelopes yield zero.
    pub fn envelope_balance(store: &BudgetStore, envelope_id: &RecordId) -> Decimal {
        let Some(envelope) = store.envelope(envelope_id) else {
            return Decimal::ZERO;
        };
        let settings = &store.settings;

        let allocated_months = if settings.rollover.is_on() {
            months_between_inclusive(settings.budget_start, settings.report)
        } else {
            1
        };
        // Saturating: allocations are unbounded user input.
        let mut balance = envelope
            .starting_balance
            .saturating_add(envelope.monthly_add.saturating_mul(Decimal::from(allocated_months)));

        let cutoff = settings.report.end();
        for txn in &store.transactions {
            if txn.date.and_time(NaiveTime::MIN) > cutoff {
                continue;
            }
            balance = balance.saturating_add(txn.effect_on(envelope_id));
        }

        tracing::debug!(
            envelope = %envelope.name,
            report = %settings.report,
            allocated_months,
            %balance,
            "computed envelope balance"
        );
        balance
    }

    /// How much of this month's allocation is left for `envelope_id`.
    ///
    /// Always a single month's allocation plus the net of transactions inside
    /// the reporting month; the rollover setting is ignored. Unknown envelopes
    /// yield zero.
    pub fn remaining_this_month(store: &BudgetStore, envelope_id: &RecordId) -> Decimal {
        let Some(envelope) = store.envelope(envelope_id) else {
            return Decimal::ZERO;
        };
        let report = store.settings.report;

        let remaining = store
            .transactions
            .iter()
            .filter(|txn| report.contains(txn.date))
            .fold(envelope.monthly_add, |acc, txn| {
                acc.saturating_add(txn.effect_on(envelope_id))
            });

        tracing::debug!(envelope = %envelope.name, %report, %remaining, "computed remaining this month");
        remaining
    }
}
