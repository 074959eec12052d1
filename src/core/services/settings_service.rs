use crate::{
    currency::{is_iso_code, CurrencyCode},
    ledger::{BudgetStore, Period, Rollover},
};

use super::{ServiceError, ServiceResult};

/// Mutators for the single settings record. Callers persist after each change.
pub struct SettingsService;

impl SettingsService {
    pub fn set_budget_start(store: &mut BudgetStore, period: Period) {
        store.settings.budget_start = period;
        tracing::info!(%period, "budget start changed");
    }

    pub fn set_report_period(store: &mut BudgetStore, period: Period) {
        store.settings.report = period;
        tracing::info!(%period, "report month changed");
    }

    pub fn step_report_period(store: &mut BudgetStore, forward: bool) -> Period {
        let current = store.settings.report;
        let next = if forward {
            current.next()
        } else {
            current.previous()
        };
        Self::set_report_period(store, next);
        next
    }

    pub fn set_rollover(store: &mut BudgetStore, rollover: Rollover) {
        store.settings.rollover = rollover;
        tracing::info!(%rollover, "rollover changed");
    }

    pub fn set_currency(store: &mut BudgetStore, code: &str) -> ServiceResult<()> {
        let trimmed = code.trim();
        if !is_iso_code(trimmed) {
            return Err(ServiceError::Validation(format!(
                "Currency `{trimmed}` is not a three-letter ISO code."
            )));
        }
        store.settings.currency = CurrencyCode::new(trimmed);
        tracing::info!(currency = %store.settings.currency, "currency changed");
        Ok(())
    }
}
