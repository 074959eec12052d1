use std::fmt;

use serde::{de::Deserializer, Deserialize, Serialize};

use crate::currency::CurrencyCode;

use super::period::Period;

/// Global budget settings persisted alongside envelopes and transactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Month from which allocations start accruing.
    #[serde(rename = "budgetStartYM")]
    pub budget_start: Period,
    /// Month currently being reported on.
    #[serde(rename = "reportYM")]
    pub report: Period,
    /// Absent in some older backups, which treated that as off.
    #[serde(default = "Rollover::off")]
    pub rollover: Rollover,
    #[serde(default)]
    pub currency: CurrencyCode,
}

impl Settings {
    /// Settings anchored on `current` for both the budget start and the report month.
    pub fn starting_at(current: Period, currency: CurrencyCode) -> Self {
        Self {
            budget_start: current,
            report: current,
            rollover: Rollover::On,
            currency,
        }
    }
}

/// Whether unspent allocations from earlier months carry into later balances.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Rollover {
    #[default]
    On,
    Off,
}

impl Rollover {
    /// `on` (any case) enables rollover, every other value disables it.
    pub fn from_flag(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("on") {
            Rollover::On
        } else {
            Rollover::Off
        }
    }

    pub fn off() -> Self {
        Rollover::Off
    }

    pub fn is_on(self) -> bool {
        matches!(self, Rollover::On)
    }
}

impl fmt::Display for Rollover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rollover::On => "on",
            Rollover::Off => "off",
        })
    }
}

impl<'de> Deserialize<'de> for Rollover {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .as_deref()
            .map(Rollover::from_flag)
            .unwrap_or(Rollover::Off))
    }
}
