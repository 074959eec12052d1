use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::RecordId;

/// A named budget bucket with a monthly allocation and an opening balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub monthly_add: Decimal,
    #[serde(default)]
    pub starting_balance: Decimal,
}

impl Envelope {
    /// Creates an envelope with a fresh identifier.
    pub fn new(name: impl Into<String>, monthly_add: Decimal, starting_balance: Decimal) -> Self {
        Self {
            id: RecordId::generate(),
            name: name.into(),
            monthly_add,
            starting_balance,
        }
    }
}
