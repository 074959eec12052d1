//! Read models handed to the presentation layer.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::ledger::{BudgetStore, RecordId, TransactionKind};

use super::{BalanceService, TransactionService};

pub const UNKNOWN_ENVELOPE: &str = "Unknown";

/// One envelope line with its derived figures for the reporting month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeRow {
    pub id: RecordId,
    pub name: String,
    pub monthly_add: Decimal,
    pub balance: Decimal,
    pub remaining: Decimal,
}

/// One transaction line as displayed in the month listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub id: RecordId,
    pub date: NaiveDate,
    pub title: String,
    /// `-` for expenses, `+` for income, empty for transfers.
    pub sign: &'static str,
    pub amount: Decimal,
    pub is_outflow: bool,
}

pub struct SummaryService;

impl SummaryService {
    pub fn envelope_rows(store: &BudgetStore) -> Vec<EnvelopeRow> {
        store
            .envelopes
            .iter()
            .map(|envelope| EnvelopeRow {
                id: envelope.id.clone(),
                name: envelope.name.clone(),
                monthly_add: envelope.monthly_add,
                balance: BalanceService::envelope_balance(store, &envelope.id),
                remaining: BalanceService::remaining_this_month(store, &envelope.id),
            })
            .collect()
    }

    pub fn month_transactions(store: &BudgetStore) -> Vec<TransactionRow> {
        TransactionService::in_report_month(store)
            .into_iter()
            .map(|txn| {
                let description = if txn.description.trim().is_empty() {
                    txn.kind.label()
                } else {
                    txn.description.as_str()
                };
                let (title, sign) = match &txn.kind {
                    TransactionKind::Expense { envelope_id } => (
                        format!("{} • {}", Self::envelope_name(store, envelope_id), description),
                        "-",
                    ),
                    TransactionKind::Income { envelope_id } => (
                        format!("{} • {}", Self::envelope_name(store, envelope_id), description),
                        "+",
                    ),
                    TransactionKind::Transfer {
                        from_envelope_id,
                        to_envelope_id,
                    } => (
                        format!(
                            "{} → {} • {}",
                            Self::envelope_name(store, from_envelope_id),
                            Self::envelope_name(store, to_envelope_id),
                            description
                        ),
                        "",
                    ),
                };
                TransactionRow {
                    id: txn.id.clone(),
                    date: txn.date,
                    title,
                    sign,
                    amount: txn.amount,
                    is_outflow: matches!(txn.kind, TransactionKind::Expense { .. }),
                }
            })
            .collect()
    }

    /// Display name for `id`, or `"Unknown"` when it no longer resolves.
    pub fn envelope_name<'a>(store: &'a BudgetStore, id: &RecordId) -> &'a str {
        store
            .envelope(id)
            .map(|envelope| envelope.name.as_str())
            .unwrap_or(UNKNOWN_ENVELOPE)
    }

    /// Human-readable warnings for transactions pointing at missing envelopes.
    pub fn dangling_references(store: &BudgetStore) -> Vec<String> {
        store
            .dangling_references()
            .into_iter()
            .map(|(txn, envelope)| {
                format!("transaction {txn} references unknown envelope {envelope}")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyCode;
    use crate::ledger::{Period, Transaction};
    use rust_decimal_macros::dec;

    fn store() -> BudgetStore {
        BudgetStore::seeded(Period::new(2024, 3).unwrap(), CurrencyCode::default())
    }

    fn on(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn envelope_rows_follow_store_order() {
        let store = store();
        let rows = SummaryService::envelope_rows(&store);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].name, "Groceries");
        assert_eq!(rows[1].balance, dec!(600));
        assert_eq!(rows[1].remaining, dec!(600));
    }

    #[test]
    fn month_rows_build_titles_and_fall_back_to_unknown() {
        let mut store = store();
        let groceries = store.envelopes[1].id.clone();
        let rent = store.envelopes[2].id.clone();
        let ghost = RecordId::from("id-8f3a2c");
        store.transactions.push(
            Transaction::new(on(3), dec!(12), TransactionKind::Expense { envelope_id: groceries })
                .with_description("Bakery"),
        );
        store.transactions.push(Transaction::new(
            on(5),
            dec!(30),
            TransactionKind::Transfer {
                from_envelope_id: rent,
                to_envelope_id: ghost.clone(),
            },
        ));
        store.transactions.push(Transaction::new(
            on(1),
            dec!(7),
            TransactionKind::Income { envelope_id: ghost },
        ));

        let rows = SummaryService::month_transactions(&store);
        let titles: Vec<_> = rows.iter().map(|row| row.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Rent → Unknown • Transfer", "Groceries • Bakery", "Unknown • Income"]
        );
        let signs: Vec<_> = rows.iter().map(|row| row.sign).collect();
        assert_eq!(signs, ["", "-", "+"]);
        assert!(rows[1].is_outflow);

        assert_eq!(SummaryService::dangling_references(&store).len(), 2);
    }
}
