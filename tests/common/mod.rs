#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use chrono::NaiveDate;
use envelope_budget::{
    currency::CurrencyCode,
    ledger::{
        BudgetStore, Envelope, Period, RecordId, Rollover, Settings, Transaction, TransactionKind,
    },
};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory that outlives the calling test.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn period(raw: &str) -> Period {
    Period::parse(raw).expect("valid period")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Empty store with the given budget start, report month and rollover flag.
pub fn store(start: &str, report: &str, rollover: Rollover) -> BudgetStore {
    let mut settings = Settings::starting_at(period(start), CurrencyCode::default());
    settings.report = period(report);
    settings.rollover = rollover;
    BudgetStore::new(settings)
}

pub fn add_envelope(
    store: &mut BudgetStore,
    name: &str,
    monthly_add: Decimal,
    starting_balance: Decimal,
) -> RecordId {
    let envelope = Envelope::new(name, monthly_add, starting_balance);
    let id = envelope.id.clone();
    store.envelopes.push(envelope);
    id
}

pub fn add_transaction(
    store: &mut BudgetStore,
    date: NaiveDate,
    amount: Decimal,
    kind: TransactionKind,
) -> RecordId {
    let txn = Transaction::new(date, amount, kind);
    let id = txn.id.clone();
    store.transactions.push(txn);
    id
}
