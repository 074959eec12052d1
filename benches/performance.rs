use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use envelope_budget::{
    core::services::{BalanceService, SummaryService},
    currency::CurrencyCode,
    ledger::{BudgetStore, Envelope, Period, RecordId, Transaction, TransactionKind},
    storage::{JsonFileSlot, StoreSlot},
};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn build_sample_store(txn_count: usize) -> (BudgetStore, RecordId) {
    let mut store = BudgetStore::seeded(Period::new(2024, 1).unwrap(), CurrencyCode::default());
    store.settings.report = Period::new(2024, 12).unwrap();
    let groceries = store.envelopes[1].id.clone();
    let savings = Envelope::new("Savings", Decimal::new(250, 0), Decimal::ZERO);
    let savings_id = savings.id.clone();
    store.envelopes.push(savings);

    let start_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for idx in 0..txn_count {
        let date = start_date + Duration::days((idx % 365) as i64);
        let amount = Decimal::new(500 + (idx % 100) as i64, 1);
        let kind = match idx % 3 {
            0 => TransactionKind::Expense {
                envelope_id: groceries.clone(),
            },
            1 => TransactionKind::Income {
                envelope_id: savings_id.clone(),
            },
            _ => TransactionKind::Transfer {
                from_envelope_id: savings_id.clone(),
                to_envelope_id: groceries.clone(),
            },
        };
        store.transactions.push(Transaction::new(date, amount, kind));
    }
    (store, groceries)
}

fn bench_balances(c: &mut Criterion) {
    let (store, groceries) = build_sample_store(black_box(5_000));

    c.bench_function("envelope_balance_5k", |b| {
        b.iter(|| black_box(BalanceService::envelope_balance(&store, &groceries)))
    });

    c.bench_function("envelope_rows_5k", |b| {
        b.iter(|| black_box(SummaryService::envelope_rows(&store)))
    });
}

fn bench_store_io(c: &mut Criterion) {
    let (store, _) = build_sample_store(black_box(5_000));
    let dir = tempdir().expect("tempdir");
    let slot = JsonFileSlot::new(dir.path().join("budget.json"));

    c.bench_function("store_save_5k", |b| {
        b.iter(|| slot.save(&store).expect("save store"))
    });

    slot.save(&store).expect("seed");

    c.bench_function("store_load_5k", |b| {
        b.iter(|| black_box(slot.load().expect("load store")))
    });
}

criterion_group!(benches, bench_balances, bench_store_io);
criterion_main!(benches);
