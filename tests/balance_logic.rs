mod common;

use common::{add_envelope, add_transaction, date, period, store};
use envelope_budget::{
    core::services::{BalanceService, SummaryService},
    ledger::{months_between_inclusive, RecordId, Rollover, TransactionKind},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn rollover_on_without_transactions_accrues_each_month() {
    let mut store = store("2023-11", "2024-02", Rollover::On);
    let id = add_envelope(&mut store, "Rent", dec!(1800), dec!(25.50));
    assert_eq!(BalanceService::envelope_balance(&store, &id), dec!(7225.50));
}

#[test]
fn rollover_off_without_transactions_adds_one_month() {
    let mut store = store("2023-11", "2024-02", Rollover::Off);
    let id = add_envelope(&mut store, "Rent", dec!(1800), dec!(25.50));
    assert_eq!(BalanceService::envelope_balance(&store, &id), dec!(1825.50));
}

#[test]
fn months_between_is_inclusive_and_clamped() {
    let p = period("2024-07");
    assert_eq!(months_between_inclusive(p, p), 1);
    assert_eq!(months_between_inclusive(period("2023-12"), period("2024-01")), 2);
    assert_eq!(months_between_inclusive(period("2024-07"), period("2024-06")), 0);
    assert_eq!(months_between_inclusive(period("2024-07"), period("2022-01")), 0);
}

#[test]
fn groceries_scenario_with_and_without_rollover() {
    let mut store = store("2024-01", "2024-03", Rollover::On);
    let id = add_envelope(&mut store, "Groceries", dec!(600), Decimal::ZERO);
    add_transaction(
        &mut store,
        date(2024, 2, 15),
        dec!(200),
        TransactionKind::Expense {
            envelope_id: id.clone(),
        },
    );
    assert_eq!(BalanceService::envelope_balance(&store, &id), dec!(1600));

    store.settings.rollover = Rollover::Off;
    assert_eq!(BalanceService::envelope_balance(&store, &id), dec!(400));
}

#[test]
fn transfer_moves_value_between_two_envelopes_only() {
    let mut store = store("2024-03", "2024-03", Rollover::On);
    let from = add_envelope(&mut store, "Groceries", dec!(600), Decimal::ZERO);
    let to = add_envelope(&mut store, "Rent", dec!(1800), Decimal::ZERO);
    let other = add_envelope(&mut store, "Fun", dec!(50), Decimal::ZERO);

    let before: Vec<Decimal> = [&from, &to, &other]
        .iter()
        .map(|id| BalanceService::envelope_balance(&store, id))
        .collect();
    add_transaction(
        &mut store,
        date(2024, 3, 9),
        dec!(120.25),
        TransactionKind::Transfer {
            from_envelope_id: from.clone(),
            to_envelope_id: to.clone(),
        },
    );

    assert_eq!(BalanceService::envelope_balance(&store, &from), before[0] - dec!(120.25));
    assert_eq!(BalanceService::envelope_balance(&store, &to), before[1] + dec!(120.25));
    assert_eq!(BalanceService::envelope_balance(&store, &other), before[2]);
    assert_eq!(BalanceService::remaining_this_month(&store, &from), dec!(479.75));
    assert_eq!(BalanceService::remaining_this_month(&store, &to), dec!(1920.25));
}

#[test]
fn income_adds_to_its_envelope() {
    let mut store = store("2024-03", "2024-03", Rollover::On);
    let id = add_envelope(&mut store, "Savings", dec!(100), Decimal::ZERO);
    add_transaction(
        &mut store,
        date(2024, 3, 1),
        dec!(40),
        TransactionKind::Income {
            envelope_id: id.clone(),
        },
    );
    assert_eq!(BalanceService::envelope_balance(&store, &id), dec!(140));
    assert_eq!(BalanceService::remaining_this_month(&store, &id), dec!(140));
}

#[test]
fn remaining_this_month_ignores_rollover_but_balance_does_not() {
    let mut store = store("2024-01", "2024-03", Rollover::On);
    let id = add_envelope(&mut store, "Groceries", dec!(600), Decimal::ZERO);
    add_transaction(
        &mut store,
        date(2024, 3, 20),
        dec!(150),
        TransactionKind::Expense {
            envelope_id: id.clone(),
        },
    );

    let remaining_on = BalanceService::remaining_this_month(&store, &id);
    let balance_on = BalanceService::envelope_balance(&store, &id);
    store.settings.rollover = Rollover::Off;
    let remaining_off = BalanceService::remaining_this_month(&store, &id);
    let balance_off = BalanceService::envelope_balance(&store, &id);

    assert_eq!(remaining_on, dec!(450));
    assert_eq!(remaining_off, dec!(450));
    assert_eq!(balance_on, dec!(1650));
    assert_eq!(balance_off, dec!(450));
}

#[test]
fn transactions_after_report_month_are_excluded() {
    let mut store = store("2024-03", "2024-03", Rollover::On);
    let id = add_envelope(&mut store, "Groceries", dec!(600), Decimal::ZERO);
    add_transaction(
        &mut store,
        date(2024, 4, 1),
        dec!(500),
        TransactionKind::Expense {
            envelope_id: id.clone(),
        },
    );
    assert_eq!(BalanceService::envelope_balance(&store, &id), dec!(600));
    assert_eq!(BalanceService::remaining_this_month(&store, &id), dec!(600));
}

#[test]
fn missing_envelopes_contribute_zero_and_render_unknown() {
    let mut store = store("2024-03", "2024-03", Rollover::On);
    let groceries = add_envelope(&mut store, "Groceries", dec!(600), Decimal::ZERO);
    let ghost = RecordId::from("id-0b17");
    add_transaction(
        &mut store,
        date(2024, 3, 5),
        dec!(30),
        TransactionKind::Transfer {
            from_envelope_id: ghost.clone(),
            to_envelope_id: groceries.clone(),
        },
    );

    assert_eq!(BalanceService::envelope_balance(&store, &ghost), Decimal::ZERO);
    assert_eq!(BalanceService::envelope_balance(&store, &groceries), dec!(630));

    let rows = SummaryService::month_transactions(&store);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].title.starts_with("Unknown → Groceries"));
    assert_eq!(SummaryService::dangling_references(&store).len(), 1);
}
