use colored::Colorize;
use rust_decimal::Decimal;

use crate::{
    core::services::{EnvelopeRow, TransactionRow},
    currency::{format_money, CurrencyCode},
    ledger::Settings,
};

pub fn section(title: &str) {
    println!("{}", format!("=== {} ===", title.trim()).bold());
}

pub fn success(message: &str) {
    println!("{} {}", "[ok]".green(), message);
}

pub fn warning(message: &str) {
    eprintln!("{} {}", "[!]".yellow(), message);
}

fn signed_money(amount: Decimal, currency: &CurrencyCode) -> String {
    let text = format_money(amount, currency);
    if amount < Decimal::ZERO {
        text.red().to_string()
    } else {
        text.green().to_string()
    }
}

pub fn settings_banner(settings: &Settings) {
    println!(
        "Report month: {} | Budget start: {} | Rollover: {} | Currency: {}",
        settings.report, settings.budget_start, settings.rollover, settings.currency
    );
}

pub fn envelope_table(rows: &[EnvelopeRow], currency: &CurrencyCode) {
    if rows.is_empty() {
        println!("No envelopes yet.");
        return;
    }
    let width = rows
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Envelope".len());
    println!(
        "{:<width$}  {:>14}  {:>14}  {:>14}  Id",
        "Envelope", "Monthly", "Balance", "Remaining"
    );
    for row in rows {
        // Pad before colouring so escape codes do not skew the columns.
        let balance = format!("{:>14}", format_money(row.balance, currency));
        let remaining = format!("{:>14}", format_money(row.remaining, currency));
        println!(
            "{:<width$}  {:>14}  {}  {}  {}",
            row.name,
            format_money(row.monthly_add, currency),
            colour_like(&balance, row.balance),
            colour_like(&remaining, row.remaining),
            row.id.to_string().dimmed()
        );
    }
}

fn colour_like(padded: &str, amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        padded.red().to_string()
    } else {
        padded.green().to_string()
    }
}

pub fn transaction_list(rows: &[TransactionRow], currency: &CurrencyCode) {
    if rows.is_empty() {
        println!("No transactions in this month.");
        return;
    }
    for row in rows {
        let amount = format!("{}{}", row.sign, format_money(row.amount, currency));
        let amount = if row.is_outflow {
            amount.red().to_string()
        } else {
            amount.green().to_string()
        };
        println!(
            "{}  {}  {}  {}",
            row.date.format("%Y-%m-%d"),
            row.title,
            amount,
            row.id.to_string().dimmed()
        );
    }
}

pub fn amount_line(label: &str, amount: Decimal, currency: &CurrencyCode) {
    println!("{label}: {}", signed_money(amount, currency));
}
