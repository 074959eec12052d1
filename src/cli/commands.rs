use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use dialoguer::Confirm;

use crate::{
    config::ConfigManager,
    core::services::{
        parse_amount_or_zero, BalanceService, DraftKind, EnvelopeDraft, EnvelopeService,
        SettingsService, SummaryService, TransactionDraft, TransactionService,
    },
    currency::is_iso_code,
    errors::BudgetError,
    ledger::{BudgetStore, Period, RecordId, Rollover, Transaction, TransactionKind},
    storage::{export_backup, import_backup},
    utils::build_info,
};

use super::{args::Flags, output, CliContext, CliError};

pub fn dispatch(ctx: &mut CliContext, command: &str, flags: Flags) -> Result<(), CliError> {
    match command {
        "show" => show(ctx),
        "transactions" | "txns" => {
            list_transactions(ctx);
            Ok(())
        }
        "envelope" => match subcommand(&flags) {
            Some("save") => save_envelope(ctx, &flags),
            _ => Err(CliError::Usage("expected `envelope save`".into())),
        },
        "txn" => match subcommand(&flags) {
            Some("save") => save_transaction(ctx, &flags),
            Some("delete") => delete_transaction(ctx, &flags),
            _ => Err(CliError::Usage("expected `txn save` or `txn delete`".into())),
        },
        "settings" => update_settings(ctx, &flags),
        "export" => export(ctx, &flags),
        "import" => import(ctx, &flags),
        "config" => configure(ctx, &flags),
        other => Err(CliError::Usage(format!(
            "unknown command `{other}`, run `help` for usage"
        ))),
    }
}

fn subcommand(flags: &Flags) -> Option<&str> {
    flags.positional.first().map(String::as_str)
}

fn show(ctx: &CliContext) -> Result<(), CliError> {
    output::section("Envelopes");
    output::settings_banner(&ctx.store.settings);
    for warning in SummaryService::dangling_references(&ctx.store) {
        output::warning(&warning);
    }
    output::envelope_table(
        &SummaryService::envelope_rows(&ctx.store),
        &ctx.store.settings.currency,
    );
    Ok(())
}

fn list_transactions(ctx: &CliContext) {
    output::section(&format!("Transactions {}", ctx.store.settings.report));
    output::transaction_list(
        &SummaryService::month_transactions(&ctx.store),
        &ctx.store.settings.currency,
    );
}

fn save_envelope(ctx: &mut CliContext, flags: &Flags) -> Result<(), CliError> {
    flags.expect_only(&["name", "monthly", "start", "id"])?;
    let id = flags.get("id").and_then(RecordId::parse);

    // Editing starts from the stored values, like a pre-filled form.
    let mut draft = id
        .as_ref()
        .and_then(|id| ctx.store.envelope(id))
        .map(|existing| EnvelopeDraft {
            id: Some(existing.id.clone()),
            name: existing.name.clone(),
            monthly_add: existing.monthly_add,
            starting_balance: existing.starting_balance,
        })
        .unwrap_or_else(|| EnvelopeDraft {
            id,
            ..EnvelopeDraft::default()
        });
    if let Some(name) = flags.get("name") {
        draft.name = name.to_string();
    }
    if let Some(monthly) = flags.get("monthly") {
        draft.monthly_add = parse_amount_or_zero(monthly);
    }
    if let Some(start) = flags.get("start") {
        draft.starting_balance = parse_amount_or_zero(start);
    }

    let id = EnvelopeService::upsert(&mut ctx.store, draft)?;
    ctx.persist()?;

    let name = SummaryService::envelope_name(&ctx.store, &id);
    output::success(&format!("Saved envelope {name} ({id})"));
    output::amount_line(
        "Balance",
        BalanceService::envelope_balance(&ctx.store, &id),
        &ctx.store.settings.currency,
    );
    Ok(())
}

fn save_transaction(ctx: &mut CliContext, flags: &Flags) -> Result<(), CliError> {
    flags.expect_only(&["kind", "date", "amount", "desc", "envelope", "from", "to", "id"])?;
    let id = flags.get("id").and_then(RecordId::parse);

    let mut draft = id
        .as_ref()
        .and_then(|id| ctx.store.transaction(id))
        .map(draft_from_existing)
        .unwrap_or_else(|| TransactionDraft {
            id,
            ..TransactionDraft::default()
        });
    if let Some(kind) = flags.get("kind") {
        draft.kind = kind.parse::<DraftKind>()?;
    }
    if let Some(date) = flags.get("date") {
        draft.date = parse_date(date)?;
    }
    if let Some(amount) = flags.get("amount") {
        draft.amount = parse_amount_or_zero(amount);
    }
    if let Some(desc) = flags.get("desc") {
        draft.description = desc.to_string();
    }
    if let Some(reference) = flags.get("envelope") {
        draft.envelope_id = resolve_envelope(&ctx.store, reference)?;
    }
    if let Some(reference) = flags.get("from") {
        draft.from_envelope_id = resolve_envelope(&ctx.store, reference)?;
    }
    if let Some(reference) = flags.get("to") {
        draft.to_envelope_id = resolve_envelope(&ctx.store, reference)?;
    }

    let kind = draft.kind;
    let id = TransactionService::upsert(&mut ctx.store, draft)?;
    ctx.persist()?;
    output::success(&format!("Saved {kind} {id}"));
    Ok(())
}

fn draft_from_existing(txn: &Transaction) -> TransactionDraft {
    let mut draft = TransactionDraft {
        id: Some(txn.id.clone()),
        date: Some(txn.date),
        amount: txn.amount,
        description: txn.description.clone(),
        ..TransactionDraft::default()
    };
    match &txn.kind {
        TransactionKind::Expense { envelope_id } => {
            draft.kind = DraftKind::Expense;
            draft.envelope_id = Some(envelope_id.clone());
        }
        TransactionKind::Income { envelope_id } => {
            draft.kind = DraftKind::Income;
            draft.envelope_id = Some(envelope_id.clone());
        }
        TransactionKind::Transfer {
            from_envelope_id,
            to_envelope_id,
        } => {
            draft.kind = DraftKind::Transfer;
            draft.from_envelope_id = Some(from_envelope_id.clone());
            draft.to_envelope_id = Some(to_envelope_id.clone());
        }
    }
    draft
}

fn delete_transaction(ctx: &mut CliContext, flags: &Flags) -> Result<(), CliError> {
    flags.expect_only(&[])?;
    let id = flags
        .positional
        .get(1)
        .and_then(|raw| RecordId::parse(raw))
        .ok_or_else(|| CliError::Usage("expected `txn delete <id>`".into()))?;

    if !flags.has("yes") {
        let confirmed = Confirm::new()
            .with_prompt("Delete this transaction?")
            .default(false)
            .interact()
            .map_err(|err| CliError::Prompt(err.to_string()))?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    TransactionService::delete(&mut ctx.store, &id)?;
    ctx.persist()?;
    output::success(&format!("Deleted transaction {id}"));
    Ok(())
}

fn update_settings(ctx: &mut CliContext, flags: &Flags) -> Result<(), CliError> {
    flags.expect_only(&["start", "report", "rollover", "currency"])?;

    // All options land on a copy; nothing is saved unless every one is valid.
    let mut updated = ctx.store.clone();
    if let Some(start) = flags.get("start") {
        SettingsService::set_budget_start(&mut updated, parse_period(start)?);
    }
    if let Some(report) = flags.get("report") {
        match report.trim() {
            "next" => {
                SettingsService::step_report_period(&mut updated, true);
            }
            "prev" => {
                SettingsService::step_report_period(&mut updated, false);
            }
            raw => SettingsService::set_report_period(&mut updated, parse_period(raw)?),
        }
    }
    if let Some(rollover) = flags.get("rollover") {
        SettingsService::set_rollover(&mut updated, Rollover::from_flag(rollover));
    }
    if let Some(currency) = flags.get("currency") {
        SettingsService::set_currency(&mut updated, currency)?;
    }

    if updated != ctx.store {
        ctx.store = updated;
        ctx.persist()?;
    }
    output::settings_banner(&ctx.store.settings);
    Ok(())
}

fn export(ctx: &CliContext, flags: &Flags) -> Result<(), CliError> {
    flags.expect_only(&[])?;
    let dir = flags
        .positional
        .first()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let path = export_backup(&ctx.store, &dir, &ctx.clock)?;
    output::success(&format!("Exported backup to {}", path.display()));
    Ok(())
}

fn import(ctx: &mut CliContext, flags: &Flags) -> Result<(), CliError> {
    flags.expect_only(&[])?;
    let file = flags
        .positional
        .first()
        .ok_or_else(|| CliError::Usage("expected `import <file>`".into()))?;
    ctx.store = import_backup(Path::new(file), &ctx.slot)?;
    output::success(&format!(
        "Imported {} envelopes and {} transactions",
        ctx.store.envelopes.len(),
        ctx.store.transactions.len()
    ));
    Ok(())
}

fn configure(ctx: &mut CliContext, flags: &Flags) -> Result<(), CliError> {
    let manager = ConfigManager::with_base_dir(&ctx.base_dir);
    match (subcommand(flags), flags.positional.get(1)) {
        (Some("currency"), Some(code)) => {
            if !is_iso_code(code.trim()) {
                return Err(CliError::Usage(format!(
                    "`{}` is not a three-letter currency code",
                    code.trim()
                )));
            }
            ctx.config.currency = code.trim().to_uppercase();
            manager.save(&ctx.config)?;
            output::success(&format!("New budgets will use {}", ctx.config.currency));
        }
        (None, _) | (Some("show"), _) => {
            println!("Config file: {}", manager.path().display());
            println!("Budget file: {}", ctx.slot.path().display());
            println!("Default currency: {}", ctx.config.currency);
        }
        _ => {
            return Err(CliError::Usage(
                "expected `config show` or `config currency <CODE>`".into(),
            ))
        }
    }
    Ok(())
}

fn parse_date(raw: &str) -> Result<Option<NaiveDate>, CliError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| CliError::Usage(format!("`{trimmed}` is not a YYYY-MM-DD date")))
}

fn parse_period(raw: &str) -> Result<Period, CliError> {
    Period::parse(raw).map_err(|err| CliError::Budget(BudgetError::from(err)))
}

fn resolve_envelope(store: &BudgetStore, reference: &str) -> Result<Option<RecordId>, CliError> {
    if reference.trim().is_empty() {
        return Ok(None);
    }
    EnvelopeService::find(store, reference)
        .map(|envelope| Some(envelope.id.clone()))
        .ok_or_else(|| CliError::Usage(format!("unknown envelope `{}`", reference.trim())))
}

pub fn print_usage() {
    println!(
        "Usage: envelope_budget_cli <command>\n\
         Commands:\n  \
         show                                   envelopes with balance and remaining this month\n  \
         transactions                           transactions in the report month\n  \
         envelope save --name N [--monthly X] [--start X] [--id ID]\n  \
         txn save --kind expense|income|transfer --date YYYY-MM-DD --amount X\n           \
         [--desc D] [--envelope REF] [--from REF] [--to REF] [--id ID]\n  \
         txn delete ID [--yes]\n  \
         settings [--start YYYY-MM] [--report YYYY-MM|next|prev] [--rollover on|off] [--currency CODE]\n  \
         export [DIR]\n  \
         import FILE\n  \
         config [show|currency CODE]\n  \
         version\n\
         REF is an envelope id or its exact name."
    );
}

pub fn print_version() {
    println!("{}", build_info::current().summary());
}
