//! Human-readable backup export and validated import.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use serde_json::Value;

use crate::{
    core::utils::ensure_dir,
    errors::{BudgetError, Result},
    ledger::{BudgetStore, Clock},
};

use super::{json_backend::save_store_to_path, StoreSlot};

const INVALID_BACKUP: &str = "Invalid backup file.";
const UNREADABLE_BACKUP: &str = "Could not read backup file.";

/// `budget-backup-YYYY-MM-DD.json`
pub fn backup_file_name(today: NaiveDate) -> String {
    format!("budget-backup-{}.json", today.format("%Y-%m-%d"))
}

/// Writes the full store as pretty JSON into `dir`, named after today's date.
pub fn export_backup(store: &BudgetStore, dir: &Path, clock: &dyn Clock) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(backup_file_name(clock.today()));
    save_store_to_path(store, &path)?;
    tracing::info!(path = %path.display(), "exported backup");
    Ok(path)
}

/// Parses backup text, requiring a `settings` object and `envelopes` and
/// `transactions` arrays at the top level.
pub fn parse_backup(text: &str) -> Result<BudgetStore> {
    let value: Value = serde_json::from_str(text)
        .map_err(|_| BudgetError::InvalidBackup(UNREADABLE_BACKUP.into()))?;
    let well_formed = value.get("settings").is_some_and(Value::is_object)
        && value.get("envelopes").is_some_and(Value::is_array)
        && value.get("transactions").is_some_and(Value::is_array);
    if !well_formed {
        return Err(BudgetError::InvalidBackup(INVALID_BACKUP.into()));
    }
    serde_json::from_value(value).map_err(|err| {
        tracing::warn!(%err, "backup content rejected");
        BudgetError::InvalidBackup(UNREADABLE_BACKUP.into())
    })
}

/// Reads a backup file and, only if it is valid, replaces the slot's contents with it.
pub fn import_backup(path: &Path, slot: &dyn StoreSlot) -> Result<BudgetStore> {
    let text = fs::read_to_string(path)
        .map_err(|_| BudgetError::InvalidBackup(UNREADABLE_BACKUP.into()))?;
    let store = parse_backup(&text)?;
    slot.save(&store)?;
    tracing::info!(
        path = %path.display(),
        envelopes = store.envelopes.len(),
        transactions = store.transactions.len(),
        "imported backup"
    );
    Ok(store)
}
