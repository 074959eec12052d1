//! Persistence of the whole budget store into a single slot, plus backup files.

pub mod backup;
pub mod json_backend;

use std::cell::RefCell;

use crate::{
    currency::CurrencyCode,
    errors::Result,
    ledger::{BudgetStore, Clock, Period},
};

/// A single location holding the entire serialized store.
///
/// Saves always replace the whole value; there are no partial writes.
pub trait StoreSlot {
    /// Returns the stored budget, or `None` if nothing was ever saved.
    fn load(&self) -> Result<Option<BudgetStore>>;
    fn save(&self, store: &BudgetStore) -> Result<()>;
}

/// Loads the stored budget, seeding and saving the defaults on first run.
pub fn load_or_seed(
    slot: &dyn StoreSlot,
    clock: &dyn Clock,
    currency: CurrencyCode,
) -> Result<BudgetStore> {
    if let Some(store) = slot.load()? {
        for (txn, envelope) in store.dangling_references() {
            tracing::warn!(%txn, %envelope, "transaction references unknown envelope");
        }
        return Ok(store);
    }
    let store = BudgetStore::seeded(Period::containing(clock.today()), currency);
    slot.save(&store)?;
    tracing::info!(report = %store.settings.report, "seeded new budget");
    Ok(store)
}

/// In-memory slot, handy for tests and embedding.
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: RefCell<Option<BudgetStore>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: BudgetStore) -> Self {
        Self {
            value: RefCell::new(Some(store)),
        }
    }
}

impl StoreSlot for MemorySlot {
    fn load(&self) -> Result<Option<BudgetStore>> {
        Ok(self.value.borrow().clone())
    }

    fn save(&self, store: &BudgetStore) -> Result<()> {
        *self.value.borrow_mut() = Some(store.clone());
        Ok(())
    }
}

pub use backup::{backup_file_name, export_backup, import_backup, parse_backup};
pub use json_backend::JsonFileSlot;
