use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{core::utils::ensure_dir, errors::Result, ledger::BudgetStore};

use super::StoreSlot;

const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON slot: one file holds the whole budget.
#[derive(Debug, Clone)]
pub struct JsonFileSlot {
    path: PathBuf,
}

impl JsonFileSlot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoreSlot for JsonFileSlot {
    fn load(&self) -> Result<Option<BudgetStore>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        let store = serde_json::from_str(&data)?;
        tracing::debug!(path = %self.path.display(), "loaded budget");
        Ok(Some(store))
    }

    fn save(&self, store: &BudgetStore) -> Result<()> {
        save_store_to_path(store, &self.path)?;
        tracing::debug!(path = %self.path.display(), "saved budget");
        Ok(())
    }
}

/// Writes `store` as pretty JSON, staging to a temporary file and renaming over `path`.
pub fn save_store_to_path(store: &BudgetStore, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(store)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{currency::CurrencyCode, ledger::Period};
    use tempfile::TempDir;

    fn slot_in_temp_dir() -> (JsonFileSlot, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let slot = JsonFileSlot::new(temp.path().join("nested").join("budget.json"));
        (slot, temp)
    }

    #[test]
    fn missing_file_loads_as_none() {
        let (slot, _guard) = slot_in_temp_dir();
        assert!(slot.load().expect("load").is_none());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (slot, _guard) = slot_in_temp_dir();
        let store = BudgetStore::seeded(Period::new(2024, 2).unwrap(), CurrencyCode::default());
        slot.save(&store).expect("save");
        assert_eq!(slot.load().expect("load"), Some(store));
        assert!(!tmp_path(slot.path()).exists(), "temp file must be renamed away");
    }

    #[test]
    fn failed_write_preserves_previous_contents() {
        let (slot, _guard) = slot_in_temp_dir();
        let store = BudgetStore::seeded(Period::new(2024, 2).unwrap(), CurrencyCode::default());
        slot.save(&store).expect("initial save");
        let original = fs::read_to_string(slot.path()).unwrap();

        // A directory squatting on the temp path makes File::create fail.
        fs::create_dir_all(tmp_path(slot.path())).unwrap();
        let mut changed = store.clone();
        changed.envelopes.clear();
        assert!(slot.save(&changed).is_err());
        assert_eq!(fs::read_to_string(slot.path()).unwrap(), original);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let (slot, _guard) = slot_in_temp_dir();
        ensure_dir(slot.path().parent().unwrap()).unwrap();
        fs::write(slot.path(), "{not json").unwrap();
        assert!(slot.load().is_err());
    }
}
