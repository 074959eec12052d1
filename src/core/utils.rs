use std::{env, fs, io, path::Path, path::PathBuf};

const HOME_ENV: &str = "ENVELOPE_BUDGET_HOME";
const DEFAULT_DIR_NAME: &str = "envelope_budget";
const FALLBACK_DIR_NAME: &str = ".envelope_budget";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory.
///
/// `ENVELOPE_BUDGET_HOME` wins, then the platform data directory, then `./.envelope_budget`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::data_dir()
        .map(|dir| dir.join(DEFAULT_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DIR_NAME))
}

/// Path of the configuration file under `base`.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR).join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
