//! Command-line presentation layer: parses a command, applies it to the
//! budget, persists the result and renders envelope and transaction lists.

pub mod args;
pub mod commands;
pub mod output;

use std::path::PathBuf;

use thiserror::Error;

use crate::{
    config::{Config, ConfigManager},
    core::{services::ServiceError, utils::app_data_dir},
    currency::CurrencyCode,
    errors::BudgetError,
    ledger::{BudgetStore, SystemClock},
    storage::{load_or_seed, JsonFileSlot, StoreSlot},
};

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Budget(#[from] BudgetError),
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

/// Everything a command needs: the loaded store and where to persist it.
pub struct CliContext {
    pub base_dir: PathBuf,
    pub config: Config,
    pub slot: JsonFileSlot,
    pub clock: SystemClock,
    pub store: BudgetStore,
}

impl CliContext {
    pub fn load(base_dir: PathBuf) -> Result<Self, CliError> {
        let config = ConfigManager::with_base_dir(&base_dir).load()?;
        let slot = JsonFileSlot::new(config.store_path(&base_dir));
        let clock = SystemClock;
        let store = load_or_seed(&slot, &clock, CurrencyCode::new(config.currency.clone()))?;
        Ok(Self {
            base_dir,
            config,
            slot,
            clock,
            store,
        })
    }

    /// Rewrites the whole store to the slot.
    pub fn persist(&self) -> Result<(), CliError> {
        self.slot.save(&self.store)?;
        Ok(())
    }
}

/// Entry point used by the binary: reads process arguments and runs one command.
pub fn run_cli() -> Result<(), CliError> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    run(argv)
}

pub fn run(argv: Vec<String>) -> Result<(), CliError> {
    let mut rest = argv.into_iter();
    let command = rest.next().unwrap_or_else(|| "show".to_string());
    if matches!(command.as_str(), "help" | "--help" | "-h") {
        commands::print_usage();
        return Ok(());
    }
    if matches!(command.as_str(), "version" | "--version") {
        commands::print_version();
        return Ok(());
    }

    let flags = args::Flags::parse(rest)?;
    let mut ctx = CliContext::load(app_data_dir())?;
    commands::dispatch(&mut ctx, &command, flags)
}
