//! Persistent CLI settings.
//!
//! Settings live in a flat JSON object at `<config_dir>/outlay/config.json`
//! unless `--config` (or `OUTLAY_CONFIG`) points elsewhere. Missing keys
//! fall back to built-in defaults. So do invalid stored values, with a
//! warning, so that `outlay config` can still repair the file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::ledger::DEFAULT_LEDGER;
use crate::output::print_warning;

/// CLI configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Default output format
    DefaultFormat,
    /// Ledger file used when `--ledger` is not given
    LedgerPath,
    /// Largest budget the optimizer accepts
    MaxBudget,
    /// Whether to use colors
    UseColors,
}

impl ConfigKey {
    /// Parses a key name or its short alias.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default_format" | "format" => Some(Self::DefaultFormat),
            "ledger_path" | "ledger" => Some(Self::LedgerPath),
            "max_budget" | "budget" => Some(Self::MaxBudget),
            "use_colors" | "colors" => Some(Self::UseColors),
            _ => None,
        }
    }

    /// Canonical key name as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "default_format",
            Self::LedgerPath => "ledger_path",
            Self::MaxBudget => "max_budget",
            Self::UseColors => "use_colors",
        }
    }

    /// One-line description for `config list`.
    pub fn description(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "Default output format (table, json, csv, minimal)",
            Self::LedgerPath => "Ledger file of investment options",
            Self::MaxBudget => "Largest budget accepted by the optimizer (positive integer)",
            Self::UseColors => "Enable colored output (true, false)",
        }
    }

    /// Built-in default value.
    pub fn default_value(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "table",
            Self::LedgerPath => DEFAULT_LEDGER,
            Self::MaxBudget => "10000000",
            Self::UseColors => "true",
        }
    }

    /// All keys, in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::DefaultFormat,
            Self::LedgerPath,
            Self::MaxBudget,
            Self::UseColors,
        ]
    }

    /// Checks that `value` is acceptable for this key.
    pub fn validate(&self, value: &str) -> CliResult<()> {
        match self {
            Self::DefaultFormat => {
                parse_format(value)?;
            }
            Self::LedgerPath => {
                parse_ledger_path(value)?;
            }
            Self::MaxBudget => {
                parse_max_budget(value)?;
            }
            Self::UseColors => {
                parse_bool(value)?;
            }
        }
        Ok(())
    }
}

/// Raw key/value storage, as persisted.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigStore {
    #[serde(flatten)]
    values: HashMap<String, String>,
}

impl ConfigStore {
    /// Loads the store, or an empty one if the file does not exist.
    pub fn load(path: &Path) -> CliResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)
                .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))
        } else {
            Ok(Self::default())
        }
    }

    /// Writes the store, creating parent directories.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| CliError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Stored value, if any.
    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        self.values.get(key.as_str()).map(String::as_str)
    }

    /// Stored value or the key's default.
    pub fn get_or_default(&self, key: ConfigKey) -> &str {
        self.get(key).unwrap_or(key.default_value())
    }

    /// Stores `value` under `key`.
    pub fn set(&mut self, key: ConfigKey, value: String) {
        self.values.insert(key.as_str().to_string(), value);
    }

    /// Drops the stored value so the default applies again.
    pub fn remove(&mut self, key: ConfigKey) {
        self.values.remove(key.as_str());
    }
}

/// Effective settings after applying defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// File the settings were read from.
    pub path: PathBuf,
    /// Output format when `--format` is not given.
    pub default_format: OutputFormat,
    /// Ledger file when `--ledger` is not given.
    pub ledger_path: PathBuf,
    /// Budget cap passed to the optimizer.
    pub max_budget: i64,
    /// Whether colored output is enabled.
    pub use_colors: bool,
}

impl Settings {
    /// Loads settings from `path`, or from the per-user file.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => default_config_path()?,
        };
        let store = match ConfigStore::load(&path) {
            Ok(store) => store,
            Err(CliError::Config(reason)) => {
                print_warning(&format!("Ignoring unreadable configuration: {reason}"));
                ConfigStore::default()
            }
            Err(err) => return Err(err),
        };
        Self::from_store(path, &store)
    }

    /// Resolves a store into typed settings.
    ///
    /// A stored value that fails validation is reported and replaced by
    /// the key's default.
    pub fn from_store(path: PathBuf, store: &ConfigStore) -> CliResult<Self> {
        Ok(Self {
            path,
            default_format: resolve(store, ConfigKey::DefaultFormat, parse_format)?,
            ledger_path: resolve(store, ConfigKey::LedgerPath, parse_ledger_path)?,
            max_budget: resolve(store, ConfigKey::MaxBudget, parse_max_budget)?,
            use_colors: resolve(store, ConfigKey::UseColors, parse_bool)?,
        })
    }
}

fn resolve<T>(
    store: &ConfigStore,
    key: ConfigKey,
    parse: impl Fn(&str) -> CliResult<T>,
) -> CliResult<T> {
    if let Some(value) = store.get(key) {
        match parse(value) {
            Ok(parsed) => return Ok(parsed),
            Err(err) => print_warning(&format!(
                "Ignoring stored {}: {err} Using the default ({}).",
                key.as_str(),
                key.default_value()
            )),
        }
    }
    parse(key.default_value())
}

/// Per-user configuration file path.
pub fn default_config_path() -> CliResult<PathBuf> {
    let home = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| CliError::Config("Could not determine config directory".into()))?;
    Ok(home.join("outlay").join("config.json"))
}

fn parse_format(value: &str) -> CliResult<OutputFormat> {
    OutputFormat::parse(value).ok_or_else(|| {
        CliError::Config(format!(
            "Invalid format: {value}. Use table, json, csv, or minimal."
        ))
    })
}

fn parse_ledger_path(value: &str) -> CliResult<PathBuf> {
    if value.trim().is_empty() {
        return Err(CliError::Config("Ledger path must not be empty.".into()));
    }
    Ok(PathBuf::from(value))
}

fn parse_max_budget(value: &str) -> CliResult<i64> {
    match value.trim().parse::<i64>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(CliError::Config(format!(
            "Invalid max budget: {value}. Must be a positive integer."
        ))),
    }
}

fn parse_bool(value: &str) -> CliResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(CliError::Config(format!(
            "Invalid boolean: {value}. Use true or false."
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_store(PathBuf::from("x.json"), &ConfigStore::default()).unwrap();
        assert_eq!(settings.default_format, OutputFormat::Table);
        assert_eq!(settings.ledger_path, PathBuf::from(DEFAULT_LEDGER));
        assert_eq!(settings.max_budget, 10_000_000);
        assert!(settings.use_colors);
    }

    #[test]
    fn test_key_aliases() {
        assert_eq!(ConfigKey::parse("format"), Some(ConfigKey::DefaultFormat));
        assert_eq!(ConfigKey::parse("MAX_BUDGET"), Some(ConfigKey::MaxBudget));
        assert_eq!(ConfigKey::parse("ledger"), Some(ConfigKey::LedgerPath));
        assert_eq!(ConfigKey::parse("currency"), None);
    }

    #[test]
    fn test_validate_values() {
        assert!(ConfigKey::DefaultFormat.validate("json").is_ok());
        assert!(ConfigKey::DefaultFormat.validate("yaml").is_err());
        assert!(ConfigKey::MaxBudget.validate("500").is_ok());
        assert!(ConfigKey::MaxBudget.validate("0").is_err());
        assert!(ConfigKey::MaxBudget.validate("lots").is_err());
        assert!(ConfigKey::UseColors.validate("no").is_ok());
        assert!(ConfigKey::UseColors.validate("maybe").is_err());
        assert!(ConfigKey::LedgerPath.validate(" ").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outlay").join("config.json");

        let mut store = ConfigStore::default();
        store.set(ConfigKey::MaxBudget, "250".into());
        store.set(ConfigKey::DefaultFormat, "csv".into());
        store.save(&path).unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.max_budget, 250);
        assert_eq!(settings.default_format, OutputFormat::Csv);
        assert_eq!(settings.path, path);
    }

    #[test]
    fn test_invalid_stored_values_fall_back() {
        let mut store = ConfigStore::default();
        store.set(ConfigKey::MaxBudget, "0".into());
        store.set(ConfigKey::DefaultFormat, "yaml".into());
        store.set(ConfigKey::UseColors, "false".into());

        let settings = Settings::from_store(PathBuf::from("x.json"), &store).unwrap();
        assert_eq!(settings.max_budget, 10_000_000);
        assert_eq!(settings.default_format, OutputFormat::Table);
        assert!(!settings.use_colors);
    }

    #[test]
    fn test_unreadable_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(ConfigStore::load(&path).is_err());
        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.ledger_path, PathBuf::from(DEFAULT_LEDGER));
    }

    #[test]
    fn test_remove() {
        let mut store = ConfigStore::default();
        store.set(ConfigKey::UseColors, "false".into());
        store.set(ConfigKey::LedgerPath, "a.txt".into());

        store.remove(ConfigKey::UseColors);
        assert_eq!(store.get_or_default(ConfigKey::UseColors), "true");
        assert_eq!(store.get(ConfigKey::LedgerPath), Some("a.txt"));
    }
}
