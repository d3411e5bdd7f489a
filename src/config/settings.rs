//! User settings for the expense ledger
//!
//! Holds the policies that govern what gets recorded and how a damaged
//! ledger file is treated, plus display preferences.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::{AmountPolicy, CategoryMode, ValidationRules};

/// What to do when the ledger file exists but cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CorruptStorePolicy {
    /// Refuse to load; the file is left as-is
    #[default]
    Reject,
    /// Move the file aside to `expenses.json.corrupt` and start empty
    Quarantine,
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of this settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Which amounts are accepted for new expenses
    #[serde(default)]
    pub amount_policy: AmountPolicy,

    /// Whether categories are limited to the fixed set
    #[serde(default)]
    pub category_mode: CategoryMode,

    /// Handling of an unparsable ledger file
    #[serde(default)]
    pub corrupt_store_policy: CorruptStorePolicy,

    /// Whether appends and exports are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            amount_policy: AmountPolicy::default(),
            category_mode: CategoryMode::default(),
            corrupt_store_policy: CorruptStorePolicy::default(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// The validation rules new expenses are checked against
    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            amount_policy: self.amount_policy,
            category_mode: self.category_mode,
        }
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LedgerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Not persisted until the caller asks
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            LedgerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            LedgerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.amount_policy, AmountPolicy::Positive);
        assert_eq!(settings.category_mode, CategoryMode::Fixed);
        assert_eq!(settings.corrupt_store_policy, CorruptStorePolicy::Reject);
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            amount_policy: AmountPolicy::AllowNegative,
            corrupt_store_policy: CorruptStorePolicy::Quarantine,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.amount_policy, AmountPolicy::AllowNegative);
        assert_eq!(loaded.corrupt_store_policy, CorruptStorePolicy::Quarantine);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"category_mode": "open"}"#).unwrap();
        assert_eq!(settings.category_mode, CategoryMode::Open);
        assert_eq!(settings.amount_policy, AmountPolicy::Positive);
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_malformed_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }

    #[test]
    fn test_policy_serialization() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains(r#""amount_policy":"positive""#));
        assert!(json.contains(r#""corrupt_store_policy":"reject""#));
    }
}
