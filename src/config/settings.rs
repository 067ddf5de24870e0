//! User settings for Planshare
//!
//! Manages user preferences including display language, currency symbol,
//! plan cutoff days, and the reminder link target.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::paths::PlansharePaths;
use crate::error::PlanshareError;

/// Language used for status text, month names and reminder messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish (default)
    #[default]
    Es,
    /// English
    En,
}

impl Locale {
    /// Parse a locale from a string such as "es", "en", "es-ES" or "english"
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        let lang = lower.split(['-', '_']).next().unwrap_or("");
        match lang {
            "es" | "spanish" | "español" | "espanol" => Some(Self::Es),
            "en" | "english" => Some(Self::En),
            _ => None,
        }
    }
}

/// User settings for Planshare
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Display language
    #[serde(default)]
    pub locale: Locale,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Day of month each monthly plan is charged, keyed by plan name
    #[serde(default = "default_monthly_cutoffs")]
    pub monthly_cutoffs: BTreeMap<String, u8>,

    /// Base URL of the share link used for payment reminders
    #[serde(default = "default_whatsapp_base_url")]
    pub whatsapp_base_url: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_monthly_cutoffs() -> BTreeMap<String, u8> {
    let mut cutoffs = BTreeMap::new();
    cutoffs.insert("Spotify".to_string(), 17);
    cutoffs.insert("YouTube".to_string(), 20);
    cutoffs
}

fn default_whatsapp_base_url() -> String {
    "https://wa.me/".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            locale: Locale::default(),
            currency_symbol: default_currency(),
            monthly_cutoffs: default_monthly_cutoffs(),
            whatsapp_base_url: default_whatsapp_base_url(),
        }
    }
}

impl Settings {
    /// Cutoff day for a monthly plan, if one is configured
    pub fn cutoff_day(&self, plan: &str) -> Option<u8> {
        self.monthly_cutoffs.get(plan).copied()
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PlansharePaths) -> Result<Self, PlanshareError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PlanshareError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PlanshareError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Not persisted until the caller asks for it
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PlansharePaths) -> Result<(), PlanshareError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PlanshareError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            PlanshareError::Io(format!("Failed to write settings file: {}", e))
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
        assert_eq!(settings.locale, Locale::Es);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.cutoff_day("Spotify"), Some(17));
        assert_eq!(settings.cutoff_day("YouTube"), Some(20));
        assert_eq!(settings.cutoff_day("Google"), None);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlansharePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.locale = Locale::En;
        settings.currency_symbol = "€".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.locale, Locale::En);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"locale": "en"}"#).unwrap();
        assert_eq!(settings.locale, Locale::En);
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.whatsapp_base_url, "https://wa.me/");
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!(Locale::parse("es-ES"), Some(Locale::Es));
        assert_eq!(Locale::parse("EN"), Some(Locale::En));
        assert_eq!(Locale::parse("en_US"), Some(Locale::En));
        assert_eq!(Locale::parse("fr"), None);
    }
}
