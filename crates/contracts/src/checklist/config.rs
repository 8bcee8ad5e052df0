use serde::Deserialize;

use super::error::ChecklistResult;

/// Runtime settings. Tables left out of an override keep their defaults.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChecklistConfig {
    pub storage: StorageConfig,
    pub autosave: AutosaveConfig,
    pub notifications: NotificationConfig,
    pub print: PrintConfig,
    /// How long the save button shows its "Saved!" feedback.
    pub save_feedback_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    pub key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AutosaveConfig {
    pub delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationConfig {
    pub dismiss_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PrintConfig {
    pub delay_ms: u32,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
save_feedback_ms = 2000

[storage]
key = "sfbbData"

[autosave]
delay_ms = 2000

[notifications]
dismiss_ms = 4000

[print]
delay_ms = 500
"#;

impl ChecklistConfig {
    /// Parse a TOML configuration document.
    pub fn from_toml(contents: &str) -> ChecklistResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// The embedded default configuration.
    pub fn embedded() -> ChecklistResult<Self> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    /// Load configuration
    ///
    /// Uses `overrides` when given and valid, otherwise falls back to the
    /// embedded default.
    pub fn load(overrides: Option<&str>) -> ChecklistResult<Self> {
        if let Some(contents) = overrides {
            match Self::from_toml(contents) {
                Ok(config) => {
                    log::info!("Loaded checklist config overrides");
                    return Ok(config);
                }
                Err(e) => log::warn!("Ignoring invalid checklist config: {}", e),
            }
        }

        log::info!("Using default embedded configuration");
        Self::embedded()
    }
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                key: "sfbbData".to_string(),
            },
            autosave: AutosaveConfig { delay_ms: 2000 },
            notifications: NotificationConfig { dismiss_ms: 4000 },
            print: PrintConfig { delay_ms: 500 },
            save_feedback_ms: 2000,
        }
    }
}
