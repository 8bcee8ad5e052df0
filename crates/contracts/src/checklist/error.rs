use thiserror::Error;

/// Failures raised inside the checklist core.
///
/// None of them is fatal: navigation errors are logged, save errors turn into
/// an error notification and load errors fall back to an empty state.
#[derive(Debug, Error)]
pub enum ChecklistError {
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Tab panel not found: {group}/{tab}")]
    TabPanelNotFound { group: String, tab: String },

    #[error("Entry container not found: {0}")]
    EntryContainerNotFound(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Malformed saved data: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type ChecklistResult<T> = Result<T, ChecklistError>;
