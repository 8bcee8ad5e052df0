use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::field::FieldValue;
use super::section::{SectionId, SectionKey};

/// Fields of one section, by control name.
pub type SectionFields = BTreeMap<String, FieldValue>;

/// All captured fields, by section key.
pub type FormData = BTreeMap<SectionKey, SectionFields>;

/// Version tag written into exports.
pub const EXPORT_VERSION: &str = "1.0";

/// ISO-8601 timestamp with millisecond precision, `Z` suffixed.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ============================================================================
// Application state
// ============================================================================

/// Everything the running checklist knows about the user's progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationState {
    pub current_section: SectionId,
    pub form_data: FormData,
    pub completed_sections: BTreeSet<SectionKey>,
    pub last_saved: Option<String>,
}

impl ApplicationState {
    /// Fresh state with an empty record for each section.
    pub fn new() -> Self {
        Self {
            form_data: SectionKey::SECTIONS
                .into_iter()
                .map(|key| (key, SectionFields::new()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn current_key(&self) -> SectionKey {
        self.current_section.key()
    }

    pub fn field(&self, key: SectionKey, name: &str) -> Option<&FieldValue> {
        self.form_data.get(&key).and_then(|fields| fields.get(name))
    }

    pub fn set_field(&mut self, key: SectionKey, name: &str, value: FieldValue) {
        self.form_data
            .entry(key)
            .or_default()
            .insert(name.to_string(), value);
    }

    pub fn is_completed(&self, section: SectionId) -> bool {
        self.completed_sections.contains(&section.key())
    }

    pub fn set_completed(&mut self, section: SectionId, completed: bool) {
        if completed {
            self.completed_sections.insert(section.key());
        } else {
            self.completed_sections.remove(&section.key());
        }
    }

    /// Share of the seven sections marked complete, as a percentage.
    pub fn progress_percent(&self) -> f64 {
        let done = SectionId::ALL
            .iter()
            .filter(|id| self.is_completed(**id))
            .count();
        done as f64 / SectionId::ALL.len() as f64 * 100.0
    }

    /// Record written to session storage.
    pub fn to_record(&self, saved_at: &str) -> PersistedRecord {
        PersistedRecord {
            form_data: self.form_data.clone(),
            completed_sections: self.completed_sections.iter().copied().collect(),
            last_saved: Some(saved_at.to_string()),
        }
    }

    /// Replace saved progress with what a record holds.
    ///
    /// The current section is left alone.
    pub fn restore(&mut self, record: PersistedRecord) {
        self.form_data = record.form_data;
        self.completed_sections = record
            .completed_sections
            .into_iter()
            .filter(|key| key.section().is_some())
            .collect();
        self.last_saved = record.last_saved;
    }

    pub fn export_snapshot(&self, now: DateTime<Utc>) -> ExportSnapshot {
        ExportSnapshot {
            current_section: self.current_section.as_str().to_string(),
            form_data: self.form_data.clone(),
            completed_sections: self.completed_sections.iter().copied().collect(),
            last_saved: self.last_saved.clone(),
            export_date: iso_timestamp(now),
            version: EXPORT_VERSION.to_string(),
        }
    }
}

// ============================================================================
// Wire formats
// ============================================================================

/// The JSON record kept under the storage key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedRecord {
    #[serde(rename = "formData", default)]
    pub form_data: FormData,
    #[serde(rename = "completedSections", default)]
    pub completed_sections: Vec<SectionKey>,
    #[serde(rename = "lastSaved", default)]
    pub last_saved: Option<String>,
}

/// Full dump of the state for download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSnapshot {
    #[serde(rename = "currentSection")]
    pub current_section: String,
    #[serde(rename = "formData")]
    pub form_data: FormData,
    #[serde(rename = "completedSections")]
    pub completed_sections: Vec<SectionKey>,
    #[serde(rename = "lastSaved")]
    pub last_saved: Option<String>,
    #[serde(rename = "exportDate")]
    pub export_date: String,
    pub version: String,
}
