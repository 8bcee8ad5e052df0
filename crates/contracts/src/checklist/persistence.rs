use chrono::{DateTime, Utc};

use super::error::{ChecklistError, ChecklistResult};
use super::state::{iso_timestamp, ApplicationState, PersistedRecord};
use super::surface::SessionStore;

/// Reads and writes the checklist record under a single storage key.
#[derive(Debug, Clone)]
pub struct PersistenceStore<S: SessionStore> {
    store: S,
    key: String,
}

impl<S: SessionStore> PersistenceStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write the state stamped with `now`.
    ///
    /// `state.last_saved` only moves once the write succeeded.
    pub fn save(&mut self, state: &mut ApplicationState, now: DateTime<Utc>) -> ChecklistResult<()> {
        let saved_at = iso_timestamp(now);
        let raw = serde_json::to_string(&state.to_record(&saved_at))?;
        self.store.set_item(&self.key, &raw)?;
        state.last_saved = Some(saved_at);

        log::info!("Data saved successfully");
        Ok(())
    }

    /// The saved record, `Ok(None)` when nothing was saved yet.
    pub fn load(&self) -> ChecklistResult<Option<PersistedRecord>> {
        let Some(raw) = self.store.get_item(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_str::<PersistedRecord>(&raw)
            .map(Some)
            .map_err(|e| ChecklistError::Parse(e.to_string()))
    }
}
