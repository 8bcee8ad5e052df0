//! Checklist core: navigation, field capture, completion tracking, dynamic
//! entries and session persistence for the SFBB checklist.
//!
//! The page itself is reached only through the traits in [`surface`].

pub mod autosave;
pub mod capture;
pub mod completion;
pub mod config;
pub mod dispatch;
pub mod entries;
pub mod error;
pub mod field;
pub mod navigator;
pub mod persistence;
pub mod section;
pub mod state;
pub mod surface;

pub use config::ChecklistConfig;
pub use dispatch::{AppEvent, Checklist, Shortcut};
pub use entries::{DynamicEntry, EntryField, EntryFieldKind, EntryTemplate, SUPPLIERS_CONTAINER};
pub use error::{ChecklistError, ChecklistResult};
pub use field::{ControlInput, FieldValue};
pub use section::{SectionId, SectionKey};
pub use state::{ApplicationState, ExportSnapshot, PersistedRecord};
pub use surface::{
    CompletionSurface, ControlSurface, EntrySurface, FormControl, FormSurface, Host, MemoryStore,
    NotificationLevel, Notifier, SectionSurface, SessionStore, TabRef, TabSurface, TimerHandle,
};
