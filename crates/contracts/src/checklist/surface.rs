//! Seams between the checklist core and the page it drives.
//!
//! The frontend implements these against the browser DOM; tests use
//! in-memory fakes.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use super::entries::DynamicEntry;
use super::error::{ChecklistError, ChecklistResult};
use super::field::ControlInput;
use super::section::SectionId;

/// First tab of a section's tab group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRef {
    pub group: String,
    pub tab: String,
}

/// A single fillable control on the page.
///
/// Setters take `&self`: controls are handles onto page elements.
pub trait FormControl {
    fn name(&self) -> Option<String>;
    fn read(&self) -> ControlInput;
    fn is_required(&self) -> bool;
    fn set_checked(&self, checked: bool);
    fn set_text(&self, value: &str);
    fn set_invalid(&self, invalid: bool);
}

pub trait SectionSurface {
    fn has_section(&self, section: &str) -> bool;
    fn clear_active_sections(&mut self);
    fn show_section(&mut self, section: &str);
    fn first_tab(&self, section: &str) -> Option<TabRef>;
    /// Marks exactly this navigation entry active.
    fn highlight_nav(&mut self, section: &str) -> bool;
}

pub trait TabSurface {
    fn has_tab_panel(&self, group: &str, tab: &str) -> bool;
    /// Deactivates every button and panel in the group, then activates `tab`'s.
    fn select_tab(&mut self, group: &str, tab: &str);
}

pub trait ControlSurface {
    type Control: FormControl;

    fn section_controls(&self, section: &str) -> Vec<Self::Control>;
    fn controls_named(&self, name: &str) -> Vec<Self::Control>;
}

pub trait CompletionSurface {
    /// Updates the navigation marker, its tooltip and the section's form containers.
    fn mark_section(&mut self, section: SectionId, completed: bool, title: &str);
}

pub trait EntrySurface {
    /// Entries currently in the container, `None` when the container is missing.
    fn entry_count(&self, container: &str) -> Option<usize>;
    /// Inserts the entry before the container's add control.
    fn insert_entry(&mut self, container: &str, entry: &DynamicEntry) -> bool;
    fn remove_entry(&mut self, container: &str, ordinal: u32) -> bool;
}

/// Everything the checklist needs from the page.
pub trait FormSurface:
    SectionSurface + TabSurface + ControlSurface + CompletionSurface + EntrySurface
{
}

impl<T> FormSurface for T where
    T: SectionSurface + TabSurface + ControlSurface + CompletionSurface + EntrySurface
{
}

// ============================================================================
// Notifications, timers and the host
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

impl NotificationLevel {
    /// CSS modifier, as in `notification--success`.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "info",
            NotificationLevel::Success => "success",
            NotificationLevel::Error => "error",
        }
    }
}

pub trait Notifier {
    fn notify(&mut self, level: NotificationLevel, message: &str);
}

/// A pending deferred callback that can be called off.
pub trait TimerHandle: Sized {
    fn cancel(self);

    /// Hands back a timer that has fired. Runs inside the timer's own
    /// callback, so implementations must not free the callback here.
    fn release(self) {}
}

/// Side effects the checklist asks of its environment.
pub trait Host: Notifier {
    type Timer: TimerHandle;

    /// Arms a timer that dispatches `AutosaveDue(generation)` after `delay_ms`.
    fn start_autosave_timer(&mut self, delay_ms: u32, generation: u64) -> Self::Timer;
    /// Opens the print dialog after `delay_ms`.
    fn request_print(&mut self, delay_ms: u32);
    /// Shows the "Saved!" state on the save button for `duration_ms`.
    fn show_saved_feedback(&mut self, duration_ms: u32);
    fn now(&self) -> DateTime<Utc>;
}

// ============================================================================
// Storage
// ============================================================================

/// Session-scoped key/value store.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> ChecklistResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> ChecklistResult<()>;
}

/// Store kept in memory, used when the browser offers no session storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> ChecklistResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> ChecklistResult<()> {
        if self.read_only {
            return Err(ChecklistError::Storage("store is read-only".to_string()));
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
