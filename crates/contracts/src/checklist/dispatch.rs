use super::autosave::AutosaveScheduler;
use super::capture::{on_field_change, populate_fields};
use super::completion::{recompute_completion, refresh_all_sections, validate_required};
use super::config::ChecklistConfig;
use super::entries::{EntryBuilder, EntryTemplate};
use super::navigator::{activate_section, activate_tab, update_active_navigation};
use super::persistence::PersistenceStore;
use super::section::SectionId;
use super::state::{ApplicationState, ExportSnapshot};
use super::surface::{FormSurface, Host, NotificationLevel, SessionStore, TimerHandle};

// ============================================================================
// Events
// ============================================================================

/// Keyboard shortcuts the checklist answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Alt+1..7
    Jump(SectionId),
    /// Ctrl+S
    Save,
    /// Ctrl+P
    Print,
}

impl Shortcut {
    pub fn from_key(key: &str, alt: bool, ctrl: bool) -> Option<Self> {
        if alt {
            let digit = key.parse::<u32>().ok()?;
            return SectionId::for_shortcut(digit).map(Shortcut::Jump);
        }
        if ctrl {
            return match key {
                "s" => Some(Shortcut::Save),
                "p" => Some(Shortcut::Print),
                _ => None,
            };
        }
        None
    }
}

/// Everything that can happen to the checklist, `C` being the page's control type.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent<C> {
    Navigate(String),
    SwitchTab { group: String, tab: String },
    FieldChanged(C),
    AddEntry(String),
    RemoveEntry { container: String, ordinal: u32 },
    ManualSave,
    Print,
    Shortcut(Shortcut),
    AutosaveDue(u64),
    PageHidden,
    BeforeUnload,
}

// ============================================================================
// Checklist
// ============================================================================

/// The running checklist: state plus the components that act on it.
pub struct Checklist<S: SessionStore, T: TimerHandle> {
    config: ChecklistConfig,
    state: ApplicationState,
    store: PersistenceStore<S>,
    autosave: AutosaveScheduler<T>,
    entries: EntryBuilder,
}

impl<S: SessionStore, T: TimerHandle> Checklist<S, T> {
    pub fn new(config: ChecklistConfig, store: S) -> Self {
        Self {
            store: PersistenceStore::new(store, config.storage.key.clone()),
            autosave: AutosaveScheduler::new(config.autosave.delay_ms),
            state: ApplicationState::new(),
            entries: EntryBuilder::new(),
            config,
        }
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    pub fn store(&self) -> &PersistenceStore<S> {
        &self.store
    }

    pub fn autosave_pending(&self) -> bool {
        self.autosave.is_pending()
    }

    /// Open on the introduction and bring back any saved progress.
    pub fn start<D, H>(&mut self, dom: &mut D, host: &mut H)
    where
        D: FormSurface,
        H: Host<Timer = T>,
    {
        self.navigate(dom, SectionId::Introduction.as_str());
        self.load_saved(dom, host);
        log::info!("SFBB checklist initialized");
    }

    /// Restore saved data into the state and the page.
    ///
    /// Returns whether anything was loaded. Unreadable data is logged and
    /// treated as a first run.
    pub fn load_saved<D, H>(&mut self, dom: &mut D, host: &mut H) -> bool
    where
        D: FormSurface,
        H: Host<Timer = T>,
    {
        let record = match self.store.load() {
            Ok(Some(record)) => record,
            Ok(None) => return false,
            Err(e) => {
                log::error!("Error loading saved data: {}", e);
                return false;
            }
        };

        self.state.restore(record);
        populate_fields(&self.state, dom);
        refresh_all_sections(&mut self.state, dom);
        host.notify(NotificationLevel::Info, "Previous data loaded");
        if let Some(at) = &self.state.last_saved {
            log::info!("Last saved at {}", at);
        }
        true
    }

    pub fn export_snapshot<H: Host<Timer = T>>(&self, host: &H) -> ExportSnapshot {
        self.state.export_snapshot(host.now())
    }

    /// Handle one event to completion.
    pub fn dispatch<D, H>(&mut self, event: AppEvent<D::Control>, dom: &mut D, host: &mut H)
    where
        D: FormSurface,
        H: Host<Timer = T>,
    {
        match event {
            AppEvent::Navigate(id) => self.navigate(dom, &id),
            AppEvent::SwitchTab { group, tab } => {
                if let Err(e) = activate_tab(dom, &group, &tab) {
                    log::error!("{}", e);
                }
            }
            AppEvent::FieldChanged(control) => self.field_changed(&control, dom, host),
            AppEvent::AddEntry(container) => self.add_entry(dom, host, &container),
            AppEvent::RemoveEntry { container, ordinal } => {
                if self.entries.remove_entry(dom, &container, ordinal) {
                    host.notify(NotificationLevel::Info, &removed_message(&container));
                }
            }
            AppEvent::ManualSave | AppEvent::Shortcut(Shortcut::Save) => self.manual_save(dom, host),
            AppEvent::Print | AppEvent::Shortcut(Shortcut::Print) => self.print(host),
            AppEvent::Shortcut(Shortcut::Jump(section)) => self.navigate(dom, section.as_str()),
            AppEvent::AutosaveDue(generation) => {
                if self.autosave.take_due(generation) && self.persist(host) {
                    host.notify(NotificationLevel::Success, "Progress saved automatically");
                }
            }
            AppEvent::PageHidden | AppEvent::BeforeUnload => {
                self.persist(host);
            }
        }
    }

    fn navigate<D: FormSurface>(&mut self, dom: &mut D, id: &str) {
        match activate_section(&mut self.state, dom, id) {
            Ok(section) => update_active_navigation(dom, section),
            Err(e) => log::error!("{}", e),
        }
    }

    fn field_changed<D, H>(&mut self, control: &D::Control, dom: &mut D, host: &mut H)
    where
        D: FormSurface,
        H: Host<Timer = T>,
    {
        if let Some((key, name)) = on_field_change(&mut self.state, control) {
            log::debug!("Captured {}.{}", key, name);
            self.autosave
                .reschedule(|delay, generation| host.start_autosave_timer(delay, generation));
        }
        let current = self.state.current_section;
        recompute_completion(&mut self.state, dom, current);
    }

    fn add_entry<D, H>(&mut self, dom: &mut D, host: &mut H, container: &str)
    where
        D: FormSurface,
        H: Host<Timer = T>,
    {
        match self.entries.add_entry(dom, container) {
            Ok(_) => host.notify(NotificationLevel::Success, &added_message(container)),
            Err(e) => log::error!("{}", e),
        }
    }

    fn manual_save<D, H>(&mut self, dom: &mut D, host: &mut H)
    where
        D: FormSurface,
        H: Host<Timer = T>,
    {
        if self.persist(host) {
            host.notify(NotificationLevel::Success, "Progress saved successfully!");
        }
        host.show_saved_feedback(self.config.save_feedback_ms);

        let missing = validate_required(dom, self.state.current_section);
        if !missing.is_empty() {
            log::info!(
                "{} required field(s) still empty in {}: {}",
                missing.len(),
                self.state.current_section,
                missing.join(", ")
            );
        }
    }

    fn print<H: Host<Timer = T>>(&mut self, host: &mut H) {
        self.persist(host);
        host.notify(NotificationLevel::Info, "Preparing document for printing...");
        host.request_print(self.config.print.delay_ms);
    }

    /// Save now; failures become an error notification.
    fn persist<H: Host<Timer = T>>(&mut self, host: &mut H) -> bool {
        match self.store.save(&mut self.state, host.now()) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Error saving data: {}", e);
                host.notify(NotificationLevel::Error, "Error saving data");
                false
            }
        }
    }
}

fn added_message(container: &str) -> String {
    match EntryTemplate::for_container(container) {
        Some(template) => format!("New {} entry added", template.noun),
        None => "New entry added".to_string(),
    }
}

fn removed_message(container: &str) -> String {
    match EntryTemplate::for_container(container) {
        Some(template) => format!("{} entry removed", template.title()),
        None => "Entry removed".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts() {
        assert_eq!(
            Shortcut::from_key("3", true, false),
            Some(Shortcut::Jump(SectionId::Cleaning))
        );
        assert_eq!(Shortcut::from_key("8", true, false), None);
        assert_eq!(Shortcut::from_key("s", false, true), Some(Shortcut::Save));
        assert_eq!(Shortcut::from_key("p", false, true), Some(Shortcut::Print));
        assert_eq!(Shortcut::from_key("s", false, false), None);
    }

    #[test]
    fn test_entry_messages() {
        assert_eq!(added_message("suppliers-list"), "New supplier entry added");
        assert_eq!(removed_message("suppliers-list"), "Supplier entry removed");
        assert_eq!(removed_message("unknown"), "Entry removed");
    }
}
