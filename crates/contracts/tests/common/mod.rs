//! In-memory page and host used by the checklist flow tests.
#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use contracts::checklist::{
    CompletionSurface, ControlInput, ControlSurface, DynamicEntry, EntrySurface, FormControl,
    Host, NotificationLevel, Notifier, SectionId, SectionSurface, TabRef, TabSurface,
    TimerHandle, SUPPLIERS_CONTAINER,
};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

// ============================================================================
// Controls
// ============================================================================

#[derive(Debug)]
struct ControlState {
    name: Option<String>,
    input: ControlInput,
    required: bool,
    invalid: bool,
}

#[derive(Debug, Clone)]
pub struct FakeControl(Rc<RefCell<ControlState>>);

impl PartialEq for FakeControl {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl FakeControl {
    fn new(name: &str, input: ControlInput, required: bool) -> Self {
        Self(Rc::new(RefCell::new(ControlState {
            name: (!name.is_empty()).then(|| name.to_string()),
            input,
            required,
            invalid: false,
        })))
    }

    pub fn text(name: &str) -> Self {
        Self::new(name, ControlInput::Text(String::new()), false)
    }

    pub fn checkbox(name: &str) -> Self {
        Self::new(name, ControlInput::Checkbox(false), false)
    }

    pub fn radio(name: &str, value: &str) -> Self {
        Self::new(
            name,
            ControlInput::RadioOption {
                value: value.to_string(),
                checked: false,
            },
            false,
        )
    }

    pub fn required(self) -> Self {
        self.0.borrow_mut().required = true;
        self
    }

    /// What a user typing into the control would leave behind.
    pub fn type_text(&self, value: &str) -> Self {
        self.set_text(value);
        self.clone()
    }

    pub fn toggle(&self, checked: bool) -> Self {
        self.set_checked(checked);
        self.clone()
    }

    pub fn input(&self) -> ControlInput {
        self.0.borrow().input.clone()
    }

    pub fn is_invalid(&self) -> bool {
        self.0.borrow().invalid
    }
}

impl FormControl for FakeControl {
    fn name(&self) -> Option<String> {
        self.0.borrow().name.clone()
    }

    fn read(&self) -> ControlInput {
        self.0.borrow().input.clone()
    }

    fn is_required(&self) -> bool {
        self.0.borrow().required
    }

    fn set_checked(&self, checked: bool) {
        match &mut self.0.borrow_mut().input {
            ControlInput::Checkbox(c) => *c = checked,
            ControlInput::RadioOption { checked: c, .. } => *c = checked,
            ControlInput::Text(_) => {}
        }
    }

    fn set_text(&self, value: &str) {
        if let ControlInput::Text(text) = &mut self.0.borrow_mut().input {
            *text = value.to_string();
        }
    }

    fn set_invalid(&self, invalid: bool) {
        self.0.borrow_mut().invalid = invalid;
    }
}

// ============================================================================
// Page
// ============================================================================

#[derive(Debug, Default)]
pub struct FakeTabGroup {
    pub section: String,
    pub buttons: Vec<String>,
    pub panels: Vec<String>,
    pub active_buttons: BTreeSet<String>,
    pub active_panels: BTreeSet<String>,
}

#[derive(Debug, Default)]
pub struct FakeDom {
    pub sections: BTreeMap<String, Vec<FakeControl>>,
    pub tab_groups: BTreeMap<String, FakeTabGroup>,
    pub active_sections: BTreeSet<String>,
    pub active_nav: BTreeSet<String>,
    pub nav_titles: BTreeMap<String, String>,
    pub completed: BTreeSet<SectionId>,
    pub entries: BTreeMap<String, Vec<DynamicEntry>>,
}

impl FakeDom {
    /// A small page shaped like the real checklist.
    pub fn checklist() -> Self {
        let mut dom = FakeDom::default();
        dom.section(
            "introduction",
            vec![
                FakeControl::text("business_name").required(),
                FakeControl::text("business_address"),
                FakeControl::text("completionDate"),
            ],
        );
        dom.section(
            "cross-contamination",
            vec![
                FakeControl::checkbox("handwashing_method"),
                FakeControl::text("handwashing_notes"),
            ],
        );
        dom.tab_group(
            "cc-methods",
            "cross-contamination",
            &["personal-hygiene", "separating-foods"],
            &["personal-hygiene", "separating-foods"],
        );
        dom.section(
            "cleaning",
            vec![
                FakeControl::checkbox("clear_and_clean"),
                FakeControl::radio("cleaning_frequency", "daily"),
                FakeControl::radio("cleaning_frequency", "weekly"),
                FakeControl::text("cleaning_notes"),
            ],
        );
        dom.section("chilling", vec![FakeControl::text("fridge_temperature")]);
        dom.section("cooking", vec![FakeControl::text("cooking_checks")]);
        dom.section("management", vec![FakeControl::text("opening_checks")]);
        dom.section("diary", vec![FakeControl::text("diary_week")]);
        dom.entries.insert(SUPPLIERS_CONTAINER.to_string(), Vec::new());
        dom
    }

    pub fn section(&mut self, id: &str, controls: Vec<FakeControl>) {
        self.sections.insert(id.to_string(), controls);
    }

    pub fn tab_group(&mut self, group: &str, section: &str, buttons: &[&str], panels: &[&str]) {
        self.tab_groups.insert(
            group.to_string(),
            FakeTabGroup {
                section: section.to_string(),
                buttons: buttons.iter().map(|b| b.to_string()).collect(),
                panels: panels.iter().map(|p| p.to_string()).collect(),
                ..FakeTabGroup::default()
            },
        );
    }

    /// First control with this name.
    pub fn control(&self, name: &str) -> FakeControl {
        self.controls_named(name)
            .into_iter()
            .next()
            .unwrap_or_else(|| panic!("no control named {name}"))
    }

    /// The radio option of `name` carrying `value`.
    pub fn radio(&self, name: &str, value: &str) -> FakeControl {
        self.controls_named(name)
            .into_iter()
            .find(|c| matches!(c.read(), ControlInput::RadioOption { value: v, .. } if v == value))
            .unwrap_or_else(|| panic!("no option {value} for {name}"))
    }

    /// Check one option of a radio group, unchecking its siblings.
    pub fn choose(&self, name: &str, value: &str) -> FakeControl {
        for option in self.controls_named(name) {
            option.set_checked(false);
        }
        self.radio(name, value).toggle(true)
    }

    pub fn entry_ordinals(&self, container: &str) -> Vec<u32> {
        self.entries[container].iter().map(|e| e.ordinal).collect()
    }

    fn section_of_container(container: &str) -> &'static str {
        if container == SUPPLIERS_CONTAINER {
            "management"
        } else {
            "other"
        }
    }
}

impl SectionSurface for FakeDom {
    fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    fn clear_active_sections(&mut self) {
        self.active_sections.clear();
    }

    fn show_section(&mut self, section: &str) {
        self.active_sections.insert(section.to_string());
    }

    fn first_tab(&self, section: &str) -> Option<TabRef> {
        self.tab_groups
            .iter()
            .find(|(_, g)| g.section == section)
            .and_then(|(group, g)| {
                g.buttons.first().map(|tab| TabRef {
                    group: group.clone(),
                    tab: tab.clone(),
                })
            })
    }

    fn highlight_nav(&mut self, section: &str) -> bool {
        self.active_nav.clear();
        self.active_nav.insert(section.to_string());
        true
    }
}

impl TabSurface for FakeDom {
    fn has_tab_panel(&self, group: &str, tab: &str) -> bool {
        self.tab_groups
            .get(group)
            .is_some_and(|g| g.panels.iter().any(|p| p == tab))
    }

    fn select_tab(&mut self, group: &str, tab: &str) {
        if let Some(g) = self.tab_groups.get_mut(group) {
            g.active_buttons.clear();
            g.active_panels.clear();
            if g.buttons.iter().any(|b| b == tab) {
                g.active_buttons.insert(tab.to_string());
            }
            g.active_panels.insert(tab.to_string());
        }
    }
}

impl ControlSurface for FakeDom {
    type Control = FakeControl;

    fn section_controls(&self, section: &str) -> Vec<FakeControl> {
        self.sections.get(section).cloned().unwrap_or_default()
    }

    fn controls_named(&self, name: &str) -> Vec<FakeControl> {
        self.sections
            .values()
            .flatten()
            .filter(|c| c.name().as_deref() == Some(name))
            .cloned()
            .collect()
    }
}

impl CompletionSurface for FakeDom {
    fn mark_section(&mut self, section: SectionId, completed: bool, title: &str) {
        if completed {
            self.completed.insert(section);
        } else {
            self.completed.remove(&section);
        }
        self.nav_titles
            .insert(section.as_str().to_string(), title.to_string());
    }
}

impl EntrySurface for FakeDom {
    fn entry_count(&self, container: &str) -> Option<usize> {
        self.entries.get(container).map(Vec::len)
    }

    fn insert_entry(&mut self, container: &str, entry: &DynamicEntry) -> bool {
        let Some(entries) = self.entries.get_mut(container) else {
            return false;
        };
        entries.push(entry.clone());
        let section = Self::section_of_container(container);
        let controls = self.sections.entry(section.to_string()).or_default();
        controls.extend(entry.fields.iter().map(|f| FakeControl::text(&f.name)));
        true
    }

    fn remove_entry(&mut self, container: &str, ordinal: u32) -> bool {
        let Some(entries) = self.entries.get_mut(container) else {
            return false;
        };
        let Some(index) = entries.iter().position(|e| e.ordinal == ordinal) else {
            return false;
        };
        let entry = entries.remove(index);
        let section = Self::section_of_container(container);
        if let Some(controls) = self.sections.get_mut(section) {
            controls.retain(|c| {
                !entry
                    .fields
                    .iter()
                    .any(|f| c.name().as_deref() == Some(f.name.as_str()))
            });
        }
        true
    }
}

// ============================================================================
// Host
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmedTimer {
    pub delay_ms: u32,
    pub generation: u64,
}

#[derive(Debug)]
pub struct FakeTimer {
    generation: u64,
    cancelled: Rc<RefCell<Vec<u64>>>,
}

impl TimerHandle for FakeTimer {
    fn cancel(self) {
        self.cancelled.borrow_mut().push(self.generation);
    }
}

#[derive(Debug)]
pub struct FakeHost {
    pub notifications: Vec<(NotificationLevel, String)>,
    pub armed: Vec<ArmedTimer>,
    pub cancelled: Rc<RefCell<Vec<u64>>>,
    pub prints: Vec<u32>,
    pub feedback: Vec<u32>,
    pub now: DateTime<Utc>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            armed: Vec::new(),
            cancelled: Rc::new(RefCell::new(Vec::new())),
            prints: Vec::new(),
            feedback: Vec::new(),
            now: Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap(),
        }
    }

    pub fn advance_ms(&mut self, ms: i64) {
        self.now += Duration::milliseconds(ms);
    }

    /// Generation of the newest timer that was never cancelled.
    pub fn live_timer(&self) -> Option<u64> {
        let cancelled = self.cancelled.borrow();
        self.armed
            .iter()
            .rev()
            .map(|t| t.generation)
            .find(|g| !cancelled.contains(g))
    }

    pub fn messages(&self, level: NotificationLevel) -> Vec<&str> {
        self.notifications
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

impl Notifier for FakeHost {
    fn notify(&mut self, level: NotificationLevel, message: &str) {
        self.notifications.push((level, message.to_string()));
    }
}

impl Host for FakeHost {
    type Timer = FakeTimer;

    fn start_autosave_timer(&mut self, delay_ms: u32, generation: u64) -> FakeTimer {
        self.armed.push(ArmedTimer {
            delay_ms,
            generation,
        });
        FakeTimer {
            generation,
            cancelled: self.cancelled.clone(),
        }
    }

    fn request_print(&mut self, delay_ms: u32) {
        self.prints.push(delay_ms);
    }

    fn show_saved_feedback(&mut self, duration_ms: u32) {
        self.feedback.push(duration_ms);
    }

    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
