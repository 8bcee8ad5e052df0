use std::collections::BTreeSet;

use super::field::ControlInput;
use super::section::SectionId;
use super::state::ApplicationState;
use super::surface::{CompletionSurface, ControlSurface, FormControl};

/// Fill counts over one section's controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionStats {
    pub total: usize,
    pub filled: usize,
    pub required: usize,
    pub required_filled: usize,
}

impl CompletionStats {
    pub fn from_inputs<I>(inputs: I) -> Self
    where
        I: IntoIterator<Item = (ControlInput, bool)>,
    {
        inputs
            .into_iter()
            .fold(Self::default(), |mut stats, (input, required)| {
                let filled = input.is_filled();
                stats.total += 1;
                stats.filled += usize::from(filled);
                if required {
                    stats.required += 1;
                    stats.required_filled += usize::from(filled);
                }
                stats
            })
    }

    pub fn filled_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.filled as f64 / self.total as f64
        }
    }

    /// Vacuously true with no required controls.
    pub fn required_satisfied(&self) -> bool {
        self.required_filled == self.required
    }

    /// More than half filled, or at least one required control and all of them filled.
    pub fn is_complete(&self) -> bool {
        self.filled_ratio() > 0.5 || (self.required > 0 && self.required_satisfied())
    }
}

/// Tooltip text for a section's navigation entry.
pub fn nav_title(section: SectionId, completed: bool) -> String {
    if completed {
        format!("{} - Completed", section.display_name())
    } else {
        section.display_name().to_string()
    }
}

/// Recount `section` from the page and update its completed state and markers.
pub fn recompute_completion<D>(state: &mut ApplicationState, dom: &mut D, section: SectionId) -> bool
where
    D: ControlSurface + CompletionSurface,
{
    let stats = CompletionStats::from_inputs(
        dom.section_controls(section.as_str())
            .iter()
            .map(|c| (c.read(), c.is_required())),
    );
    let completed = stats.is_complete();
    log::debug!(
        "Section {} completion: {}/{} filled, {}/{} required -> {}",
        section,
        stats.filled,
        stats.total,
        stats.required_filled,
        stats.required,
        completed
    );

    state.set_completed(section, completed);
    dom.mark_section(section, completed, &nav_title(section, completed));
    completed
}

/// Recompute every section, used once the saved data is back on the page.
pub fn refresh_all_sections<D>(state: &mut ApplicationState, dom: &mut D)
where
    D: ControlSurface + CompletionSurface,
{
    for section in SectionId::ALL {
        recompute_completion(state, dom, section);
    }
}

/// Names of required controls in `section` that are still empty.
///
/// A required radio group counts as answered when any option sharing its name
/// is checked. Offending controls are flagged invalid, the rest cleared.
pub fn validate_required<D: ControlSurface>(dom: &D, section: SectionId) -> Vec<String> {
    let controls = dom.section_controls(section.as_str());
    let answered_radios: BTreeSet<String> = controls
        .iter()
        .filter_map(|c| match c.read() {
            ControlInput::RadioOption { checked: true, .. } => c.name(),
            _ => None,
        })
        .collect();

    let mut invalid = Vec::new();
    for control in controls.iter().filter(|c| c.is_required()) {
        let name = control.name().unwrap_or_default();
        let valid = match control.read() {
            ControlInput::RadioOption { .. } => answered_radios.contains(&name),
            input => input.is_filled(),
        };

        control.set_invalid(!valid);
        if !valid && !invalid.contains(&name) {
            invalid.push(name);
        }
    }
    invalid
}
