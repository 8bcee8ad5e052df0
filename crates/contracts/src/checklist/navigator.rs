use super::error::{ChecklistError, ChecklistResult};
use super::section::SectionId;
use super::state::ApplicationState;
use super::surface::{SectionSurface, TabSurface};

/// Show the section `id` and make it current.
///
/// Every other section is hidden first. A section that owns a tab group is
/// reset to its first tab. Unknown ids leave the page and the state untouched.
pub fn activate_section<D>(
    state: &mut ApplicationState,
    dom: &mut D,
    id: &str,
) -> ChecklistResult<SectionId>
where
    D: SectionSurface + TabSurface,
{
    log::debug!("Switching to section: {}", id);

    let section = SectionId::from_id(id)
        .filter(|s| dom.has_section(s.as_str()))
        .ok_or_else(|| ChecklistError::SectionNotFound(id.to_string()))?;

    dom.clear_active_sections();
    dom.show_section(section.as_str());
    state.current_section = section;

    if let Some(first) = dom.first_tab(section.as_str()) {
        // A missing first panel is already logged; the section itself switched.
        if let Err(e) = activate_tab(dom, &first.group, &first.tab) {
            log::error!("{}", e);
        }
    }

    log::debug!("Successfully switched to section: {}", id);
    Ok(section)
}

/// Mark the navigation entry for `section` as the only active one.
pub fn update_active_navigation<D: SectionSurface>(dom: &mut D, section: SectionId) {
    if !dom.highlight_nav(section.as_str()) {
        log::warn!("No navigation entry for section: {}", section);
    }
}

/// Switch the tab group `group` to `tab`.
pub fn activate_tab<D: TabSurface>(dom: &mut D, group: &str, tab: &str) -> ChecklistResult<()> {
    log::debug!("Switching to tab: {}", tab);

    if !dom.has_tab_panel(group, tab) {
        return Err(ChecklistError::TabPanelNotFound {
            group: group.to_string(),
            tab: tab.to_string(),
        });
    }
    dom.select_tab(group, tab);

    log::debug!("Successfully switched to tab: {}", tab);
    Ok(())
}
