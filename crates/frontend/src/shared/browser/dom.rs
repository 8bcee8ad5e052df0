use contracts::checklist::{
    CompletionSurface, ControlSurface, DynamicEntry, EntryFieldKind, EntrySurface, SectionId,
    SectionSurface, TabRef, TabSurface,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, Element, NodeList};

use super::control::BrowserControl;

/// Containers that take the `completed` class along with their section.
const FORM_CONTAINERS: &str = ".method-form, .diary-form, .training-record-form, .suppliers-form, .cleaning-schedule-form, .temperature-records-form, .review-form";

/// The rendered checklist page, queried through the live document.
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    pub fn current() -> Option<Self> {
        let document = window()?.document()?;
        Some(Self { document })
    }

    fn all(&self, selector: &str) -> Vec<Element> {
        elements(self.document.query_selector_all(selector))
    }

    fn one(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn section(&self, section: &str) -> Option<Element> {
        self.document
            .get_element_by_id(section)
            .filter(|el| el.class_list().contains("content-section"))
    }

    fn nav_item(&self, section: &str) -> Option<Element> {
        self.one(&format!(".nav-item[data-section=\"{}\"]", section))
    }

    fn tab_group(&self, group: &str) -> Option<Element> {
        self.one(&format!(".methods-tabs[data-group=\"{}\"]", group))
    }

    /// Panel container that follows the group's buttons.
    fn tab_content(&self, group: &str) -> Option<Element> {
        self.tab_group(group)?
            .next_element_sibling()
            .filter(|el| el.class_list().contains("tab-content"))
    }

    fn tab_panel(&self, group: &str, tab: &str) -> Option<Element> {
        self.tab_content(group)?
            .query_selector(&format!(".tab-panel[id=\"{}\"]", tab))
            .ok()
            .flatten()
    }
}

fn elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

fn controls(list: Vec<Element>) -> Vec<BrowserControl> {
    list.into_iter().filter_map(BrowserControl::from_element).collect()
}

impl SectionSurface for BrowserDom {
    fn has_section(&self, section: &str) -> bool {
        self.section(section).is_some()
    }

    fn clear_active_sections(&mut self) {
        for el in self.all(".content-section") {
            set_class(&el, "active", false);
        }
    }

    fn show_section(&mut self, section: &str) {
        if let Some(el) = self.section(section) {
            set_class(&el, "active", true);
        }
    }

    fn first_tab(&self, section: &str) -> Option<TabRef> {
        let tabs = self.section(section)?.query_selector(".methods-tabs").ok()??;
        let group = tabs.get_attribute("data-group")?;
        let first = tabs.query_selector(".tab-btn").ok()??;
        Some(TabRef {
            group,
            tab: first.get_attribute("data-tab")?,
        })
    }

    fn highlight_nav(&mut self, section: &str) -> bool {
        for el in self.all(".nav-item") {
            set_class(&el, "active", false);
        }
        match self.nav_item(section) {
            Some(el) => {
                set_class(&el, "active", true);
                true
            }
            None => false,
        }
    }
}

impl TabSurface for BrowserDom {
    fn has_tab_panel(&self, group: &str, tab: &str) -> bool {
        self.tab_panel(group, tab).is_some()
    }

    fn select_tab(&mut self, group: &str, tab: &str) {
        if let Some(tabs) = self.tab_group(group) {
            for button in elements(tabs.query_selector_all(".tab-btn")) {
                let selected = button.get_attribute("data-tab").as_deref() == Some(tab);
                set_class(&button, "active", selected);
            }
        }
        if let Some(content) = self.tab_content(group) {
            for panel in elements(content.query_selector_all(".tab-panel")) {
                set_class(&panel, "active", panel.id() == tab);
            }
        }
    }
}

impl ControlSurface for BrowserDom {
    type Control = BrowserControl;

    fn section_controls(&self, section: &str) -> Vec<BrowserControl> {
        match self.section(section) {
            Some(el) => controls(elements(el.query_selector_all("input, textarea, select"))),
            None => Vec::new(),
        }
    }

    fn controls_named(&self, name: &str) -> Vec<BrowserControl> {
        controls(self.all(&format!("[name=\"{}\"]", name)))
    }
}

impl CompletionSurface for BrowserDom {
    fn mark_section(&mut self, section: SectionId, completed: bool, title: &str) {
        if let Some(nav) = self.nav_item(section.as_str()) {
            set_class(&nav, "completed", completed);
            let _ = nav.set_attribute("title", title);
        }
        if let Some(el) = self.section(section.as_str()) {
            for form in elements(el.query_selector_all(FORM_CONTAINERS)) {
                set_class(&form, "completed", completed);
            }
        }
    }
}

impl EntrySurface for BrowserDom {
    fn entry_count(&self, container: &str) -> Option<usize> {
        let container = self.document.get_element_by_id(container)?;
        Some(elements(container.query_selector_all(".dynamic-entry")).len())
    }

    fn insert_entry(&mut self, container: &str, entry: &DynamicEntry) -> bool {
        let Some(container) = self.document.get_element_by_id(container) else {
            return false;
        };
        let Ok(block) = self.document.create_element("div") else {
            return false;
        };
        block.set_class_name("dynamic-entry");
        let _ = block.set_attribute("data-ordinal", &entry.ordinal.to_string());
        block.set_inner_html(&entry_html(entry));

        let add_control = container.query_selector(".add-entry").ok().flatten();
        container
            .insert_before(&block, add_control.as_deref())
            .is_ok()
    }

    fn remove_entry(&mut self, container: &str, ordinal: u32) -> bool {
        let entry = self
            .document
            .get_element_by_id(container)
            .and_then(|c| {
                c.query_selector(&format!(".dynamic-entry[data-ordinal=\"{}\"]", ordinal))
                    .ok()
                    .flatten()
            });
        match entry {
            Some(entry) => {
                entry.remove();
                true
            }
            None => false,
        }
    }
}

/// Markup for one dynamic entry, remove button last.
pub fn entry_html(entry: &DynamicEntry) -> String {
    let mut html = format!("<h4>{}</h4>", escape_html(&entry.heading));
    for field in &entry.fields {
        let name = escape_html(&field.name);
        let control = match field.kind {
            EntryFieldKind::Text => {
                format!(r#"<input type="text" class="form-control" name="{}">"#, name)
            }
            EntryFieldKind::Tel => {
                format!(r#"<input type="tel" class="form-control" name="{}">"#, name)
            }
            EntryFieldKind::TextArea { rows } => format!(
                r#"<textarea class="form-control" name="{}" rows="{}"></textarea>"#,
                name, rows
            ),
        };
        html.push_str(&format!(
            r#"<div class="form-group"><label class="form-label">{}</label>{}</div>"#,
            escape_html(&field.label),
            control
        ));
    }
    html.push_str(&format!(
        r#"<button type="button" class="btn btn--sm btn--outline remove-entry" data-ordinal="{}">{}</button>"#,
        entry.ordinal,
        escape_html(&entry.remove_label)
    ));
    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::checklist::entries::SUPPLIER_TEMPLATE;

    #[test]
    fn test_entry_html_names_fields_with_ordinal() {
        let html = entry_html(&SUPPLIER_TEMPLATE.build(3));
        assert!(html.starts_with("<h4>Supplier 3</h4>"));
        assert!(html.contains(r#"name="supplier_name_3""#));
        assert!(html.contains(r#"<input type="tel" class="form-control" name="supplier_phone_3">"#));
        assert!(html.contains(r#"name="supplier_address_3" rows="3""#));
        assert!(html.ends_with(
            r#"<button type="button" class="btn btn--sm btn--outline remove-entry" data-ordinal="3">Remove Supplier</button>"#
        ));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<b>"Tom & Jerry"</b>"#), "&lt;b&gt;&quot;Tom &amp; Jerry&quot;&lt;/b&gt;");
    }
}
