use std::collections::HashMap;

use super::error::{ChecklistError, ChecklistResult};
use super::surface::EntrySurface;

/// Container that holds supplier entries on the management section.
pub const SUPPLIERS_CONTAINER: &str = "suppliers-list";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFieldKind {
    Text,
    Tel,
    TextArea { rows: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryFieldTemplate {
    pub base: &'static str,
    pub label: &'static str,
    pub kind: EntryFieldKind,
}

/// Shape of one repeatable block of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryTemplate {
    pub container: &'static str,
    /// Lower-case noun used in headings and notifications.
    pub noun: &'static str,
    pub fields: &'static [EntryFieldTemplate],
}

pub const SUPPLIER_TEMPLATE: EntryTemplate = EntryTemplate {
    container: SUPPLIERS_CONTAINER,
    noun: "supplier",
    fields: &[
        EntryFieldTemplate {
            base: "supplier_name",
            label: "Supplier Name",
            kind: EntryFieldKind::Text,
        },
        EntryFieldTemplate {
            base: "supplier_contact",
            label: "Contact Person",
            kind: EntryFieldKind::Text,
        },
        EntryFieldTemplate {
            base: "supplier_phone",
            label: "Phone Number",
            kind: EntryFieldKind::Tel,
        },
        EntryFieldTemplate {
            base: "supplier_address",
            label: "Address",
            kind: EntryFieldKind::TextArea { rows: 3 },
        },
        EntryFieldTemplate {
            base: "products_supplied",
            label: "Products Supplied",
            kind: EntryFieldKind::TextArea { rows: 2 },
        },
        EntryFieldTemplate {
            base: "delivery_days",
            label: "Delivery Days",
            kind: EntryFieldKind::Text,
        },
    ],
};

const TEMPLATES: &[EntryTemplate] = &[SUPPLIER_TEMPLATE];

impl EntryTemplate {
    pub fn for_container(container: &str) -> Option<&'static EntryTemplate> {
        TEMPLATES.iter().find(|t| t.container == container)
    }

    /// Capitalized noun, as in "Supplier".
    pub fn title(&self) -> String {
        let mut chars = self.noun.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn build(&self, ordinal: u32) -> DynamicEntry {
        DynamicEntry {
            container: self.container.to_string(),
            ordinal,
            heading: format!("{} {}", self.title(), ordinal),
            remove_label: format!("Remove {}", self.title()),
            fields: self
                .fields
                .iter()
                .map(|f| EntryField {
                    name: format!("{}_{}", f.base, ordinal),
                    label: f.label.to_string(),
                    kind: f.kind,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryField {
    pub name: String,
    pub label: String,
    pub kind: EntryFieldKind,
}

/// One user-added block, ready to be placed on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicEntry {
    pub container: String,
    pub ordinal: u32,
    pub heading: String,
    pub remove_label: String,
    pub fields: Vec<EntryField>,
}

/// Hands out entry ordinals per container.
///
/// An ordinal is never handed out twice, so removing an entry leaves a gap
/// instead of renumbering its siblings.
#[derive(Debug, Clone, Default)]
pub struct EntryBuilder {
    issued: HashMap<String, u32>,
}

impl EntryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next ordinal for `container` given how many entries it holds now.
    pub fn next_ordinal(&self, container: &str, existing: usize) -> u32 {
        let existing = u32::try_from(existing).unwrap_or(u32::MAX - 1);
        let issued = self.issued.get(container).copied().unwrap_or(0);
        existing.max(issued) + 1
    }

    pub fn add_entry<D: EntrySurface>(
        &mut self,
        dom: &mut D,
        container: &str,
    ) -> ChecklistResult<DynamicEntry> {
        let not_found = || ChecklistError::EntryContainerNotFound(container.to_string());
        let template = EntryTemplate::for_container(container).ok_or_else(not_found)?;
        let existing = dom.entry_count(container).ok_or_else(not_found)?;

        let entry = template.build(self.next_ordinal(container, existing));
        if !dom.insert_entry(container, &entry) {
            return Err(not_found());
        }
        self.issued.insert(container.to_string(), entry.ordinal);

        log::debug!("Added {} entry {}", template.noun, entry.ordinal);
        Ok(entry)
    }

    pub fn remove_entry<D: EntrySurface>(
        &mut self,
        dom: &mut D,
        container: &str,
        ordinal: u32,
    ) -> bool {
        let removed = dom.remove_entry(container, ordinal);
        if !removed {
            log::warn!("No entry {} in {}", ordinal, container);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_entry_field_names() {
        let entry = SUPPLIER_TEMPLATE.build(2);
        assert_eq!(entry.heading, "Supplier 2");
        assert_eq!(entry.remove_label, "Remove Supplier");
        let names: Vec<_> = entry.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "supplier_name_2",
                "supplier_contact_2",
                "supplier_phone_2",
                "supplier_address_2",
                "products_supplied_2",
                "delivery_days_2",
            ]
        );
    }

    #[test]
    fn test_next_ordinal_counts_existing_entries() {
        let builder = EntryBuilder::new();
        assert_eq!(builder.next_ordinal(SUPPLIERS_CONTAINER, 0), 1);
        assert_eq!(builder.next_ordinal(SUPPLIERS_CONTAINER, 3), 4);
    }

    #[test]
    fn test_unknown_container_template() {
        assert!(EntryTemplate::for_container("staff-list").is_none());
    }
}
