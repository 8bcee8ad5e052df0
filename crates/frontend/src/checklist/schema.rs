//! Static layout of the Safer Food, Better Business pack.
//!
//! Field names here are the keys under which answers are stored, so
//! renaming one orphans previously saved data.

use contracts::checklist::{SectionId, SUPPLIERS_CONTAINER};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Text,
    Date,
    Time,
    Number,
    TextArea { rows: u32 },
    Checkbox,
    Radio(&'static [(&'static str, &'static str)]),
    Select(&'static [(&'static str, &'static str)]),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, label, kind, required: false }
}

const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, label, kind, required: true }
}

/// A titled group of fields. `class` picks up the completed styling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormSpec {
    pub class: &'static str,
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub forms: &'static [FormSpec],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Block {
    Form(FormSpec),
    Tabs { group: &'static str, tabs: &'static [TabSpec] },
    /// Growable list of entries with an add button.
    Entries { container: &'static str, title: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpec {
    pub id: SectionId,
    pub intro: &'static str,
    pub blocks: &'static [Block],
}

const YES_NO: &[(&str, &str)] = &[("yes", "Yes"), ("no", "No")];
const FREQUENCY: &[(&str, &str)] = &[
    ("after-use", "After use"),
    ("daily", "Daily"),
    ("weekly", "Weekly"),
    ("monthly", "Monthly"),
];
const CHECK_METHOD: &[(&str, &str)] = &[
    ("", "Choose..."),
    ("probe", "Temperature probe"),
    ("visual", "Visual check"),
    ("both", "Probe and visual"),
];

const fn method(class: &'static str, title: &'static str, fields: &'static [FieldSpec]) -> FormSpec {
    FormSpec { class, title, fields }
}

pub static SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        id: SectionId::Introduction,
        intro: "Record your business details. Work through each section and tick the safe methods you follow.",
        blocks: &[Block::Form(FormSpec {
            class: "method-form",
            title: "Business information",
            fields: &[
                required("business_name", "Business name", FieldKind::Text),
                required("business_address", "Business address", FieldKind::TextArea { rows: 3 }),
                field("business_owner", "Owner or manager", FieldKind::Text),
                field("business_phone", "Telephone", FieldKind::Text),
                field("completionDate", "Date pack started", FieldKind::Date),
            ],
        })],
    },
    SectionSpec {
        id: SectionId::CrossContamination,
        intro: "Stop harmful bacteria and allergens spreading onto food.",
        blocks: &[Block::Tabs {
            group: "cross-contamination-methods",
            tabs: &[
                TabSpec {
                    id: "personal-hygiene",
                    label: "Personal hygiene",
                    forms: &[method("method-form", "Personal hygiene", &[
                        field("hygiene_handwashing", "Staff wash hands before handling food", FieldKind::Checkbox),
                        field("hygiene_clothing", "Clean work clothes are worn", FieldKind::Checkbox),
                        field("hygiene_illness", "Staff report illness before starting work", FieldKind::Radio(YES_NO)),
                        field("hygiene_notes", "What you do", FieldKind::TextArea { rows: 3 }),
                    ])],
                },
                TabSpec {
                    id: "separating-foods",
                    label: "Separating foods",
                    forms: &[method("method-form", "Separating foods", &[
                        field("separating_storage", "Raw food stored below ready-to-eat food", FieldKind::Checkbox),
                        field("separating_equipment", "Separate equipment for raw food", FieldKind::Checkbox),
                        field("separating_notes", "What you do", FieldKind::TextArea { rows: 3 }),
                    ])],
                },
                TabSpec {
                    id: "allergens",
                    label: "Allergens",
                    forms: &[method("method-form", "Managing food allergies", &[
                        field("allergen_records", "Allergen information kept for every dish", FieldKind::Checkbox),
                        field("allergen_staff", "Staff know how to answer allergy questions", FieldKind::Radio(YES_NO)),
                        field("allergen_notes", "What you do", FieldKind::TextArea { rows: 3 }),
                    ])],
                },
                TabSpec {
                    id: "pest-control",
                    label: "Pest control",
                    forms: &[method("method-form", "Pest control", &[
                        field("pest_checks", "Premises checked for signs of pests", FieldKind::Checkbox),
                        field("pest_contractor", "Pest control contractor", FieldKind::Text),
                        field("pest_notes", "What you do", FieldKind::TextArea { rows: 3 }),
                    ])],
                },
            ],
        }],
    },
    SectionSpec {
        id: SectionId::Cleaning,
        intro: "Effective cleaning removes bacteria from hands, equipment and surfaces.",
        blocks: &[
            Block::Form(method("method-form", "Clear and clean as you go", &[
                field("clear_and_clean", "Surfaces are cleared and cleaned as you go", FieldKind::Checkbox),
                field("cleaning_chemicals", "Cleaning chemicals used", FieldKind::Text),
                field("cleaning_notes", "What you do", FieldKind::TextArea { rows: 3 }),
            ])),
            Block::Form(method("cleaning-schedule-form", "Cleaning schedule", &[
                field("cleaning_item", "Item or area", FieldKind::Text),
                field("cleaning_frequency", "How often", FieldKind::Radio(FREQUENCY)),
                field("cleaning_responsible", "Who is responsible", FieldKind::Text),
            ])),
        ],
    },
    SectionSpec {
        id: SectionId::Chilling,
        intro: "Keep food that needs chilling out of the temperature danger zone.",
        blocks: &[Block::Tabs {
            group: "chilling-methods",
            tabs: &[
                TabSpec {
                    id: "chilled-storage",
                    label: "Chilled storage",
                    forms: &[
                        method("method-form", "Chilled storage and display", &[
                            field("chilled_storage", "Fridges checked at least once a day", FieldKind::Checkbox),
                            field("chilled_check_method", "How you check", FieldKind::Select(CHECK_METHOD)),
                            field("chilled_notes", "What you do", FieldKind::TextArea { rows: 3 }),
                        ]),
                        method("temperature-records-form", "Fridge temperature", &[
                            field("fridge_temp_am", "Opening temperature (°C)", FieldKind::Number),
                            field("fridge_temp_pm", "Closing temperature (°C)", FieldKind::Number),
                        ]),
                    ],
                },
                TabSpec {
                    id: "cooling-food",
                    label: "Cooling food",
                    forms: &[method("method-form", "Cooling cooked food", &[
                        field("cooling_time", "Food cooled within 90 minutes", FieldKind::Checkbox),
                        field("cooling_notes", "What you do", FieldKind::TextArea { rows: 3 }),
                    ])],
                },
                TabSpec {
                    id: "defrosting",
                    label: "Defrosting",
                    forms: &[method("method-form", "Defrosting", &[
                        field("defrosting_fridge", "Food defrosted in the fridge", FieldKind::Radio(YES_NO)),
                        field("defrosting_notes", "What you do", FieldKind::TextArea { rows: 3 }),
                    ])],
                },
            ],
        }],
    },
    SectionSpec {
        id: SectionId::Cooking,
        intro: "Thorough cooking kills harmful bacteria.",
        blocks: &[Block::Tabs {
            group: "cooking-methods",
            tabs: &[
                TabSpec {
                    id: "cooking-safely",
                    label: "Cooking safely",
                    forms: &[method("method-form", "Cooking safely", &[
                        field("cooking_check", "Food checked to be steaming hot all the way through", FieldKind::Checkbox),
                        field("cooking_check_method", "How you check", FieldKind::Select(CHECK_METHOD)),
                        field("cooking_notes", "What you do", FieldKind::TextArea { rows: 3 }),
                    ])],
                },
                TabSpec {
                    id: "reheating",
                    label: "Reheating",
                    forms: &[method("method-form", "Reheating", &[
                        field("reheating_once", "Food reheated only once", FieldKind::Checkbox),
                        field("reheating_notes", "What you do", FieldKind::TextArea { rows: 3 }),
                    ])],
                },
                TabSpec {
                    id: "hot-holding",
                    label: "Hot holding",
                    forms: &[
                        method("method-form", "Hot holding", &[
                            field("hot_holding_above", "Hot food kept above 63°C", FieldKind::Radio(YES_NO)),
                            field("hot_holding_notes", "What you do", FieldKind::TextArea { rows: 3 }),
                        ]),
                        method("temperature-records-form", "Hot holding temperature", &[
                            field("hot_holding_temp", "Temperature (°C)", FieldKind::Number),
                            field("hot_holding_time", "Time checked", FieldKind::Time),
                        ]),
                    ],
                },
            ],
        }],
    },
    SectionSpec {
        id: SectionId::Management,
        intro: "Good management keeps your safe methods working.",
        blocks: &[
            Block::Form(method("method-form", "Opening and closing checks", &[
                field("opening_checks", "Opening checks done every day", FieldKind::Checkbox),
                field("closing_checks", "Closing checks done every day", FieldKind::Checkbox),
            ])),
            Block::Form(method("training-record-form", "Training and supervision", &[
                field("training_staff_name", "Staff member", FieldKind::Text),
                field("training_date", "Date trained", FieldKind::Date),
                field("training_topics", "Safe methods covered", FieldKind::TextArea { rows: 2 }),
            ])),
            Block::Entries {
                container: SUPPLIERS_CONTAINER,
                title: "Suppliers and contractors",
            },
        ],
    },
    SectionSpec {
        id: SectionId::Diary,
        intro: "Record your daily checks and review your methods every four weeks.",
        blocks: &[
            Block::Form(method("diary-form", "Daily diary", &[
                field("diary_date", "Date", FieldKind::Date),
                field("diary_opening_done", "Opening checks done", FieldKind::Checkbox),
                field("diary_closing_done", "Closing checks done", FieldKind::Checkbox),
                field("diary_problems", "Problems or changes", FieldKind::TextArea { rows: 3 }),
                field("diary_signed", "Signed by", FieldKind::Text),
            ])),
            Block::Form(method("review-form", "4-weekly review", &[
                field("review_date", "Review date", FieldKind::Date),
                field("review_problems", "Any serious problems", FieldKind::Radio(YES_NO)),
                field("review_actions", "Actions taken", FieldKind::TextArea { rows: 3 }),
            ])),
        ],
    },
];

pub fn section_spec(id: SectionId) -> Option<&'static SectionSpec> {
    SECTIONS.iter().find(|s| s.id == id)
}

impl FieldSpec {
    pub fn is_checkable(&self) -> bool {
        matches!(self.kind, FieldKind::Checkbox | FieldKind::Radio(_))
    }
}

impl SectionSpec {
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.blocks.iter().flat_map(|block| -> Vec<&'static FieldSpec> {
            match block {
                Block::Form(form) => form.fields.iter().collect(),
                Block::Tabs { tabs, .. } => tabs
                    .iter()
                    .flat_map(|t| t.forms.iter())
                    .flat_map(|f| f.fields.iter())
                    .collect(),
                Block::Entries { .. } => Vec::new(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_section_has_a_layout() {
        for id in SectionId::ALL {
            assert!(section_spec(id).is_some(), "missing layout for {}", id);
        }
    }

    #[test]
    fn test_field_names_are_unique() {
        let mut seen = HashSet::new();
        for section in SECTIONS {
            for field in section.fields() {
                assert!(seen.insert(field.name), "duplicate field {}", field.name);
            }
        }
    }

    #[test]
    fn test_completion_date_is_in_introduction() {
        let intro = section_spec(SectionId::Introduction).unwrap();
        assert!(intro.fields().any(|f| f.name == "completionDate"));
        assert!(intro.fields().filter(|f| f.required).count() >= 1);
    }
}
