use serde::{Deserialize, Serialize};

/// Value stored for one named field.
///
/// Checkboxes store a flag; text controls and radio groups store text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Flag(flag) => *flag,
            FieldValue::Text(text) => !text.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Flag(_) => None,
        }
    }

    /// Text written back into a text control on restore.
    ///
    /// Stored text is kept verbatim, so a saved "0" stays "0".
    pub fn display_text(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Flag(true) => "true".to_string(),
            FieldValue::Flag(false) => String::new(),
        }
    }
}

/// Current input of a control, read once when the control is inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlInput {
    Text(String),
    Checkbox(bool),
    RadioOption { value: String, checked: bool },
}

impl ControlInput {
    /// Checked for checkboxes and radios, non-blank for everything else.
    pub fn is_filled(&self) -> bool {
        match self {
            ControlInput::Text(text) => !text.trim().is_empty(),
            ControlInput::Checkbox(checked) => *checked,
            ControlInput::RadioOption { checked, .. } => *checked,
        }
    }

    /// Value to record for this input, `None` for an unchecked radio option.
    pub fn captured_value(&self) -> Option<FieldValue> {
        match self {
            ControlInput::Text(text) => Some(FieldValue::Text(text.clone())),
            ControlInput::Checkbox(checked) => Some(FieldValue::Flag(*checked)),
            ControlInput::RadioOption { value, checked: true } => {
                Some(FieldValue::Text(value.clone()))
            }
            ControlInput::RadioOption { checked: false, .. } => None,
        }
    }
}
