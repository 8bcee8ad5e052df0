use contracts::checklist::{ControlInput, FormControl};
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// A fillable element on the page.
#[derive(Clone, Debug)]
pub enum BrowserControl {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
    Select(HtmlSelectElement),
}

impl BrowserControl {
    pub fn from_element(element: Element) -> Option<Self> {
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Some(BrowserControl::Input(input)),
            Err(element) => element,
        };
        let element = match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(area) => return Some(BrowserControl::TextArea(area)),
            Err(element) => element,
        };
        element.dyn_into::<HtmlSelectElement>().ok().map(BrowserControl::Select)
    }

    /// The control behind an input/change event, if it is one the checklist
    /// records: anything styled `form-control`, plus checkboxes and radios.
    pub fn from_event_target(target: EventTarget) -> Option<Self> {
        let control = Self::from_element(target.dyn_into::<Element>().ok()?)?;
        let element = control.element();
        let recorded = element.class_list().contains("form-control")
            || matches!(control.read(), ControlInput::Checkbox(_) | ControlInput::RadioOption { .. });
        recorded.then_some(control)
    }

    fn element(&self) -> &Element {
        match self {
            BrowserControl::Input(input) => input.as_ref(),
            BrowserControl::TextArea(area) => area.as_ref(),
            BrowserControl::Select(select) => select.as_ref(),
        }
    }
}

impl FormControl for BrowserControl {
    fn name(&self) -> Option<String> {
        self.element().get_attribute("name")
    }

    fn read(&self) -> ControlInput {
        match self {
            BrowserControl::Input(input) => match input.type_().as_str() {
                "checkbox" => ControlInput::Checkbox(input.checked()),
                "radio" => ControlInput::RadioOption {
                    value: input.value(),
                    checked: input.checked(),
                },
                _ => ControlInput::Text(input.value()),
            },
            BrowserControl::TextArea(area) => ControlInput::Text(area.value()),
            BrowserControl::Select(select) => ControlInput::Text(select.value()),
        }
    }

    fn is_required(&self) -> bool {
        self.element().has_attribute("required")
    }

    fn set_checked(&self, checked: bool) {
        if let BrowserControl::Input(input) = self {
            input.set_checked(checked);
        }
    }

    fn set_text(&self, value: &str) {
        match self {
            BrowserControl::Input(input) => input.set_value(value),
            BrowserControl::TextArea(area) => area.set_value(value),
            BrowserControl::Select(select) => select.set_value(value),
        }
    }

    fn set_invalid(&self, invalid: bool) {
        let _ = self
            .element()
            .class_list()
            .toggle_with_force("error", invalid);
    }
}
