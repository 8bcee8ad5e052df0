use super::field::ControlInput;
use super::section::SectionKey;
use super::state::ApplicationState;
use super::surface::{ControlSurface, FormControl};

/// Record the value of a changed control under the current section.
///
/// Returns the key and name written, or `None` when the control has no name
/// or is an unchecked radio option (which never clears a stored choice).
pub fn on_field_change<C: FormControl>(
    state: &mut ApplicationState,
    control: &C,
) -> Option<(SectionKey, String)> {
    let name = control.name().filter(|n| !n.is_empty())?;
    let value = control.read().captured_value()?;
    let key = state.current_key();

    state.set_field(key, &name, value);
    Some((key, name))
}

/// Push every stored value back into the controls that carry its name.
pub fn populate_fields<D: ControlSurface>(state: &ApplicationState, dom: &D) {
    for fields in state.form_data.values() {
        for (name, value) in fields {
            for control in dom.controls_named(name) {
                match control.read() {
                    ControlInput::Checkbox(_) => control.set_checked(value.is_truthy()),
                    ControlInput::RadioOption { value: own, .. } => {
                        if value.as_text() == Some(own.as_str()) {
                            control.set_checked(true);
                        }
                    }
                    ControlInput::Text(_) => control.set_text(&value.display_text()),
                }
            }
        }
    }
}
