use leptos::prelude::*;

/// Tick box stored as a boolean under `name`.
#[component]
pub fn Checkbox(
    /// Storage name of the field
    #[prop(into)]
    name: String,
    /// Label text
    #[prop(into)]
    label: String,
    /// Required attribute
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let checkbox_id = format!("field-{}", name);

    view! {
        <div class="form-check">
            <input
                id=checkbox_id.clone()
                type="checkbox"
                class="form-check__input"
                name=name
                required=required
            />
            <label class="form-check__label" for=checkbox_id>
                {label}
            </label>
        </div>
    }
}
